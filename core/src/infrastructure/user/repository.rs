use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{NewUser, User},
        ports::UserRepository,
    },
};

#[derive(Debug)]
struct UserTable {
    next_id: i32,
    users: BTreeMap<i32, User>,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, CoreError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or_else(|| {
            tracing::error!("User id space exhausted");
            CoreError::InternalServerError
        })?;

        let user = User::from_new(id, user);
        table.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, CoreError> {
        let table = self.table.read().await;

        Ok(table.users.get(&user_id).cloned())
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let table = self.table.read().await;

        Ok(table
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}
