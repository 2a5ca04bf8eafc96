use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Stored exactly as provided.
    pub password: String,
}

impl User {
    pub fn from_new(id: i32, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
