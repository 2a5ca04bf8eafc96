use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    description::ports::DescriptionProvider,
    food::ports::FoodRepository,
    user::{
        entities::{NewUser, User},
        ports::{UserRepository, UserService},
        value_objects::{CreateUserInput, GetUserInput},
    },
};

impl<F, U, D> UserService for Service<F, U, D>
where
    F: FoodRepository,
    U: UserRepository,
    D: DescriptionProvider,
{
    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        if input.username.is_empty() {
            return Err(CoreError::Invalid("username is required".to_string()));
        }

        if self
            .user_repository
            .get_by_username(input.username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        self.user_repository
            .create_user(NewUser {
                username: input.username,
                password: input.password,
            })
            .await
    }

    async fn get_user(&self, input: GetUserInput) -> Result<Option<User>, CoreError> {
        self.user_repository.get_by_id(input.user_id).await
    }

    async fn get_user_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        self.user_repository.get_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::description::{ports::DescriptionProvider, value_objects::DescribeFoodInput},
        infrastructure::{food::InMemoryFoodRepository, user::InMemoryUserRepository},
    };

    struct NoDescriptions;

    impl DescriptionProvider for NoDescriptions {
        async fn describe(&self, _input: DescribeFoodInput) -> Result<String, CoreError> {
            Err(CoreError::ExternalServiceError("disabled".to_string()))
        }
    }

    fn service() -> Service<InMemoryFoodRepository, InMemoryUserRepository, NoDescriptions> {
        Service::new(
            InMemoryFoodRepository::new(),
            InMemoryUserRepository::new(),
            NoDescriptions,
        )
    }

    fn input(username: &str) -> CreateUserInput {
        CreateUserInput {
            username: username.to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let service = service();

        let alice = service.create_user(input("alice")).await.unwrap();
        let bob = service.create_user(input("bob")).await.unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);

        let by_id = service.get_user(GetUserInput { user_id: bob.id }).await.unwrap();
        assert_eq!(by_id, Some(bob));

        let by_name = service
            .get_user_by_username("alice".to_string())
            .await
            .unwrap();
        assert_eq!(by_name, Some(alice));

        let missing = service.get_user(GetUserInput { user_id: 42 }).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let service = service();

        service.create_user(input("alice")).await.unwrap();
        let result = service.create_user(input("alice")).await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_username_lookup_is_exact() {
        let service = service();
        service.create_user(input("alice")).await.unwrap();

        let result = service
            .get_user_by_username("ALICE".to_string())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
