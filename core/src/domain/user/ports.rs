use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{NewUser, User},
        value_objects::{CreateUserInput, GetUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: NewUser) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user(
        &self,
        input: GetUserInput,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_user_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
