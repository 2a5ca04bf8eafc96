use crate::domain::{
    description::ports::DescriptionProvider, food::ports::FoodRepository,
    user::ports::UserRepository,
};

/// Holds every port the domain services need. Each service trait is
/// implemented on this struct in its own module.
#[derive(Debug, Clone)]
pub struct Service<F, U, D>
where
    F: FoodRepository,
    U: UserRepository,
    D: DescriptionProvider,
{
    pub(crate) food_repository: F,
    pub(crate) user_repository: U,
    pub(crate) description_provider: D,
}

impl<F, U, D> Service<F, U, D>
where
    F: FoodRepository,
    U: UserRepository,
    D: DescriptionProvider,
{
    pub fn new(food_repository: F, user_repository: U, description_provider: D) -> Self {
        Self {
            food_repository,
            user_repository,
            description_provider,
        }
    }
}
