use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{Food, FoodSuggestion, NewFood},
        value_objects::{GetFoodInput, SearchQuery, SeedFood, SuggestFoodsInput},
    },
};

/// Storage for food records. Ids are assigned by the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn create_food(&self, food: NewFood) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn get_by_id(
        &self,
        food_id: i32,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    /// Case-insensitive exact match; the earliest inserted record wins.
    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    /// All records in insertion order.
    fn list_foods(&self) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn get_foods(&self) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(
        &self,
        input: GetFoodInput,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn get_food_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn create_food(&self, food: NewFood) -> impl Future<Output = Result<Food, CoreError>> + Send;

    /// Describes and stores each seed in order. Description failures fall
    /// back to a fixed sentence and never abort the run.
    fn seed_foods(
        &self,
        seeds: Vec<SeedFood>,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn search_foods(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn suggest_foods(
        &self,
        input: SuggestFoodsInput,
    ) -> impl Future<Output = Result<Vec<FoodSuggestion>, CoreError>> + Send;
}
