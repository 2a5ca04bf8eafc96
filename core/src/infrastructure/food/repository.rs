use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{Food, NewFood},
        ports::FoodRepository,
    },
};

#[derive(Debug)]
struct FoodTable {
    next_id: i32,
    // Keyed by id; ids only grow, so key order is insertion order.
    foods: BTreeMap<i32, Food>,
}

impl Default for FoodTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            foods: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    table: Arc<RwLock<FoodTable>>,
}

impl InMemoryFoodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FoodRepository for InMemoryFoodRepository {
    async fn create_food(&self, food: NewFood) -> Result<Food, CoreError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or_else(|| {
            tracing::error!("Food id space exhausted");
            CoreError::InternalServerError
        })?;

        let food = Food::from_new(id, food);
        table.foods.insert(id, food.clone());

        Ok(food)
    }

    async fn get_by_id(&self, food_id: i32) -> Result<Option<Food>, CoreError> {
        let table = self.table.read().await;

        Ok(table.foods.get(&food_id).cloned())
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Food>, CoreError> {
        let table = self.table.read().await;
        let name = name.to_lowercase();

        Ok(table
            .foods
            .values()
            .find(|food| food.name.to_lowercase() == name)
            .cloned())
    }

    async fn list_foods(&self) -> Result<Vec<Food>, CoreError> {
        let table = self.table.read().await;

        Ok(table.foods.values().cloned().collect())
    }
}
