use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    description::{
        ports::DescriptionProvider, prompt::fallback_description, value_objects::DescribeFoodInput,
    },
    food::{
        entities::{Food, FoodSuggestion, NewFood},
        helpers::{name_contains, suggestions_for},
        ports::{FoodRepository, FoodService},
        value_objects::{GetFoodInput, SearchQuery, SeedFood, SuggestFoodsInput},
    },
    user::ports::UserRepository,
};

impl<F, U, D> FoodService for Service<F, U, D>
where
    F: FoodRepository,
    U: UserRepository,
    D: DescriptionProvider,
{
    async fn get_foods(&self) -> Result<Vec<Food>, CoreError> {
        self.food_repository.list_foods().await
    }

    async fn get_food(&self, input: GetFoodInput) -> Result<Option<Food>, CoreError> {
        self.food_repository.get_by_id(input.food_id).await
    }

    async fn get_food_by_name(&self, name: String) -> Result<Option<Food>, CoreError> {
        self.food_repository.get_by_name(name).await
    }

    async fn create_food(&self, food: NewFood) -> Result<Food, CoreError> {
        self.food_repository.create_food(food).await
    }

    async fn seed_foods(&self, seeds: Vec<SeedFood>) -> Result<Vec<Food>, CoreError> {
        let mut created = Vec::with_capacity(seeds.len());
        let mut fallbacks = 0usize;

        for seed in seeds {
            let request = DescribeFoodInput {
                name: seed.name.clone(),
                category: Some(seed.category.clone()),
                oxalate_level: seed.oxalate_level,
                oxalate_content: seed.oxalate_content,
            };

            let description = match self.description_provider.describe(request.clone()).await {
                Ok(description) => description,
                Err(e) => {
                    warn!("Failed to generate description for {}: {}", seed.name, e);
                    fallbacks += 1;
                    fallback_description(&request)
                }
            };

            let food = self
                .food_repository
                .create_food(NewFood {
                    name: seed.name,
                    category: Some(seed.category),
                    oxalate_content: seed.oxalate_content,
                    oxalate_level: seed.oxalate_level,
                    serving_size: seed.serving_size,
                    alternative_tip: seed.alternative_tip,
                    description: Some(description),
                })
                .await?;

            created.push(food);
        }

        info!(seeded = created.len(), fallbacks, "Food store seeded");

        Ok(created)
    }

    async fn search_foods(&self, query: SearchQuery) -> Result<Vec<Food>, CoreError> {
        let filter = query.filter();

        let foods = self
            .food_repository
            .list_foods()
            .await?
            .into_iter()
            .filter(|food| name_contains(food, query.query()))
            .filter(|food| filter.accepts(food.oxalate_level))
            .collect();

        Ok(foods)
    }

    async fn suggest_foods(
        &self,
        input: SuggestFoodsInput,
    ) -> Result<Vec<FoodSuggestion>, CoreError> {
        let foods = self.food_repository.list_foods().await?;

        Ok(suggestions_for(&foods, &input.query))
    }
}
