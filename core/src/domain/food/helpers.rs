use crate::domain::food::entities::{Food, FoodSuggestion};

pub const SUGGESTION_LIMIT: usize = 5;
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Case-insensitive substring match on the food name.
pub fn name_contains(food: &Food, query: &str) -> bool {
    food.name.to_lowercase().contains(&query.to_lowercase())
}

pub fn suggestions_for(foods: &[Food], query: &str) -> Vec<FoodSuggestion> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
        return Vec::new();
    }

    foods
        .iter()
        .filter(|food| name_contains(food, query))
        .take(SUGGESTION_LIMIT)
        .map(FoodSuggestion::from)
        .collect()
}
