pub mod get_food;
pub mod get_foods;
pub mod search_foods;
pub mod suggest_foods;
