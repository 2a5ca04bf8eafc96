pub mod repository;

pub use repository::InMemoryFoodRepository;
