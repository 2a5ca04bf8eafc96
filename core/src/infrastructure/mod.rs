pub mod food;
pub mod llm;
pub mod user;
