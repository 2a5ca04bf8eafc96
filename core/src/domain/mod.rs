pub mod common;
pub mod description;
pub mod food;
pub mod user;
