pub mod food;
pub mod health;
pub mod server;
pub mod web;
