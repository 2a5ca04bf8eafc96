pub mod ports;
pub mod prompt;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
