pub mod config;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod mapping;
pub mod ports;
pub mod steam_id;
pub mod use_cases;

pub use error::Error;
