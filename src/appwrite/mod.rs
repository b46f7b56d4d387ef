pub mod configuration;
pub mod error;
pub mod store;
