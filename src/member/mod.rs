use crate::member::error::RegistryError;

pub mod document;
pub mod error;
pub mod partitions;
pub mod registry;
pub mod store;
pub mod tech_stack;

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
