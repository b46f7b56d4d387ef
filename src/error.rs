use crate::appwrite::error::AppwriteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Can't reach the members database.")]
    Appwrite(#[from] AppwriteError),
}
