use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppwriteError {
    #[error("The --appwrite-endpoint argument is missing.")]
    MissingEndpoint,
    #[error("The --appwrite-project argument is missing.")]
    MissingProject,
    #[error("The --appwrite-database argument is missing.")]
    MissingDatabase,
    #[error("The HTTP client couldn't be created.")]
    CantCreateClient,
}
