use crate::member::store::StoreError;
use dto::member::{Member, MemberLocation};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("The member's name is required.")]
    MissingName,
    #[error("The member's post is required.")]
    MissingPost,
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("The submitted member is invalid.")]
    Validation(#[from] ValidationError),
    #[error("An error occurred within the document store.")]
    Store(#[from] StoreError),
    /// The member has been inserted into its new year but couldn't be removed from the old one.
    /// It now exists twice.
    #[error(
        "The member has been copied into {} but is still in {} [origin id: {}]",
        .moved.cohort_year(),
        .origin.cohort_year(),
        .origin.id()
    )]
    IncompleteMove {
        moved: Member,
        origin: MemberLocation,
        cause: StoreError,
    },
}
