use derive_getters::Getters;
use serde_json::{Map, Value};
use thiserror::Error;

pub type Fields = Map<String, Value>;

type Result<T, E = StoreError> = std::result::Result<T, E>;

/// A schema-light document: its id within its collection and its attributes.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Document {
    id: String,
    fields: Fields,
}

impl Document {
    pub fn new(id: String, fields: Fields) -> Self {
        Self { id, fields }
    }

    pub fn into_parts(self) -> (String, Fields) {
        (self.id, self.fields)
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum StoreError {
    #[error("The document store can't be reached.")]
    ConnectionFailed,
    #[error("The document store refused our credentials.")]
    Unauthorized,
    #[error("The requested document or collection doesn't exist.")]
    NotFound,
    #[error("The document store rejected the request [status: {status}, message: {message}]")]
    Rejected { status: u16, message: String },
    #[error("The document store answered with an unexpected body.")]
    MalformedResponse,
    #[error("A document doesn't describe a valid member [id: {0}]")]
    MalformedDocument(String),
}

/// A remote store made of collections of documents.
/// Collections are identified by opaque ids; so are documents within a collection.
#[rocket::async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document of a collection, in the store's order.
    async fn list(&self, collection_id: &str) -> Result<Vec<Document>>;

    /// Insert a new document. The id is chosen by the caller.
    async fn create(&self, collection_id: &str, document_id: &str, fields: Fields)
    -> Result<Document>;

    /// Overwrite the given attributes of an existing document. Other attributes are kept.
    async fn update(&self, collection_id: &str, document_id: &str, fields: Fields)
    -> Result<Document>;

    async fn delete(&self, collection_id: &str, document_id: &str) -> Result<()>;
}
