use crate::appwrite::configuration::AppwriteConfiguration;
use crate::appwrite::error::AppwriteError;
use crate::member::store::StoreError::{
    ConnectionFailed, MalformedResponse, NotFound, Rejected, Unauthorized,
};
use crate::member::store::{Document, DocumentStore, Fields, StoreError};
use crate::tools::log_message_and_return;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

type Result<T, E = StoreError> = std::result::Result<T, E>;

const PROJECT_HEADER: &str = "x-appwrite-project";
const API_KEY_HEADER: &str = "x-appwrite-key";
/// Attributes managed by Appwrite itself (`$id`, `$createdAt`...) start with this prefix.
const METADATA_PREFIX: char = '$';
const ID_ATTRIBUTE: &str = "$id";

#[derive(Deserialize)]
struct DocumentList {
    documents: Vec<Value>,
}

#[derive(Deserialize)]
struct AppwriteErrorBody {
    message: String,
}

/// Collections of an Appwrite database, reached through its REST API.
pub struct AppwriteStore {
    client: Client,
    collections_url: String,
}

impl AppwriteStore {
    pub fn new(configuration: &AppwriteConfiguration) -> Result<Self, AppwriteError> {
        let client = build_client(configuration)?;
        let collections_url = format!(
            "{}/databases/{}/collections",
            configuration.endpoint(),
            configuration.database_id()
        );
        Ok(Self {
            client,
            collections_url,
        })
    }

    fn documents_url(&self, collection_id: &str) -> String {
        format!("{}/{collection_id}/documents", self.collections_url)
    }

    fn document_url(&self, collection_id: &str, document_id: &str) -> String {
        format!("{}/{document_id}", self.documents_url(collection_id))
    }
}

#[rocket::async_trait]
impl DocumentStore for AppwriteStore {
    async fn list(&self, collection_id: &str) -> Result<Vec<Document>> {
        debug!("Listing documents [collection: {collection_id}]");
        let response = self
            .client
            .get(self.documents_url(collection_id))
            .send()
            .await
            .map_err(log_message_and_return("Can't list documents", ConnectionFailed))?;

        let list: DocumentList = check_status(response)
            .await?
            .json()
            .await
            .map_err(log_message_and_return("Can't read documents list", MalformedResponse))?;
        list.documents.into_iter().map(to_document).collect()
    }

    async fn create(
        &self,
        collection_id: &str,
        document_id: &str,
        fields: Fields,
    ) -> Result<Document> {
        debug!("Creating document [collection: {collection_id}, id: {document_id}]");
        let body = json!({"documentId": document_id, "data": fields});
        let response = self
            .client
            .post(self.documents_url(collection_id))
            .json(&body)
            .send()
            .await
            .map_err(log_message_and_return("Can't create document", ConnectionFailed))?;

        read_document(response).await
    }

    async fn update(
        &self,
        collection_id: &str,
        document_id: &str,
        fields: Fields,
    ) -> Result<Document> {
        debug!("Updating document [collection: {collection_id}, id: {document_id}]");
        let body = json!({"data": fields});
        let response = self
            .client
            .patch(self.document_url(collection_id, document_id))
            .json(&body)
            .send()
            .await
            .map_err(log_message_and_return("Can't update document", ConnectionFailed))?;

        read_document(response).await
    }

    async fn delete(&self, collection_id: &str, document_id: &str) -> Result<()> {
        debug!("Deleting document [collection: {collection_id}, id: {document_id}]");
        let response = self
            .client
            .delete(self.document_url(collection_id, document_id))
            .send()
            .await
            .map_err(log_message_and_return("Can't delete document", ConnectionFailed))?;

        check_status(response).await?;
        Ok(())
    }
}

fn build_client(configuration: &AppwriteConfiguration) -> Result<Client, AppwriteError> {
    let mut headers = HeaderMap::new();
    let project = HeaderValue::from_str(configuration.project_id()).map_err(
        log_message_and_return("Invalid project id", AppwriteError::CantCreateClient),
    )?;
    headers.insert(PROJECT_HEADER, project);
    if let Some(api_key) = configuration.api_key() {
        let mut api_key = HeaderValue::from_str(api_key).map_err(log_message_and_return(
            "Invalid API key",
            AppwriteError::CantCreateClient,
        ))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
    }

    reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            AppwriteError::CantCreateClient,
        ))
}

/// Let successful responses through; turn the others into the matching [StoreError].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .json::<AppwriteErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_default();
    error!("Appwrite refused the request [url: {url}, status: {status}, message: {message}]");

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Unauthorized,
        StatusCode::NOT_FOUND => NotFound,
        _ => Rejected {
            status: status.as_u16(),
            message,
        },
    })
}

async fn read_document(response: Response) -> Result<Document> {
    let body: Value = check_status(response)
        .await?
        .json()
        .await
        .map_err(log_message_and_return("Can't read document", MalformedResponse))?;
    to_document(body)
}

/// Split a raw document between its id and its own attributes. Other metadata is dropped.
fn to_document(value: Value) -> Result<Document> {
    let Value::Object(mut fields) = value else {
        error!("Document is not an object");
        return Err(MalformedResponse);
    };
    let Some(Value::String(id)) = fields.remove(ID_ATTRIBUTE) else {
        error!("Document has no id");
        return Err(MalformedResponse);
    };
    fields.retain(|attribute, _| !attribute.starts_with(METADATA_PREFIX));

    Ok(Document::new(id, fields))
}
