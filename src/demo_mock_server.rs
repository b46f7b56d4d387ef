use crate::appwrite::configuration::AppwriteConfiguration;
use crate::member::partitions::Partitions;
use crate::web::credentials::{ConfiguredAuthenticator, Credentials};
use dto::cohort_year::CohortYear;
use log::info;
use serde_json::{Map, Value, json};
use std::sync::OnceLock;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub static APPWRITE_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

const DEMO_PROJECT: &str = "robosoc-demo";
const DEMO_DATABASE: &str = "club";
const DEMO_ADMIN_LOGIN: &str = "admin";
const DEMO_ADMIN_PASSWORD: &str = "admin";

pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    APPWRITE_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());
    mock_documents_lists(&mock_server).await;
    mock_documents_changes(&mock_server).await;
    info!(
        "Demo Appwrite running on {}, log in with {DEMO_ADMIN_LOGIN}/{DEMO_ADMIN_PASSWORD}",
        mock_server.uri()
    );

    // A dropped server goes back to wiremock's pool, where its mocks may be reset.
    std::mem::forget(mock_server);
}

pub fn demo_configuration() -> AppwriteConfiguration {
    let uri = APPWRITE_MOCK_SERVER_URI
        .get()
        .cloned()
        .unwrap_or_else(|| panic!("Demo Appwrite server isn't running"));
    AppwriteConfiguration::new(
        format!("{uri}/v1"),
        DEMO_PROJECT.to_owned(),
        DEMO_DATABASE.to_owned(),
        None,
    )
}

pub fn demo_authenticator() -> ConfiguredAuthenticator {
    ConfiguredAuthenticator::new(Some(Credentials::new(
        DEMO_ADMIN_LOGIN.to_owned(),
        DEMO_ADMIN_PASSWORD.to_owned(),
    )))
}

fn documents_path(collection_id: &str) -> String {
    format!("/v1/databases/{DEMO_DATABASE}/collections/{collection_id}/documents")
}

// region Lists
async fn mock_documents_lists(mock_server: &MockServer) {
    for partition in Partitions::default().iter() {
        let documents = demo_documents(*partition.cohort_year());
        Mock::given(method("GET"))
            .and(path_regex(format!("^{}$", documents_path(partition.collection_id()))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": documents.len(),
                "documents": documents,
            })))
            .mount(mock_server)
            .await;
    }
}

fn demo_documents(cohort_year: CohortYear) -> Vec<Value> {
    match cohort_year {
        CohortYear::Fourth => vec![
            demo_document("4a1", "Diya Nair", "President", &["ROS", "C++"]),
            demo_document("4a2", "Rohan Gupta", "Treasurer", &["Python"]),
        ],
        CohortYear::Third => vec![demo_document(
            "3a1",
            "Aarav Mehta",
            "Electronics Lead",
            &["KiCad", "Embedded C"],
        )],
        CohortYear::Second => vec![demo_document(
            "2a1",
            "Sara Khan",
            "Web Lead",
            &["Rust", "React"],
        )],
        CohortYear::First => vec![],
    }
}

fn demo_document(id: &str, name: &str, post: &str, tech_stack: &[&str]) -> Value {
    json!({
        "$id": id,
        "name": name,
        "post": post,
        "profilepic": null,
        "linkedin": format!("https://www.linkedin.com/in/{id}"),
        "github": null,
        "insta": null,
        "techstack": tech_stack,
    })
}
// endregion

// region Changes
async fn mock_documents_changes(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path_regex("^/v1/databases/[^/]+/collections/[^/]+/documents$"))
        .respond_with(EchoDocument)
        .mount(mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path_regex("^/v1/databases/[^/]+/collections/[^/]+/documents/[^/]+$"))
        .respond_with(EchoDocument)
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex("^/v1/databases/[^/]+/collections/[^/]+/documents/[^/]+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

/// Answer a write with the document as it would have been stored.
/// Nothing is kept: lists stay the same whatever the changes.
struct EchoDocument;

impl Respond for EchoDocument {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid body"}));
        };
        let id = body
            .get("documentId")
            .and_then(Value::as_str)
            .or_else(|| request.url.path_segments().and_then(|mut segments| segments.next_back()))
            .unwrap_or_default()
            .to_owned();
        let mut document = body
            .get("data")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(Map::new);
        document.insert("$id".to_owned(), Value::String(id));

        let status = if request.method.as_str() == "POST" { 201 } else { 200 };
        ResponseTemplate::new(status).set_body_json(document)
    }
}
// endregion
