use crate::appwrite::configuration::AppwriteConfiguration;
use crate::appwrite::error::AppwriteError;
use crate::appwrite::store::AppwriteStore;
use crate::error::ApplicationError;
use crate::member::partitions::Partitions;
use crate::member::registry::MemberRegistry;
use crate::web::api::{members_controller, session_controller};
use crate::web::credentials::Authenticator;
use crate::web::server::Server;
use crate::web::session::SessionStorage;
use log::{error, info};
use rocket::{Build, Rocket};
use serde_json::{Value, json};
use std::sync::Mutex;

pub type Registry = MemberRegistry<AppwriteStore>;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let registry = match build_registry() {
            Ok(registry) => registry,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };

        rocket_build
            .manage(registry)
            .manage(Mutex::new(SessionStorage::from_args()))
            .manage(get_authenticator())
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/api/",
                routes![
                    session_controller::login,
                    session_controller::logout,
                    session_controller::current_session,
                    members_controller::list_members,
                    members_controller::count_members,
                    members_controller::create_member,
                    members_controller::update_member,
                    members_controller::delete_member,
                ],
            )
            .register("/api/", catchers![unauthorized])
    }
}

#[catch(401)]
fn unauthorized() -> Value {
    json!({"error": "An admin session is required."})
}

fn build_registry() -> Result<Registry, ApplicationError> {
    let configuration = get_appwrite_configuration()?;
    info!("Members are stored in {configuration:?}");
    let store = AppwriteStore::new(&configuration)?;
    Ok(MemberRegistry::new(store, Partitions::from_args()))
}

#[cfg(not(feature = "demo"))]
fn get_appwrite_configuration() -> Result<AppwriteConfiguration, AppwriteError> {
    AppwriteConfiguration::from_args()
}

#[cfg(not(feature = "demo"))]
fn get_authenticator() -> Box<dyn Authenticator> {
    Box::new(crate::web::credentials::ConfiguredAuthenticator::from_args())
}

#[cfg(feature = "demo")]
fn get_appwrite_configuration() -> Result<AppwriteConfiguration, AppwriteError> {
    Ok(crate::demo_mock_server::demo_configuration())
}

#[cfg(feature = "demo")]
fn get_authenticator() -> Box<dyn Authenticator> {
    Box::new(crate::demo_mock_server::demo_authenticator())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::appwrite::store::tests::build_test_store;
    use crate::member::partitions::tests::get_test_partitions;
    use crate::web::credentials::tests::get_test_authenticator;
    use rocket::local::asynchronous::Client;
    use wiremock::MockServer;

    /// A client of the API, backed by a fake Appwrite.
    pub async fn build_test_client(mock_server: &MockServer) -> Client {
        let registry = MemberRegistry::new(build_test_store(mock_server), get_test_partitions());
        let rocket = rocket::build()
            .manage(registry)
            .manage(Mutex::new(SessionStorage::default()))
            .manage(get_test_authenticator());
        let rocket = ApiServer::new().mount_routes(rocket);
        Client::tracked(rocket).await.unwrap()
    }

    #[async_test]
    async fn should_answer_unauthorized_with_json() {
        let mock_server = MockServer::start().await;
        let client = build_test_client(&mock_server).await;

        let response = client.get("/api/admin/session").dispatch().await;

        assert_eq!(rocket::http::Status::Unauthorized, response.status());
        assert_eq!(Some(rocket::http::ContentType::JSON), response.content_type());
    }
}
