use crate::appwrite::error::AppwriteError;
use crate::appwrite::error::AppwriteError::{MissingDatabase, MissingEndpoint, MissingProject};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

const ENDPOINT_ARG: &str = "--appwrite-endpoint";
const PROJECT_ARG: &str = "--appwrite-project";
const DATABASE_ARG: &str = "--appwrite-database";
const API_KEY_ARG: &str = "--appwrite-key";

/// Where the members database is hosted, and how to reach it.
#[derive(Getters, Clone, PartialEq)]
pub struct AppwriteConfiguration {
    /// Base URL of the API, such as `https://cloud.appwrite.io/v1`.
    endpoint: String,
    project_id: String,
    database_id: String,
    api_key: Option<String>,
}

impl AppwriteConfiguration {
    pub fn new(
        endpoint: String,
        project_id: String,
        database_id: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            project_id,
            database_id,
            api_key,
        }
    }

    #[cfg_attr(feature = "demo", allow(dead_code))]
    pub fn from_args() -> Result<Self, AppwriteError> {
        Ok(Self::new(
            retrieve_expected_arg_value(ENDPOINT_ARG, MissingEndpoint)?,
            retrieve_expected_arg_value(PROJECT_ARG, MissingProject)?,
            retrieve_expected_arg_value(DATABASE_ARG, MissingDatabase)?,
            retrieve_arg_value(API_KEY_ARG),
        ))
    }
}

impl Debug for AppwriteConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AppwriteConfiguration {{endpoint={}, project_id={}, database_id={}, api_key={}}}",
            self.endpoint,
            self.project_id,
            self.database_id,
            if self.api_key.is_some() { "MASKED" } else { "NONE" }
        )
    }
}
