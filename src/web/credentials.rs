use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

const ADMIN_LOGIN_ARG: &str = "--admin-login";
const ADMIN_PASSWORD_ARG: &str = "--admin-password";

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: String, password: String) -> Self {
        Self { login, password }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials {{login={}, password=MASKED}}", self.login)
    }
}

/// Decides who may open an admin session.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Accepts a single admin account, configured at startup.
/// Without such an account, every login is refused.
pub struct ConfiguredAuthenticator {
    admin_credentials: Option<Credentials>,
}

impl ConfiguredAuthenticator {
    pub fn new(admin_credentials: Option<Credentials>) -> Self {
        Self { admin_credentials }
    }

    #[cfg_attr(feature = "demo", allow(dead_code))]
    pub fn from_args() -> Self {
        let login = retrieve_arg_value(ADMIN_LOGIN_ARG);
        let password = retrieve_arg_value(ADMIN_PASSWORD_ARG);
        match (login, password) {
            (Some(login), Some(password)) => Self::new(Some(Credentials::new(login, password))),
            _ => {
                warn!(
                    "No admin account configured: pass both {ADMIN_LOGIN_ARG} and {ADMIN_PASSWORD_ARG} to unlock the admin panel."
                );
                Self::new(None)
            }
        }
    }
}

impl Authenticator for ConfiguredAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        self.admin_credentials.as_ref() == Some(credentials)
    }
}
