use crate::tools::log_error_and_return;
use crate::web::authentication::SESSION_COOKIE;
use crate::web::credentials::{Authenticator, Credentials};
use crate::web::session::{AdminSession, SessionStorage};
use log::{info, warn};
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::Json;
use std::sync::Mutex;

/// Log an admin onto the panel.
/// On success, a new session is opened and its token is returned to the caller through a private cookie.
#[post("/admin/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    authenticator: &State<Box<dyn Authenticator>>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<Credentials>,
) -> Result<Json<AdminSession>, Status> {
    let credentials = credentials.into_inner();
    if !authenticator.authenticate(&credentials) {
        warn!("Refused admin login [login: {}]", credentials.login());
        return Err(Status::Unauthorized);
    }

    let mut session_storage = session_storage
        .lock()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let (token, session) = session_storage.open(credentials.login().to_owned());
    cookie_jar.add_private(Cookie::new(SESSION_COOKIE, token));
    info!("Admin logged in [login: {}]", session.login());
    Ok(Json(session))
}

#[post("/admin/logout")]
pub async fn logout(
    session: AdminSession,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
) -> Result<Status, Status> {
    if let Some(cookie) = cookie_jar.get_private(SESSION_COOKIE) {
        session_storage
            .lock()
            .map_err(log_error_and_return(Status::InternalServerError))?
            .close(cookie.value());
    }
    cookie_jar.remove_private(SESSION_COOKIE);
    info!("Admin logged out [login: {}]", session.login());
    Ok(Status::NoContent)
}

#[get("/admin/session")]
pub async fn current_session(session: AdminSession) -> Json<AdminSession> {
    Json(session)
}
