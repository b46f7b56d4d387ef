use crate::tools::log_error_and_return;
use crate::web::session::{AdminSession, SessionStorage};
use rocket::State;
use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "RoboSoc-Admin-Session";

/// If an endpoint is restricted to admins,
/// then its implementation should require an [AdminSession] parameter.
/// Rocket will summon this guard to ensure such a session is open, and extend it.
/// If it isn't, then the caller receives an Unauthorized status.
///
/// The session token travels from the caller to the server in a `RoboSoc-Admin-Session` private cookie.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        if let Some(cookie) = req.cookies().get_private(SESSION_COOKIE) {
            let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
            match session_storage.lock() {
                Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                    None => Outcome::Forward(Status::Unauthorized),
                    Some(session) => Outcome::Success(session),
                },
                Err(error) => {
                    log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
                }
            }
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}
