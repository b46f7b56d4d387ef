use crate::member::error::RegistryError;
use crate::member::store::StoreError;
use crate::tools::log_message_and_return;
use crate::web::api::server::Registry;
use crate::web::session::AdminSession;
use dto::cohort_year::CohortYear;
use dto::member::MemberLocation;
use dto::member_form::MemberForm;
use dto::members_by_year::{MembersByYear, MembersCount};
use log::{error, info};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde_json::{Value, json};

type ApiResponse = (Status, Value);

/// List every member, seniors first.
#[get("/members")]
pub async fn list_members(registry: &State<Registry>) -> ApiResponse {
    match registry.load_all().await {
        Ok(members) => (Status::Ok, json!(members)),
        Err(error) => to_response(error),
    }
}

#[get("/members/count")]
pub async fn count_members(registry: &State<Registry>) -> ApiResponse {
    match registry.load_all().await {
        Ok(members) => (Status::Ok, json!(MembersCount::from(&members))),
        Err(error) => to_response(error),
    }
}

#[post("/members", format = "application/json", data = "<form>")]
pub async fn create_member(
    session: AdminSession,
    registry: &State<Registry>,
    form: Json<MemberForm>,
) -> ApiResponse {
    match registry.create(&form).await {
        Ok(member) => {
            info!("{} added {} to {}", session.login(), member.id(), member.cohort_year());
            let members = reload(registry).await;
            (Status::Created, json!({"member": member, "members": members}))
        }
        Err(error) => to_response(error),
    }
}

/// Update the member stored in `year` under `id`.
/// If the form holds another cohort year, the member moves into it.
#[put("/members/<year>/<id>", format = "application/json", data = "<form>")]
pub async fn update_member(
    session: AdminSession,
    registry: &State<Registry>,
    year: u8,
    id: &str,
    form: Json<MemberForm>,
) -> ApiResponse {
    let Some(origin) = to_location(year, id) else {
        return unknown_year(year);
    };
    match registry.update(&origin, &form).await {
        Ok(member) => {
            info!("{} updated {} in {}", session.login(), member.id(), member.cohort_year());
            let members = reload(registry).await;
            (Status::Ok, json!({"member": member, "members": members}))
        }
        Err(error) => to_response(error),
    }
}

#[delete("/members/<year>/<id>")]
pub async fn delete_member(
    session: AdminSession,
    registry: &State<Registry>,
    year: u8,
    id: &str,
) -> ApiResponse {
    let Some(location) = to_location(year, id) else {
        return unknown_year(year);
    };
    match registry.remove(&location).await {
        Ok(()) => {
            info!("{} removed {id} from {}", session.login(), location.cohort_year());
            let members = reload(registry).await;
            (Status::Ok, json!({"members": members}))
        }
        Err(error) => to_response(error),
    }
}

/// Paths carry the cohort year as its number, from 1 to 4.
fn to_location(year: u8, id: &str) -> Option<MemberLocation> {
    CohortYear::ALL
        .into_iter()
        .find(|cohort_year| cohort_year.number() == year)
        .map(|cohort_year| MemberLocation::new(cohort_year, id.to_owned()))
}

fn unknown_year(year: u8) -> ApiResponse {
    (
        Status::NotFound,
        json!({"error": format!("There is no year {year}.")}),
    )
}

/// Re-read the whole registry once a change has been made.
/// A failure here doesn't undo the change, so the caller only misses the fresh listing.
async fn reload(registry: &Registry) -> Option<MembersByYear> {
    registry
        .load_all()
        .await
        .map_err(log_message_and_return("Can't reload members after a change", ()))
        .ok()
}

fn to_response(error: RegistryError) -> ApiResponse {
    error!("{error:?}");
    let message = error.to_string();
    match error {
        RegistryError::Validation(_) => (Status::UnprocessableEntity, json!({"error": message})),
        RegistryError::Store(StoreError::NotFound) => (Status::NotFound, json!({"error": message})),
        RegistryError::Store(_) => (Status::BadGateway, json!({"error": message})),
        RegistryError::IncompleteMove { moved, origin, .. } => (
            Status::Conflict,
            json!({"error": message, "member": moved, "origin": origin}),
        ),
    }
}
