//! People service route handlers, backed by the entity layer.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mg_db::entity;
use mg_db::models::{NewPerson, Person};
use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppError;
use crate::extract;

/// Message returned for any body that cannot be bound to a person.
pub const INVALID_DATA: &str = "Некорректные данные";

/// Request body for creating a person. Absent or `null` fields are empty
/// strings; the `Content-Type` header is not consulted.
#[derive(Debug, Default)]
pub struct CreatePersonRequest {
    pub name: String,
    pub nick: String,
}

impl CreatePersonRequest {
    pub fn from_json(body: &[u8]) -> mg_core::Result<Self> {
        let [name, nick] = extract::string_fields(body, ["name", "nick"])?;
        Ok(Self { name, nick })
    }
}

/// Person response.
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub nick: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            nick: person.nick,
        }
    }
}

/// GET /people
pub async fn list_people(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let conn = mg_db::pool::get_conn(&ctx.db)?;
    let people = entity::find_all::<Person>(&conn)?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// POST /people
pub async fn create_person(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let payload = body
        .map_err(|rejection| rejection.to_string())
        .and_then(|body| CreatePersonRequest::from_json(&body).map_err(|e| e.to_string()))
        .map_err(|reason| {
            tracing::debug!(%reason, "Rejected person payload");
            mg_core::Error::Validation(INVALID_DATA.into())
        })?;

    let conn = mg_db::pool::get_conn(&ctx.db)?;
    let person: Person = entity::create(&conn, &NewPerson::new(payload.name, payload.nick))?;
    tracing::info!(id = person.id, name = %person.name, "Person created");

    Ok((StatusCode::CREATED, Json(person.into())))
}
