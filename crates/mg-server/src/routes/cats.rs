//! Cats service route handlers.

use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mg_core::Error;
use serde::Serialize;

use crate::context::AppContext;
use crate::error::CatsError;
use crate::extract;

/// Greeting served at `GET /` by the cats service.
pub const GREETING: &str = "this is the Web side";

pub const MISSING_PARAMS: &str = "Both 'name' and 'type' parameters are required.";
pub const INVALID_FORMAT: &str =
    "Invalid 'data' parameter. It must be either 'string' or 'json'.";

const READ_BODY_FAILED: &str = "Failed to read request body.";
const PARSE_FAILED: &str = "Failed to parse JSON data.";
const PREPARE_FAILED: &str = "Failed to prepare SQL statement.";
const INSERT_FAILED: &str = "Failed to insert data into the database.";
const RETRIEVE_FAILED: &str = "Failed to retrieve data from the database.";
const SCAN_FAILED: &str = "Failed to scan row.";

/// How `GET /cats/{data}` renders its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// `string`: a two-line plain-text sentence.
    Text,
    /// `json`: `{"name": ..., "type": ...}`.
    Json,
}

impl FromStr for ResponseFormat {
    type Err = CatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ResponseFormat::Text),
            "json" => Ok(ResponseFormat::Json),
            _ => Err(CatsError::Query(INVALID_FORMAT)),
        }
    }
}

/// Query parameters accepted by the cats GET routes.
#[derive(Debug, Default)]
pub struct CatQuery {
    pub name: Option<String>,
    pub kind: Option<String>,
}

impl CatQuery {
    /// Decode the raw query pairs. A repeated key keeps its first value; an
    /// unreadable query string counts as missing parameters.
    fn from_request(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> Result<Self, CatsError> {
        let Query(pairs) = query.map_err(|rejection| {
            tracing::debug!(%rejection, "Unreadable query string");
            CatsError::Query(MISSING_PARAMS)
        })?;
        Ok(Self {
            name: extract::first_param(&pairs, "name"),
            kind: extract::first_param(&pairs, "type"),
        })
    }

    /// Neither parameter was supplied.
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }

    /// Both parameters, or the 400 answer when either is missing or empty.
    fn require(self) -> Result<(String, String), CatsError> {
        match (self.name, self.kind) {
            (Some(name), Some(kind)) if !name.is_empty() && !kind.is_empty() => Ok((name, kind)),
            _ => Err(CatsError::Query(MISSING_PARAMS)),
        }
    }
}

/// A stored cat.
#[derive(Debug, Serialize)]
pub struct CatResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<mg_db::models::Cat> for CatResponse {
    fn from(cat: mg_db::models::Cat) -> Self {
        Self {
            id: cat.id,
            name: cat.name,
            kind: cat.kind,
        }
    }
}

/// JSON rendering of `GET /cats/json`.
#[derive(Debug, Serialize)]
pub struct CatEcho {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request body for `POST /cats`. Absent or `null` fields are empty strings.
#[derive(Debug, Default)]
pub struct CreateCatRequest {
    pub name: String,
    pub kind: String,
}

impl CreateCatRequest {
    pub fn from_json(body: &[u8]) -> mg_core::Result<Self> {
        let [name, kind] = extract::string_fields(body, ["name", "type"])?;
        Ok(Self { name, kind })
    }
}

/// Response body for `POST /cats`.
#[derive(Debug, Serialize)]
pub struct CatCreatedResponse {
    pub message: &'static str,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// GET /
pub async fn index() -> &'static str {
    GREETING
}

/// GET /cats
///
/// With no `name`/`type` query parameters this lists every stored cat. When
/// either is present the request is a `/cats/{data}` query missing its
/// format segment, and is rejected the same way.
pub async fn list_cats(
    State(ctx): State<AppContext>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<CatResponse>>, CatsError> {
    let query = CatQuery::from_request(query)?;
    if !query.is_empty() {
        query.require()?;
        return Err(CatsError::Query(INVALID_FORMAT));
    }

    let conn = mg_db::pool::get_conn(&ctx.db)
        .map_err(|e| CatsError::internal(RETRIEVE_FAILED, e))?;
    let cats = mg_db::queries::cats::list_cats(&conn).map_err(|e| {
        let message = match e {
            Error::RowDecode { .. } => SCAN_FAILED,
            _ => RETRIEVE_FAILED,
        };
        CatsError::internal(message, e)
    })?;

    Ok(Json(cats.into_iter().map(CatResponse::from).collect()))
}

/// GET /cats/{data}?name=..&type=..
///
/// Echoes the query back; touches no storage.
pub async fn describe_cat(
    Path(data): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, CatsError> {
    let (name, kind) = CatQuery::from_request(query)?.require()?;

    let response = match data.parse::<ResponseFormat>()? {
        ResponseFormat::Text => {
            format!("Your cat name is: {name}\nand his type is: {kind}\n").into_response()
        }
        ResponseFormat::Json => Json(CatEcho { name, kind }).into_response(),
    };
    Ok(response)
}

/// POST /cats
pub async fn create_cat(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CatCreatedResponse>, CatsError> {
    let body = body.map_err(|e| CatsError::internal(READ_BODY_FAILED, std::io::Error::other(e)))?;

    let payload =
        CreateCatRequest::from_json(&body).map_err(|e| CatsError::internal(PARSE_FAILED, e))?;

    let conn = mg_db::pool::get_conn(&ctx.db)
        .map_err(|e| CatsError::internal(INSERT_FAILED, e))?;
    let id = mg_db::queries::cats::insert_cat(&conn, &payload.name, &payload.kind).map_err(|e| {
        let message = match e {
            Error::Statement { .. } => PREPARE_FAILED,
            _ => INSERT_FAILED,
        };
        CatsError::internal(message, e)
    })?;

    tracing::info!(id, name = %payload.name, kind = %payload.kind, "This is your cat");

    Ok(Json(CatCreatedResponse {
        message: "Cat added successfully",
        name: payload.name,
        kind: payload.kind,
    }))
}
