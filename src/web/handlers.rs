//! HTTP request handlers.
//!
//! Every resource is served by the same two generic handlers; a record type
//! only decides how its path key turns into Livestatus filters. Services can
//! also be fetched by id and listed per host.

use super::{ApiError, AppState};
use crate::livestatus::{
    decode_reply, Client, Comment, Contact, Downtime, Filter, Host, Query, Record, Service,
};

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

/// A record that can be looked up by a unique key taken from the URL path.
pub trait Lookup: Record {
    /// Path parameters identifying one record.
    type Key: DeserializeOwned + Send + 'static;

    /// Equality filters selecting the record with `key`.
    fn filters(key: Self::Key) -> Result<Vec<Filter>, ApiError>;
}

fn id_filter<R: Record>(key: &str) -> Result<Vec<Filter>, ApiError> {
    let id: i64 = key
        .parse()
        .map_err(|_| ApiError::BadKey(format!("Invalid {} id", R::KIND)))?;
    Ok(vec![Filter::equals("id", id.to_string())?])
}

impl Lookup for Comment {
    type Key = String;

    fn filters(key: String) -> Result<Vec<Filter>, ApiError> {
        id_filter::<Self>(&key)
    }
}

impl Lookup for Downtime {
    type Key = String;

    fn filters(key: String) -> Result<Vec<Filter>, ApiError> {
        id_filter::<Self>(&key)
    }
}

impl Lookup for Contact {
    type Key = String;

    fn filters(name: String) -> Result<Vec<Filter>, ApiError> {
        Ok(vec![Filter::equals("name", name)?])
    }
}

impl Lookup for Host {
    type Key = String;

    fn filters(name: String) -> Result<Vec<Filter>, ApiError> {
        Ok(vec![Filter::equals("name", name)?])
    }
}

impl Lookup for Service {
    type Key = (String, String);

    fn filters((host_name, description): (String, String)) -> Result<Vec<Filter>, ApiError> {
        Ok(vec![
            Filter::equals("host_name", host_name)?,
            Filter::equals("description", description)?,
        ])
    }
}

/// One socket round trip: run the query and decode every row.
async fn fetch<R: Record>(client: &Client, query: Query) -> Result<Vec<R>, ApiError> {
    let body = client
        .execute(&query)
        .await
        .map_err(|source| ApiError::Query {
            kind: R::KIND,
            source,
        })?;
    Ok(decode_reply(&body)?)
}

/// `GET /<resource>`: every record of the table, possibly none.
pub async fn list<R>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiError>
where
    R: Record + Serialize + Send + 'static,
{
    let records = fetch::<R>(&state.client, Query::for_record::<R>()).await?;
    Ok(Json(records))
}

/// Unwrap path parameters, answering unreadable ones (e.g. invalid UTF-8)
/// with the JSON bad-request body instead of axum's plain-text rejection.
fn path_key<T>(kind: &'static str, path: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    match path {
        Ok(Path(key)) => Ok(key),
        Err(rejection) => {
            tracing::debug!("Unreadable {} path key: {}", kind, rejection.body_text());
            Err(ApiError::BadKey(format!("Invalid {} key", kind)))
        }
    }
}

/// Run a filtered query and keep the first row; rows past the first are
/// ignored because the filters select a unique key.
async fn fetch_first<R>(client: &Client, filters: Vec<Filter>) -> Result<Json<R>, ApiError>
where
    R: Record + Send,
{
    let query = filters
        .into_iter()
        .fold(Query::for_record::<R>(), Query::filter);

    fetch::<R>(client, query)
        .await?
        .into_iter()
        .next()
        .map(Json)
        .ok_or(ApiError::NotFound(R::KIND))
}

/// `GET /<resource>/<key>`: the first matching record or 404.
pub async fn get_one<R>(
    State(state): State<AppState>,
    path: Result<Path<R::Key>, PathRejection>,
) -> Result<Json<R>, ApiError>
where
    R: Lookup + Serialize + Send + 'static,
{
    let filters = R::filters(path_key(R::KIND, path)?)?;
    fetch_first::<R>(&state.client, filters).await
}

/// `GET /services/<id>`: one service by its numeric id.
pub async fn get_service_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Service>, ApiError> {
    let id = path_key(Service::KIND, path)?;
    fetch_first::<Service>(&state.client, id_filter::<Service>(&id)?).await
}

/// `GET /hosts/<host_name>/services`: all services of one host.
pub async fn list_host_services(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let host_name = path_key(Host::KIND, path)?;
    let query = Query::for_record::<Service>().filter(Filter::equals("host_name", host_name)?);
    Ok(Json(fetch(&state.client, query).await?))
}

/// Any path without a route.
pub async fn unknown_route() -> ApiError {
    ApiError::NotFound("Resource")
}
