//! Common request/response plumbing shared by all API modules
//!
//! Every resource exposes the same six verbs with the same status-code
//! contract, so the build-request/check-status/decode cycle is written
//! once here, parameterized by resource type and path segments. The
//! per-resource modules only define models, inputs, and thin typed
//! wrappers.

pub mod query;

use crate::client::NetBoxClient;
use crate::error::NetBoxError;
use crate::validate::Validate;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Paginated response wrapper from the NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of matching objects across all pages
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The objects on this page, in server order
    pub results: Vec<T>,
}

/// Decode a JSON body, preserving a snippet of the raw text on failure
pub(crate) async fn decode_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, NetBoxError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| NetBoxError::Decode {
        source: e,
        snippet: text.chars().take(500).collect(),
    })
}

/// Map a non-success response to [`NetBoxError::UnexpectedStatus`]
pub(crate) async fn unexpected_status(response: reqwest::Response) -> NetBoxError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    NetBoxError::UnexpectedStatus { status, body }
}

/// List resources matching the given filters
///
/// Issues a GET against the collection endpoint, expects 200, and returns
/// the decoded `results` slice of the paginated envelope. Empty filters
/// return the (server-paginated) first page.
pub(crate) async fn list_resources<T: DeserializeOwned>(
    client: &NetBoxClient,
    base: &[&str],
    filters: &[(&'static str, String)],
) -> Result<Vec<T>, NetBoxError> {
    let mut url = client.build_path(base);
    if !filters.is_empty() {
        url.push('?');
        url.push_str(&query::query_string(filters));
    }

    let response = client.send::<()>(Method::GET, &url, None).await?;
    match response.status() {
        StatusCode::OK => {
            let page: PaginatedResponse<T> = decode_body(response).await?;
            Ok(page.results)
        }
        _ => Err(unexpected_status(response).await),
    }
}

/// Get a single resource by ID
pub(crate) async fn get_resource<T: DeserializeOwned>(
    client: &NetBoxClient,
    base: &[&str],
    id: u64,
    noun: &str,
) -> Result<T, NetBoxError> {
    let id_segment = id.to_string();
    let mut segments = base.to_vec();
    segments.push(&id_segment);
    let url = client.build_path(&segments);

    let response = client.send::<()>(Method::GET, &url, None).await?;
    match response.status() {
        StatusCode::OK => decode_body(response).await,
        StatusCode::NOT_FOUND => Err(NetBoxError::NotFound(format!("{noun} {id} not found"))),
        _ => Err(unexpected_status(response).await),
    }
}

/// Create a resource
///
/// Validation failures are returned immediately; no request is sent.
pub(crate) async fn create_resource<T, I>(
    client: &NetBoxClient,
    base: &[&str],
    input: &I,
) -> Result<T, NetBoxError>
where
    T: DeserializeOwned,
    I: Validate + Serialize,
{
    input.validate()?;

    let url = client.build_path(base);
    let response = client.send(Method::POST, &url, Some(input)).await?;
    match response.status() {
        StatusCode::CREATED => decode_body(response).await,
        _ => Err(unexpected_status(response).await),
    }
}

/// Replace a resource (PUT)
pub(crate) async fn update_resource<T, I>(
    client: &NetBoxClient,
    base: &[&str],
    id: u64,
    input: &I,
    noun: &str,
) -> Result<T, NetBoxError>
where
    T: DeserializeOwned,
    I: Validate + Serialize,
{
    input.validate()?;
    send_mutation(client, Method::PUT, base, id, input, noun).await
}

/// Partially update a resource (PATCH)
///
/// Only the set optional fields of `input` are serialized. The ID must
/// have been checked by the input's `validate()`.
pub(crate) async fn patch_resource<T, I>(
    client: &NetBoxClient,
    base: &[&str],
    id: Option<u64>,
    input: &I,
    noun: &str,
) -> Result<T, NetBoxError>
where
    T: DeserializeOwned,
    I: Validate + Serialize,
{
    input.validate()?;
    let Some(id) = id else {
        // validate() reports a missing ID; this is a backstop
        return Err(NetBoxError::Validation(
            crate::validate::ValidationError::new("id", "is required").into(),
        ));
    };
    send_mutation(client, Method::PATCH, base, id, input, noun).await
}

async fn send_mutation<T, I>(
    client: &NetBoxClient,
    method: Method,
    base: &[&str],
    id: u64,
    input: &I,
    noun: &str,
) -> Result<T, NetBoxError>
where
    T: DeserializeOwned,
    I: Serialize,
{
    let id_segment = id.to_string();
    let mut segments = base.to_vec();
    segments.push(&id_segment);
    let url = client.build_path(&segments);

    let response = client.send(method, &url, Some(input)).await?;
    match response.status() {
        StatusCode::OK => decode_body(response).await,
        StatusCode::NOT_FOUND => Err(NetBoxError::NotFound(format!("{noun} {id} not found"))),
        _ => Err(unexpected_status(response).await),
    }
}

/// Delete a resource by ID
pub(crate) async fn delete_resource(
    client: &NetBoxClient,
    base: &[&str],
    id: u64,
    noun: &str,
) -> Result<(), NetBoxError> {
    let id_segment = id.to_string();
    let mut segments = base.to_vec();
    segments.push(&id_segment);
    let url = client.build_path(&segments);

    let response = client.send::<()>(Method::DELETE, &url, None).await?;
    match response.status() {
        StatusCode::NO_CONTENT => Ok(()),
        StatusCode::NOT_FOUND => Err(NetBoxError::NotFound(format!("{noun} {id} not found"))),
        _ => Err(unexpected_status(response).await),
    }
}
