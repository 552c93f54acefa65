use crate::errors::ServiceError;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const HX_REQUEST: &str = "hx-request";
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

/// Whether the submission came from a partial-refresh (HTMX) client.
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key(HX_REQUEST)
}

/// Plain `302 Found` redirect, matching the behavior of the conventional
/// form-submission flow.
pub fn redirect_found(target: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, target.to_string())]).into_response()
}

/// Success signal after a create: HTMX clients get an empty body with an
/// `HX-Redirect` header, everyone else a conventional redirect.
pub fn creation_success(headers: &HeaderMap, target: &str) -> Response {
    if is_htmx(headers) {
        (StatusCode::OK, [(HX_REDIRECT, target.to_string())]).into_response()
    } else {
        redirect_found(target)
    }
}

/// Query parameters accepted by the list views.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub ids: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub deleted_count: u64,
}

/// Shared contract for the bulk-delete endpoints: malformed JSON and an
/// empty or missing id list are both client errors.
pub fn bulk_delete_ids(
    payload: Result<Json<BulkDeleteRequest>, JsonRejection>,
    kind: &str,
) -> Result<Vec<i32>, ServiceError> {
    let Json(request) = payload.map_err(|_| ServiceError::InvalidInput("Invalid JSON.".into()))?;
    if request.ids.is_empty() {
        return Err(ServiceError::InvalidInput(format!(
            "No {kind} IDs provided."
        )));
    }
    Ok(request.ids)
}
