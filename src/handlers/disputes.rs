use super::common::{bulk_delete_ids, creation_success, redirect_found, BulkDeleteResponse, PageQuery};
use super::CurrentUser;
use crate::{
    errors::ServiceError,
    forms::{self, FormData, FormErrors},
    render::render,
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use tera::Context;

pub async fn dispute_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServiceError> {
    let page = state
        .dispute_service()
        .list_page(query.page.unwrap_or(1))
        .await?;

    let mut ctx = Context::new();
    ctx.insert("disputes", &page.items);
    ctx.insert("page", &page.page);
    ctx.insert("total_pages", &page.total_pages);
    ctx.insert("total_items", &page.total_items);
    render(&state.templates, "disputes/list.html", &ctx)
}

/// The dispute form embeds an order select and a checkbox list of returns,
/// both fetched fresh. Checked boxes survive a failed submission.
async fn dispute_form(
    state: &AppState,
    data: Option<&FormData>,
    errors: Option<&FormErrors>,
) -> Result<Html<String>, ServiceError> {
    let selected_returns: Vec<i32> = data
        .map(|d| {
            d.all("linked_returns")
                .iter()
                .filter_map(|raw| raw.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    // ids start at 1, so 0 means no selection
    let selected_order: i32 = data
        .and_then(|d| d.first("linked_order"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);

    let mut ctx = Context::new();
    ctx.insert("order_choices", &state.order_service().choices().await?);
    ctx.insert("return_choices", &state.return_service().choices().await?);
    ctx.insert("selected_order", &selected_order);
    ctx.insert("values", &data.map(FormData::values_map).unwrap_or_default());
    ctx.insert("selected_returns", &selected_returns);
    ctx.insert("errors", errors.unwrap_or(&FormErrors::default()));
    render(&state.templates, "disputes/modal_form.html", &ctx)
}

pub async fn dispute_create_modal(
    State(state): State<AppState>,
) -> Result<Html<String>, ServiceError> {
    dispute_form(&state, None, None).await
}

pub async fn dispute_create_redirect() -> Response {
    redirect_found("/disputes/new/")
}

pub async fn dispute_create(
    State(state): State<AppState>,
    headers: HeaderMap,
    user: Option<Extension<CurrentUser>>,
    body: String,
) -> Result<Response, ServiceError> {
    let data = FormData::parse(&body);

    // Validation failures on this path re-render with an explicit 400.
    let payload = match forms::disputes::bind(&data) {
        Ok(payload) => payload,
        Err(errors) => {
            let fragment = dispute_form(&state, Some(&data), Some(&errors)).await?;
            return Ok((StatusCode::BAD_REQUEST, fragment).into_response());
        }
    };

    let mut errors = FormErrors::default();
    if let Some(order_id) = payload.linked_order {
        if !state.order_service().exists(order_id).await? {
            errors.add("linked_order", "Select a valid choice.");
        }
    }
    if !state
        .return_service()
        .missing_ids(&payload.linked_returns)
        .await?
        .is_empty()
    {
        errors.add("linked_returns", "Select a valid choice.");
    }
    if !errors.is_empty() {
        let fragment = dispute_form(&state, Some(&data), Some(&errors)).await?;
        return Ok((StatusCode::BAD_REQUEST, fragment).into_response());
    }

    let created_by = user.map(|Extension(u)| u.id);
    state.dispute_service().create(payload, created_by).await?;
    Ok(creation_success(&headers, "/disputes/"))
}

pub async fn dispute_delete(
    State(state): State<AppState>,
    payload: Result<Json<super::common::BulkDeleteRequest>, JsonRejection>,
) -> Result<Json<BulkDeleteResponse>, ServiceError> {
    let ids = bulk_delete_ids(payload, "dispute")?;
    let deleted_count = state.dispute_service().bulk_delete(&ids).await?;
    Ok(Json(BulkDeleteResponse {
        success: true,
        deleted_count,
    }))
}
