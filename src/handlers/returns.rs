use super::common::{bulk_delete_ids, creation_success, redirect_found, BulkDeleteResponse, PageQuery};
use crate::{
    errors::ServiceError,
    forms::{self, FormData, FormErrors},
    render::render,
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use tera::Context;

pub async fn return_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServiceError> {
    let page = state
        .return_service()
        .list_page(query.page.unwrap_or(1))
        .await?;

    let mut ctx = Context::new();
    ctx.insert("returns", &page.items);
    ctx.insert("page", &page.page);
    ctx.insert("total_pages", &page.total_pages);
    ctx.insert("total_items", &page.total_items);
    render(&state.templates, "returns/list.html", &ctx)
}

/// The return form embeds a select of existing orders, fetched fresh.
async fn return_form(
    state: &AppState,
    data: Option<&FormData>,
    errors: Option<&FormErrors>,
) -> Result<Html<String>, ServiceError> {
    // ids start at 1, so 0 means no selection
    let selected_order: i32 = data
        .and_then(|d| d.first("order"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);

    let mut ctx = Context::new();
    ctx.insert("order_choices", &state.order_service().choices().await?);
    ctx.insert("selected_order", &selected_order);
    ctx.insert("values", &data.map(FormData::values_map).unwrap_or_default());
    ctx.insert("errors", errors.unwrap_or(&FormErrors::default()));
    render(&state.templates, "returns/modal_form.html", &ctx)
}

pub async fn return_create_modal(
    State(state): State<AppState>,
) -> Result<Html<String>, ServiceError> {
    return_form(&state, None, None).await
}

pub async fn return_create_redirect() -> Response {
    redirect_found("/returns/new/")
}

pub async fn return_create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ServiceError> {
    let data = FormData::parse(&body);

    let payload = match forms::returns::bind(&data) {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(return_form(&state, Some(&data), Some(&errors))
                .await?
                .into_response());
        }
    };

    if !state.order_service().exists(payload.order_id).await? {
        let mut errors = FormErrors::default();
        errors.add("order", "Select a valid order.");
        return Ok(return_form(&state, Some(&data), Some(&errors))
            .await?
            .into_response());
    }

    state.return_service().create(payload).await?;
    Ok(creation_success(&headers, "/returns/"))
}

pub async fn return_delete(
    State(state): State<AppState>,
    payload: Result<Json<super::common::BulkDeleteRequest>, JsonRejection>,
) -> Result<Json<BulkDeleteResponse>, ServiceError> {
    let ids = bulk_delete_ids(payload, "return")?;
    let deleted_count = state.return_service().bulk_delete(&ids).await?;
    Ok(Json(BulkDeleteResponse {
        success: true,
        deleted_count,
    }))
}
