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

pub async fn order_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServiceError> {
    let page = state
        .order_service()
        .list_page(query.page.unwrap_or(1))
        .await?;

    let mut ctx = Context::new();
    ctx.insert("orders", &page.items);
    ctx.insert("page", &page.page);
    ctx.insert("total_pages", &page.total_pages);
    ctx.insert("total_items", &page.total_items);
    render(&state.templates, "orders/list.html", &ctx)
}

fn order_form(
    state: &AppState,
    data: Option<&FormData>,
    errors: Option<&FormErrors>,
) -> Result<Html<String>, ServiceError> {
    let mut ctx = Context::new();
    ctx.insert("values", &data.map(FormData::values_map).unwrap_or_default());
    ctx.insert("errors", errors.unwrap_or(&FormErrors::default()));
    render(&state.templates, "orders/modal_form.html", &ctx)
}

/// Empty creation form, rendered as a modal fragment.
pub async fn order_create_modal(
    State(state): State<AppState>,
) -> Result<Html<String>, ServiceError> {
    order_form(&state, None, None)
}

/// A browser GET on the create endpoint shows the form instead of a 405.
pub async fn order_create_redirect() -> Response {
    redirect_found("/orders/new/")
}

pub async fn order_create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ServiceError> {
    let data = FormData::parse(&body);

    let payload = match forms::orders::bind(&data) {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(order_form(&state, Some(&data), Some(&errors))?.into_response());
        }
    };

    if state
        .order_service()
        .amazon_order_id_taken(&payload.amazon_order_id)
        .await?
    {
        let mut errors = FormErrors::default();
        errors.add(
            "amazon_order_id",
            "Order with this Amazon order ID already exists.",
        );
        return Ok(order_form(&state, Some(&data), Some(&errors))?.into_response());
    }

    state.order_service().create(payload).await?;
    Ok(creation_success(&headers, "/orders/"))
}

pub async fn order_delete(
    State(state): State<AppState>,
    payload: Result<Json<super::common::BulkDeleteRequest>, JsonRejection>,
) -> Result<Json<BulkDeleteResponse>, ServiceError> {
    let ids = bulk_delete_ids(payload, "order")?;
    let deleted_count = state.order_service().bulk_delete(&ids).await?;
    Ok(Json(BulkDeleteResponse {
        success: true,
        deleted_count,
    }))
}
