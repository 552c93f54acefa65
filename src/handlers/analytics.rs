use crate::{errors::ServiceError, render::render, AppState};
use axum::{extract::State, response::Html};
use tera::Context;

/// Aggregated counts, computed fresh per request.
pub async fn analytics_dashboard(
    State(state): State<AppState>,
) -> Result<Html<String>, ServiceError> {
    let snapshot = state.analytics_service().snapshot().await?;

    let mut ctx = Context::new();
    ctx.insert("open_disputes", &snapshot.open_disputes);
    ctx.insert("open_orders", &snapshot.open_orders);
    ctx.insert("open_returns", &snapshot.open_returns);
    ctx.insert("disputes_by_title", &snapshot.disputes_by_title);
    ctx.insert("orders_by_title", &snapshot.orders_by_title);
    ctx.insert("returns_by_reason", &snapshot.returns_by_reason);
    render(&state.templates, "analytics.html", &ctx)
}
