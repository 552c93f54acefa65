use crate::{errors::ServiceError, render::render, AppState};
use axum::{extract::State, response::Html};
use tera::Context;

/// Static landing page.
pub async fn homepage(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    render(&state.templates, "homepage.html", &Context::new())
}
