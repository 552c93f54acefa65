use crate::errors::ServiceError;
use axum::response::Html;
use tera::{Context, Tera};

/// Loads every template matched by the configured glob. Fails fast at
/// startup if any template has a syntax error.
pub fn load_templates(glob: &str) -> Result<Tera, tera::Error> {
    Tera::new(glob)
}

pub fn render(tera: &Tera, name: &str, ctx: &Context) -> Result<Html<String>, ServiceError> {
    Ok(Html(tera.render(name, ctx)?))
}
