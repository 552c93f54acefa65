//! Dispute Desk
//!
//! Admin dashboard for tracking e-commerce order disputes, returns, and
//! supporting evidence.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod migrator;
pub mod render;
pub mod seed;
pub mod services;

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tera::Tera;

use crate::db::DbPool;
use crate::errors::ServiceError;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub templates: Arc<Tera>,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn order_service(&self) -> Arc<services::orders::OrderService> {
        self.services.orders.clone()
    }

    pub fn return_service(&self) -> Arc<services::returns::ReturnService> {
        self.services.returns.clone()
    }

    pub fn dispute_service(&self) -> Arc<services::disputes::DisputeService> {
        self.services.disputes.clone()
    }

    pub fn analytics_service(&self) -> Arc<services::analytics::AnalyticsService> {
        self.services.analytics.clone()
    }
}

/// Builds the shared application state: template engine plus the services
/// layer over the connection pool.
pub fn build_app_state(cfg: config::AppConfig, pool: DbPool) -> Result<AppState, ServiceError> {
    let templates = render::load_templates(&cfg.templates_glob)
        .map_err(|e| ServiceError::InternalError(format!("failed to load templates: {e}")))?;
    let db = Arc::new(pool);
    let services = handlers::AppServices::new(db.clone(), cfg.page_size);
    Ok(AppState {
        db,
        config: cfg,
        templates: Arc::new(templates),
        services,
    })
}

/// Full route table. Static; paths keep their trailing slashes.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Homepage
        .route("/", get(handlers::pages::homepage))
        // Disputes
        .route("/disputes/", get(handlers::disputes::dispute_list))
        .route("/disputes/new/", get(handlers::disputes::dispute_create_modal))
        .route(
            "/disputes/create/",
            get(handlers::disputes::dispute_create_redirect)
                .post(handlers::disputes::dispute_create),
        )
        .route("/disputes/delete/", delete(handlers::disputes::dispute_delete))
        // Orders
        .route("/orders/", get(handlers::orders::order_list))
        .route("/orders/new/", get(handlers::orders::order_create_modal))
        .route(
            "/orders/create/",
            get(handlers::orders::order_create_redirect).post(handlers::orders::order_create),
        )
        .route("/orders/delete/", delete(handlers::orders::order_delete))
        // Returns
        .route("/returns/", get(handlers::returns::return_list))
        .route("/returns/new/", get(handlers::returns::return_create_modal))
        .route(
            "/returns/create/",
            get(handlers::returns::return_create_redirect).post(handlers::returns::return_create),
        )
        .route("/returns/delete/", delete(handlers::returns::return_delete))
        // Analytics
        .route("/analytics/", get(handlers::analytics::analytics_dashboard))
}

/// Router with state applied, ready to serve.
pub fn build_router(state: AppState) -> Router {
    app_routes().with_state(state)
}
