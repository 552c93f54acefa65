pub mod analytics;
pub mod common;
pub mod disputes;
pub mod orders;
pub mod pages;
pub mod returns;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<crate::services::orders::OrderService>,
    pub returns: Arc<crate::services::returns::ReturnService>,
    pub disputes: Arc<crate::services::disputes::DisputeService>,
    pub analytics: Arc<crate::services::analytics::AnalyticsService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>, page_size: u64) -> Self {
        Self {
            orders: Arc::new(crate::services::orders::OrderService::new(
                db.clone(),
                page_size,
            )),
            returns: Arc::new(crate::services::returns::ReturnService::new(
                db.clone(),
                page_size,
            )),
            disputes: Arc::new(crate::services::disputes::DisputeService::new(
                db.clone(),
                page_size,
            )),
            analytics: Arc::new(crate::services::analytics::AnalyticsService::new(db)),
        }
    }
}

/// Authenticated actor installed as a request extension by an outer
/// deployment layer. Nothing in this service installs it; dispute creator
/// attribution is opportunistic.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
}
