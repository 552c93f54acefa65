use crate::db::DbPool;
use crate::entities::{dispute_case, order, return_entity};
use crate::errors::ServiceError;
use sea_orm::sea_query::Expr;
use sea_orm::{EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// One row of a group-by-count breakdown.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct CategoryCount {
    pub label: String,
    pub count: i64,
}

/// Everything the analytics page shows, computed fresh per request. The
/// `open_*` naming is historical; the totals are unfiltered.
#[derive(Debug, Serialize)]
pub struct AnalyticsSnapshot {
    pub open_disputes: u64,
    pub open_orders: u64,
    pub open_returns: u64,
    pub disputes_by_title: Vec<CategoryCount>,
    pub orders_by_title: Vec<CategoryCount>,
    pub returns_by_reason: Vec<CategoryCount>,
}

#[derive(Clone)]
pub struct AnalyticsService {
    db: Arc<DbPool>,
}

impl AnalyticsService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<AnalyticsSnapshot, ServiceError> {
        let db = &*self.db;

        let open_disputes = dispute_case::Entity::find().count(db).await?;
        let open_orders = order::Entity::find().count(db).await?;
        let open_returns = return_entity::Entity::find().count(db).await?;

        let disputes_by_title = dispute_case::Entity::find()
            .select_only()
            .column_as(dispute_case::Column::Title, "label")
            .column_as(
                Expr::col((dispute_case::Entity, dispute_case::Column::Title)).count(),
                "count",
            )
            .group_by(dispute_case::Column::Title)
            .into_model::<CategoryCount>()
            .all(db)
            .await?;

        let orders_by_title = order::Entity::find()
            .select_only()
            .column_as(order::Column::Title, "label")
            .column_as(
                Expr::col((order::Entity, order::Column::Title)).count(),
                "count",
            )
            .group_by(order::Column::Title)
            .into_model::<CategoryCount>()
            .all(db)
            .await?;

        let returns_by_reason = return_entity::Entity::find()
            .select_only()
            .column_as(return_entity::Column::ReturnReason, "label")
            .column_as(
                Expr::col((return_entity::Entity, return_entity::Column::ReturnReason)).count(),
                "count",
            )
            .group_by(return_entity::Column::ReturnReason)
            .into_model::<CategoryCount>()
            .all(db)
            .await?;

        Ok(AnalyticsSnapshot {
            open_disputes,
            open_orders,
            open_returns,
            disputes_by_title,
            orders_by_title,
            returns_by_reason,
        })
    }
}
