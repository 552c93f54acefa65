use super::{Choice, Page};
use crate::db::DbPool;
use crate::entities::{
    order,
    return_entity::{self, Entity as ReturnEntity},
};
use crate::errors::ServiceError;
use crate::forms::ReturnPayload;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument};

/// Service for managing returns
#[derive(Clone)]
pub struct ReturnService {
    db: Arc<DbPool>,
    page_size: u64,
}

impl ReturnService {
    pub fn new(db: Arc<DbPool>, page_size: u64) -> Self {
        Self { db, page_size }
    }

    /// Fetches one page of returns, newest return date first.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: u64) -> Result<Page<return_entity::Model>, ServiceError> {
        let page = page.max(1);
        let paginator = ReturnEntity::find()
            .order_by_desc(return_entity::Column::ReturnDate)
            .paginate(&*self.db, self.page_size);
        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(page - 1).await?;
        Ok(Page {
            items,
            page,
            total_pages: totals.number_of_pages,
            total_items: totals.number_of_items,
        })
    }

    #[instrument(skip(self, payload), fields(order_id = payload.order_id))]
    pub async fn create(&self, payload: ReturnPayload) -> Result<return_entity::Model, ServiceError> {
        let model = return_entity::ActiveModel {
            order_id: Set(payload.order_id),
            return_reason: Set(payload.return_reason),
            tracking_number: Set(payload.tracking_number),
            return_date: Set(payload.return_date),
            condition_on_return: Set(payload.condition_on_return),
            notes: Set(payload.notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(return_id = model.id, "return created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn bulk_delete(&self, ids: &[i32]) -> Result<u64, ServiceError> {
        let result = ReturnEntity::delete_many()
            .filter(return_entity::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await?;
        info!(deleted = result.rows_affected, "returns deleted");
        Ok(result.rows_affected)
    }

    /// Ids from the list that do not exist. Used to reject stale
    /// multi-select submissions with a field error.
    pub async fn missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, ServiceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let found: HashSet<i32> = ReturnEntity::find()
            .filter(return_entity::Column::Id.is_in(ids.iter().copied()))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();
        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    /// All returns as checkbox choices for the dispute form, labeled with
    /// their order's external identifier.
    pub async fn choices(&self) -> Result<Vec<Choice>, ServiceError> {
        let rows = ReturnEntity::find()
            .find_also_related(order::Entity)
            .order_by_desc(return_entity::Column::ReturnDate)
            .all(&*self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(ret, ord)| Choice {
                id: ret.id,
                label: match ord {
                    Some(o) => format!("Return for Order {}", o.amazon_order_id),
                    None => format!("Return #{}", ret.id),
                },
            })
            .collect())
    }
}
