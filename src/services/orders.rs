use super::{Choice, Page};
use crate::db::DbPool;
use crate::entities::order::{self, Entity as OrderEntity};
use crate::errors::ServiceError;
use crate::forms::OrderPayload;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Service for managing orders
#[derive(Clone)]
pub struct OrderService {
    db: Arc<DbPool>,
    page_size: u64,
}

impl OrderService {
    pub fn new(db: Arc<DbPool>, page_size: u64) -> Self {
        Self { db, page_size }
    }

    /// Fetches one page of orders, newest order date first.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: u64) -> Result<Page<order::Model>, ServiceError> {
        let page = page.max(1);
        let paginator = OrderEntity::find()
            .order_by_desc(order::Column::OrderDate)
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

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(OrderEntity::find_by_id(id).count(&*self.db).await? > 0)
    }

    /// Uniqueness pre-check so a duplicate surfaces as a field error, not a
    /// constraint violation.
    pub async fn amazon_order_id_taken(&self, value: &str) -> Result<bool, ServiceError> {
        let count = OrderEntity::find()
            .filter(order::Column::AmazonOrderId.eq(value))
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, payload), fields(amazon_order_id = %payload.amazon_order_id))]
    pub async fn create(&self, payload: OrderPayload) -> Result<order::Model, ServiceError> {
        let now = Utc::now();
        let model = order::ActiveModel {
            amazon_order_id: Set(payload.amazon_order_id),
            sku: Set(payload.sku),
            title: Set(payload.title),
            customer_name: Set(payload.customer_name),
            customer_email: Set(payload.customer_email),
            order_date: Set(payload.order_date),
            amount: Set(payload.amount),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(order_id = model.id, "order created");
        Ok(model)
    }

    /// Deletes all orders whose id is in the list. Non-existent ids are
    /// silently ignored; returns the number of rows actually removed.
    #[instrument(skip(self))]
    pub async fn bulk_delete(&self, ids: &[i32]) -> Result<u64, ServiceError> {
        let result = OrderEntity::delete_many()
            .filter(order::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await?;
        info!(deleted = result.rows_affected, "orders deleted");
        Ok(result.rows_affected)
    }

    /// All orders as select-widget choices, newest first.
    pub async fn choices(&self) -> Result<Vec<Choice>, ServiceError> {
        let orders = OrderEntity::find()
            .order_by_desc(order::Column::OrderDate)
            .all(&*self.db)
            .await?;
        Ok(orders
            .into_iter()
            .map(|o| Choice {
                id: o.id,
                label: format!("{} - {}", o.amazon_order_id, o.title),
            })
            .collect())
    }
}
