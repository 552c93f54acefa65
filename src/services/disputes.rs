use super::Page;
use crate::db::DbPool;
use crate::entities::{
    dispute_case::{self, generate_case_id, DisputeStatus, Entity as DisputeCaseEntity},
    dispute_case_return, dispute_evidence,
};
use crate::errors::ServiceError;
use crate::forms::DisputePayload;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Service for managing dispute cases and their attachments
#[derive(Clone)]
pub struct DisputeService {
    db: Arc<DbPool>,
    page_size: u64,
}

impl DisputeService {
    pub fn new(db: Arc<DbPool>, page_size: u64) -> Self {
        Self { db, page_size }
    }

    /// Fetches one page of dispute cases, newest first.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: u64) -> Result<Page<dispute_case::Model>, ServiceError> {
        let page = page.max(1);
        let paginator = DisputeCaseEntity::find()
            .order_by_desc(dispute_case::Column::CreatedAt)
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

    /// Persists a new case and then its return associations; the join rows
    /// need the freshly assigned primary key. New cases start OPEN.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(
        &self,
        payload: DisputePayload,
        created_by: Option<i32>,
    ) -> Result<dispute_case::Model, ServiceError> {
        let now = Utc::now();
        let model = dispute_case::ActiveModel {
            case_id: Set(generate_case_id()),
            title: Set(payload.title),
            description: Set(payload.description),
            created_by: Set(created_by),
            linked_order_id: Set(payload.linked_order),
            status: Set(DisputeStatus::Open.to_string()),
            resolution_notes: Set(payload.resolution_notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        if !payload.linked_returns.is_empty() {
            let links = payload
                .linked_returns
                .iter()
                .map(|return_id| dispute_case_return::ActiveModel {
                    dispute_case_id: Set(model.id),
                    return_id: Set(*return_id),
                });
            dispute_case_return::Entity::insert_many(links)
                .exec(&*self.db)
                .await?;
        }

        info!(case_id = %model.case_id, "dispute case created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn bulk_delete(&self, ids: &[i32]) -> Result<u64, ServiceError> {
        let result = DisputeCaseEntity::delete_many()
            .filter(dispute_case::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await?;
        info!(deleted = result.rows_affected, "dispute cases deleted");
        Ok(result.rows_affected)
    }

    /// Ids of the returns associated with a case.
    pub async fn linked_return_ids(&self, case_id: i32) -> Result<Vec<i32>, ServiceError> {
        let links = dispute_case_return::Entity::find()
            .filter(dispute_case_return::Column::DisputeCaseId.eq(case_id))
            .all(&*self.db)
            .await?;
        Ok(links.into_iter().map(|link| link.return_id).collect())
    }

    /// Records an uploaded evidence file against a case.
    #[instrument(skip(self, description))]
    pub async fn attach_evidence(
        &self,
        case_id: i32,
        file_path: String,
        description: Option<String>,
    ) -> Result<dispute_evidence::Model, ServiceError> {
        let model = dispute_evidence::ActiveModel {
            dispute_case_id: Set(case_id),
            file_path: Set(file_path),
            description: Set(description),
            uploaded_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(model)
    }

    pub async fn evidence_for(
        &self,
        case_id: i32,
    ) -> Result<Vec<dispute_evidence::Model>, ServiceError> {
        Ok(dispute_evidence::Entity::find()
            .filter(dispute_evidence::Column::DisputeCaseId.eq(case_id))
            .all(&*self.db)
            .await?)
    }
}
