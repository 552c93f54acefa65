use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Flat status tag. No transition rules are enforced; any value may be
/// re-saved over any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStatus {
    Open,
    InReview,
    Resolved,
}

/// Short case identifier: a random UUIDv4 rendered and truncated to 8
/// characters. Truncation is not re-checked for uniqueness; a collision
/// surfaces as a unique-constraint error from the database.
pub fn generate_case_id() -> String {
    Uuid::new_v4().to_string().chars().take(8).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispute_cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique, indexed)]
    pub case_id: String,

    pub title: String,
    pub description: String,
    pub created_by: Option<i32>,
    pub linked_order_id: Option<i32>,
    pub status: String,
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::LinkedOrderId",
        to = "super::order::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    LinkedOrder,
    #[sea_orm(
        belongs_to = "super::user_entity::Entity",
        from = "Column::CreatedBy",
        to = "super::user_entity::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::dispute_evidence::Entity")]
    Evidence,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LinkedOrder.def()
    }
}

impl Related<super::user_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::dispute_evidence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evidence.def()
    }
}

// Many-to-many to returns through the join table.
impl Related<super::return_entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::dispute_case_return::Relation::Return.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dispute_case_return::Relation::DisputeCase.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
