use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Uploaded evidence attached to a dispute case. Removed together with its
/// parent case.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispute_evidence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub dispute_case_id: i32,
    pub file_path: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dispute_case::Entity",
        from = "Column::DisputeCaseId",
        to = "super::dispute_case::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DisputeCase,
}

impl Related<super::dispute_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisputeCase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
