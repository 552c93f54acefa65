use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "returns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub order_id: i32,
    pub return_reason: String,
    pub tracking_number: Option<String>,
    pub return_date: DateTime<Utc>,
    pub condition_on_return: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

// Many-to-many to dispute cases through the join table.
impl Related<super::dispute_case::Entity> for Entity {
    fn to() -> RelationDef {
        super::dispute_case_return::Relation::DisputeCase.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dispute_case_return::Relation::Return.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
