use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table linking dispute cases to the returns they cover.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispute_case_returns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dispute_case_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub return_id: i32,
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
    #[sea_orm(
        belongs_to = "super::return_entity::Entity",
        from = "Column::ReturnId",
        to = "super::return_entity::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Return,
}

impl Related<super::dispute_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisputeCase.def()
    }
}

impl Related<super::return_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Return.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
