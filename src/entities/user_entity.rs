use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimal account row so dispute attribution has a referent. No
/// authentication layer is built on top of this.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dispute_case::Entity")]
    DisputeCases,
}

impl Related<super::dispute_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisputeCases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
