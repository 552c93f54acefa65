use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// External marketplace order identifier. Unique across all orders.
    #[sea_orm(unique, indexed)]
    pub amazon_order_id: String,

    pub sku: Option<String>,
    pub title: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub order_date: DateTime<Utc>,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::return_entity::Entity")]
    Returns,
    #[sea_orm(has_many = "super::dispute_case::Entity")]
    DisputeCases,
}

impl Related<super::return_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Returns.def()
    }
}

impl Related<super::dispute_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisputeCases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
