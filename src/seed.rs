//! Demo-data seeding, exposed as the `seed` subcommand. Idempotent: rows
//! are only created when their lookup key is absent.

use crate::entities::{
    dispute_case::{self, generate_case_id, DisputeStatus},
    order, return_entity,
};
use crate::errors::ServiceError;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;

pub async fn populate_demo_data(db: &DatabaseConnection) -> Result<(), ServiceError> {
    let now = Utc::now();

    let mut orders = Vec::new();
    for (order_id, sku, title, customer, email, cents) in [
        (
            "DUMMYORDER001",
            "SKU001",
            "Dummy Product 1",
            "John Doe",
            "john.doe@example.com",
            10_050,
        ),
        (
            "DUMMYORDER002",
            "SKU002",
            "Dummy Product 2",
            "Jane Smith",
            "jane.smith@example.com",
            20_075,
        ),
    ] {
        let existing = order::Entity::find()
            .filter(order::Column::AmazonOrderId.eq(order_id))
            .one(db)
            .await?;
        let model = match existing {
            Some(model) => model,
            None => {
                order::ActiveModel {
                    amazon_order_id: Set(order_id.into()),
                    sku: Set(Some(sku.into())),
                    title: Set(title.into()),
                    customer_name: Set(Some(customer.into())),
                    customer_email: Set(Some(email.into())),
                    order_date: Set(now),
                    amount: Set(Decimal::new(cents, 2)),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };
        orders.push(model);
    }

    for (title, description, linked, status) in [
        (
            "Dispute for Order 1",
            "This is a dummy dispute for testing.",
            orders[0].id,
            DisputeStatus::Open,
        ),
        (
            "Dispute for Order 2",
            "Another dummy dispute for testing.",
            orders[1].id,
            DisputeStatus::InReview,
        ),
    ] {
        let existing = dispute_case::Entity::find()
            .filter(dispute_case::Column::Title.eq(title))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }
        dispute_case::ActiveModel {
            case_id: Set(generate_case_id()),
            title: Set(title.into()),
            description: Set(description.into()),
            created_by: Set(None),
            linked_order_id: Set(Some(linked)),
            status: Set(status.to_string()),
            resolution_notes: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for (order, reason, tracking, condition, notes) in [
        (
            &orders[0],
            "Damaged item",
            "TRACK001",
            "Damaged",
            "Item was damaged on arrival.",
        ),
        (
            &orders[1],
            "Wrong item sent",
            "TRACK002",
            "Good",
            "Wrong item was sent to the customer.",
        ),
    ] {
        let existing = return_entity::Entity::find()
            .filter(return_entity::Column::TrackingNumber.eq(tracking))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }
        return_entity::ActiveModel {
            order_id: Set(order.id),
            return_reason: Set(reason.into()),
            tracking_number: Set(Some(tracking.into())),
            return_date: Set(now),
            condition_on_return: Set(Some(condition.into())),
            notes: Set(Some(notes.into())),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!("demo data populated");
    Ok(())
}
