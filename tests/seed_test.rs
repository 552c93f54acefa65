mod common;

use common::TestApp;
use dispute_desk::entities::{dispute_case, order, return_entity};
use dispute_desk::seed::populate_demo_data;
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn seeding_is_idempotent() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    populate_demo_data(db).await.expect("first seed");
    populate_demo_data(db).await.expect("second seed");

    assert_eq!(order::Entity::find().count(db).await.unwrap(), 2);
    assert_eq!(return_entity::Entity::find().count(db).await.unwrap(), 2);
    assert_eq!(dispute_case::Entity::find().count(db).await.unwrap(), 2);

    let cases = dispute_case::Entity::find().all(db).await.unwrap();
    assert!(cases.iter().any(|c| c.status == "OPEN"));
    assert!(cases.iter().any(|c| c.status == "IN_REVIEW"));
    assert!(cases.iter().all(|c| c.case_id.chars().count() == 8));
    assert!(cases.iter().all(|c| c.created_by.is_none()));
}

#[tokio::test]
async fn seeded_rows_carry_the_fixture_values() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    populate_demo_data(db).await.expect("seed");

    let orders = order::Entity::find().all(db).await.unwrap();
    let first = orders
        .iter()
        .find(|o| o.amazon_order_id == "DUMMYORDER001")
        .expect("first demo order");
    assert_eq!(first.amount, dec!(100.50));
    assert_eq!(first.customer_email.as_deref(), Some("john.doe@example.com"));

    let returns = return_entity::Entity::find().all(db).await.unwrap();
    assert!(returns
        .iter()
        .any(|r| r.tracking_number.as_deref() == Some("TRACK001")));
    assert!(returns
        .iter()
        .any(|r| r.return_reason == "Wrong item sent"));
}
