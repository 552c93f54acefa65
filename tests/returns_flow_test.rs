mod common;

use axum::http::{header, StatusCode};
use chrono::Utc;
use common::{body_json, body_string, TestApp};
use dispute_desk::entities::return_entity;
use dispute_desk::forms::{OrderPayload, ReturnPayload};
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn seed_order(app: &TestApp, amazon_order_id: &str) -> i32 {
    app.state
        .order_service()
        .create(OrderPayload {
            amazon_order_id: amazon_order_id.to_string(),
            sku: None,
            title: "Seeded product".to_string(),
            customer_name: None,
            customer_email: None,
            order_date: Utc::now(),
            amount: dec!(10.00),
        })
        .await
        .expect("seed order")
        .id
}

#[tokio::test]
async fn post_valid_return_redirects_and_appears_in_list() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-RET-1").await;

    let response = app
        .post_form(
            "/returns/create/",
            &format!("order={order_id}&return_reason=Damaged+in+transit&tracking_number=TRK9"),
            false,
        )
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/returns/"
    );

    let list = body_string(app.get("/returns/").await).await;
    assert!(list.contains("Damaged in transit"));
    assert!(list.contains("TRK9"));
}

#[tokio::test]
async fn unknown_order_rerenders_with_a_field_error() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/returns/create/", "order=424242&return_reason=Damaged", false)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Select a valid order."));
}

#[tokio::test]
async fn form_fragment_lists_existing_orders_as_choices() {
    let app = TestApp::new().await;
    seed_order(&app, "111-CHOICE").await;

    let body = body_string(app.get("/returns/new/").await).await;
    assert!(body.contains("111-CHOICE"));
    assert!(body.contains("hx-post=\"/returns/create/\""));
}

#[tokio::test]
async fn deleting_an_order_cascades_to_its_returns() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-CASCADE").await;
    app.state
        .return_service()
        .create(ReturnPayload {
            order_id,
            return_reason: "Damaged".to_string(),
            tracking_number: None,
            return_date: Utc::now(),
            condition_on_return: None,
            notes: None,
        })
        .await
        .expect("seed return");

    let deleted = app
        .state
        .order_service()
        .bulk_delete(&[order_id])
        .await
        .expect("delete order");
    assert_eq!(deleted, 1);

    let remaining = return_entity::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count returns");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn bulk_delete_contract_matches_the_other_kinds() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-RDEL").await;
    let ret = app
        .state
        .return_service()
        .create(ReturnPayload {
            order_id,
            return_reason: "Wrong size".to_string(),
            tracking_number: None,
            return_date: Utc::now(),
            condition_on_return: None,
            notes: None,
        })
        .await
        .expect("seed return");

    let empty = app.delete_json("/returns/delete/", r#"{"ids": []}"#).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(empty).await["error"], "No return IDs provided.");

    let body = format!(r#"{{"ids": [{}, 888888]}}"#, ret.id);
    let ok = app.delete_json("/returns/delete/", &body).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let json = body_json(ok).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted_count"], 1);
}
