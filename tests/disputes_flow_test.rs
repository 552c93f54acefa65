mod common;

use axum::http::StatusCode;
use axum::Extension;
use chrono::Utc;
use common::{body_json, body_string, TestApp};
use dispute_desk::entities::{dispute_case, dispute_evidence, user_entity};
use dispute_desk::forms::{DisputePayload, OrderPayload, ReturnPayload};
use dispute_desk::handlers::CurrentUser;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

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
            amount: dec!(25.00),
        })
        .await
        .expect("seed order")
        .id
}

async fn seed_return(app: &TestApp, order_id: i32, reason: &str) -> i32 {
    app.state
        .return_service()
        .create(ReturnPayload {
            order_id,
            return_reason: reason.to_string(),
            tracking_number: None,
            return_date: Utc::now(),
            condition_on_return: None,
            notes: None,
        })
        .await
        .expect("seed return")
        .id
}

#[tokio::test]
async fn htmx_create_links_returns_and_assigns_an_eight_char_case_id() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-DISP-1").await;
    let ret_a = seed_return(&app, order_id, "Damaged").await;
    let ret_b = seed_return(&app, order_id, "Wrong item").await;

    let body = format!(
        "title=Chargeback&description=Customer+disputes+delivery\
         &linked_order={order_id}&linked_returns={ret_a}&linked_returns={ret_b}"
    );
    let response = app.post_form("/disputes/create/", &body, true).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("hx-redirect").unwrap(),
        "/disputes/"
    );

    let case = dispute_case::Entity::find()
        .filter(dispute_case::Column::Title.eq("Chargeback"))
        .one(&*app.state.db)
        .await
        .expect("query case")
        .expect("case exists");
    assert_eq!(case.case_id.chars().count(), 8);
    assert_eq!(case.status, "OPEN");
    assert_eq!(case.linked_order_id, Some(order_id));
    assert_eq!(case.created_by, None);

    let mut linked = app
        .state
        .dispute_service()
        .linked_return_ids(case.id)
        .await
        .expect("linked returns");
    linked.sort_unstable();
    let mut expected = vec![ret_a, ret_b];
    expected.sort_unstable();
    assert_eq!(linked, expected);
}

#[tokio::test]
async fn duplicate_checkbox_values_create_a_single_link() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-DISP-DUP").await;
    let ret = seed_return(&app, order_id, "Damaged").await;

    let body = format!(
        "title=Doubled&description=D&linked_returns={ret}&linked_returns={ret}"
    );
    let response = app.post_form("/disputes/create/", &body, false).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let case = dispute_case::Entity::find()
        .filter(dispute_case::Column::Title.eq("Doubled"))
        .one(&*app.state.db)
        .await
        .expect("query case")
        .expect("case exists");
    let linked = app
        .state
        .dispute_service()
        .linked_return_ids(case.id)
        .await
        .expect("linked returns");
    assert_eq!(linked, vec![ret]);
}

#[tokio::test]
async fn case_ids_are_unique_across_cases() {
    let app = TestApp::new().await;
    let service = app.state.dispute_service();

    let mut seen = std::collections::HashSet::new();
    for i in 0..20 {
        let case = service
            .create(
                DisputePayload {
                    title: format!("Case {i}"),
                    description: "desc".to_string(),
                    linked_order: None,
                    linked_returns: vec![],
                    resolution_notes: None,
                },
                None,
            )
            .await
            .expect("create case");
        assert_eq!(case.case_id.chars().count(), 8);
        assert!(seen.insert(case.case_id));
    }
}

#[tokio::test]
async fn validation_failure_returns_400_with_the_fragment() {
    let app = TestApp::new().await;

    let response = app.post_form("/disputes/create/", "title=Missing+desc", false).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("This field is required."));
    assert!(body.contains("hx-post=\"/disputes/create/\""));
}

#[tokio::test]
async fn unknown_linked_records_return_400_field_errors() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/disputes/create/",
            "title=T&description=D&linked_order=999999",
            false,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Select a valid choice."));
}

#[tokio::test]
async fn authenticated_actor_is_attached_as_creator() {
    let app = TestApp::new().await;
    let user = user_entity::ActiveModel {
        username: Set("agent".to_string()),
        email: Set("agent@example.com".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&*app.state.db)
    .await
    .expect("seed user");

    let router = dispute_desk::build_router(app.state.clone()).layer(Extension(CurrentUser {
        id: user.id,
        username: user.username.clone(),
    }));
    let app = app.with_router(router);

    let response = app
        .post_form("/disputes/create/", "title=Attributed&description=D", false)
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let case = dispute_case::Entity::find()
        .filter(dispute_case::Column::Title.eq("Attributed"))
        .one(&*app.state.db)
        .await
        .expect("query case")
        .expect("case exists");
    assert_eq!(case.created_by, Some(user.id));
}

#[tokio::test]
async fn deleting_a_linked_order_nulls_the_link_but_keeps_the_case() {
    let app = TestApp::new().await;
    let order_id = seed_order(&app, "111-NULLS").await;
    let case = app
        .state
        .dispute_service()
        .create(
            DisputePayload {
                title: "Linked".to_string(),
                description: "desc".to_string(),
                linked_order: Some(order_id),
                linked_returns: vec![],
                resolution_notes: None,
            },
            None,
        )
        .await
        .expect("create case");

    app.state
        .order_service()
        .bulk_delete(&[order_id])
        .await
        .expect("delete order");

    let reloaded = dispute_case::Entity::find_by_id(case.id)
        .one(&*app.state.db)
        .await
        .expect("query case")
        .expect("case survives order deletion");
    assert_eq!(reloaded.linked_order_id, None);
}

#[tokio::test]
async fn deleting_a_case_cascades_its_evidence() {
    let app = TestApp::new().await;
    let service = app.state.dispute_service();
    let case = service
        .create(
            DisputePayload {
                title: "With evidence".to_string(),
                description: "desc".to_string(),
                linked_order: None,
                linked_returns: vec![],
                resolution_notes: None,
            },
            None,
        )
        .await
        .expect("create case");
    service
        .attach_evidence(
            case.id,
            "dispute_evidence/receipt.pdf".to_string(),
            Some("Signed delivery receipt".to_string()),
        )
        .await
        .expect("attach evidence");
    assert_eq!(service.evidence_for(case.id).await.unwrap().len(), 1);

    let response = app
        .delete_json("/disputes/delete/", &format!(r#"{{"ids": [{}]}}"#, case.id))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted_count"], 1);

    let remaining = dispute_evidence::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count evidence");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn empty_id_list_is_rejected_and_deletes_nothing() {
    let app = TestApp::new().await;
    app.state
        .dispute_service()
        .create(
            DisputePayload {
                title: "Keeper".to_string(),
                description: "desc".to_string(),
                linked_order: None,
                linked_returns: vec![],
                resolution_notes: None,
            },
            None,
        )
        .await
        .expect("create case");

    let response = app.delete_json("/disputes/delete/", r#"{"ids": []}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No dispute IDs provided.");

    let remaining = dispute_case::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count cases");
    assert_eq!(remaining, 1);
}
