use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Local;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use arcanostore_admin::api;
use arcanostore_admin::config::Limits;
use arcanostore_admin::db::{self, AppState};
use arcanostore_admin::models::{customer, order, product};

async fn setup_state() -> (AppState, DatabaseConnection) {
    let conn = db::init_db("sqlite::memory:").await.expect("init db");
    (AppState::new(conn.clone(), Limits::default()), conn)
}

fn app(state: AppState) -> Router {
    api::api_router(state)
}

async fn get_json(state: AppState, path: &str) -> (StatusCode, Value) {
    let response = app(state)
        .oneshot(
            Request::builder()
                .uri(path)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

fn current_month_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

async fn insert_product(db: &DatabaseConnection, name: &str, stock: i32) {
    product::ActiveModel {
        category_id: Set(None),
        name: Set(name.to_string()),
        price: Set(10.0),
        discount_percent: Set(0.0),
        is_new: Set(false),
        stock: Set(stock),
        created_at: Set("2026-01-10 12:00:00".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert product");
}

async fn insert_order(db: &DatabaseConnection, total: f64, status: &str, placed_at: &str) {
    order::ActiveModel {
        customer_id: Set(None),
        item_summary: Set("item".to_string()),
        total: Set(total),
        status: Set(status.to_string()),
        placed_at: Set(placed_at.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert order");
}

async fn insert_customer(db: &DatabaseConnection, name: &str, registered_at: &str) {
    customer::ActiveModel {
        full_name: Set(name.to_string()),
        email: Set(None),
        phone: Set(None),
        registered_at: Set(registered_at.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert customer");
}

#[tokio::test]
async fn estoque_lists_below_threshold_ascending_with_band() {
    let (state, conn) = setup_state().await;
    insert_product(&conn, "Plenty", 7).await;
    insert_product(&conn, "Scarce", 2).await;
    insert_product(&conn, "Thin", 4).await;

    let (status, body) = get_json(state, "/legacy/estoque").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["data"][0]["name"], json!("Scarce"));
    assert_eq!(body["data"][0]["band"], json!("low"));
    assert_eq!(body["data"][1]["name"], json!("Thin"));
    assert_eq!(body["data"][1]["band"], json!("medium"));
}

#[tokio::test]
async fn vendas_zero_state_returns_zeroed_summary() {
    let (state, _conn) = setup_state().await;

    let (status, body) = get_json(state, "/legacy/vendas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_revenue"], json!(0.0));
    assert_eq!(body["data"]["total_orders"], json!(0));
    assert_eq!(body["data"]["new_customers"], json!(0));
}

#[tokio::test]
async fn vendas_counts_only_current_month_approved_activity() {
    let (state, conn) = setup_state().await;
    let now = current_month_stamp();

    insert_order(&conn, 100.0, "Approved", &now).await;
    insert_order(&conn, 50.0, "Pending", &now).await;
    insert_order(&conn, 999.0, "Approved", "2020-01-01 00:00:00").await;
    insert_customer(&conn, "Fresh", &now).await;
    insert_customer(&conn, "Stale", "2020-01-01 00:00:00").await;

    let (status, body) = get_json(state, "/legacy/vendas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_revenue"], json!(100.0));
    assert_eq!(body["data"]["total_orders"], json!(1));
    assert_eq!(body["data"]["new_customers"], json!(1));
}

#[tokio::test]
async fn pedidos_caps_at_recent_limit_newest_first() {
    let (state, conn) = setup_state().await;
    for i in 0..7 {
        insert_order(
            &conn,
            10.0 + i as f64,
            "Approved",
            &format!("2026-06-0{} 12:00:00", i + 1),
        )
        .await;
    }

    let (status, body) = get_json(state, "/legacy/pedidos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(5));
    // Newest order (June 7th) leads
    assert_eq!(body["data"][0]["total"], json!(16.0));
}

#[tokio::test]
async fn legacy_endpoints_answer_503_when_store_is_down() {
    let state = AppState::disconnected(Limits::default());

    for path in ["/legacy/vendas", "/legacy/estoque", "/legacy/pedidos"] {
        let (status, body) = get_json(state.clone(), path).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Data store unavailable"));
    }
}
