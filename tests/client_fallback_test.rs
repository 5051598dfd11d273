use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arcanostore_admin::client::{sample, AdminClient, Fetched};

#[tokio::test]
async fn live_data_comes_back_as_live() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .and(query_param("action", "getProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": 9, "category_id": null, "name": "Mug", "price": 12.0,
                       "discount_percent": 0.0, "is_new": false, "stock": 4,
                       "category": null, "image_url": null, "description": null }],
            "count": 1
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.get_products().await;

    assert!(fetched.is_live());
    assert_eq!(fetched.data()["data"][0]["name"], json!("Mug"));
}

#[tokio::test]
async fn server_error_degrades_with_http_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Internal data store error"
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.get_products().await;

    match fetched {
        Fetched::Degraded { data, reason } => {
            assert!(reason.contains("HTTP 500"), "reason was {reason:?}");
            assert_eq!(data, sample::for_action("getProducts"));
        }
        Fetched::Live(_) => panic!("a 500 must not surface as live data"),
    }
}

#[tokio::test]
async fn rejected_envelope_degrades_with_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Unrecognized action"
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.get_dashboard_stats().await;

    match fetched {
        Fetched::Degraded { reason, .. } => assert_eq!(reason, "Unrecognized action"),
        Fetched::Live(_) => panic!("a rejected envelope must not surface as live data"),
    }
}

#[tokio::test]
async fn plain_error_page_reports_the_status_code() {
    let mock_server = MockServer::start().await;

    // A bare 404 with no JSON body still names the status in the reason
    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.get_categories().await;

    match fetched {
        Fetched::Degraded { reason, .. } => assert_eq!(reason, "HTTP 404"),
        Fetched::Live(_) => panic!("a 404 must not surface as live data"),
    }
}

#[tokio::test]
async fn non_json_response_degrades() {
    let mock_server = MockServer::start().await;

    // A misconfigured proxy handing back an HTML error page
    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>It works!</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.get_orders().await;

    match fetched {
        Fetched::Degraded { reason, .. } => {
            assert_eq!(reason, "backend returned a non-JSON response")
        }
        Fetched::Live(_) => panic!("an HTML page must not surface as live data"),
    }
}

#[tokio::test]
async fn unreachable_backend_serves_canned_dataset() {
    // Nothing is listening on this port
    let client = AdminClient::new("http://127.0.0.1:9");
    let fetched = client.get_products().await;

    assert!(!fetched.is_live());
    assert_eq!(*fetched.data(), sample::for_action("getProducts"));
    // The canned catalog is non-empty so the dashboard has something to render
    assert!(fetched.data()["data"].as_array().is_some_and(|a| !a.is_empty()));
}

#[tokio::test]
async fn unknown_action_fallback_is_empty_failure_envelope() {
    let client = AdminClient::new("http://127.0.0.1:9");
    let fetched = client.request("getSomethingElse", reqwest::Method::GET, None).await;

    assert_eq!(
        *fetched.data(),
        json!({ "success": false, "data": [] })
    );
}

#[tokio::test]
async fn sales_chart_folds_approved_orders_per_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .and(query_param("action", "getOrders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": 1, "customer_id": null, "item_summary": "a", "total": 60.0,
                  "status": "Approved", "placed_at": "2025-11-24 10:00:00", "customer_name": null },
                { "id": 2, "customer_id": null, "item_summary": "b", "total": 40.0,
                  "status": "Approved", "placed_at": "2025-11-24T18:30:00", "customer_name": null },
                { "id": 3, "customer_id": null, "item_summary": "c", "total": 50.0,
                  "status": "Pending", "placed_at": "2025-11-24 19:00:00", "customer_name": null }
            ],
            "count": 3
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.sales_chart().await;

    assert!(fetched.is_live());
    let series = fetched.data();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, "2025-11-24");
    assert_eq!(series[0].total, 100.0);
}

#[tokio::test]
async fn category_chart_counts_products_per_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin"))
        .and(query_param("action", "getProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": 1, "category_id": 1, "name": "a", "price": 1.0, "discount_percent": 0.0,
                  "is_new": false, "stock": 1, "category": "Manga", "image_url": null, "description": null },
                { "id": 2, "category_id": 1, "name": "b", "price": 1.0, "discount_percent": 0.0,
                  "is_new": false, "stock": 1, "category": "Manga", "image_url": null, "description": null },
                { "id": 3, "category_id": null, "name": "c", "price": 1.0, "discount_percent": 0.0,
                  "is_new": false, "stock": 1, "category": null, "image_url": null, "description": null }
            ],
            "count": 3
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.category_chart().await;

    let counts = fetched.data();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].name, "Manga");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].name, "Uncategorized");
    assert_eq!(counts[1].count, 1);
}

#[tokio::test]
async fn write_actions_post_the_full_action_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Order status updated"
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(mock_server.uri());
    let fetched = client.update_order_status(7, "Cancelled").await;

    assert!(fetched.is_live());
    assert_eq!(fetched.data()["message"], json!("Order status updated"));
}
