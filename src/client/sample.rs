//! Canned dataset served when the backend cannot be reached.
//!
//! Shapes mirror the live envelopes exactly so presentation code can decode
//! a degraded payload the same way it decodes a live one.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

static SAMPLE: Lazy<Value> = Lazy::new(|| {
    json!({
        "getDashboardStats": {
            "success": true,
            "data": {
                "totalSales": 1666.30,
                "totalOrders": 8,
                "totalProducts": 3,
                "totalCustomers": 5
            }
        },
        "getProducts": {
            "success": true,
            "data": [
                {
                    "id": 1,
                    "category_id": 1,
                    "name": "Gachiakuta Volume 01",
                    "price": 50.90,
                    "discount_percent": 25.0,
                    "is_new": true,
                    "stock": 8,
                    "category": "Manga",
                    "image_url": "https://img.assinaja.com/assets/tZ/099/img/512813_520x520.png",
                    "description": null
                },
                {
                    "id": 2,
                    "category_id": 2,
                    "name": "Caneca do pico",
                    "price": 40.90,
                    "discount_percent": 0.0,
                    "is_new": false,
                    "stock": 3,
                    "category": "Caneca",
                    "image_url": null,
                    "description": null
                },
                {
                    "id": 3,
                    "category_id": 3,
                    "name": "Pulseira One piece",
                    "price": 30.90,
                    "discount_percent": 5.0,
                    "is_new": false,
                    "stock": 12,
                    "category": "Acessorios",
                    "image_url": "https://m.media-amazon.com/images/I/410jh8W1t8S._SY1000_.jpg",
                    "description": null
                }
            ],
            "count": 3
        },
        "getOrders": {
            "success": true,
            "data": [
                {
                    "id": 1,
                    "customer_id": 3,
                    "item_summary": "Gachiakuta V.01 + Caneca",
                    "total": 150.00,
                    "status": "Approved",
                    "placed_at": "2025-11-26T21:08:33",
                    "customer_name": "admin da silva"
                },
                {
                    "id": 2,
                    "customer_id": 4,
                    "item_summary": "Pulseira One Piece",
                    "total": 320.50,
                    "status": "Approved",
                    "placed_at": "2025-11-26T17:08:33",
                    "customer_name": "Rubens Neto Martins Suarez"
                },
                {
                    "id": 3,
                    "customer_id": 5,
                    "item_summary": "Caneca do Pico",
                    "total": 75.90,
                    "status": "Approved",
                    "placed_at": "2025-11-25T22:08:33",
                    "customer_name": "Jose"
                }
            ],
            "count": 3
        },
        "getCategories": {
            "success": true,
            "data": [
                { "id": 1, "name": "Manga", "product_count": 1 },
                { "id": 2, "name": "Caneca", "product_count": 1 },
                { "id": 3, "name": "Acessorios", "product_count": 1 }
            ],
            "count": 3
        }
    })
});

/// Fallback payload for an action. Actions without a canned entry get an
/// empty failure envelope, matching the original dashboard behavior.
pub fn for_action(action: &str) -> Value {
    SAMPLE
        .get(action)
        .cloned()
        .unwrap_or_else(|| json!({ "success": false, "data": [] }))
}
