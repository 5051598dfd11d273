pub mod actions;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod envelope;
pub mod health;
pub mod legacy;
pub mod orders;
pub mod products;

use axum::{routing::get, Router};

use crate::db::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Action-multiplexed admin endpoint; other methods get a 405
        .route(
            "/admin",
            get(actions::dispatch_get)
                .post(actions::dispatch_post)
                .delete(actions::dispatch_delete),
        )
        // Legacy single-purpose surface, normalized onto the envelope
        .route("/legacy/vendas", get(legacy::sales_summary))
        .route("/legacy/estoque", get(legacy::low_stock))
        .route("/legacy/pedidos", get(legacy::recent_orders))
        .with_state(state)
}
