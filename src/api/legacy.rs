//! Legacy single-purpose endpoints (`vendas`, `estoque`, `pedidos`).
//!
//! These used to return bare JSON arrays/objects; they are normalized onto
//! the wrapped `{success, data}` envelope here, which is a documented
//! compatibility break for pre-rewrite clients. Each endpoint checks store
//! connectivity on its own and answers 503 with a fixed message when the
//! database never came up.

use axum::{extract::State, response::Response};
use serde_json::json;

use super::envelope;
use crate::db::AppState;
use crate::services::{order_service, product_service, stats_service, ServiceError};

/// GET /api/legacy/vendas - current-month sales KPIs
pub async fn sales_summary(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let summary = stats_service::sales_summary(db).await?;
    Ok(envelope::ok_data(json!(summary)))
}

/// GET /api/legacy/estoque - products below the reorder threshold
pub async fn low_stock(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let items = product_service::low_stock(db, state.limits.low_stock_threshold).await?;
    Ok(envelope::ok_list(&items))
}

/// GET /api/legacy/pedidos - most recent orders, newest first
pub async fn recent_orders(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let orders = order_service::list_orders(db, state.limits.recent_orders_limit).await?;
    Ok(envelope::ok_list(&orders))
}
