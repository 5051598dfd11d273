use axum::response::Response;

use super::envelope;
use crate::db::AppState;
use crate::services::order_service;
use crate::services::ServiceError;

pub async fn list(state: &AppState) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let orders = order_service::list_orders(db, state.limits.orders_list_limit).await?;
    Ok(envelope::ok_list(&orders))
}

pub async fn update_status(
    state: &AppState,
    id: i32,
    status: String,
) -> Result<Response, ServiceError> {
    order_service::validate_status(&status)?;
    let db = state.db()?;
    order_service::update_order_status(db, id, &status).await?;
    Ok(envelope::ok_message("Order status updated"))
}
