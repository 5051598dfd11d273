//! Action-multiplexed dispatch for the `/api/admin` endpoint.
//!
//! Actions are a closed enum per HTTP method, matched exhaustively, so a
//! misspelled action can never fall through to another handler. List/read
//! actions live on GET, create/update on POST, delete on DELETE; anything
//! else gets a 405 from the router.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use super::{categories, customers, dashboard, envelope, orders, products};
use crate::db::AppState;
use crate::services::category_service::CategoryInput;
use crate::services::product_service::ProductInput;

/// Write actions carried in a POST body.
#[derive(Debug, Deserialize)]
#[serde(tag = "action")]
pub enum WriteAction {
    #[serde(rename = "createProduct")]
    CreateProduct { data: ProductInput },
    #[serde(rename = "updateProduct")]
    UpdateProduct { id: i32, data: ProductInput },
    #[serde(rename = "createCategory")]
    CreateCategory { data: CategoryInput },
    #[serde(rename = "updateCategory")]
    UpdateCategory { id: i32, data: CategoryInput },
    #[serde(rename = "updateOrderStatus")]
    UpdateOrderStatus { id: i32, status: String },
}

/// Delete actions carried in a DELETE body.
#[derive(Debug, Deserialize)]
#[serde(tag = "action")]
pub enum DeleteAction {
    #[serde(rename = "deleteProduct")]
    DeleteProduct { id: i32 },
    #[serde(rename = "deleteCategory")]
    DeleteCategory { id: i32 },
}

pub async fn dispatch_get(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(action) = params.get("action") else {
        return envelope::fail(StatusCode::BAD_REQUEST, "The action parameter is required");
    };

    tracing::debug!(action = action.as_str(), "dispatching admin action");

    match action.as_str() {
        "getProducts" => products::list(&state).await.into_response(),
        "getProduct" => match params.get("id").and_then(|s| s.parse::<i32>().ok()) {
            Some(id) => products::get(&state, id).await.into_response(),
            None => envelope::fail(StatusCode::BAD_REQUEST, "A numeric product id is required"),
        },
        "getOrders" => orders::list(&state).await.into_response(),
        "getCategories" => categories::list(&state).await.into_response(),
        "getCustomers" => customers::list(&state).await.into_response(),
        "getDashboardStats" => dashboard::stats(&state).await.into_response(),
        _ => envelope::fail(StatusCode::BAD_REQUEST, "Unrecognized action"),
    }
}

pub async fn dispatch_post(State(state): State<AppState>, body: String) -> Response {
    let action = match parse_action::<WriteAction>(&body) {
        Ok(action) => action,
        Err(response) => return response,
    };

    tracing::debug!(?action, "dispatching admin write action");

    match action {
        WriteAction::CreateProduct { data } => products::create(&state, data).await.into_response(),
        WriteAction::UpdateProduct { id, data } => {
            products::update(&state, id, data).await.into_response()
        }
        WriteAction::CreateCategory { data } => {
            categories::create(&state, data).await.into_response()
        }
        WriteAction::UpdateCategory { id, data } => {
            categories::update(&state, id, data).await.into_response()
        }
        WriteAction::UpdateOrderStatus { id, status } => {
            orders::update_status(&state, id, status).await.into_response()
        }
    }
}

pub async fn dispatch_delete(State(state): State<AppState>, body: String) -> Response {
    let action = match parse_action::<DeleteAction>(&body) {
        Ok(action) => action,
        Err(response) => return response,
    };

    tracing::debug!(?action, "dispatching admin delete action");

    match action {
        DeleteAction::DeleteProduct { id } => products::delete(&state, id).await.into_response(),
        DeleteAction::DeleteCategory { id } => categories::delete(&state, id).await.into_response(),
    }
}

/// Decode a body into one of the tagged action enums, producing the 400
/// envelope on malformed JSON, a missing action tag, or an unknown action.
fn parse_action<A: for<'de> Deserialize<'de>>(body: &str) -> Result<A, Response> {
    let value: Value = serde_json::from_str(body).map_err(|_| {
        envelope::fail(StatusCode::BAD_REQUEST, "Request body must be valid JSON")
    })?;

    if value.get("action").and_then(Value::as_str).is_none() {
        return Err(envelope::fail(
            StatusCode::BAD_REQUEST,
            "The action field is required",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        envelope::fail(
            StatusCode::BAD_REQUEST,
            &format!("Unrecognized action or malformed payload: {}", e),
        )
    })
}
