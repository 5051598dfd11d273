use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use super::envelope;
use crate::db::AppState;
use crate::services::product_service::{self, ProductInput};
use crate::services::ServiceError;

pub async fn list(state: &AppState) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let products = product_service::list_products(db).await?;
    Ok(envelope::ok_list(&products))
}

pub async fn get(state: &AppState, id: i32) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let product = product_service::get_product(db, id).await?;
    Ok(envelope::ok_data(json!(product)))
}

pub async fn create(state: &AppState, input: ProductInput) -> Result<Response, ServiceError> {
    // Validation fires before the store is touched
    product_service::validate(&input)?;
    let db = state.db()?;
    let id = product_service::create_product(db, input).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Product created",
            "product_id": id
        })),
    )
        .into_response())
}

pub async fn update(state: &AppState, id: i32, input: ProductInput) -> Result<Response, ServiceError> {
    product_service::validate(&input)?;
    let db = state.db()?;
    product_service::update_product(db, id, input).await?;
    Ok(envelope::ok_message("Product updated"))
}

pub async fn delete(state: &AppState, id: i32) -> Result<Response, ServiceError> {
    let db = state.db()?;
    product_service::delete_product(db, id).await?;
    Ok(envelope::ok_message("Product deleted"))
}
