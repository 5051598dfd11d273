use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use super::envelope;
use crate::db::AppState;
use crate::services::category_service::{self, CategoryInput};
use crate::services::ServiceError;

pub async fn list(state: &AppState) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let categories = category_service::list_categories(db).await?;
    Ok(envelope::ok_list(&categories))
}

pub async fn create(state: &AppState, input: CategoryInput) -> Result<Response, ServiceError> {
    category_service::validate(&input)?;
    let db = state.db()?;
    let id = category_service::create_category(db, input).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Category created",
            "category_id": id
        })),
    )
        .into_response())
}

pub async fn update(state: &AppState, id: i32, input: CategoryInput) -> Result<Response, ServiceError> {
    category_service::validate(&input)?;
    let db = state.db()?;
    category_service::update_category(db, id, input).await?;
    Ok(envelope::ok_message("Category updated"))
}

pub async fn delete(state: &AppState, id: i32) -> Result<Response, ServiceError> {
    let db = state.db()?;
    category_service::delete_category(db, id).await?;
    Ok(envelope::ok_message("Category deleted"))
}
