use axum::response::Response;

use super::envelope;
use crate::db::AppState;
use crate::services::customer_service;
use crate::services::ServiceError;

pub async fn list(state: &AppState) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let customers = customer_service::list_customers(db).await?;
    Ok(envelope::ok_list(&customers))
}
