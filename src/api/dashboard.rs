use axum::response::Response;
use serde_json::json;

use super::envelope;
use crate::db::AppState;
use crate::services::stats_service;
use crate::services::ServiceError;

pub async fn stats(state: &AppState) -> Result<Response, ServiceError> {
    let db = state.db()?;
    let stats = stats_service::dashboard_stats(db).await?;
    Ok(envelope::ok_data(json!(stats)))
}
