//! Typed HTTP client for the admin API, used by the dashboard shell.
//!
//! Every request resolves to a [`Fetched`] value: `Live` data from the
//! backend, or `Degraded` demo data when the backend cannot be reached or
//! rejects the call. The degraded state carries the reason so the UI can
//! render an explicit offline/demo indicator instead of silently showing
//! fake numbers. This layer never returns an error.

pub mod sample;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::{json, Value};

use crate::aggregate::{self, CategoryCount, DailySales};
use crate::services::order_service::OrderWithCustomer;
use crate::services::product_service::{ProductInput, ProductWithDetails};

/// Outcome of a data fetch: live backend data, or the canned fallback with
/// the reason the backend could not serve it.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Degraded { data: T, reason: String },
}

impl<T> Fetched<T> {
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Degraded { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Degraded { data, reason } => Fetched::Degraded {
                data: f(data),
                reason,
            },
        }
    }
}

pub struct AdminClient {
    base_url: String,
    http: reqwest::Client,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Issue one action request. Any transport failure, non-2xx status,
    /// non-JSON content type, or `success:false` envelope degrades to the
    /// canned dataset for the action.
    pub async fn request(&self, action: &str, method: Method, body: Option<Value>) -> Fetched<Value> {
        match self.try_request(action, method, body).await {
            Ok(value) => Fetched::Live(value),
            Err(reason) => {
                tracing::warn!(action, reason = reason.as_str(), "falling back to demo data");
                Fetched::Degraded {
                    data: sample::for_action(action),
                    reason,
                }
            }
        }
    }

    async fn try_request(
        &self,
        action: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, String> {
        let url = if method == Method::GET {
            format!("{}/api/admin?action={}", self.base_url, action)
        } else {
            format!("{}/api/admin", self.base_url)
        };

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        // Status first: a bare 404/502 error page should report the code,
        // not the missing JSON content type
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Err("backend returned a non-JSON response".to_string());
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| format!("invalid JSON body: {}", e))?;

        if value.get("success").and_then(Value::as_bool) != Some(true) {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request rejected");
            return Err(message.to_string());
        }

        Ok(value)
    }

    // -- typed conveniences mirroring the admin actions --

    pub async fn get_products(&self) -> Fetched<Value> {
        self.request("getProducts", Method::GET, None).await
    }

    pub async fn get_orders(&self) -> Fetched<Value> {
        self.request("getOrders", Method::GET, None).await
    }

    pub async fn get_categories(&self) -> Fetched<Value> {
        self.request("getCategories", Method::GET, None).await
    }

    pub async fn get_customers(&self) -> Fetched<Value> {
        self.request("getCustomers", Method::GET, None).await
    }

    pub async fn get_dashboard_stats(&self) -> Fetched<Value> {
        self.request("getDashboardStats", Method::GET, None).await
    }

    pub async fn create_product(&self, data: &ProductInput) -> Fetched<Value> {
        let body = json!({ "action": "createProduct", "data": product_body(data) });
        self.request("createProduct", Method::POST, Some(body)).await
    }

    pub async fn update_product(&self, id: i32, data: &ProductInput) -> Fetched<Value> {
        let body = json!({ "action": "updateProduct", "id": id, "data": product_body(data) });
        self.request("updateProduct", Method::POST, Some(body)).await
    }

    pub async fn delete_product(&self, id: i32) -> Fetched<Value> {
        let body = json!({ "action": "deleteProduct", "id": id });
        self.request("deleteProduct", Method::DELETE, Some(body)).await
    }

    pub async fn update_order_status(&self, id: i32, status: &str) -> Fetched<Value> {
        let body = json!({ "action": "updateOrderStatus", "id": id, "status": status });
        self.request("updateOrderStatus", Method::POST, Some(body)).await
    }

    pub async fn create_category(&self, name: &str) -> Fetched<Value> {
        let body = json!({ "action": "createCategory", "data": { "name": name } });
        self.request("createCategory", Method::POST, Some(body)).await
    }

    pub async fn update_category(&self, id: i32, name: &str) -> Fetched<Value> {
        let body = json!({ "action": "updateCategory", "id": id, "data": { "name": name } });
        self.request("updateCategory", Method::POST, Some(body)).await
    }

    pub async fn delete_category(&self, id: i32) -> Fetched<Value> {
        let body = json!({ "action": "deleteCategory", "id": id });
        self.request("deleteCategory", Method::DELETE, Some(body)).await
    }

    // -- derived chart series --

    /// Revenue per calendar date from approved orders, for the sales chart.
    pub async fn sales_chart(&self) -> Fetched<Vec<DailySales>> {
        self.get_orders().await.map(|envelope| {
            let orders: Vec<OrderWithCustomer> = decode_rows(&envelope);
            aggregate::sales_by_date(&orders)
        })
    }

    /// Product count per category, for the category pie chart.
    pub async fn category_chart(&self) -> Fetched<Vec<CategoryCount>> {
        self.get_products().await.map(|envelope| {
            let products: Vec<ProductWithDetails> = decode_rows(&envelope);
            aggregate::category_distribution(&products)
        })
    }
}

/// Decode the `data` array of an envelope, dropping it on shape mismatch.
fn decode_rows<T: serde::de::DeserializeOwned>(envelope: &Value) -> Vec<T> {
    envelope
        .get("data")
        .cloned()
        .and_then(|data| serde_json::from_value(data).ok())
        .unwrap_or_default()
}

fn product_body(data: &ProductInput) -> Value {
    json!({
        "name": data.name,
        "category_id": data.category_id,
        "price": data.price,
        "discount_percent": data.discount_percent,
        "is_new": data.is_new,
        "stock": data.stock,
        "image_url": data.image_url,
        "description": data.description,
    })
}
