use chrono::Local;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::aggregate;
use crate::models::customer::Entity as Customer;
use crate::models::order::{self, Entity as Order, STATUS_APPROVED};
use crate::models::product::Entity as Product;

/// Headline dashboard numbers. All-time figures, computed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalSales")]
    pub total_sales: f64,
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "totalProducts")]
    pub total_products: i64,
    #[serde(rename = "totalCustomers")]
    pub total_customers: i64,
}

/// Current-month KPI block for the sales summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub new_customers: i64,
}

/// Four aggregates issued sequentially; the first failure aborts the whole
/// response (no partial stats are ever returned).
pub async fn dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats, ServiceError> {
    let approved = Order::find()
        .filter(order::Column::Status.eq(STATUS_APPROVED))
        .all(db)
        .await?;
    let total_sales: f64 = approved.iter().map(|o| o.total).sum();

    let total_orders = Order::find().count(db).await? as i64;
    let total_products = Product::find().count(db).await? as i64;
    let total_customers = Customer::find().count(db).await? as i64;

    Ok(DashboardStats {
        total_sales,
        total_orders,
        total_products,
        total_customers,
    })
}

/// Approved revenue, order count, and newly registered customers for the
/// current month (server-local clock).
pub async fn sales_summary(db: &DatabaseConnection) -> Result<SalesSummary, ServiceError> {
    let month = aggregate::month_key(&Local::now());

    let orders = Order::find().all(db).await?;
    let (total_revenue, total_orders) = aggregate::monthly_sales(&orders, &month);

    let customers = Customer::find().all(db).await?;
    let new_customers = aggregate::monthly_new_customers(&customers, &month);

    Ok(SalesSummary {
        total_revenue,
        total_orders,
        new_customers,
    })
}
