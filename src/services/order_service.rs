use sea_orm::sea_query::Expr;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::models::customer::Entity as Customer;
use crate::models::order::{self, Entity as Order};

/// Order row joined with the customer name. Orders whose customer reference
/// is missing still appear, with `customer_name: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithCustomer {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub item_summary: String,
    pub total: f64,
    pub status: String,
    pub placed_at: String,
    pub customer_name: Option<String>,
}

/// List orders newest first, capped at `limit` rows.
pub async fn list_orders(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<OrderWithCustomer>, ServiceError> {
    let orders = Order::find()
        .order_by_desc(order::Column::PlacedAt)
        .limit(limit)
        .find_also_related(Customer)
        .all(db)
        .await?;

    Ok(orders
        .into_iter()
        .map(|(o, customer)| OrderWithCustomer {
            id: o.id,
            customer_id: o.customer_id,
            item_summary: o.item_summary,
            total: o.total,
            status: o.status,
            placed_at: o.placed_at,
            customer_name: customer.map(|c| c.full_name),
        })
        .collect())
}

pub fn validate_status(status: &str) -> Result<(), ServiceError> {
    if status.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Order status is required".to_string(),
        ));
    }
    Ok(())
}

/// Set an order's status. The value is stored as given; updating an id that
/// does not exist is a success, matching the single-UPDATE contract.
pub async fn update_order_status(
    db: &DatabaseConnection,
    id: i32,
    status: &str,
) -> Result<(), ServiceError> {
    validate_status(status)?;

    Order::update_many()
        .col_expr(order::Column::Status, Expr::value(status))
        .filter(order::Column::Id.eq(id))
        .exec(db)
        .await?;

    Ok(())
}
