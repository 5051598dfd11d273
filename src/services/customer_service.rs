use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ServiceError;
use crate::models::customer::{self, Entity as Customer};
use crate::models::order::Entity as Order;

/// Customer row enriched with order activity, as the customers modal
/// renders it. Spend is summed over every order regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerWithActivity {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registered_at: String,
    pub order_count: i64,
    pub total_spent: f64,
}

pub async fn list_customers(
    db: &DatabaseConnection,
) -> Result<Vec<CustomerWithActivity>, ServiceError> {
    let customers = Customer::find()
        .order_by_asc(customer::Column::FullName)
        .all(db)
        .await?;

    let orders = Order::find().all(db).await?;
    let mut activity: HashMap<i32, (i64, f64)> = HashMap::new();
    for o in &orders {
        if let Some(customer_id) = o.customer_id {
            let entry = activity.entry(customer_id).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += o.total;
        }
    }

    Ok(customers
        .into_iter()
        .map(|c| {
            let (order_count, total_spent) = activity.get(&c.id).copied().unwrap_or((0, 0.0));
            CustomerWithActivity {
                id: c.id,
                full_name: c.full_name,
                email: c.email,
                phone: c.phone,
                registered_at: c.registered_at,
                order_count,
                total_spent,
            }
        })
        .collect())
}
