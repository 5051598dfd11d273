//! Pure aggregation helpers.
//!
//! These fold already-fetched rows into the derived series the dashboard
//! renders. They touch no I/O so the boundary behavior is unit-testable.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{customer, order, order::STATUS_APPROVED};
use crate::services::order_service::OrderWithCustomer;
use crate::services::product_service::ProductWithDetails;

/// Label used when a product has no category reference.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Display band for a stock level. Boundaries are exact: 3 is low,
/// 10 is medium, 11 is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    Low,
    Medium,
    High,
}

pub fn stock_band(stock: i32) -> StockBand {
    if stock <= 3 {
        StockBand::Low
    } else if stock <= 10 {
        StockBand::Medium
    } else {
        StockBand::High
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}

/// Fold products into per-category counts, in first-occurrence order.
pub fn category_distribution(products: &[ProductWithDetails]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for product in products {
        let name = product.category.as_deref().unwrap_or(UNCATEGORIZED);
        match counts.iter_mut().find(|c| c.name == name) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: String,
    pub total: f64,
}

/// Sum approved order totals per calendar date of placement. Non-approved
/// orders are excluded entirely; dates keep first-occurrence order.
pub fn sales_by_date(orders: &[OrderWithCustomer]) -> Vec<DailySales> {
    let mut series: Vec<DailySales> = Vec::new();
    for order in orders {
        if order.status != STATUS_APPROVED {
            continue;
        }
        let date = date_part(&order.placed_at);
        match series.iter_mut().find(|s| s.date == date) {
            Some(entry) => entry.total += order.total,
            None => series.push(DailySales {
                date: date.to_string(),
                total: order.total,
            }),
        }
    }
    series
}

/// Month key for "current month" filters, e.g. "2026-08".
pub fn month_key(now: &DateTime<Local>) -> String {
    now.format("%Y-%m").to_string()
}

/// Approved revenue and order count for the given month.
pub fn monthly_sales(orders: &[order::Model], month: &str) -> (f64, i64) {
    orders
        .iter()
        .filter(|o| o.status == STATUS_APPROVED && o.placed_at.starts_with(month))
        .fold((0.0, 0), |(revenue, count), o| {
            (revenue + o.total, count + 1)
        })
}

/// Customers whose registration falls in the given month.
pub fn monthly_new_customers(customers: &[customer::Model], month: &str) -> i64 {
    customers
        .iter()
        .filter(|c| c.registered_at.starts_with(month))
        .count() as i64
}

/// Calendar-date component of a stored timestamp. Timestamps are persisted
/// as "YYYY-MM-DD HH:MM:SS" but ISO "T" separators are tolerated.
fn date_part(timestamp: &str) -> &str {
    timestamp
        .split(|c| c == ' ' || c == 'T')
        .next()
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, placed_at: &str, total: f64) -> OrderWithCustomer {
        OrderWithCustomer {
            id: 0,
            customer_id: None,
            item_summary: "item".to_string(),
            total,
            status: status.to_string(),
            placed_at: placed_at.to_string(),
            customer_name: None,
        }
    }

    fn product(category: Option<&str>) -> ProductWithDetails {
        ProductWithDetails {
            id: 0,
            category_id: None,
            name: "p".to_string(),
            price: 0.0,
            discount_percent: 0.0,
            is_new: false,
            stock: 0,
            category: category.map(|c| c.to_string()),
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn stock_band_boundaries_are_exact() {
        assert_eq!(stock_band(0), StockBand::Low);
        assert_eq!(stock_band(3), StockBand::Low);
        assert_eq!(stock_band(4), StockBand::Medium);
        assert_eq!(stock_band(10), StockBand::Medium);
        assert_eq!(stock_band(11), StockBand::High);
    }

    #[test]
    fn sales_by_date_excludes_non_approved() {
        let orders = vec![
            order("Approved", "2025-11-24 10:00:00", 100.0),
            order("Pending", "2025-11-24 11:00:00", 50.0),
        ];
        assert_eq!(
            sales_by_date(&orders),
            vec![DailySales {
                date: "2025-11-24".to_string(),
                total: 100.0
            }]
        );
    }

    #[test]
    fn sales_by_date_sums_per_date_and_keeps_order() {
        let orders = vec![
            order("Approved", "2025-11-26T21:08:33", 150.0),
            order("Approved", "2025-11-26T17:08:33", 320.5),
            order("Approved", "2025-11-25 22:08:33", 75.9),
        ];
        let series = sales_by_date(&orders);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2025-11-26");
        assert!((series[0].total - 470.5).abs() < 1e-9);
        assert_eq!(series[1].date, "2025-11-25");
    }

    #[test]
    fn category_distribution_first_occurrence_order() {
        let products = vec![
            product(Some("Manga")),
            product(Some("Caneca")),
            product(Some("Manga")),
            product(None),
        ];
        let counts = category_distribution(&products);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    name: "Manga".to_string(),
                    count: 2
                },
                CategoryCount {
                    name: "Caneca".to_string(),
                    count: 1
                },
                CategoryCount {
                    name: UNCATEGORIZED.to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn monthly_sales_zero_when_no_approved_orders() {
        let orders = vec![order::Model {
            id: 1,
            customer_id: None,
            item_summary: "item".to_string(),
            total: 99.0,
            status: "Pending".to_string(),
            placed_at: "2026-08-01 09:00:00".to_string(),
        }];
        let (revenue, count) = monthly_sales(&orders, "2026-08");
        assert_eq!(revenue, 0.0);
        assert_eq!(count, 0);
    }

    #[test]
    fn monthly_sales_filters_by_month() {
        let mk = |placed_at: &str, status: &str, total: f64| order::Model {
            id: 0,
            customer_id: None,
            item_summary: "item".to_string(),
            total,
            status: status.to_string(),
            placed_at: placed_at.to_string(),
        };
        let orders = vec![
            mk("2026-08-02 10:00:00", "Approved", 40.0),
            mk("2026-08-15 10:00:00", "Approved", 60.0),
            mk("2026-07-30 10:00:00", "Approved", 500.0),
            mk("2026-08-20 10:00:00", "Cancelled", 10.0),
        ];
        let (revenue, count) = monthly_sales(&orders, "2026-08");
        assert!((revenue - 100.0).abs() < 1e-9);
        assert_eq!(count, 2);
    }

    #[test]
    fn monthly_new_customers_counts_registrations() {
        let mk = |registered_at: &str| customer::Model {
            id: 0,
            full_name: "c".to_string(),
            email: None,
            phone: None,
            registered_at: registered_at.to_string(),
        };
        let customers = vec![
            mk("2026-08-01 08:00:00"),
            mk("2026-08-21 08:00:00"),
            mk("2026-06-01 08:00:00"),
        ];
        assert_eq!(monthly_new_customers(&customers, "2026-08"), 2);
    }
}
