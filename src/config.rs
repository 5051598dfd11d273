use std::env;

/// Tunable limits for list and aggregate endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Stock level below which a product is flagged for reorder
    pub low_stock_threshold: i32,
    /// Row cap for the recent-orders feed
    pub recent_orders_limit: u64,
    /// Row cap for the full orders listing
    pub orders_list_limit: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
            recent_orders_limit: 5,
            orders_list_limit: 50,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub limits: Limits,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://arcanostore_admin.db?mode=rwc".to_string());

        let defaults = Limits::default();

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            limits: Limits {
                low_stock_threshold: env::var("LOW_STOCK_THRESHOLD")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.low_stock_threshold),
                recent_orders_limit: env::var("RECENT_ORDERS_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.recent_orders_limit),
                orders_list_limit: env::var("ORDERS_LIST_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.orders_list_limit),
            },
        }
    }
}
