use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use crate::config::Limits;
use crate::services::ServiceError;

/// Shared application state.
///
/// A failed startup connection is recorded rather than aborting the process:
/// `conn` stays `None` and every store-backed handler answers 503 until the
/// service is restarted with a reachable database.
#[derive(Clone)]
pub struct AppState {
    conn: Option<DatabaseConnection>,
    pub limits: Limits,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, limits: Limits) -> Self {
        Self {
            conn: Some(conn),
            limits,
        }
    }

    /// State for a service whose database never came up.
    pub fn disconnected(limits: Limits) -> Self {
        Self { conn: None, limits }
    }

    pub fn db(&self) -> Result<&DatabaseConnection, ServiceError> {
        self.conn.as_ref().ok_or(ServiceError::Unavailable)
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }
}

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // A hung store call surfaces as the same 503 condition as a failed connect
    options
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));

    let db = Database::connect(options).await?;

    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Category name uniqueness is enforced here instead of relying on the
    // pre-check SELECT alone, which leaves a race window between check and
    // insert. The duplicate maps to the same 400 message either way.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER,
            name TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0 CHECK (price >= 0),
            discount_percent REAL NOT NULL DEFAULT 0 CHECK (discount_percent BETWEEN 0 AND 100),
            is_new INTEGER NOT NULL DEFAULT 0,
            stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
            created_at TEXT NOT NULL,
            FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE SET NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id)".to_owned(),
    ))
    .await?;

    // Optional 1:0/1 detail record; a product with no detail row is valid
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS product_details (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL,
            image_url TEXT,
            description TEXT,
            FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_product_details_product_id ON product_details(product_id)"
            .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            registered_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER,
            item_summary TEXT NOT NULL,
            total REAL NOT NULL DEFAULT 0 CHECK (total >= 0),
            status TEXT NOT NULL DEFAULT 'Pending',
            placed_at TEXT NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id) ON DELETE SET NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_orders_customer_id ON orders(customer_id)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_orders_placed_at ON orders(placed_at)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status)".to_owned(),
    ))
    .await?;

    Ok(())
}
