use chrono::{Duration, Local};
use sea_orm::*;

use crate::models::{category, customer, order, product, product_detail};

/// Seed a small demo catalog, customer base, and order history. Safe to run
/// against a database that already has the demo categories.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = Local::now();
    let stamp = |offset_hours: i64| {
        (now - Duration::hours(offset_hours))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    };

    // 1. Categories
    let categories = ["Manga", "Caneca", "Acessorios"];
    for name in categories {
        category::Entity::insert(category::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(category::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await?;
    }

    let manga = find_category(db, "Manga").await?;
    let caneca = find_category(db, "Caneca").await?;
    let acessorios = find_category(db, "Acessorios").await?;

    // 2. Products, two with detail records and one bare
    let products: [(&str, Option<i32>, f64, f64, bool, i32, Option<&str>); 3] = [
        (
            "Gachiakuta Volume 01",
            manga,
            50.90,
            25.0,
            true,
            8,
            Some("https://img.assinaja.com/assets/tZ/099/img/512813_520x520.png"),
        ),
        ("Caneca do pico", caneca, 40.90, 0.0, false, 3, None),
        (
            "Pulseira One piece",
            acessorios,
            30.90,
            5.0,
            false,
            12,
            Some("https://m.media-amazon.com/images/I/410jh8W1t8S._SY1000_.jpg"),
        ),
    ];

    for (name, cat, price, discount, is_new, stock, image) in products {
        let saved = product::ActiveModel {
            category_id: Set(cat),
            name: Set(name.to_owned()),
            price: Set(price),
            discount_percent: Set(discount),
            is_new: Set(is_new),
            stock: Set(stock),
            created_at: Set(stamp(72)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        if let Some(url) = image {
            product_detail::ActiveModel {
                product_id: Set(saved.id),
                image_url: Set(Some(url.to_owned())),
                description: Set(None),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    // 3. Customers
    let customer_names = [
        "admin da silva",
        "Rubens Neto Martins Suarez",
        "Jose",
        "Maria Clara",
        "Heitor Prado",
    ];
    let mut customer_ids = Vec::new();
    for (i, name) in customer_names.iter().enumerate() {
        let saved = customer::ActiveModel {
            full_name: Set((*name).to_owned()),
            email: Set(Some(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ))),
            phone: Set(None),
            registered_at: Set(stamp(24 * (i as i64 + 1))),
            ..Default::default()
        }
        .insert(db)
        .await?;
        customer_ids.push(saved.id);
    }

    // 4. Orders across several days and statuses
    let orders: [(usize, &str, f64, &str, i64); 8] = [
        (0, "Gachiakuta V.01 + Caneca", 150.00, order::STATUS_APPROVED, 2),
        (1, "Pulseira One Piece", 320.50, order::STATUS_APPROVED, 6),
        (2, "Caneca do Pico", 75.90, order::STATUS_APPROVED, 26),
        (3, "Gachiakuta V.01", 50.90, order::STATUS_PENDING, 30),
        (4, "Caneca do Pico x2", 81.80, order::STATUS_APPROVED, 50),
        (0, "Pulseira One Piece", 30.90, order::STATUS_CANCELLED, 55),
        (2, "Gachiakuta V.01 + Pulseira", 81.80, order::STATUS_APPROVED, 74),
        (1, "Caneca do Pico", 40.90, order::STATUS_APPROVED, 98),
    ];

    for (customer_idx, item, total, status, hours_ago) in orders {
        order::ActiveModel {
            customer_id: Set(customer_ids.get(customer_idx).copied()),
            item_summary: Set(item.to_owned()),
            total: Set(total),
            status: Set(status.to_owned()),
            placed_at: Set(stamp(hours_ago)),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn find_category(db: &DatabaseConnection, name: &str) -> Result<Option<i32>, DbErr> {
    Ok(category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await?
        .map(|c| c.id))
}
