use chrono::Local;
use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ServiceError;
use crate::aggregate::{self, StockBand};
use crate::models::category::Entity as Category;
use crate::models::product::{self, Entity as Product};
use crate::models::product_detail::{self, Entity as ProductDetail};

/// Product row joined with its category name and optional detail record.
/// Products without a category or detail still appear, with `None` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithDetails {
    pub id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub price: f64,
    pub discount_percent: f64,
    pub is_new: bool,
    pub stock: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Write payload for create/update. Serde aliases keep the legacy PHP-era
/// field names accepted on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    #[serde(alias = "nome_produto", default)]
    pub name: String,
    #[serde(alias = "id_categoria")]
    pub category_id: Option<i32>,
    #[serde(alias = "preco", default)]
    pub price: f64,
    #[serde(alias = "desconto_percentual", default)]
    pub discount_percent: f64,
    #[serde(alias = "e_novo", default)]
    pub is_new: bool,
    #[serde(alias = "estoque", default)]
    pub stock: i32,
    #[serde(alias = "imagem_url")]
    pub image_url: Option<String>,
    #[serde(alias = "descricao_detalhada")]
    pub description: Option<String>,
}

impl ProductInput {
    fn has_detail(&self) -> bool {
        self.image_url.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.description.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Reorder-list entry returned by the low-stock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockItem {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub band: StockBand,
}

/// Reject bad payloads before any store access.
pub fn validate(input: &ProductInput) -> Result<(), ServiceError> {
    if input.name.trim().is_empty() || input.category_id.is_none() {
        return Err(ServiceError::Validation(
            "Product name and category are required".to_string(),
        ));
    }
    if input.price < 0.0 {
        return Err(ServiceError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&input.discount_percent) {
        return Err(ServiceError::Validation(
            "Discount must be between 0 and 100".to_string(),
        ));
    }
    if input.stock < 0 {
        return Err(ServiceError::Validation(
            "Stock cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// List all products with category and detail, newest first.
pub async fn list_products(
    db: &DatabaseConnection,
) -> Result<Vec<ProductWithDetails>, ServiceError> {
    let products_with_categories = Product::find()
        .order_by_desc(product::Column::Id)
        .find_also_related(Category)
        .all(db)
        .await?;

    let ids: Vec<i32> = products_with_categories.iter().map(|(p, _)| p.id).collect();

    let mut detail_map: HashMap<i32, product_detail::Model> = HashMap::new();
    if !ids.is_empty() {
        let details = ProductDetail::find()
            .filter(product_detail::Column::ProductId.is_in(ids))
            .all(db)
            .await?;
        for detail in details {
            detail_map.insert(detail.product_id, detail);
        }
    }

    let result = products_with_categories
        .into_iter()
        .map(|(p, cat)| {
            let detail = detail_map.remove(&p.id);
            ProductWithDetails {
                id: p.id,
                category_id: p.category_id,
                name: p.name,
                price: p.price,
                discount_percent: p.discount_percent,
                is_new: p.is_new,
                stock: p.stock,
                category: cat.map(|c| c.name),
                image_url: detail.as_ref().and_then(|d| d.image_url.clone()),
                description: detail.and_then(|d| d.description),
            }
        })
        .collect();

    Ok(result)
}

/// Fetch a single product with category and detail.
pub async fn get_product(
    db: &DatabaseConnection,
    id: i32,
) -> Result<ProductWithDetails, ServiceError> {
    let (p, cat) = Product::find_by_id(id)
        .find_also_related(Category)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let detail = ProductDetail::find()
        .filter(product_detail::Column::ProductId.eq(id))
        .one(db)
        .await?;

    Ok(ProductWithDetails {
        id: p.id,
        category_id: p.category_id,
        name: p.name,
        price: p.price,
        discount_percent: p.discount_percent,
        is_new: p.is_new,
        stock: p.stock,
        category: cat.map(|c| c.name),
        image_url: detail.as_ref().and_then(|d| d.image_url.clone()),
        description: detail.and_then(|d| d.description),
    })
}

/// Insert a product and, when image/description are present, its detail row.
/// Both inserts commit or neither does.
pub async fn create_product(
    db: &DatabaseConnection,
    input: ProductInput,
) -> Result<i32, ServiceError> {
    validate(&input)?;

    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let txn = db.begin().await?;

    let saved = product::ActiveModel {
        category_id: Set(input.category_id),
        name: Set(input.name.trim().to_string()),
        price: Set(input.price),
        discount_percent: Set(input.discount_percent),
        is_new: Set(input.is_new),
        stock: Set(input.stock),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if input.has_detail() {
        product_detail::ActiveModel {
            product_id: Set(saved.id),
            image_url: Set(input.image_url),
            description: Set(input.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(saved.id)
}

/// Update a product row and replace its detail record: a fresh row when
/// image/description are provided, none when both are cleared. Single
/// transaction.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    input: ProductInput,
) -> Result<(), ServiceError> {
    validate(&input)?;

    let txn = db.begin().await?;

    let existing = Product::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut active: product::ActiveModel = existing.into();
    active.category_id = Set(input.category_id);
    active.name = Set(input.name.trim().to_string());
    active.price = Set(input.price);
    active.discount_percent = Set(input.discount_percent);
    active.is_new = Set(input.is_new);
    active.stock = Set(input.stock);
    active.update(&txn).await?;

    ProductDetail::delete_many()
        .filter(product_detail::Column::ProductId.eq(id))
        .exec(&txn)
        .await?;
    if input.has_detail() {
        product_detail::ActiveModel {
            product_id: Set(id),
            image_url: Set(input.image_url),
            description: Set(input.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(())
}

/// Delete detail rows then the product row as one transaction. Deleting an
/// id that does not exist is a success (idempotent delete).
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    ProductDetail::delete_many()
        .filter(product_detail::Column::ProductId.eq(id))
        .exec(&txn)
        .await?;

    Product::delete_many()
        .filter(product::Column::Id.eq(id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(())
}

/// Products with stock below `threshold`, lowest first.
pub async fn low_stock(
    db: &DatabaseConnection,
    threshold: i32,
) -> Result<Vec<LowStockItem>, ServiceError> {
    let products = Product::find()
        .filter(product::Column::Stock.lt(threshold))
        .order_by_asc(product::Column::Stock)
        .all(db)
        .await?;

    Ok(products
        .into_iter()
        .map(|p| LowStockItem {
            id: p.id,
            name: p.name,
            stock: p.stock,
            band: aggregate::stock_band(p.stock),
        })
        .collect())
}
