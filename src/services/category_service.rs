use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{is_unique_violation, ServiceError};
use crate::models::category::{self, Entity as Category};
use crate::models::product::{self, Entity as Product};

const DUPLICATE_NAME: &str = "A category with this name already exists";
const IN_USE: &str = "Cannot delete a category with linked products";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithCount {
    pub id: i32,
    pub name: String,
    pub product_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    #[serde(alias = "nome_categoria", default)]
    pub name: String,
}

pub fn validate(input: &CategoryInput) -> Result<(), ServiceError> {
    if input.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Category name is required".to_string(),
        ));
    }
    Ok(())
}

/// List categories with how many products reference each, name ascending.
pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<CategoryWithCount>, ServiceError> {
    let categories = Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;

    let products = Product::find().all(db).await?;
    let mut counts: HashMap<i32, i64> = HashMap::new();
    for p in &products {
        if let Some(category_id) = p.category_id {
            *counts.entry(category_id).or_insert(0) += 1;
        }
    }

    Ok(categories
        .into_iter()
        .map(|c| CategoryWithCount {
            product_count: counts.get(&c.id).copied().unwrap_or(0),
            id: c.id,
            name: c.name,
        })
        .collect())
}

/// Create a category with a case-sensitive unique name.
///
/// The pre-check SELECT produces the friendly message in the common case;
/// the UNIQUE constraint closes the race between two concurrent creates,
/// and its violation maps to the same message.
pub async fn create_category(
    db: &DatabaseConnection,
    input: CategoryInput,
) -> Result<i32, ServiceError> {
    validate(&input)?;
    let name = input.name.trim().to_string();

    let existing = Category::find()
        .filter(category::Column::Name.eq(name.clone()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_NAME.to_string()));
    }

    let saved = category::ActiveModel {
        name: Set(name),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ServiceError::Conflict(DUPLICATE_NAME.to_string())
        } else {
            e.into()
        }
    })?;

    Ok(saved.id)
}

/// Rename a category, keeping the name unique among the others.
pub async fn update_category(
    db: &DatabaseConnection,
    id: i32,
    input: CategoryInput,
) -> Result<(), ServiceError> {
    validate(&input)?;
    let name = input.name.trim().to_string();

    let clash = Category::find()
        .filter(category::Column::Name.eq(name.clone()))
        .filter(category::Column::Id.ne(id))
        .one(db)
        .await?;
    if clash.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_NAME.to_string()));
    }

    let existing = Category::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut active: category::ActiveModel = existing.into();
    active.name = Set(name);
    active.update(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            ServiceError::Conflict(DUPLICATE_NAME.to_string())
        } else {
            ServiceError::from(e)
        }
    })?;

    Ok(())
}

/// Delete a category unless any product still references it.
pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let product_count = Product::find()
        .filter(product::Column::CategoryId.eq(id))
        .count(db)
        .await?;
    if product_count > 0 {
        return Err(ServiceError::Conflict(IN_USE.to_string()));
    }

    Category::delete_many()
        .filter(category::Column::Id.eq(id))
        .exec(db)
        .await?;

    Ok(())
}
