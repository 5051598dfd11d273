use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Known status values. The column stays free text: the storefront writes
/// arbitrary strings and the admin surface does not reject unknown ones.
pub const STATUS_APPROVED: &str = "Approved";
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_CANCELLED: &str = "Cancelled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: Option<i32>,
    /// Free-text label of the principal item; not normalized to line items
    pub item_summary: String,
    pub total: f64,
    pub status: String,
    pub placed_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
