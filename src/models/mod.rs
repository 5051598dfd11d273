pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod product_detail;
