pub mod a001_product;
pub mod a002_category;
pub mod a003_sale;
pub mod a004_purchase_order;
pub mod a005_supplier;
pub mod common;
