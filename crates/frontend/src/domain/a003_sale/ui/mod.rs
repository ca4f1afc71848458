pub mod create;
pub mod details;
pub mod edit;
pub mod list;

pub use list::SaleList;
