pub mod list;

pub use list::PurchaseOrderList;
