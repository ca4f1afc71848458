pub mod create;
pub mod edit;
pub mod list;

pub use list::ProductList;
