pub mod confirm_dialog;
pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
