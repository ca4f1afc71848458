pub mod dashboard;
pub mod recent_transactions;
pub mod stats;

pub use dashboard::OverviewDashboard;
