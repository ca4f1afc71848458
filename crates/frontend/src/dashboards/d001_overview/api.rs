use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::dashboards::d001_overview::{DashboardSummary, RecentTransactionsResponse, TransactionRecord};

/// Four counters of the overview
pub async fn fetch_summary() -> Result<DashboardSummary, ApiError> {
    get_json(&api_url("/api/dashboard/")).await
}

/// Recent activity feed, unwrapped from its `transacciones` envelope
pub async fn fetch_recent_transactions() -> Result<Vec<TransactionRecord>, ApiError> {
    let response: RecentTransactionsResponse =
        get_json(&api_url("/api/dashboard/transacciones-recientes/")).await?;
    Ok(response.transacciones)
}
