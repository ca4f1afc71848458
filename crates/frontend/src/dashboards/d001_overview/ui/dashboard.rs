use super::recent_transactions::RecentTransactions;
use super::stats::DashboardStats;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

/// Overview page: counters on top, recent activity below.
///
/// Both sections load on their own, so a failing counter call does not keep
/// the feed from rendering.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Panel de Control"
                subtitle="Bienvenido al sistema de gestión de inventario"
            />
            <div class="page__content dashboard">
                <DashboardStats />
                <RecentTransactions />
            </div>
        </PageFrame>
    }
}
