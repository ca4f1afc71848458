//! Maps the active page to its view. Every page key resolves here.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_product::ui::ProductList;
use crate::domain::a003_sale::ui::SaleList;
use crate::domain::a004_purchase_order::ui::PurchaseOrderList;
use crate::domain::a005_supplier::ui::SupplierList;
use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Sales => view! { <SaleList /> }.into_any(),
        Page::Purchases => view! { <PurchaseOrderList /> }.into_any(),
        Page::Suppliers => view! { <SupplierList /> }.into_any(),
    }
}

/// Active page; switching pages remounts it, so lists reload on return.
#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    move || render_page(ctx.active.get())
}
