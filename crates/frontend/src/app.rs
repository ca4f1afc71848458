use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    let theme = RwSignal::new(Theme::light());

    view! {
        <ConfigProvider theme>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
