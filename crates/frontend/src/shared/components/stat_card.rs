use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter card of the overview dashboard.
///
/// `value` is the already formatted figure; `None` renders a skeleton while
/// the counters are loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    title: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Line below the value, e.g. "Último mes"
    description: &'static str,
) -> impl IntoView {
    let value_view = move || match value.get() {
        Some(v) => view! { <div class="stat-card__value">{v}</div> }.into_any(),
        None => view! { <div class="skeleton skeleton--value"></div> }.into_any(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{title}</div>
                {value_view}
                <div class="stat-card__subtitle">{description}</div>
            </div>
        </div>
    }
}
