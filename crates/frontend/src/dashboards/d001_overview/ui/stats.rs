use crate::dashboards::d001_overview::api;
use crate::shared::components::table::{format_count, format_currency};
use crate::shared::components::StatCard;
use crate::shared::notifications::use_notifications;
use contracts::dashboards::d001_overview::DashboardSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Formatted card values, in card order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValues {
    pub ventas: String,
    pub productos: String,
    pub compras: String,
    pub ganancia: String,
}

impl From<&DashboardSummary> for StatValues {
    fn from(s: &DashboardSummary) -> Self {
        Self {
            ventas: format_currency(s.ventas_totales),
            productos: format_count(s.total_productos),
            compras: format_currency(s.compras_totales),
            ganancia: format_currency(s.ganancias),
        }
    }
}

impl StatValues {
    /// Shown when the counters could not be loaded
    pub fn placeholder() -> Self {
        Self::from(&DashboardSummary {
            ventas_totales: 0.0,
            total_productos: 0,
            compras_totales: 0.0,
            ganancias: 0.0,
        })
    }
}

/// Counter section state; only `Loading` renders skeletons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatsState {
    #[default]
    Loading,
    Loaded(StatValues),
    Failed,
}

impl StatsState {
    pub fn from_result<E>(result: Result<DashboardSummary, E>) -> Self {
        match result {
            Ok(summary) => StatsState::Loaded(StatValues::from(&summary)),
            Err(_) => StatsState::Failed,
        }
    }

    /// Values to show, `None` while loading.
    pub fn values(&self) -> Option<StatValues> {
        match self {
            StatsState::Loading => None,
            StatsState::Loaded(v) => Some(v.clone()),
            StatsState::Failed => Some(StatValues::placeholder()),
        }
    }
}

#[component]
pub fn DashboardStats() -> impl IntoView {
    let notify = use_notifications();
    let state = RwSignal::new(StatsState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::fetch_summary().await;
            if let Err(e) = &result {
                log::error!("failed to load dashboard counters: {}", e);
                notify.error("No se pudieron obtener las estadísticas del dashboard");
            }
            state.set(StatsState::from_result(result));
        });
    });

    let pick = move |f: fn(&StatValues) -> String| {
        Signal::derive(move || state.with(|s| s.values()).as_ref().map(f))
    };

    view! {
        <div class="stat-grid">
            <StatCard
                title="Ventas Totales"
                icon_name="dollar"
                value=pick(|v| v.ventas.clone())
                description="Último mes"
            />
            <StatCard
                title="Productos"
                icon_name="products"
                value=pick(|v| v.productos.clone())
                description="En inventario"
            />
            <StatCard
                title="Compras"
                icon_name="purchases"
                value=pick(|v| v.compras.clone())
                description="Último mes"
            />
            <StatCard
                title="Ganancia"
                icon_name="trending-up"
                value=pick(|v| v.ganancia.clone())
                description="Último mes"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_shows_placeholders() {
        assert_eq!(StatsState::default().values(), None);

        let failed = StatsState::from_result::<&str>(Err("HTTP error: 500"));
        assert_eq!(failed, StatsState::Failed);
        assert_eq!(
            failed.values(),
            Some(StatValues {
                ventas: "$0.00".to_string(),
                productos: "0".to_string(),
                compras: "$0.00".to_string(),
                ganancia: "$0.00".to_string(),
            })
        );
    }

    #[test]
    fn test_card_values() {
        let summary = DashboardSummary {
            ventas_totales: 15230.5,
            total_productos: 1250,
            compras_totales: 830.0,
            ganancias: -120.25,
        };
        assert_eq!(
            StatValues::from(&summary),
            StatValues {
                ventas: "$15,230.50".to_string(),
                productos: "1,250".to_string(),
                compras: "$830.00".to_string(),
                ganancia: "-$120.25".to_string(),
            }
        );
    }
}
