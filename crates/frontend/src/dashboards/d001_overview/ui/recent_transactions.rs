use crate::dashboards::d001_overview::api;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::calendar_day;
use crate::shared::notifications::use_notifications;
use contracts::dashboards::d001_overview::{TransactionKind, TransactionRecord, TransactionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SKELETON_ROWS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub tipo: String,
    pub tipo_variant: &'static str,
    pub producto: String,
    pub monto: String,
    pub fecha: String,
    pub estado: &'static str,
    pub estado_variant: &'static str,
}

impl From<TransactionRecord> for TransactionRow {
    fn from(t: TransactionRecord) -> Self {
        Self {
            id: t.id,
            tipo: t.tipo.display_name().to_string(),
            tipo_variant: match t.tipo {
                TransactionKind::Sale => "primary",
                _ => "neutral",
            },
            producto: t.producto,
            monto: format_currency(t.monto),
            fecha: calendar_day(&t.fecha),
            estado: t.estado.display_name(),
            estado_variant: match t.estado {
                TransactionStatus::Completed => "success",
                TransactionStatus::Processing => "neutral",
            },
        }
    }
}

#[component]
pub fn RecentTransactions() -> impl IntoView {
    let notify = use_notifications();
    // None until the feed call finishes, either way
    let rows = RwSignal::new(None::<Vec<TransactionRow>>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_recent_transactions().await {
                Ok(items) => {
                    log::debug!("loaded {} recent transactions", items.len());
                    rows.set(Some(items.into_iter().map(TransactionRow::from).collect()));
                }
                Err(e) => {
                    log::error!("failed to load recent transactions: {}", e);
                    rows.set(Some(Vec::new()));
                    notify.error("No se pudieron obtener las transacciones recientes");
                }
            }
        });
    });

    let header = || {
        view! {
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Tipo"</TableHeaderCell>
                    <TableHeaderCell>"Producto"</TableHeaderCell>
                    <TableHeaderCell>"Monto"</TableHeaderCell>
                    <TableHeaderCell>"Fecha"</TableHeaderCell>
                    <TableHeaderCell>"Estado"</TableHeaderCell>
                </TableRow>
            </TableHeader>
        }
    };

    let body = move || match rows.get() {
        None => view! {
            <Table attr:style="width: 100%;">
                {header()}
                <TableBody>
                    {(0..SKELETON_ROWS)
                        .map(|_| view! {
                            <TableRow>
                                {(0..5)
                                    .map(|_| view! {
                                        <TableCell><div class="skeleton skeleton--text"></div></TableCell>
                                    })
                                    .collect_view()}
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        }
        .into_any(),
        Some(rows) if rows.is_empty() => view! {
            <p class="card__empty">"No hay transacciones recientes"</p>
        }
        .into_any(),
        Some(rows) => view! {
            <Table attr:style="width: 100%;">
                {header()}
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <TableRow>
                                <TableCell>
                                    <Badge variant=row.tipo_variant.to_string()>{row.tipo}</Badge>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{row.producto}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.monto}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.fecha}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <Badge variant=row.estado_variant.to_string()>{row.estado}</Badge>
                                </TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        }
        .into_any(),
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Transacciones Recientes"</h2>
                <p class="card__description">
                    {move || if rows.with(|r| r.is_none()) {
                        "Cargando transacciones..."
                    } else {
                        "Últimas transacciones realizadas en el sistema"
                    }}
                </p>
            </div>
            <div class="card__content">{body}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d001_overview::RecentTransactionsResponse;
    use serde_json::json;

    #[test]
    fn test_rows_from_feed() {
        let feed: RecentTransactionsResponse = serde_json::from_value(json!({
            "transacciones": [
                {"id": 9, "tipo": "Venta", "producto": "Mouse", "monto": 19.98,
                 "fecha": "2024-03-15T14:02:26Z", "estado": "completed"},
                {"id": 10, "tipo": "Compra", "producto": "Monitor", "monto": "1300",
                 "fecha": "2024-03-14", "estado": "processing"}
            ]
        }))
        .unwrap();

        let rows: Vec<TransactionRow> = feed.transacciones.into_iter().map(TransactionRow::from).collect();

        assert_eq!(rows[0].fecha, "2024-03-15");
        assert_eq!(rows[0].tipo_variant, "primary");
        assert_eq!(rows[0].estado, "Completado");
        assert_eq!(rows[0].estado_variant, "success");
        assert_eq!(rows[1].monto, "$1,300.00");
        assert_eq!(rows[1].tipo_variant, "neutral");
        assert_eq!(rows[1].estado, "Procesando");
    }

    #[test]
    fn test_unknown_kind_renders_neutral() {
        let record: TransactionRecord = serde_json::from_value(json!({
            "id": 3, "tipo": "Ajuste", "producto": "Cable HDMI", "monto": 5,
            "fecha": "2024-03-12", "estado": "processing"
        }))
        .unwrap();
        let row = TransactionRow::from(record);
        assert_eq!(row.tipo, "Ajuste");
        assert_eq!(row.tipo_variant, "neutral");
    }
}
