use super::create::SaleCreateDialog;
use super::details::{LineItemsRequest, SaleDetails, SaleDetailsDialog};
use super::edit::SaleEditDialog;
use crate::domain::a003_sale::api;
use crate::shared::components::table::{format_currency, TableCellMoney};
use crate::shared::components::ui::Badge;
use crate::shared::components::{ConfirmDialog, PageHeader};
use crate::shared::crud_state::create_state;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_sale::aggregate::{Sale, SaleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn status_variant(status: SaleStatus) -> &'static str {
    match status {
        SaleStatus::Completed => "success",
        SaleStatus::Pending => "warning",
    }
}

#[component]
pub fn SaleList() -> impl IntoView {
    let state = create_state::<Sale>();
    let notify = use_notifications();
    let (loading, set_loading) = signal(false);

    let details = RwSignal::new(None::<SaleDetails>);
    let details_open = RwSignal::new(false);
    let details_request = RwSignal::new(LineItemsRequest::default());

    let editing = RwSignal::new(None::<Sale>);
    let edit_open = RwSignal::new(false);
    let create_open = RwSignal::new(false);

    let pending_delete = RwSignal::new(None::<Sale>);
    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(items) => {
                    log::debug!("loaded {} sales", items.len());
                    state.update(|s| s.apply_loaded(items));
                }
                Err(e) => {
                    log::error!("failed to load sales: {}", e);
                    state.update(|s| s.apply_load_failed());
                    notify.error("Error al cargar los datos.");
                }
            }
            set_loading.set(false);
        });
    });

    let view_details = move |sale: Sale| {
        let Some(ticket) = details_request.try_update(|r| r.begin()) else {
            return;
        };
        spawn_local(async move {
            let sale_id = sale.id.clone();
            match api::fetch_line_items(&sale_id).await {
                Ok(items) => match details_request.with_untracked(|r| r.resolve(ticket, sale, items)) {
                    Some(d) => {
                        details.set(Some(d));
                        details_open.set(true);
                    }
                    None => log::debug!("discarding stale line items of sale {}", sale_id),
                },
                Err(e) => {
                    log::error!("failed to load line items of sale {}: {}", sale_id, e);
                    if details_request.with_untracked(|r| r.is_current(ticket)) {
                        notify.error("No se pudieron cargar los detalles de la venta");
                    }
                }
            }
        });
    };

    let open_edit = move |sale: Sale| {
        editing.set(Some(sale));
        edit_open.set(true);
    };

    let ask_delete = move |sale: Sale| {
        pending_delete.set(Some(sale));
        confirm_open.set(true);
    };

    let confirm_delete = move |_: ()| {
        let Some(sale) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete_sale(&sale.id).await {
                Ok(()) => {
                    state.update(|s| {
                        s.apply_deleted(&sale.id);
                    });
                    notify.success("La venta ha sido eliminada correctamente.");
                }
                Err(e) => {
                    log::error!("failed to delete sale {}: {}", sale.id, e);
                    notify.error("Error al eliminar la venta");
                }
            }
            deleting.set(false);
            confirm_open.set(false);
            pending_delete.set(None);
        });
    };

    let on_saved = Callback::new(move |updated: Sale| {
        state.update(|s| {
            s.apply_updated(updated);
        });
    });

    let on_created = Callback::new(move |created: Sale| {
        state.update(|s| s.apply_created(created));
    });

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <PageHeader title="Ventas" subtitle="Gestiona tus ventas y facturación">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| create_open.set(true)
                >
                    {icon("plus")}
                    " Nueva Venta"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Cliente"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Método de Pago"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(move |sale| {
                                        let for_details = sale.clone();
                                        let for_edit = sale.clone();
                                        let for_delete = sale.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{sale.fecha.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{sale.cliente_nombre.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=sale.total />
                                                <TableCell>
                                                    <Badge variant=status_variant(sale.estado).to_string()>
                                                        {sale.estado.display_name()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{sale.metodo_pago.display_name().to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Ver detalles"
                                                            on_click=move |_| view_details(for_details.clone())
                                                        >
                                                            {icon("eye")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Editar venta"
                                                            on_click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Eliminar venta"
                                                            on_click=move |_| ask_delete(for_delete.clone())
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>

                    <Show when=move || loading.get()>
                        <div class="table-wrapper__loading"><Spinner /></div>
                    </Show>
                    <Show when=move || state.with(|s| s.is_loaded && s.is_empty() && !s.load_failed)>
                        <div class="table-wrapper__empty">"No hay ventas registradas"</div>
                    </Show>
                </div>
            </div>

            <SaleDetailsDialog open=details_open details=details />
            <SaleEditDialog open=edit_open sale=editing on_saved=on_saved />
            <SaleCreateDialog open=create_open on_created=on_created />
            <ConfirmDialog
                open=confirm_open
                title="Confirmar eliminación"
                message=Signal::derive(move || {
                    pending_delete.with(|s| match s {
                        Some(sale) => format!(
                            "¿Eliminar la venta de {} por {}? Esta acción no se puede deshacer.",
                            sale.cliente_nombre,
                            format_currency(sale.total)
                        ),
                        None => String::new(),
                    })
                })
                busy=deleting
                on_confirm=Callback::new(confirm_delete)
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants() {
        assert_eq!(status_variant(SaleStatus::Completed), "success");
        assert_eq!(status_variant(SaleStatus::from_code("anulado")), "warning");
    }
}
