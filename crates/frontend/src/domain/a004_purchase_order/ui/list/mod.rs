use crate::domain::a004_purchase_order::data::purchase_orders;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;
use crate::shared::crud_state::create_state;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_purchase_order::aggregate::{PurchaseOrder, PurchaseStatus};
use leptos::prelude::*;
use thaw::*;

pub fn status_variant(status: PurchaseStatus) -> &'static str {
    match status {
        PurchaseStatus::Received => "success",
        PurchaseStatus::Pending => "warning",
    }
}

/// Read-only list of purchase orders
#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let state = create_state::<PurchaseOrder>();
    state.update(|s| s.apply_loaded(purchase_orders()));

    view! {
        <PageFrame page_id="a004_purchase_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Compras" subtitle="Gestiona tus órdenes de compra">
                // purchases cannot be created yet
                <Button appearance=ButtonAppearance::Primary disabled=true>
                    {icon("plus")}
                    " Nueva Compra"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Proveedor"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Orden #"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|o| o.id.clone()
                                children=move |o| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{o.fecha}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{o.proveedor}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=o.total />
                                            <TableCell>
                                                <Badge variant=status_variant(o.estado).to_string()>
                                                    {o.estado.display_name()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">{o.numero_orden}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::format_currency;

    #[test]
    fn test_rows_render_like_the_fixture() {
        let orders = purchase_orders();
        assert_eq!(format_currency(orders[0].total), "$5,299.99");
        assert_eq!(orders[1].estado.display_name(), "Pendiente");
        assert_eq!(status_variant(orders[1].estado), "warning");
        assert_eq!(status_variant(orders[2].estado), "success");
    }
}
