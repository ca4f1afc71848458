mod request;

pub use request::{LineItemsRequest, SaleDetails};

use crate::shared::components::table::{format_currency, TableCellMoney};
use leptos::prelude::*;
use thaw::*;

/// Read-only modal with the header of a sale and its line items
#[component]
pub fn SaleDetailsDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    details: Signal<Option<SaleDetails>>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Detalles de Venta"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">"Información completa de la venta"</p>
                        {move || details.get().map(|d| {
                            let sale = d.sale;
                            view! {
                                <div class="details-grid">
                                    <div><strong>"Cliente: "</strong>{sale.cliente_nombre.clone()}</div>
                                    <div><strong>"Fecha: "</strong>{sale.fecha.clone()}</div>
                                    <div><strong>"Total: "</strong>{format_currency(sale.total)}</div>
                                    <div>
                                        <strong>"Método de Pago: "</strong>
                                        {sale.metodo_pago.display_name().to_string()}
                                    </div>
                                </div>
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Producto"</TableHeaderCell>
                                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                            <TableHeaderCell>"Precio"</TableHeaderCell>
                                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {d.items.into_iter().map(|line| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{line.producto}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{line.cantidad.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=line.precio />
                                                <TableCellMoney value=line.subtotal />
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            }
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open.set(false)
                        >
                            "Cerrar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
