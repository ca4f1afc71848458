use super::create::ProductCreateDialog;
use super::edit::ProductEditDialog;
use crate::domain::a001_product::api;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ConfirmDialog, PageHeader};
use crate::shared::crud_state::create_state;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::{Product, ProductStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Display strings of one table row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub nombre: String,
    pub sku: String,
    pub precio: String,
    pub stock: String,
    pub categoria: String,
    pub estado_label: &'static str,
    pub estado_variant: &'static str,
}

pub fn status_variant(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::InStock => "success",
        ProductStatus::LowStock => "warning",
        ProductStatus::OutOfStock => "error",
    }
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            nombre: p.nombre.clone(),
            sku: p.sku.clone(),
            precio: format_currency(p.precio),
            stock: p.stock.to_string(),
            categoria: p.categoria_nombre.clone(),
            estado_label: p.estado.display_name(),
            estado_variant: status_variant(p.estado),
        }
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state::<Product>();
    let notify = use_notifications();
    let (loading, set_loading) = signal(false);

    let editing = RwSignal::new(None::<Product>);
    let edit_open = RwSignal::new(false);
    let create_open = RwSignal::new(false);

    let pending_delete = RwSignal::new(None::<Product>);
    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let load_items = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("loaded {} products", items.len());
                    state.update(|s| s.apply_loaded(items));
                }
                Err(e) => {
                    log::error!("failed to load products: {}", e);
                    state.update(|s| s.apply_load_failed());
                    notify.error(
                        "No se pudieron cargar los productos. Por favor, intente de nuevo más tarde.",
                    );
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let open_edit = move |product: Product| {
        editing.set(Some(product));
        edit_open.set(true);
    };

    let ask_delete = move |product: Product| {
        pending_delete.set(Some(product));
        confirm_open.set(true);
    };

    let confirm_delete = move |_: ()| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => {
                    state.update(|s| {
                        s.apply_deleted(&product.id);
                    });
                    notify.success("El producto ha sido eliminado correctamente.");
                }
                Err(e) => {
                    log::error!("failed to delete product {}: {}", product.id, e);
                    notify.error("No se pudo eliminar el producto. Por favor, intente de nuevo.");
                }
            }
            deleting.set(false);
            confirm_open.set(false);
            pending_delete.set(None);
        });
    };

    let on_saved = Callback::new(move |updated: Product| {
        state.update(|s| {
            s.apply_updated(updated);
        });
    });

    let on_created = Callback::new(move |created: Product| {
        state.update(|s| s.apply_created(created));
    });

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Inventario" subtitle="Gestiona tus productos y existencias">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| create_open.set(true)
                >
                    {icon("plus")}
                    " Nuevo Producto"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Precio"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>"Categoría"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(move |item| {
                                        let row = ProductRow::from(&item);
                                        let for_edit = item.clone();
                                        let for_delete = item.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{row.nombre}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.sku}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.precio}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.stock}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.categoria}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Badge variant=row.estado_variant.to_string()>
                                                        {row.estado_label}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Editar producto"
                                                            on_click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Eliminar producto"
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
                        <div class="table-wrapper__empty">
                            "No hay productos registrados"
                        </div>
                    </Show>
                </div>
            </div>

            <ProductEditDialog open=edit_open product=editing on_saved=on_saved />
            <ProductCreateDialog open=create_open on_created=on_created />
            <ConfirmDialog
                open=confirm_open
                title="Confirmar eliminación"
                message=Signal::derive(|| {
                    "¿Estás seguro de que quieres eliminar este producto? Esta acción no se puede deshacer."
                        .to_string()
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
    use serde_json::json;

    #[test]
    fn test_example_product_row() {
        let products: Vec<Product> = serde_json::from_value(json!([{
            "id": "1",
            "nombre": "Mouse",
            "sku": "MS-1",
            "precio": 9.99,
            "stock": 5,
            "categoria_nombre": "Perifericos",
            "estado": "en_stock"
        }]))
        .unwrap();

        let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            ProductRow {
                nombre: "Mouse".to_string(),
                sku: "MS-1".to_string(),
                precio: "$9.99".to_string(),
                stock: "5".to_string(),
                categoria: "Perifericos".to_string(),
                estado_label: "En Stock",
                estado_variant: "success",
            }
        );
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(status_variant(ProductStatus::LowStock), "warning");
        assert_eq!(status_variant(ProductStatus::from_code("descontinuado")), "error");
    }
}
