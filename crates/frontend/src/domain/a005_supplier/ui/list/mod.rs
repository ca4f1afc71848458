use super::form::SupplierFormDialog;
use crate::domain::a005_supplier::api;
use crate::shared::components::PageHeader;
use crate::shared::crud_state::{create_state, CrudList};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use thaw::*;

/// Puts a saved supplier into the list: replaces it when it was an edit,
/// appends it otherwise.
pub fn apply_saved(list: &mut CrudList<Supplier>, saved: Supplier, was_edit: bool) {
    if was_edit {
        if !list.apply_updated(saved) {
            log::warn!("updated supplier is no longer in the list");
        }
    } else {
        list.apply_created(saved);
    }
}

/// Marks `id` as being deleted. Returns `false` when a delete of that same
/// supplier is already in flight.
pub fn begin_delete(pending: &mut BTreeSet<String>, id: &str) -> bool {
    pending.insert(id.to_string())
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let state = create_state::<Supplier>();
    let notify = use_notifications();
    let (loading, set_loading) = signal(false);

    let form_open = RwSignal::new(false);
    let form_target = RwSignal::new(None::<Supplier>);
    let deleting = RwSignal::new(BTreeSet::<String>::new());

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(items) => {
                    log::debug!("loaded {} suppliers", items.len());
                    state.update(|s| s.apply_loaded(items));
                }
                Err(e) => {
                    log::error!("failed to load suppliers: {}", e);
                    state.update(|s| s.apply_load_failed());
                    notify.error("No se pudieron cargar los proveedores.");
                }
            }
            set_loading.set(false);
        });
    });

    let open_add = move || {
        form_target.set(None);
        form_open.set(true);
    };

    let open_edit = move |supplier: Supplier| {
        form_target.set(Some(supplier));
        form_open.set(true);
    };

    // no confirmation step for suppliers
    let delete_now = move |id: String| {
        let started = deleting.try_update(|d| begin_delete(d, &id)).unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(&id).await {
                Ok(()) => {
                    state.update(|s| {
                        s.apply_deleted(&id);
                    });
                    notify.success("El proveedor ha sido eliminado.");
                }
                Err(e) => {
                    log::error!("failed to delete supplier {}: {}", id, e);
                    notify.error("No se pudo eliminar el proveedor.");
                }
            }
            deleting.update(|d| {
                d.remove(&id);
            });
        });
    };

    let on_saved = Callback::new(move |(saved, was_edit): (Supplier, bool)| {
        state.update(|s| apply_saved(s, saved, was_edit));
    });

    view! {
        <PageFrame page_id="a005_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Proveedores" subtitle="Gestiona tus proveedores y contactos">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_add()>
                    {icon("plus")}
                    " Agregar Proveedor"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell>"Dirección"</TableHeaderCell>
                                <TableHeaderCell>"RUC"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(move |supplier| {
                                        let for_edit = supplier.clone();
                                        let id = supplier.id.clone();
                                        let row_id = supplier.id.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{supplier.nombre}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{supplier.email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{supplier.telefono}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{supplier.direccion}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{supplier.ruc}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Editar proveedor"
                                                            on_click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            attr:title="Eliminar proveedor"
                                                            disabled=Signal::derive(move || {
                                                                deleting.with(|d| d.contains(&row_id))
                                                            })
                                                            on_click=move |_| delete_now(id.clone())
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
                        <div class="table-wrapper__loading">
                            <Spinner />
                            " Cargando proveedores..."
                        </div>
                    </Show>
                    <Show when=move || state.with(|s| s.is_loaded && s.is_empty() && !s.load_failed)>
                        <div class="table-wrapper__empty">"No hay proveedores registrados"</div>
                    </Show>
                </div>
            </div>

            <SupplierFormDialog open=form_open supplier=form_target on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn supplier(id: u32, nombre: &str) -> Supplier {
        serde_json::from_value(json!({
            "id": id,
            "nombre": nombre,
            "email": "contacto@proveedor.ec",
            "telefono": "022345678",
            "direccion": "Quito",
            "ruc": "1790012345001"
        }))
        .unwrap()
    }

    #[test]
    fn test_deletes_of_different_suppliers_both_start() {
        let mut pending = BTreeSet::new();
        assert!(begin_delete(&mut pending, "1"));
        assert!(begin_delete(&mut pending, "2"));
        assert!(!begin_delete(&mut pending, "1"));

        pending.remove("1");
        assert!(begin_delete(&mut pending, "1"));
    }

    #[test]
    fn test_saved_edit_replaces_row() {
        let mut list = CrudList::default();
        list.apply_loaded(vec![supplier(1, "TechCorp"), supplier(2, "Global Supplies")]);

        apply_saved(&mut list, supplier(2, "Global Supplies SA"), true);

        assert_eq!(list.len(), 2);
        assert_eq!(list.items[1].nombre, "Global Supplies SA");
    }

    #[test]
    fn test_saved_add_appends_row() {
        let mut list = CrudList::default();
        list.apply_loaded(vec![supplier(1, "TechCorp")]);

        apply_saved(&mut list, supplier(7, "Electronics Inc"), false);

        assert_eq!(list.len(), 2);
        assert_eq!(list.items[1].id, "7");
    }
}
