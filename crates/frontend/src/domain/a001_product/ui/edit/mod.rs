use crate::domain::a001_product::api;
use crate::shared::components::ui::Input;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_product::aggregate::{Product, ProductEditForm};
use contracts::shared::validation::{validate_then, FormErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Edit dialog of a product row.
///
/// The form is re-filled from `product` every time the dialog opens. On
/// success the server's version goes to `on_saved` and the dialog closes; on
/// failure it stays open.
#[component]
pub fn ProductEditDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    product: Signal<Option<Product>>,
    on_saved: Callback<Product>,
) -> impl IntoView {
    let notify = use_notifications();
    let form = RwSignal::new(ProductEditForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            if let Some(p) = product.get() {
                form.set(ProductEditForm::from_product(&p));
                errors.set(FormErrors::default());
            }
        }
    });

    let field_error =
        move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let Some(id) = product.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        let dto = match form.with_untracked(|f| validate_then(f, ProductEditForm::to_dto)) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        submitting.set(true);
        spawn_local(async move {
            match api::update_product(&id, &dto).await {
                Ok(updated) => {
                    on_saved.run(updated);
                    open.set(false);
                    notify.success("El producto ha sido actualizado correctamente.");
                }
                Err(e) => {
                    log::error!("failed to update product {}: {}", id, e);
                    notify.error("No se pudo actualizar el producto. Por favor, intente de nuevo.");
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Editar Producto"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">"Modifica los detalles del producto aquí."</p>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Input
                                label="Nombre"
                                placeholder="Nombre del producto"
                                value=Signal::derive(move || form.with(|f| f.nombre.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.nombre = v))
                                error=field_error("nombre")
                                disabled=submitting
                            />
                            <Input
                                label="SKU"
                                placeholder="SKU del producto"
                                value=Signal::derive(move || form.with(|f| f.sku.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.sku = v))
                                error=field_error("sku")
                                disabled=submitting
                            />
                            <Input
                                label="Precio"
                                input_type="number"
                                placeholder="Precio del producto"
                                value=Signal::derive(move || form.with(|f| f.precio_text.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.set_precio(v)))
                                error=field_error("precio")
                                disabled=submitting
                            />
                            <Input
                                label="Stock"
                                input_type="number"
                                placeholder="Stock del producto"
                                value=Signal::derive(move || form.with(|f| f.stock_text.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.set_stock(v)))
                                error=field_error("stock")
                                disabled=submitting
                            />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {move || if submitting.get() { "Guardando..." } else { "Guardar cambios" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
