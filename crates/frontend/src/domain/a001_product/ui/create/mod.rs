use crate::domain::a001_product::api;
use crate::domain::a002_category::api::fetch_categories;
use crate::shared::components::ui::{Input, Select};
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_product::aggregate::{Product, ProductCreateForm};
use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::validation::{validate_then, FormErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| (c.id.clone(), c.nombre.clone()))
        .collect()
}

/// "Agregar Nuevo Producto" dialog.
///
/// Categories are fetched again every time the dialog opens.
#[component]
pub fn ProductCreateDialog(open: RwSignal<bool>, on_created: Callback<Product>) -> impl IntoView {
    let notify = use_notifications();
    let form = RwSignal::new(ProductCreateForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading_categories = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        errors.set(FormErrors::default());
        loading_categories.set(true);
        spawn_local(async move {
            match fetch_categories().await {
                Ok(items) => categories.set(items),
                Err(e) => {
                    log::error!("failed to load categories: {}", e);
                    notify.error("No se pudieron cargar las categorías.");
                }
            }
            loading_categories.set(false);
        });
    });

    let field_error =
        move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let dto = match form.with_untracked(|f| validate_then(f, ProductCreateForm::to_dto)) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        submitting.set(true);
        spawn_local(async move {
            match api::create_product(&dto).await {
                Ok(created) => {
                    on_created.run(created);
                    form.set(ProductCreateForm::default());
                    open.set(false);
                    notify.success("El producto ha sido agregado exitosamente.");
                }
                Err(e) => {
                    log::error!("failed to create product: {}", e);
                    notify.error("No se pudo agregar el producto.");
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Agregar Nuevo Producto"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Input
                                label="Nombre del Producto"
                                placeholder="Laptop Dell XPS 13"
                                value=Signal::derive(move || form.with(|f| f.nombre.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.nombre = v))
                                error=field_error("nombre")
                                disabled=submitting
                            />
                            <Input
                                label="SKU"
                                placeholder="LAP-001"
                                value=Signal::derive(move || form.with(|f| f.sku.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.sku = v))
                                error=field_error("sku")
                                disabled=submitting
                            />
                            <Input
                                label="Precio"
                                input_type="number"
                                placeholder="999.99"
                                value=Signal::derive(move || form.with(|f| f.precio_text.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.set_precio(v)))
                                error=field_error("precio")
                                disabled=submitting
                            />
                            <Input
                                label="Stock"
                                input_type="number"
                                placeholder="10"
                                value=Signal::derive(move || form.with(|f| f.stock_text.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.set_stock(v)))
                                error=field_error("stock")
                                disabled=submitting
                            />
                            <Select
                                label="Categoría"
                                placeholder=Signal::derive(move || {
                                    if loading_categories.get() {
                                        "Cargando categorías...".to_string()
                                    } else {
                                        "Seleccione una categoría".to_string()
                                    }
                                })
                                value=Signal::derive(move || form.with(|f| f.categoria.clone().unwrap_or_default()))
                                options=Signal::derive(move || categories.with(|c| category_options(c)))
                                on_change=Callback::new(move |v: String| form.update(|f| f.set_categoria(v)))
                                error=field_error("categoria")
                                disabled=Signal::derive(move || submitting.get() || loading_categories.get())
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
                            {move || if submitting.get() { "Guardando..." } else { "Guardar Producto" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_use_id_as_value() {
        let categories = vec![
            Category {
                id: "3".to_string(),
                nombre: "Laptops".to_string(),
            },
            Category {
                id: "7".to_string(),
                nombre: "Periféricos".to_string(),
            },
        ];
        assert_eq!(
            category_options(&categories),
            vec![
                ("3".to_string(), "Laptops".to_string()),
                ("7".to_string(), "Periféricos".to_string()),
            ]
        );
    }
}
