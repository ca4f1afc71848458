use crate::domain::a003_sale::api;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a003_sale::aggregate::{PaymentMethod, Sale, SaleEditForm};
use contracts::shared::validation::{validate_then, FormErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// `(code, label)` pairs for the payment selector.
///
/// A method the client does not know is kept as an extra option so that
/// editing other fields does not silently change it.
pub fn payment_options(current: &PaymentMethod) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = PaymentMethod::all()
        .iter()
        .map(|m| (m.code().to_string(), m.display_name().to_string()))
        .collect();
    if let PaymentMethod::Other(code) = current {
        options.push((code.clone(), code.clone()));
    }
    options
}

#[component]
pub fn SaleEditDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    sale: Signal<Option<Sale>>,
    on_saved: Callback<Sale>,
) -> impl IntoView {
    let notify = use_notifications();
    let form = RwSignal::new(SaleEditForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            if let Some(s) = sale.get() {
                form.set(SaleEditForm::from_sale(&s));
                errors.set(FormErrors::default());
            }
        }
    });

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let Some(id) = sale.with_untracked(|s| s.as_ref().map(|s| s.id.clone())) else {
            return;
        };
        let dto = match form.with_untracked(|f| validate_then(f, SaleEditForm::to_dto)) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        submitting.set(true);
        spawn_local(async move {
            match api::update_sale(&id, &dto).await {
                Ok(updated) => {
                    on_saved.run(updated);
                    open.set(false);
                    notify.success("La venta ha sido actualizada correctamente.");
                }
                Err(e) => {
                    log::error!("failed to update sale {}: {}", id, e);
                    notify.error("Error al actualizar la venta");
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Editar Venta"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">"Modifica los detalles de la venta seleccionada."</p>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Input
                                label="Cliente"
                                value=Signal::derive(move || form.with(|f| f.cliente_nombre.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.cliente_nombre = v))
                                error=Signal::derive(move || {
                                    errors.with(|e| e.get("cliente_nombre").map(str::to_string))
                                })
                                disabled=submitting
                            />
                            <Select
                                label="Método de Pago"
                                value=Signal::derive(move || form.with(|f| f.metodo_pago.code().to_string()))
                                options=Signal::derive(move || form.with(|f| payment_options(&f.metodo_pago)))
                                on_change=Callback::new(move |v: String| {
                                    form.update(|f| f.metodo_pago = PaymentMethod::from_code(&v))
                                })
                                disabled=submitting
                            />
                            <Textarea
                                label="Detalles"
                                value=Signal::derive(move || form.with(|f| f.detalles.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.detalles = v))
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
                            {move || if submitting.get() { "Guardando..." } else { "Actualizar" }}
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
    fn test_payment_options() {
        let known = payment_options(&PaymentMethod::Card);
        assert_eq!(known.len(), 3);
        assert_eq!(known[0], ("efectivo".to_string(), "Efectivo".to_string()));

        let with_unknown = payment_options(&PaymentMethod::from_code("cheque"));
        assert_eq!(with_unknown.len(), 4);
        assert_eq!(with_unknown[3].0, "cheque");
    }
}
