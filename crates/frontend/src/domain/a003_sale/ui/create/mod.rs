use super::edit::payment_options;
use crate::domain::a003_sale::api;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a003_sale::aggregate::{PaymentMethod, Sale, SaleCreateForm, SaleStatus};
use contracts::shared::validation::{validate_then, FormErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    SaleStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

/// "Agregar Nueva Venta" dialog.
///
/// Shares no state with the details modal.
#[component]
pub fn SaleCreateDialog(open: RwSignal<bool>, on_created: Callback<Sale>) -> impl IntoView {
    let notify = use_notifications();
    let form = RwSignal::new(SaleCreateForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    let field_error =
        move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let dto = match form.with_untracked(|f| validate_then(f, SaleCreateForm::to_dto)) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        submitting.set(true);
        spawn_local(async move {
            match api::create_sale(&dto).await {
                Ok(created) => {
                    on_created.run(created);
                    form.set(SaleCreateForm::default());
                    open.set(false);
                    notify.success("La venta ha sido agregada exitosamente.");
                }
                Err(e) => {
                    log::error!("failed to create sale: {}", e);
                    notify.error("Error al agregar la venta");
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Agregar Nueva Venta"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">"Ingresa los datos de la nueva venta."</p>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Input
                                label="Fecha"
                                input_type="date"
                                value=Signal::derive(move || form.with(|f| f.fecha.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.fecha = v))
                                error=field_error("fecha")
                                disabled=submitting
                            />
                            <Input
                                label="Cliente"
                                value=Signal::derive(move || form.with(|f| f.cliente_nombre.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.cliente_nombre = v))
                                error=field_error("cliente_nombre")
                                disabled=submitting
                            />
                            <Input
                                label="Total"
                                input_type="number"
                                value=Signal::derive(move || form.with(|f| f.total_text.clone()))
                                on_input=Callback::new(move |v: String| form.update(|f| f.set_total(v)))
                                error=field_error("total")
                                disabled=submitting
                            />
                            <Select
                                label="Estado"
                                value=Signal::derive(move || form.with(|f| f.estado.code().to_string()))
                                options=Signal::derive(status_options)
                                on_change=Callback::new(move |v: String| {
                                    form.update(|f| f.estado = SaleStatus::from_code(&v))
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
                            {move || if submitting.get() { "Guardando..." } else { "Agregar Venta" }}
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
    fn test_status_options() {
        assert_eq!(
            status_options(),
            vec![
                ("pendiente".to_string(), "Pendiente".to_string()),
                ("completado".to_string(), "Completado".to_string()),
            ]
        );
    }
}
