use crate::domain::a005_supplier::api;
use crate::shared::components::ui::Input;
use crate::shared::notifications::use_notifications;
use contracts::domain::a005_supplier::aggregate::{
    FieldDescriptor, Supplier, SupplierField, SupplierForm, SUPPLIER_FIELDS,
};
use contracts::shared::validation::{validate_then, FormErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Dialog texts for the add and the edit variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

pub fn form_texts(is_edit: bool) -> FormTexts {
    if is_edit {
        FormTexts {
            title: "Editar Proveedor",
            description: "Modifica los datos del proveedor seleccionado",
            submit: "Guardar Cambios",
            success: "El proveedor ha sido actualizado correctamente.",
            failure: "No se pudo actualizar el proveedor.",
        }
    } else {
        FormTexts {
            title: "Agregar Proveedor",
            description: "Ingresa los datos del nuevo proveedor",
            submit: "Agregar Proveedor",
            success: "El proveedor ha sido agregado correctamente.",
            failure: "No se pudo agregar el proveedor.",
        }
    }
}

fn input_type(field: SupplierField) -> &'static str {
    match field {
        SupplierField::Email => "email",
        _ => "text",
    }
}

/// Add/edit dialog of a supplier.
///
/// `supplier` decides the mode when the dialog opens: `None` adds a new
/// supplier, `Some` edits it. Both modes render the same `SUPPLIER_FIELDS`.
#[component]
pub fn SupplierFormDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    supplier: Signal<Option<Supplier>>,
    /// Called with the server's object and whether it replaced an existing row
    on_saved: Callback<(Supplier, bool)>,
) -> impl IntoView {
    let notify = use_notifications();
    let form = RwSignal::new(SupplierForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            let fresh = supplier
                .get()
                .map(|s| SupplierForm::from_supplier(&s))
                .unwrap_or_default();
            form.set(fresh);
            errors.set(FormErrors::default());
        }
    });

    let texts = Signal::derive(move || form.with(|f| form_texts(f.is_edit())));

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let (id, dto) = match form.with_untracked(|f| {
            validate_then(f, SupplierForm::to_dto).map(|dto| (f.id.clone(), dto))
        }) {
            Ok(v) => v,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        let texts = texts.get_untracked();
        errors.set(FormErrors::default());
        submitting.set(true);
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_supplier(id, &dto).await,
                None => api::create_supplier(&dto).await,
            };
            match result {
                Ok(saved) => {
                    on_saved.run((saved, id.is_some()));
                    form.set(SupplierForm::default());
                    open.set(false);
                    notify.success(texts.success);
                }
                Err(e) => {
                    log::error!("failed to save supplier {:?}: {}", id, e);
                    notify.error(texts.failure);
                }
            }
            submitting.set(false);
        });
    };

    let field_input = move |d: FieldDescriptor| {
        let field = d.field;
        view! {
            <Input
                id=field.key()
                label=d.label
                input_type=input_type(field)
                value=Signal::derive(move || form.with(|f| f.get(field).to_string()))
                on_input=Callback::new(move |v: String| form.update(|f| f.set(field, v)))
                error=Signal::derive(move || errors.with(|e| e.get(field.key()).map(str::to_string)))
                disabled=submitting
            />
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || texts.get().title}</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">{move || texts.get().description}</p>
                        <Flex vertical=true gap=FlexGap::Small>
                            {SUPPLIER_FIELDS.iter().copied().map(field_input).collect_view()}
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
                            {move || if submitting.get() { "Guardando..." } else { texts.get().submit }}
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
    fn test_texts_follow_mode() {
        assert_eq!(form_texts(false).submit, "Agregar Proveedor");
        assert_eq!(form_texts(true).title, "Editar Proveedor");
        assert_eq!(form_texts(true).submit, "Guardar Cambios");
    }

    #[test]
    fn test_only_email_gets_email_input() {
        let types: Vec<&str> = SUPPLIER_FIELDS.iter().map(|d| input_type(d.field)).collect();
        assert_eq!(types, vec!["text", "email", "text", "text", "text"]);
    }
}
