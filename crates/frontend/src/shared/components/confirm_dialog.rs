use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog guarding destructive actions.
///
/// The owner keeps `open`; `on_confirm` runs when the user accepts and the
/// dialog stays open until the owner closes it, so a failed request can be
/// retried.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    /// Label of the confirming button
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    /// Disables the buttons while the request is in flight
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_text = move || confirm_label.get().unwrap_or_else(|| "Eliminar".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                            disabled=busy
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                        >
                            {confirm_text}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
