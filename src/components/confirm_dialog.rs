//! Modal confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Blocking yes/no dialog. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(default = "Confirm")] confirm_text: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
