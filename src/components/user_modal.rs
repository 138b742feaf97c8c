//! Create/edit modal for user accounts.

#[cfg(test)]
#[path = "user_modal_test.rs"]
mod user_modal_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Values collected by the modal form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: String,
    pub is_active: bool,
}

/// Per-field validation messages. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<&'static str>,
    pub full_name: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.password.is_none()
    }
}

/// Validate the form. A password is mandatory when creating; when editing
/// it may be left blank to keep the current one, but a non-blank password
/// must still meet the length rule.
pub fn validate(form: &UserForm, password_required: bool) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !email_looks_valid(form.email.trim()) {
        errors.email = Some("Email is invalid");
    }

    if form.full_name.trim().is_empty() {
        errors.full_name = Some("Full name is required");
    }

    if password_required && form.password.is_empty() {
        errors.password = Some("Password is required");
    } else if !form.password.is_empty() && form.password.len() < 8 {
        errors.password = Some("Password must be at least 8 characters");
    }

    errors
}

/// Shape check only; the service remains the authority on addresses.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Modal form for creating a user, or editing `editing` when given.
#[component]
pub fn UserModal(
    editing: Option<User>,
    /// Error from the submit action (e.g. "Email already registered").
    submit_error: Signal<Option<String>>,
    on_submit: Callback<UserForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = editing.is_some();
    let title = if is_edit { "Edit User" } else { "Add User" };

    let email = RwSignal::new(editing.as_ref().map_or_else(String::new, |u| u.email.clone()));
    let full_name = RwSignal::new(
        editing
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(
        editing
            .as_ref()
            .map_or_else(|| "user".to_owned(), |u| u.role.clone()),
    );
    let is_active = RwSignal::new(editing.as_ref().is_none_or(|u| u.is_active));
    let errors = RwSignal::new(FormErrors::default());

    let submit = Callback::new(move |()| {
        let form = UserForm {
            email: email.get(),
            full_name: full_name.get(),
            password: password.get(),
            role: role.get(),
            is_active: is_active.get(),
        };
        let checked = validate(&form, !is_edit);
        if checked.is_empty() {
            on_submit.run(form);
        }
        errors.set(checked);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>

                {move || {
                    submit_error
                        .get()
                        .map(|msg| view! { <div class="form-error form-error--banner">{msg}</div> })
                }}

                <label class="dialog__label">
                    "Email Address"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || errors.get().email.map(|msg| view! { <span class="form-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Full Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    {move || errors.get().full_name.map(|msg| view! { <span class="form-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    {if is_edit { "Password (leave blank to keep)" } else { "Password" }}
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || errors.get().password.map(|msg| view! { <span class="form-error">{msg}</span> })}
                </label>

                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="user">"User"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </label>

                <Show when=move || is_edit>
                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {if is_edit { "Save Changes" } else { "Create User" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
