//! User management page (admin only).

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::user_modal::{UserForm, UserModal};
use crate::net::types::User;
#[cfg(feature = "hydrate")]
use crate::net::types::{NewUser, UserUpdate};
use crate::util::format::format_datetime;

/// What the user modal is currently doing.
#[derive(Clone, Debug, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(User),
}

/// Account listing with create, edit, and delete behind a confirmation.
/// The service enforces the admin requirement; this page just renders
/// whatever errors it returns.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let users = LocalResource::new(move || crate::net::api::fetch_users(session));
    let search = RwSignal::new(String::new());
    let modal = RwSignal::new(ModalState::Closed);
    let pending_delete = RwSignal::new(None::<User>);
    let submit_error = RwSignal::new(None::<String>);

    let open_create = move |_| {
        submit_error.set(None);
        modal.set(ModalState::Create);
    };

    let on_cancel = Callback::new(move |()| {
        submit_error.set(None);
        modal.set(ModalState::Closed);
    });

    let on_submit = Callback::new(move |form: UserForm| {
        #[cfg(feature = "hydrate")]
        {
            let state = modal.get_untracked();
            leptos::task::spawn_local(async move {
                let outcome = match state {
                    ModalState::Create => {
                        let payload = NewUser {
                            email: form.email,
                            full_name: form.full_name,
                            password: form.password,
                            role: form.role,
                        };
                        crate::net::api::create_user(session, &payload).await.map(|_| ())
                    }
                    ModalState::Edit(user) => {
                        let update = UserUpdate {
                            email: form.email,
                            full_name: form.full_name,
                            role: form.role,
                            is_active: form.is_active,
                        };
                        crate::net::api::update_user(session, user.id, &update).await.map(|_| ())
                    }
                    ModalState::Closed => Ok(()),
                };
                match outcome {
                    Ok(()) => {
                        submit_error.set(None);
                        modal.set(ModalState::Closed);
                        users.refetch();
                    }
                    Err(err) => submit_error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(user) = pending_delete.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(session, user.id).await {
                    Ok(()) => {
                        pending_delete.set(None);
                        users.refetch();
                    }
                    Err(err) => {
                        pending_delete.set(None);
                        leptos::logging::warn!("delete user failed: {err}");
                    }
                }
            });
        }
    });

    let filtered = move || {
        let needle = search.get().to_lowercase();
        users.get().map(|result| {
            result.map(|list| {
                list.into_iter()
                    .filter(|user| {
                        needle.is_empty()
                            || user.email.to_lowercase().contains(&needle)
                            || user
                                .full_name
                                .as_deref()
                                .is_some_and(|name| name.to_lowercase().contains(&needle))
                    })
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="page users-page">
            <header class="users-page__header">
                <div>
                    <h1>"User Management"</h1>
                    <p class="users-page__subtitle">"Manage system users and permissions"</p>
                </div>
                <button class="btn btn--primary" on:click=open_create>
                    "Add User"
                </button>
            </header>

            <input
                class="users-page__search"
                type="search"
                placeholder="Search by email or name"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <p class="page__loading">"Loading users..."</p> }>
                {move || {
                    filtered()
                        .map(|result| match result {
                            Ok(list) => view! {
                                <UsersTable
                                    users=list
                                    on_edit=Callback::new(move |user| {
                                        submit_error.set(None);
                                        modal.set(ModalState::Edit(user));
                                    })
                                    on_delete=Callback::new(move |user| {
                                        pending_delete.set(Some(user));
                                    })
                                />
                            }
                            .into_any(),
                            Err(err) => view! {
                                <div class="form-error form-error--banner">
                                    {format!("Failed to load users: {err}")}
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>

            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Create => Some(
                    view! {
                        <UserModal
                            editing=None
                            submit_error=submit_error.into()
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    }
                    .into_any(),
                ),
                ModalState::Edit(user) => Some(
                    view! {
                        <UserModal
                            editing=Some(user)
                            submit_error=submit_error.into()
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    }
                    .into_any(),
                ),
            }}

            {move || {
                pending_delete
                    .get()
                    .map(|user| {
                        let name = user.display_name().to_owned();
                        view! {
                            <ConfirmDialog
                                title="Delete User".to_owned()
                                message=format!("Remove {name}? This cannot be undone.")
                                confirm_text="Delete"
                                on_confirm=on_confirm_delete
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn UsersTable(
    users: Vec<User>,
    on_edit: Callback<User>,
    on_delete: Callback<User>,
) -> impl IntoView {
    if users.is_empty() {
        return view! { <p class="panel__empty">"No matching users."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Email"</th>
                    <th>"Name"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Last Login"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let edit_user = user.clone();
                        let delete_user = user.clone();
                        let role_class = if user.is_admin() {
                            "badge badge--blue"
                        } else {
                            "badge"
                        };
                        let (status_class, status_label) = if user.is_active {
                            ("status status--ok", "Active")
                        } else {
                            ("status status--review", "Inactive")
                        };
                        let last_login = user
                            .last_login
                            .as_deref()
                            .map(format_datetime)
                            .unwrap_or_else(|| "Never".to_owned());
                        view! {
                            <tr>
                                <td>{user.email.clone()}</td>
                                <td>{user.full_name.clone().unwrap_or_default()}</td>
                                <td>
                                    <span class=role_class>{user.role.clone()}</span>
                                </td>
                                <td>
                                    <span class=status_class>{status_label}</span>
                                </td>
                                <td>{last_login}</td>
                                <td class="data-table__actions">
                                    <button
                                        class="btn btn--link"
                                        on:click=move |_| on_edit.run(edit_user.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn--link btn--danger-link"
                                        on:click=move |_| on_delete.run(delete_user.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
