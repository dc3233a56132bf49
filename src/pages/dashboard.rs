//! Dashboard Page
//!
//! Authenticated home: profile and group summary cards plus the account
//! and group actions. User and group are fetched independently on mount
//! and re-fetched after each mutating action.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::api::auth;
use crate::api::client::FetchError;
use crate::api::groups::{self, Group};
use crate::components::{FormField, Loading, Modal};
use crate::state::global::GlobalState;
use crate::validate;

/// Which action dialog is open, if any.
#[derive(Clone, Copy, PartialEq)]
enum Dialog {
    None,
    CreateGroup,
    LeaveGroup,
    Invite,
    ChangeUsername,
    ChangePassword,
}

fn replace_nav() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (group, set_group) = create_signal(None::<Group>);
    let (loading, set_loading) = create_signal(true);
    let (dialog, set_dialog) = create_signal(Dialog::None);

    // Responses landing after navigation away must not touch state
    let alive = store_value(true);
    on_cleanup(move || alive.set_value(false));

    let navigate_for_user = navigate.clone();
    let load_user = move || {
        let navigate = navigate_for_user.clone();
        spawn_local(async move {
            let result = auth::fetch_current_user().await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(user) => state.user.set(Some(user)),
                Err(FetchError::Unauthorized) => {
                    state.clear_session();
                    navigate("/login", replace_nav());
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                    state.clear_session();
                    navigate("/login", replace_nav());
                }
            }
        });
    };

    // Group failures other than "no group" are logged, never surfaced
    let load_group = move || {
        spawn_local(async move {
            let result = groups::fetch_my_group().await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(g) => set_group.set(Some(g)),
                Err(FetchError::NotFound) => set_group.set(None),
                Err(e) => {
                    tracing::warn!("group fetch failed: {}", e);
                    set_group.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    let load_user_for_effect = load_user.clone();
    create_effect(move |_| {
        load_user_for_effect();
        load_group();
    });

    let navigate_for_logout = navigate.clone();
    let on_logout = move |_| {
        let navigate = navigate_for_logout.clone();
        spawn_local(async move {
            // Best-effort notification; local logout happens regardless
            if let Err(e) = auth::logout().await {
                tracing::warn!("logout request failed: {}", e);
            }
            state.clear_session();
            navigate("/login", replace_nav());
        });
    };

    let close_dialog = Callback::new(move |_| set_dialog.set(Dialog::None));
    let reload_group = Callback::new(move |_| load_group());
    let load_user_for_reload = load_user.clone();
    let reload_user = Callback::new(move |_| load_user_for_reload());

    view! {
        <div class="space-y-8">
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                view! {
                    <div class="space-y-8">
                        <h1 class="text-3xl font-bold">
                            {move || {
                                let name = state.user.with(|u| {
                                    u.as_ref().map(|u| u.username.clone()).unwrap_or_default()
                                });
                                format!("Welcome, {}!", name)
                            }}
                        </h1>

                        <div class="grid md:grid-cols-2 gap-6">
                            <ProfileCard
                                on_change_username=Callback::new(move |_| set_dialog.set(Dialog::ChangeUsername))
                                on_change_password=Callback::new(move |_| set_dialog.set(Dialog::ChangePassword))
                            />
                            <GroupCard
                                group=group
                                on_create=Callback::new(move |_| set_dialog.set(Dialog::CreateGroup))
                                on_leave=Callback::new(move |_| set_dialog.set(Dialog::LeaveGroup))
                                on_invite=Callback::new(move |_| set_dialog.set(Dialog::Invite))
                            />
                        </div>

                        // Quick actions
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Quick Actions"</h2>
                            <div class="flex flex-wrap gap-3">
                                <a
                                    href="/chores"
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                >
                                    "Manage Chores"
                                </a>
                                <button
                                    on:click=on_logout.clone()
                                    class="px-4 py-2 border border-red-700 text-red-400 hover:bg-red-900/30
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Logout"
                                </button>
                            </div>
                        </section>
                    </div>
                }.into_view()
            }}

            // Action dialogs
            {move || match dialog.get() {
                Dialog::CreateGroup => view! {
                    <CreateGroupModal on_close=close_dialog on_saved=reload_group />
                }.into_view(),
                Dialog::LeaveGroup => view! {
                    <LeaveGroupModal on_close=close_dialog on_saved=reload_group />
                }.into_view(),
                Dialog::Invite => view! {
                    <InviteModal on_close=close_dialog />
                }.into_view(),
                Dialog::ChangeUsername => view! {
                    <ChangeUsernameModal on_close=close_dialog on_saved=reload_user />
                }.into_view(),
                Dialog::ChangePassword => view! {
                    <ChangePasswordModal on_close=close_dialog />
                }.into_view(),
                Dialog::None => view! {}.into_view(),
            }}
        </div>
    }
}

/// Profile details card
#[component]
fn ProfileCard(
    on_change_username: Callback<()>,
    on_change_password: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Profile Details"</h2>
            {move || {
                state.user.get().map(|user| view! {
                    <div class="space-y-2 text-gray-300">
                        <p><span class="text-gray-400">"Username: "</span>{user.username.clone()}</p>
                        <p><span class="text-gray-400">"Email: "</span>{user.email.clone().unwrap_or_default()}</p>
                        <p><span class="text-gray-400">"Full Name: "</span>{user.full_name.clone().unwrap_or_default()}</p>
                        <p>
                            <span class="text-gray-400">"Email Verified: "</span>
                            {if user.email_verified { "Yes" } else { "No" }}
                        </p>
                    </div>
                })
            }}
            <div class="flex gap-3 mt-4">
                <button
                    on:click=move |_| on_change_username.call(())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Change Username"
                </button>
                <button
                    on:click=move |_| on_change_password.call(())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Change Password"
                </button>
            </div>
        </section>
    }
}

/// Household group summary card, or the "no group" branch
#[component]
fn GroupCard(
    group: ReadSignal<Option<Group>>,
    on_create: Callback<()>,
    on_leave: Callback<()>,
    on_invite: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Household Group"</h2>
            {move || {
                match group.get() {
                    Some(g) => view! {
                        <div>
                            <div class="space-y-2 text-gray-300">
                                <p><span class="text-gray-400">"Group Name: "</span>{g.group_name.clone()}</p>
                                <p><span class="text-gray-400">"Admin: "</span>{g.group_admin_username.clone()}</p>
                                <p><span class="text-gray-400">"Members: "</span>{g.users_in_group.len()}</p>
                            </div>
                            <div class="flex flex-wrap gap-3 mt-4">
                                <button
                                    on:click=move |_| on_invite.call(())
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                                >
                                    "Invite Roommate"
                                </button>
                                <button
                                    on:click=move |_| on_leave.call(())
                                    class="px-4 py-2 border border-red-700 text-red-400 hover:bg-red-900/30
                                           rounded-lg text-sm font-medium transition-colors"
                                >
                                    "Leave Group"
                                </button>
                            </div>
                        </div>
                    }.into_view(),
                    None => view! {
                        <div>
                            <p class="text-gray-400 mb-4">"You are not part of any group yet."</p>
                            <button
                                on:click=move |_| on_create.call(())
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Create Group"
                            </button>
                            <p class="text-gray-500 text-xs mt-3">
                                "Joining an existing group happens through an invite link sent by its admin."
                            </p>
                        </div>
                    }.into_view(),
                }
            }}
        </section>
    }
}

/// Create group dialog
#[component]
fn CreateGroupModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let n = name.get();
        if let Err(msg) = validate::validate_name("Group name", &n) {
            set_error.set(Some(msg));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match groups::create_group(&n).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    on_saved.call(());
                    on_close.call(());
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Create Group" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Group Name" input_type="text" value=name set_value=set_name />
                <ModalError error=error />
                <ModalButtons submitting=submitting submit_label="Create" on_cancel=on_close />
            </form>
        </Modal>
    }
}

/// Leave group confirmation dialog
#[component]
fn LeaveGroupModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_confirm = move |_| {
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match groups::leave_group().await {
                Ok(msg) => {
                    state.show_success(&msg);
                    on_saved.call(());
                    on_close.call(());
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Leave Group" on_close=on_close>
            <div class="space-y-4">
                <p class="text-gray-300">
                    "Are you sure you want to leave your group? You will need a new invite to rejoin."
                </p>
                <ModalError error=error />
                <div class="flex space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        on:click=on_confirm
                        disabled=move || submitting.get()
                        class="flex-1 px-4 py-3 bg-red-700 hover:bg-red-600 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Leaving..." } else { "Leave Group" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

/// Invite roommate dialog. Invites do not change the group until accepted,
/// so nothing is re-fetched on success.
#[component]
fn InviteModal(on_close: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let e = email.get();
        if let Err(msg) = validate::validate_email(&e) {
            set_error.set(Some(msg));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match groups::invite_user(&e).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    on_close.call(());
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Invite Roommate" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Email" input_type="email" value=email set_value=set_email />
                <ModalError error=error />
                <ModalButtons submitting=submitting submit_label="Send Invite" on_cancel=on_close />
            </form>
        </Modal>
    }
}

/// Change username dialog
#[component]
fn ChangeUsernameModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        if let Err(msg) = validate::validate_name("Username", &u) {
            set_error.set(Some(msg));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match auth::change_username(&u).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    on_saved.call(());
                    on_close.call(());
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Change Username" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="New Username" input_type="text" value=username set_value=set_username />
                <ModalError error=error />
                <ModalButtons submitting=submitting submit_label="Update" on_cancel=on_close />
            </form>
        </Modal>
    }
}

/// Change password dialog
#[component]
fn ChangePasswordModal(on_close: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (old_password, set_old_password) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let old = old_password.get();
        let new = new_password.get();
        if old.is_empty() {
            set_error.set(Some("Current password is required".to_string()));
            return;
        }
        if let Err(msg) = validate::validate_password(&new) {
            set_error.set(Some(msg));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match auth::change_password(&old, &new).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    on_close.call(());
                }
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Change Password" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Current Password" input_type="password" value=old_password set_value=set_old_password />
                <FormField label="New Password" input_type="password" value=new_password set_value=set_new_password />
                <ModalError error=error />
                <ModalButtons submitting=submitting submit_label="Update" on_cancel=on_close />
            </form>
        </Modal>
    }
}

/// Inline error row for dialogs
#[component]
fn ModalError(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error.get().map(|msg| view! {
                <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                    {msg}
                </div>
            })
        }}
    }
}

/// Cancel/submit button row for dialogs
#[component]
fn ModalButtons(
    submitting: ReadSignal<bool>,
    submit_label: &'static str,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex space-x-3 pt-2">
            <button
                type="button"
                on:click=move |_| on_cancel.call(())
                class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
            >
                "Cancel"
            </button>
            <button
                type="submit"
                disabled=move || submitting.get()
                class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Saving..." } else { submit_label }}
            </button>
        </div>
    }
}
