//! Chores Page
//!
//! Group chore management: one-off chores, recurring schedules and the
//! member roster, split over three tabs. Requires group membership;
//! visitors without a group are bounced back to the dashboard.

use chrono::NaiveDateTime;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::api::chores::{
    self, Chore, NewRecurringChore, RecurringChore, RecurringChoreUpdate,
};
use crate::api::client::FetchError;
use crate::api::groups::{self, Group};
use crate::components::{FormField, ListSkeleton, Modal};
use crate::recurrence::{describe_rule, Frequency, RecurrenceRule, Weekday};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Chores,
    Recurring,
    Members,
}

/// Backend timestamps come back as naive UTC; render them in a short
/// human form, falling back to the raw string when parsing fails.
fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('Z');
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Assignee display name; degrades to "Unknown" while the group is
/// missing or the id is not in the member map.
fn assignee_name(group: Option<&Group>, user_id: &str) -> String {
    group
        .map(|g| g.username_for(user_id))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Partial update for a recurring schedule: changed fields only, except
/// `is_active` which is always carried.
fn recurring_update(
    orig: &RecurringChore,
    name: &str,
    description: &str,
    active: bool,
) -> RecurringChoreUpdate {
    RecurringChoreUpdate {
        name: (name != orig.chore_name).then(|| name.to_string()),
        description: (description != orig.chore_description).then(|| description.to_string()),
        is_active: Some(active),
    }
}

/// Date-only variant for due dates.
fn format_date(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('Z');
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Chores page component
#[component]
pub fn Chores() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (group, set_group) = create_signal(None::<Group>);
    let (chore_list, set_chore_list) = create_signal(Vec::<Chore>::new());
    let (recurring_list, set_recurring_list) = create_signal(Vec::<RecurringChore>::new());
    let (loading, set_loading) = create_signal(true);
    let (tab, set_tab) = create_signal(Tab::Chores);
    let (show_create, set_show_create) = create_signal(false);
    let (show_create_recurring, set_show_create_recurring) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<RecurringChore>);

    let alive = store_value(true);
    on_cleanup(move || alive.set_value(false));

    let load_chores = move || {
        spawn_local(async move {
            match chores::fetch_chores().await {
                Ok(list) => {
                    if alive.get_value() {
                        set_chore_list.set(list);
                    }
                }
                Err(e) => tracing::warn!("chore fetch failed: {}", e),
            }
        });
    };

    let load_recurring = move || {
        spawn_local(async move {
            match chores::fetch_recurring_chores().await {
                Ok(list) => {
                    if alive.get_value() {
                        set_recurring_list.set(list);
                    }
                }
                Err(e) => tracing::warn!("recurring chore fetch failed: {}", e),
            }
        });
    };

    let navigate_for_load = navigate.clone();
    create_effect(move |_| {
        let navigate = navigate_for_load.clone();
        // The three list fetches run uncoordinated; only the group result
        // drives navigation. Chores render with "Unknown" assignees until
        // (or unless) the group arrives.
        load_chores();
        load_recurring();
        spawn_local(async move {
            let result = groups::fetch_my_group().await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(g) => {
                    set_group.set(Some(g));
                    set_loading.set(false);
                }
                Err(FetchError::Unauthorized) => {
                    state.clear_session();
                    navigate(
                        "/login",
                        NavigateOptions { replace: true, ..Default::default() },
                    );
                }
                Err(FetchError::NotFound) => {
                    state.show_error("Join or create a group to manage chores");
                    navigate(
                        "/dashboard",
                        NavigateOptions { replace: true, ..Default::default() },
                    );
                }
                Err(e) => {
                    tracing::warn!("group fetch failed: {}", e);
                    state.show_error("Could not load your group");
                    set_loading.set(false);
                }
            }
        });
    });

    let on_complete = move |id: String| {
        spawn_local(async move {
            match chores::complete_chore(&id).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    load_chores();
                }
                Err(msg) => state.show_error(&msg),
            }
        });
    };

    let on_delete = move |id: String| {
        let confirmed = window()
            .confirm_with_message("Delete this chore?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match chores::delete_chore(&id).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    load_chores();
                }
                Err(msg) => state.show_error(&msg),
            }
        });
    };

    // Deleting a schedule also removes its pending instances
    let on_delete_recurring = move |id: String| {
        let confirmed = window()
            .confirm_with_message("Delete this recurring chore and its pending instances?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match chores::delete_recurring_chore(&id).await {
                Ok(msg) => {
                    state.show_success(&msg);
                    load_recurring();
                    load_chores();
                }
                Err(msg) => state.show_error(&msg),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Chores"</h1>
                {move || match tab.get() {
                    Tab::Chores => view! {
                        <button
                            on:click=move |_| set_show_create.set(true)
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "+ New Chore"
                        </button>
                    }.into_view(),
                    Tab::Recurring => view! {
                        <button
                            on:click=move |_| set_show_create_recurring.set(true)
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "+ New Recurring Chore"
                        </button>
                    }.into_view(),
                    Tab::Members => view! {}.into_view(),
                }}
            </div>

            <div class="flex space-x-1 bg-gray-800 rounded-lg p-1 w-fit">
                <TabButton label="Chores" this=Tab::Chores tab=tab set_tab=set_tab />
                <TabButton label="Recurring Chores" this=Tab::Recurring tab=tab set_tab=set_tab />
                <TabButton label="Members" this=Tab::Members tab=tab set_tab=set_tab />
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton /> }.into_view();
                }
                match tab.get() {
                    Tab::Chores => view! {
                        <ChoreTable
                            chores=chore_list
                            group=group
                            on_complete=Callback::new(on_complete)
                            on_delete=Callback::new(on_delete)
                        />
                    }.into_view(),
                    Tab::Recurring => view! {
                        <RecurringList
                            recurring=recurring_list
                            group=group
                            on_edit=Callback::new(move |rc| set_editing.set(Some(rc)))
                            on_delete=Callback::new(on_delete_recurring)
                        />
                    }.into_view(),
                    Tab::Members => view! { <MembersTab group=group /> }.into_view(),
                }
            }}

            {move || {
                show_create.get().then(|| view! {
                    <CreateChoreModal
                        group=group
                        on_close=Callback::new(move |_| set_show_create.set(false))
                        on_saved=Callback::new(move |_| load_chores())
                    />
                })
            }}
            {move || {
                show_create_recurring.get().then(|| view! {
                    <CreateRecurringModal
                        group=group
                        on_close=Callback::new(move |_| set_show_create_recurring.set(false))
                        on_saved=Callback::new(move |_| {
                            load_recurring();
                            load_chores();
                        })
                    />
                })
            }}
            {move || {
                editing.get().map(|rc| view! {
                    <EditRecurringModal
                        recurring=rc
                        on_close=Callback::new(move |_| set_editing.set(None))
                        on_saved=Callback::new(move |_| load_recurring())
                    />
                })
            }}
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    this: Tab,
    tab: ReadSignal<Tab>,
    set_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_tab.set(this)
            class=move || {
                if tab.get() == this {
                    "px-4 py-2 rounded-md bg-primary-600 text-white text-sm font-medium"
                } else {
                    "px-4 py-2 rounded-md text-gray-400 hover:text-white text-sm font-medium"
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn ChoreTable(
    chores: ReadSignal<Vec<Chore>>,
    group: ReadSignal<Option<Group>>,
    on_complete: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            {move || {
                let list = chores.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "No chores yet. Create one to get started."
                        </div>
                    }.into_view();
                }
                view! {
                    <table class="w-full text-left">
                        <thead class="bg-gray-900/50 text-gray-400 text-sm">
                            <tr>
                                <th class="px-4 py-3">"Chore"</th>
                                <th class="px-4 py-3">"Assigned To"</th>
                                <th class="px-4 py-3">"Status"</th>
                                <th class="px-4 py-3">"Created"</th>
                                <th class="px-4 py-3 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-700">
                            {list.into_iter().map(|chore| {
                                let assignee = group.with(|g| {
                                    assignee_name(g.as_ref(), &chore.assigned_user_id)
                                });
                                let created = chore
                                    .created_at
                                    .as_deref()
                                    .map(format_timestamp)
                                    .unwrap_or_default();
                                let complete_id = chore.id.clone().unwrap_or_default();
                                let delete_id = chore.id.clone().unwrap_or_default();
                                view! {
                                    <tr class="text-gray-300">
                                        <td class="px-4 py-3">
                                            <div class="font-medium text-white">{chore.chore_name.clone()}</div>
                                            <div class="text-sm text-gray-400">{chore.chore_description.clone()}</div>
                                        </td>
                                        <td class="px-4 py-3">{assignee}</td>
                                        <td class="px-4 py-3">
                                            {if chore.is_completed {
                                                view! {
                                                    <span class="px-2 py-1 rounded-full text-xs bg-green-900/50 text-green-400">
                                                        "Done"
                                                    </span>
                                                }
                                            } else {
                                                view! {
                                                    <span class="px-2 py-1 rounded-full text-xs bg-yellow-900/50 text-yellow-400">
                                                        "Pending"
                                                    </span>
                                                }
                                            }}
                                        </td>
                                        <td class="px-4 py-3 text-sm">{created}</td>
                                        <td class="px-4 py-3 text-right space-x-2">
                                            {(!chore.is_completed).then(|| view! {
                                                <button
                                                    on:click=move |_| on_complete.call(complete_id.clone())
                                                    class="px-3 py-1 bg-green-700 hover:bg-green-600 rounded text-sm transition-colors"
                                                >
                                                    "Complete"
                                                </button>
                                            })}
                                            <button
                                                on:click=move |_| on_delete.call(delete_id.clone())
                                                class="px-3 py-1 border border-red-700 text-red-400 hover:bg-red-900/30
                                                       rounded text-sm transition-colors"
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn RecurringList(
    recurring: ReadSignal<Vec<RecurringChore>>,
    group: ReadSignal<Option<Group>>,
    on_edit: Callback<RecurringChore>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {move || {
                let list = recurring.get();
                if list.is_empty() {
                    return view! {
                        <div class="bg-gray-800 rounded-xl text-center py-12 text-gray-400">
                            "No recurring chores yet."
                        </div>
                    }.into_view();
                }
                list.into_iter().map(|rc| {
                    let schedule = describe_rule(&rc.rrule);
                    let next_due = rc
                        .next_due_date
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "-".to_string());
                    let assignees = group.with(|g| {
                        rc.assigned_user_ids
                            .iter()
                            .map(|id| assignee_name(g.as_ref(), id))
                            .collect::<Vec<_>>()
                            .join(", ")
                    });
                    let edit_rc = rc.clone();
                    let delete_id = rc.id.clone().unwrap_or_default();
                    view! {
                        <div class="bg-gray-800 rounded-xl p-5">
                            <div class="flex items-start justify-between">
                                <div>
                                    <div class="flex items-center gap-2">
                                        <h3 class="font-semibold text-lg">{rc.chore_name.clone()}</h3>
                                        {if rc.is_active {
                                            view! {
                                                <span class="px-2 py-0.5 rounded-full text-xs bg-green-900/50 text-green-400">
                                                    "Active"
                                                </span>
                                            }
                                        } else {
                                            view! {
                                                <span class="px-2 py-0.5 rounded-full text-xs bg-gray-700 text-gray-400">
                                                    "Paused"
                                                </span>
                                            }
                                        }}
                                    </div>
                                    <p class="text-gray-400 text-sm mt-1">{rc.chore_description.clone()}</p>
                                    <p class="text-gray-300 text-sm mt-2">"Repeats " {schedule}</p>
                                    <p class="text-gray-400 text-sm">"Next due: " {next_due}</p>
                                    <p class="text-gray-400 text-sm">"Assigned to: " {assignees}</p>
                                </div>
                                <div class="flex gap-2">
                                    <button
                                        on:click=move |_| on_edit.call(edit_rc.clone())
                                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        on:click=move |_| on_delete.call(delete_id.clone())
                                        class="px-3 py-1 border border-red-700 text-red-400 hover:bg-red-900/30
                                               rounded text-sm transition-colors"
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn MembersTab(group: ReadSignal<Option<Group>>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            {move || {
                group.get().map(|g| {
                    let admin = g.group_admin_username.clone();
                    view! {
                        <div>
                            <p class="text-gray-400 mb-4">
                                "Admin: " <span class="text-white">{admin}</span>
                            </p>
                            <div class="flex flex-wrap gap-2">
                                {g.members().into_iter().map(|member| view! {
                                    <span class="px-3 py-1 bg-gray-700 rounded-full text-sm">
                                        {member.username}
                                    </span>
                                }).collect_view()}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn CreateChoreModal(
    group: ReadSignal<Option<Group>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (assignee, set_assignee) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let n = name.get();
        let d = description.get();
        if n.trim().is_empty() || d.trim().is_empty() {
            set_error.set(Some("Name and description are required".to_string()));
            return;
        }

        set_submitting.set(true);
        let a = assignee.get();
        spawn_local(async move {
            let picked = (!a.is_empty()).then_some(a.as_str());
            match chores::create_chore(&n, &d, picked).await {
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
        <Modal title="New Chore" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Name" input_type="text" value=name set_value=set_name />
                <FormField label="Description" input_type="text" value=description set_value=set_description />
                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Assign To"</label>
                    <select
                        on:change=move |ev| set_assignee.set(event_target_value(&ev))
                        class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-primary-500"
                    >
                        <option value="">"Assign to me"</option>
                        {move || {
                            group.with(|g| {
                                g.as_ref().map(|g| {
                                    g.members().into_iter().map(|member| view! {
                                        <option value=member.username.clone()>
                                            {member.username.clone()}
                                        </option>
                                    }).collect_view()
                                })
                            })
                        }}
                    </select>
                </div>
                {move || {
                    error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {msg}
                        </div>
                    })
                }}
                <div class="flex space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
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
                        {move || if submitting.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn CreateRecurringModal(
    group: ReadSignal<Option<Group>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (frequency, set_frequency) = create_signal(Frequency::Weekly);
    let (interval, set_interval) = create_signal(1u32);
    let selected_days = create_rw_signal(Vec::<Weekday>::new());
    let selected_members = create_rw_signal(Vec::<String>::new());
    let (start, set_start) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let toggle_day = move |day: Weekday| {
        selected_days.update(|days| {
            if let Some(pos) = days.iter().position(|d| *d == day) {
                days.remove(pos);
            } else {
                days.push(day);
            }
        });
    };

    let toggle_member = move |username: String| {
        selected_members.update(|members| {
            if let Some(pos) = members.iter().position(|m| *m == username) {
                members.remove(pos);
            } else {
                members.push(username);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let n = name.get();
        let d = description.get();
        if n.trim().is_empty() || d.trim().is_empty() {
            set_error.set(Some("Name and description are required".to_string()));
            return;
        }
        let members = selected_members.get();
        if members.is_empty() {
            set_error.set(Some("Assign at least one member".to_string()));
            return;
        }

        let mut days = selected_days.get();
        if frequency.get() == Frequency::Weekly {
            if days.is_empty() {
                set_error.set(Some("Pick at least one weekday".to_string()));
                return;
            }
            days.sort_by_key(|d| *d as u8);
        } else {
            days.clear();
        }

        let start_raw = start.get();
        if start_raw.is_empty() {
            set_error.set(Some("Start date is required".to_string()));
            return;
        }
        // datetime-local is in the browser's local zone; send UTC
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(&start_raw));
        if parsed.get_time().is_nan() {
            set_error.set(Some("Start date is invalid".to_string()));
            return;
        }
        let start_iso = String::from(parsed.to_iso_string());

        let rule = RecurrenceRule::new(frequency.get(), interval.get(), days);
        let payload = NewRecurringChore {
            name: n,
            description: d,
            assigned_usernames: members,
            rrule: rule.to_rule_string(),
            start_date: start_iso,
        };

        set_submitting.set(true);
        spawn_local(async move {
            match chores::create_recurring_chore(&payload).await {
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
        <Modal title="New Recurring Chore" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Name" input_type="text" value=name set_value=set_name />
                <FormField label="Description" input_type="text" value=description set_value=set_description />

                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Assign To"</label>
                    <div class="flex flex-wrap gap-2">
                        {move || {
                            group.with(|g| {
                                g.as_ref().map(|g| {
                                    g.members().into_iter().map(|member| {
                                        let username = member.username.clone();
                                        let toggle_name = username.clone();
                                        let check_name = username.clone();
                                        view! {
                                            <button
                                                type="button"
                                                on:click=move |_| toggle_member(toggle_name.clone())
                                                class=move || {
                                                    let picked = selected_members
                                                        .with(|m| m.contains(&check_name));
                                                    if picked {
                                                        "px-3 py-1 rounded-full text-sm bg-primary-600 text-white"
                                                    } else {
                                                        "px-3 py-1 rounded-full text-sm bg-gray-700 text-gray-300 hover:bg-gray-600"
                                                    }
                                                }
                                            >
                                                {username}
                                            </button>
                                        }
                                    }).collect_view()
                                })
                            })
                        }}
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"Repeats"</label>
                        <select
                            on:change=move |ev| {
                                let picked = event_target_value(&ev);
                                set_frequency.set(match picked.as_str() {
                                    "DAILY" => Frequency::Daily,
                                    "MONTHLY" => Frequency::Monthly,
                                    _ => Frequency::Weekly,
                                });
                            }
                            class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-primary-500"
                        >
                            <option value="DAILY">"Daily"</option>
                            <option value="WEEKLY" selected>"Weekly"</option>
                            <option value="MONTHLY">"Monthly"</option>
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">
                            {move || format!("Every N {}s", frequency.get().unit())}
                        </label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || interval.get().to_string()
                            on:input=move |ev| {
                                let parsed = event_target_value(&ev).parse().unwrap_or(1);
                                set_interval.set(std::cmp::max(parsed, 1));
                            }
                            class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-primary-500"
                        />
                    </div>
                </div>

                {move || {
                    (frequency.get() == Frequency::Weekly).then(|| view! {
                        <div>
                            <label class="block text-sm font-medium text-gray-300 mb-2">"On Days"</label>
                            <div class="flex flex-wrap gap-2">
                                {Weekday::ALL.iter().map(|day| {
                                    let day = *day;
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| toggle_day(day)
                                            class=move || {
                                                let picked = selected_days.with(|d| d.contains(&day));
                                                if picked {
                                                    "px-3 py-1 rounded-full text-sm bg-primary-600 text-white"
                                                } else {
                                                    "px-3 py-1 rounded-full text-sm bg-gray-700 text-gray-300 hover:bg-gray-600"
                                                }
                                            }
                                        >
                                            {day.name()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })
                }}

                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">"Starts"</label>
                    <input
                        type="datetime-local"
                        prop:value=move || start.get()
                        on:input=move |ev| set_start.set(event_target_value(&ev))
                        class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-primary-500"
                    />
                </div>

                {move || {
                    error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {msg}
                        </div>
                    })
                }}
                <div class="flex space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
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
                        {move || if submitting.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Edit dialog for a recurring schedule: name, description and the
/// active switch. Changed fields plus the active flag are sent.
#[component]
fn EditRecurringModal(
    recurring: RecurringChore,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = store_value(recurring.id.clone().unwrap_or_default());
    let original = store_value(recurring.clone());
    let (name, set_name) = create_signal(recurring.chore_name.clone());
    let (description, set_description) = create_signal(recurring.chore_description.clone());
    let (active, set_active) = create_signal(recurring.is_active);
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let n = name.get();
        let d = description.get();
        if n.trim().is_empty() || d.trim().is_empty() {
            set_error.set(Some("Name and description are required".to_string()));
            return;
        }

        let update = original.with_value(|orig| recurring_update(orig, &n, &d, active.get()));

        set_submitting.set(true);
        spawn_local(async move {
            match chores::update_recurring_chore(&id.get_value(), &update).await {
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
        <Modal title="Edit Recurring Chore" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField label="Name" input_type="text" value=name set_value=set_name />
                <FormField label="Description" input_type="text" value=description set_value=set_description />
                <label class="flex items-center gap-3 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |ev| set_active.set(event_target_checked(&ev))
                        class="w-4 h-4 accent-primary-600"
                    />
                    <span class="text-sm text-gray-300">"Active"</span>
                </label>
                {move || {
                    error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {msg}
                        </div>
                    })
                }}
                <div class="flex space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
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
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_renders_naive_utc() {
        assert_eq!(
            format_timestamp("2025-03-09T14:05:00"),
            "Mar 9, 2025 14:05"
        );
    }

    #[test]
    fn format_timestamp_handles_fractional_seconds_and_z() {
        assert_eq!(
            format_timestamp("2025-12-01T08:30:15.123456Z"),
            "Dec 1, 2025 08:30"
        );
    }

    #[test]
    fn format_timestamp_falls_back_to_raw_on_garbage() {
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn format_date_drops_time() {
        assert_eq!(format_date("2025-07-04T23:59:59"), "Jul 4, 2025");
    }

    fn sample_group() -> Group {
        Group {
            id: Some("g1".to_string()),
            group_name: "Flat 4".to_string(),
            group_admin_id: "u1".to_string(),
            group_admin_username: "alice".to_string(),
            users_in_group: vec!["u1".to_string(), "u2".to_string()],
            users_in_group_usernames: vec!["alice".to_string(), "bob".to_string()],
        }
    }

    #[test]
    fn assignee_resolves_through_member_map() {
        let group = sample_group();
        assert_eq!(assignee_name(Some(&group), "u2"), "bob");
    }

    #[test]
    fn assignee_falls_back_to_unknown_without_a_group() {
        // Chore rows render before (or without) a group response
        assert_eq!(assignee_name(None, "u2"), "Unknown");
        let group = sample_group();
        assert_eq!(assignee_name(Some(&group), "u9"), "Unknown");
    }

    fn sample_recurring() -> RecurringChore {
        RecurringChore {
            id: Some("r1".to_string()),
            group_id: Some("g1".to_string()),
            chore_name: "Trash".to_string(),
            chore_description: "Take out the bins".to_string(),
            assigned_user_ids: vec!["u1".to_string()],
            rrule: "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO".to_string(),
            start_date: None,
            next_due_date: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn recurring_update_sends_changed_fields_only() {
        let orig = sample_recurring();
        let update = recurring_update(&orig, "Trash", "Bins and recycling", true);
        assert_eq!(update.name, None);
        assert_eq!(update.description, Some("Bins and recycling".to_string()));
    }

    #[test]
    fn recurring_update_always_carries_active_flag() {
        let orig = sample_recurring();
        let update = recurring_update(&orig, "Trash", "Take out the bins", true);
        assert_eq!(update.is_active, Some(true));
        let update = recurring_update(&orig, "Trash", "Take out the bins", false);
        assert_eq!(update.is_active, Some(false));
    }
}
