use crate::api::MedanClient;
use crate::components::{
    confirm_modal::ConfirmModal, error_view::ErrorView, loading::Loading, search_box::SearchBox,
};
use crate::hooks::use_remote_list;
use crate::pages::alert;
use futures::FutureExt;
use shared::models::{ALL_CITIES, AdminUser, CITIES, format_number};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Whether a backend rejection is really the backend telling us the user
/// is already in the requested state ("already banned", "not banned").
/// Tolerated as implicit success: refetch silently instead of alerting.
fn is_idempotency_quirk(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("already") || message.contains("not")
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let city = use_state(|| ALL_CITIES.to_string());
    let list = use_remote_list((*city).clone(), |city: String| {
        let client = MedanClient::shared();
        async move { client.list_users(&city).await }.boxed_local()
    });
    let query = use_state(String::new);
    let processing_id = use_state(|| None::<String>);
    let ban_target = use_state(|| None::<AdminUser>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_city_change = {
        let city = city.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                city.set(select.value());
            }
        })
    };

    let on_close_modal = {
        let ban_target = ban_target.clone();
        Callback::from(move |()| ban_target.set(None))
    };

    // One handler serves ban and unban, branching on the current flag.
    let on_confirm_toggle = {
        let list = list.clone();
        let processing_id = processing_id.clone();
        let ban_target = ban_target.clone();
        Callback::from(move |()| {
            let Some(user) = (*ban_target).clone() else {
                return;
            };
            let list = list.clone();
            let processing_id = processing_id.clone();
            let ban_target = ban_target.clone();
            let key = user.key();
            processing_id.set(Some(key.clone()));
            spawn_local(async move {
                let client = MedanClient::shared();
                let was_banned = user.is_banned();
                let result = if was_banned {
                    client.unban_user(&key).await
                } else {
                    client.ban_user(&key).await
                };
                match result {
                    Ok(()) => {
                        list.refresh();
                        ban_target.set(None);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        if is_idempotency_quirk(&message) {
                            list.refresh();
                            ban_target.set(None);
                        } else if was_banned {
                            alert(&format!("Failed to unban: {message}"));
                        } else {
                            alert(&format!("Failed to ban: {message}"));
                        }
                    }
                }
                processing_id.set(None);
            });
        })
    };

    let filtered: Vec<AdminUser> = list
        .items
        .iter()
        .filter(|user| user.matches(&query))
        .cloned()
        .collect();

    let body = if list.loading() {
        html! { <Loading label="Loading users..." /> }
    } else if let Some(message) = list.error() {
        let on_retry = {
            let list = list.clone();
            Callback::from(move |()| list.refresh())
        };
        html! { <ErrorView {message} {on_retry} /> }
    } else if filtered.is_empty() {
        let empty = if query.is_empty() {
            "No users available".to_string()
        } else {
            format!("No users found matching \"{}\"", *query)
        };
        html! { <div class="text-center py-20 text-base-content/60">{ empty }</div> }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"User Details"}</th>
                            <th>{"Contact & Location"}</th>
                            <th>{"Balance"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.iter().map(|user| {
                            let key = user.key();
                            let is_processing = (*processing_id).as_deref() == Some(key.as_str());
                            let is_banned = user.is_banned();
                            let open_modal = {
                                let ban_target = ban_target.clone();
                                let user = user.clone();
                                Callback::from(move |_: MouseEvent| {
                                    ban_target.set(Some(user.clone()));
                                })
                            };
                            html! {
                                <tr key={key.clone()}>
                                    <td>
                                        <div class="flex items-center gap-3">
                                            <div class="avatar placeholder">
                                                <div class="bg-primary/10 text-primary rounded-lg w-10">
                                                    <span class="text-sm font-bold">{ user.initials() }</span>
                                                </div>
                                            </div>
                                            <div>
                                                <p class="font-bold">{ user.full_name() }</p>
                                                <p class="text-xs text-base-content/60">{ &user.email }</p>
                                                if is_banned {
                                                    <span class="badge badge-error badge-sm mt-1">{"Banned"}</span>
                                                }
                                            </div>
                                        </div>
                                    </td>
                                    <td>
                                        <div class="text-sm space-y-1">
                                            <div class="flex items-center gap-2">
                                                <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-4 h-4 text-base-content/40" />
                                                { &user.phone_number }
                                            </div>
                                            <div class="flex items-center gap-2">
                                                <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4 text-base-content/40" />
                                                { &user.city }
                                            </div>
                                        </div>
                                    </td>
                                    <td class="font-bold">
                                        { format!("SYP {}", format_number(user.balance, 0)) }
                                    </td>
                                    <td>
                                        <button
                                            class={if is_banned { "btn btn-ghost btn-sm text-success" } else { "btn btn-ghost btn-sm text-error" }}
                                            title={if is_banned { "Unban User" } else { "Ban User" }}
                                            disabled={is_processing}
                                            onclick={open_modal}
                                        >
                                            if is_processing {
                                                <span class="loading loading-spinner loading-sm"></span>
                                            } else if is_banned {
                                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-5 h-5" />
                                            } else {
                                                <Icon icon_id={IconId::HeroiconsOutlineNoSymbol} class="w-5 h-5" />
                                            }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let (modal_title, modal_message, modal_label) = match (*ban_target).as_ref() {
        Some(user) if user.is_banned() => (
            "Unban User",
            format!("Lift the ban on {}?", user.full_name()),
            "Unban",
        ),
        Some(user) => (
            "Ban User",
            format!(
                "Ban {}? They will no longer be able to use the platform.",
                user.full_name()
            ),
            "Ban",
        ),
        None => ("Ban User", String::new(), "Ban"),
    };
    let modal_danger = (*ban_target)
        .as_ref()
        .is_some_and(|user| !user.is_banned());

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row justify-end items-start md:items-center gap-4">
                <select class="select select-bordered w-full md:w-48" onchange={on_city_change}>
                    <option value={ALL_CITIES} selected={*city == ALL_CITIES}>{ ALL_CITIES }</option>
                    { for CITIES.iter().map(|&name| html! {
                        <option value={name} selected={*city == name}>{ name }</option>
                    }) }
                </select>
                <SearchBox
                    value={(*query).clone()}
                    placeholder="Search by name or email..."
                    on_change={on_search}
                />
            </div>

            <div class="bg-base-100 rounded-box shadow border border-base-300 overflow-hidden">
                { body }
            </div>

            <ConfirmModal
                open={ban_target.is_some()}
                title={modal_title}
                message={modal_message}
                confirm_label={modal_label}
                danger={modal_danger}
                busy={processing_id.is_some()}
                on_confirm={on_confirm_toggle}
                on_close={on_close_modal}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_idempotency_quirk;

    /// Tests the backend messages tolerated as implicit success
    #[test]
    fn test_idempotency_quirk_detection() {
        assert!(is_idempotency_quirk("User is already banned"));
        assert!(is_idempotency_quirk("User is NOT banned"));
        assert!(!is_idempotency_quirk("Internal server error"));
        assert!(!is_idempotency_quirk(""));
    }
}
