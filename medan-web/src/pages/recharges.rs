use crate::api::MedanClient;
use crate::components::{
    confirm_modal::ConfirmModal, error_view::ErrorView, loading::Loading, search_box::SearchBox,
};
use crate::hooks::use_remote_list;
use crate::pages::alert;
use futures::FutureExt;
use shared::models::{RechargeStatus, Transaction, format_number};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Which slice of the transaction list is shown. Pending has its own
/// backend endpoint; the rest narrow the full list client-side by raw
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RechargeFilter {
    All,
    Pending,
    Accepted,
    Rejected,
}

impl RechargeFilter {
    const TABS: [Self; 4] = [Self::All, Self::Pending, Self::Accepted, Self::Rejected];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    fn retains(self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            // The pending endpoint is already narrower, but rows are
            // still checked locally so a mislabeled row cannot show up
            // under the wrong tab.
            Self::Pending => matches!(tx.status, 0 | 1),
            Self::Accepted => tx.status == 2,
            Self::Rejected => tx.status == 3,
        }
    }
}

#[derive(Properties, PartialEq)]
struct ApproveModalProps {
    /// The transaction being approved, `None` closes the dialog.
    target: Option<Transaction>,
    busy: bool,
    /// Emitted with the validated positive amount to credit.
    on_submit: Callback<f64>,
    on_close: Callback<()>,
}

/// Approval dialog with an editable credit amount, prefilled from the
/// request. Submission is blocked until the field parses as a positive
/// number.
#[function_component(ApproveModal)]
fn approve_modal(props: &ApproveModalProps) -> Html {
    let amount_text = use_state(String::new);

    {
        let amount_text = amount_text.clone();
        let seed = props.target.as_ref().map(|tx| tx.amount);
        use_effect_with(seed, move |seed| {
            if let Some(amount) = seed {
                amount_text.set(if *amount > 0.0 {
                    format!("{amount}")
                } else {
                    String::new()
                });
            }
        });
    }

    let Some(tx) = props.target.as_ref() else {
        return Html::default();
    };

    let oninput = {
        let amount_text = amount_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                amount_text.set(input.value());
            }
        })
    };

    let parsed = amount_text.trim().parse::<f64>().ok().filter(|v| *v > 0.0);
    let can_submit = parsed.is_some() && !props.busy;

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(amount) = parsed {
                on_submit.emit(amount);
            }
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let owner = tx
        .users
        .as_ref()
        .map_or_else(|| "Unknown User".to_string(), |user| user.full_name());

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"Approve Recharge"}</h3>
                <p class="py-2 text-sm text-base-content/70">
                    { format!("Credit {owner}'s balance for transaction {}.", tx.short_number()) }
                </p>
                <div class="form-control py-2">
                    <label class="label" for="recharge-amount">
                        <span class="label-text">{"Amount (SYP)"}</span>
                    </label>
                    <input
                        id="recharge-amount"
                        class="input input-bordered"
                        type="number"
                        min="0"
                        step="any"
                        value={(*amount_text).clone()}
                        {oninput}
                        disabled={props.busy}
                    />
                </div>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_close} disabled={props.busy}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-success" onclick={on_submit} disabled={!can_submit}>
                        if props.busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        {"Approve"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn status_badge(status: RechargeStatus) -> Html {
    let class = match status {
        RechargeStatus::Pending => "badge badge-warning",
        RechargeStatus::Accepted => "badge badge-success",
        RechargeStatus::Rejected => "badge badge-error",
        RechargeStatus::Unknown => "badge badge-ghost",
    };
    html! { <span class={class}>{ status.label() }</span> }
}

#[function_component(RechargesPage)]
pub fn recharges_page() -> Html {
    let filter = use_state(|| RechargeFilter::Pending);
    let list = use_remote_list(*filter, |filter: RechargeFilter| {
        let client = MedanClient::shared();
        let pending_only = filter == RechargeFilter::Pending;
        async move { client.list_transactions(pending_only).await }.boxed_local()
    });
    let query = use_state(String::new);
    let is_processing = use_state(|| false);
    let approve_target = use_state(|| None::<Transaction>);
    let reject_target = use_state(|| None::<Transaction>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_close_approve = {
        let approve_target = approve_target.clone();
        Callback::from(move |()| approve_target.set(None))
    };
    let on_close_reject = {
        let reject_target = reject_target.clone();
        Callback::from(move |()| reject_target.set(None))
    };

    let on_confirm_approve = {
        let list = list.clone();
        let is_processing = is_processing.clone();
        let approve_target = approve_target.clone();
        Callback::from(move |amount: f64| {
            let Some(tx) = (*approve_target).clone() else {
                return;
            };
            let list = list.clone();
            let is_processing = is_processing.clone();
            let approve_target = approve_target.clone();
            is_processing.set(true);
            spawn_local(async move {
                let client = MedanClient::shared();
                match client.approve_recharge(tx.id, amount).await {
                    Ok(()) => {
                        approve_target.set(None);
                        list.refresh();
                    }
                    Err(err) => alert(&format!("Failed to approve recharge: {err}")),
                }
                is_processing.set(false);
            });
        })
    };

    let on_confirm_reject = {
        let list = list.clone();
        let is_processing = is_processing.clone();
        let reject_target = reject_target.clone();
        Callback::from(move |()| {
            let Some(tx) = (*reject_target).clone() else {
                return;
            };
            let list = list.clone();
            let is_processing = is_processing.clone();
            let reject_target = reject_target.clone();
            is_processing.set(true);
            spawn_local(async move {
                let client = MedanClient::shared();
                match client.reject_recharge(tx.id).await {
                    Ok(()) => {
                        reject_target.set(None);
                        list.refresh();
                    }
                    Err(err) => alert(&format!("Failed to reject recharge: {err}")),
                }
                is_processing.set(false);
            });
        })
    };

    let filtered: Vec<Transaction> = list
        .items
        .iter()
        .filter(|tx| filter.retains(tx) && tx.matches(&query))
        .cloned()
        .collect();

    let body = if list.loading() {
        html! { <Loading label="Loading transactions..." /> }
    } else if let Some(message) = list.error() {
        let on_retry = {
            let list = list.clone();
            Callback::from(move |()| list.refresh())
        };
        html! { <ErrorView {message} {on_retry} /> }
    } else if filtered.is_empty() {
        let empty = if query.is_empty() {
            format!("No {} transactions", filter.label().to_lowercase())
        } else {
            format!("No transactions found matching \"{}\"", *query)
        };
        html! { <div class="text-center py-20 text-base-content/60">{ empty }</div> }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Transaction"}</th>
                            <th>{"User"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Receipt"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.iter().map(|tx| {
                            let status = tx.recharge_status();
                            let open_approve = {
                                let approve_target = approve_target.clone();
                                let tx = tx.clone();
                                Callback::from(move |_: MouseEvent| {
                                    approve_target.set(Some(tx.clone()));
                                })
                            };
                            let open_reject = {
                                let reject_target = reject_target.clone();
                                let tx = tx.clone();
                                Callback::from(move |_: MouseEvent| {
                                    reject_target.set(Some(tx.clone()));
                                })
                            };
                            html! {
                                <tr key={tx.id}>
                                    <td class="font-mono text-sm" title={tx.transaction_number.clone()}>
                                        { tx.short_number() }
                                    </td>
                                    <td>
                                        if let Some(user) = &tx.users {
                                            <div>
                                                <p class="font-bold">{ user.full_name() }</p>
                                                <p class="text-xs text-base-content/60">{ &user.email }</p>
                                            </div>
                                        } else {
                                            <span class="text-base-content/60">{"Unknown User"}</span>
                                        }
                                    </td>
                                    <td class="font-bold">
                                        { format!("SYP {}", format_number(tx.amount, 0)) }
                                    </td>
                                    <td>
                                        if let Some(path) = &tx.image_path {
                                            <a
                                                href={MedanClient::shared().asset_url(path)}
                                                target="_blank"
                                                rel="noopener"
                                            >
                                                <img
                                                    src={MedanClient::shared().asset_url(path)}
                                                    class="w-12 h-12 object-cover rounded"
                                                    alt="Receipt"
                                                />
                                            </a>
                                        } else {
                                            <span class="text-xs text-base-content/40">{"No receipt"}</span>
                                        }
                                    </td>
                                    <td>{ status_badge(status) }</td>
                                    <td>
                                        if status.is_pending() {
                                            <div class="flex gap-1">
                                                <button
                                                    class="btn btn-ghost btn-sm text-success"
                                                    title="Approve"
                                                    disabled={*is_processing}
                                                    onclick={open_approve}
                                                >
                                                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-5 h-5" />
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    title="Reject"
                                                    disabled={*is_processing}
                                                    onclick={open_reject}
                                                >
                                                    <Icon icon_id={IconId::HeroiconsOutlineXCircle} class="w-5 h-5" />
                                                </button>
                                            </div>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let reject_message = (*reject_target).as_ref().map_or_else(String::new, |tx| {
        format!("Reject recharge {}? The user keeps their current balance.", tx.short_number())
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div class="tabs tabs-boxed">
                    { for RechargeFilter::TABS.iter().map(|&tab| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(tab))
                        };
                        let class = if *filter == tab { "tab tab-active" } else { "tab" };
                        html! { <a {class} {onclick}>{ tab.label() }</a> }
                    }) }
                </div>
                <SearchBox
                    value={(*query).clone()}
                    placeholder="Search by user or transaction number..."
                    on_change={on_search}
                />
            </div>

            <div class="bg-base-100 rounded-box shadow border border-base-300 overflow-hidden">
                { body }
            </div>

            <ApproveModal
                target={(*approve_target).clone()}
                busy={*is_processing}
                on_submit={on_confirm_approve}
                on_close={on_close_approve}
            />
            <ConfirmModal
                open={reject_target.is_some()}
                title="Reject Recharge"
                message={reject_message}
                confirm_label="Reject"
                danger=true
                busy={*is_processing}
                on_confirm={on_confirm_reject}
                on_close={on_close_reject}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::RechargeFilter;
    use shared::models::Transaction;

    fn tx(status: i32) -> Transaction {
        serde_json::from_value(serde_json::json!({ "id": 1, "status": status })).unwrap()
    }

    /// Tests the client-side narrowing by raw status code
    #[test]
    fn test_filter_retains() {
        assert!(RechargeFilter::All.retains(&tx(0)));
        assert!(RechargeFilter::All.retains(&tx(2)));
        assert!(RechargeFilter::Accepted.retains(&tx(2)));
        assert!(!RechargeFilter::Accepted.retains(&tx(3)));
        assert!(RechargeFilter::Rejected.retains(&tx(3)));
        assert!(!RechargeFilter::Rejected.retains(&tx(0)));
    }

    /// Tests that the pending view narrows locally even though it fetches
    /// from the dedicated pending endpoint
    #[test]
    fn test_pending_filter_drops_settled_rows() {
        assert!(RechargeFilter::Pending.retains(&tx(0)));
        assert!(RechargeFilter::Pending.retains(&tx(1)));
        assert!(!RechargeFilter::Pending.retains(&tx(2)));
        assert!(!RechargeFilter::Pending.retains(&tx(3)));
    }
}
