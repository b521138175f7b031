use crate::api::MedanClient;
use crate::components::{error_view::ErrorView, loading::Loading, search_box::SearchBox};
use crate::hooks::use_remote_list;
use futures::FutureExt;
use shared::models::{Report, format_date};
use yew::prelude::*;

/// Read-only review of user reports; moderation itself happens on the
/// posts and users pages.
#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let list = use_remote_list((), |()| {
        let client = MedanClient::shared();
        async move { client.list_reports().await }.boxed_local()
    });
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let filtered: Vec<Report> = list
        .items
        .iter()
        .filter(|report| report.matches(&query))
        .cloned()
        .collect();

    let body = if list.loading() {
        html! { <Loading label="Loading reports..." /> }
    } else if let Some(message) = list.error() {
        let on_retry = {
            let list = list.clone();
            Callback::from(move |()| list.refresh())
        };
        html! { <ErrorView {message} {on_retry} /> }
    } else if filtered.is_empty() {
        let empty = if query.is_empty() {
            "No reports available".to_string()
        } else {
            format!("No reports found matching \"{}\"", *query)
        };
        html! { <div class="text-center py-20 text-base-content/60">{ empty }</div> }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Post Title"}</th>
                            <th>{"ID"}</th>
                            <th>{"Reporter"}</th>
                            <th>{"Reason"}</th>
                            <th>{"Date"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.iter().map(|report| html! {
                            <tr key={report.id}>
                                <td class="font-bold">{ report.title() }</td>
                                <td class="text-sm text-base-content/60">{ report.id }</td>
                                <td>{ &report.reporter_name }</td>
                                <td class="max-w-xs truncate text-sm">{ &report.reason }</td>
                                <td class="text-sm text-base-content/60">{ format_date(&report.created_at) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row justify-end items-start md:items-center gap-4">
                <SearchBox
                    value={(*query).clone()}
                    placeholder="Search by title..."
                    on_change={on_search}
                />
            </div>

            <div class="bg-base-100 rounded-box shadow border border-base-300 overflow-hidden">
                { body }
            </div>
        </div>
    }
}
