use crate::api::MedanClient;
use crate::components::{
    add_category_modal::AddCategoryModal, confirm_modal::ConfirmModal, error_view::ErrorView,
    loading::Loading,
};
use crate::hooks::use_remote_list;
use crate::pages::alert;
use futures::FutureExt;
use shared::models::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let list = use_remote_list((), |()| {
        let client = MedanClient::shared();
        async move { client.list_categories().await }.boxed_local()
    });
    let show_add_modal = use_state(|| false);
    let is_creating = use_state(|| false);
    let processing_id = use_state(|| None::<i64>);
    let delete_target = use_state(|| None::<Category>);

    let on_open_add = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_: MouseEvent| show_add_modal.set(true))
    };
    let on_close_add = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |()| show_add_modal.set(false))
    };
    let on_close_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |()| delete_target.set(None))
    };

    let on_create = {
        let list = list.clone();
        let show_add_modal = show_add_modal.clone();
        let is_creating = is_creating.clone();
        Callback::from(move |name: String| {
            let list = list.clone();
            let show_add_modal = show_add_modal.clone();
            let is_creating = is_creating.clone();
            is_creating.set(true);
            spawn_local(async move {
                let client = MedanClient::shared();
                match client.create_category(&name).await {
                    Ok(()) => {
                        show_add_modal.set(false);
                        list.refresh();
                    }
                    Err(err) => alert(&format!("Failed to create category: {err}")),
                }
                is_creating.set(false);
            });
        })
    };

    let on_confirm_delete = {
        let list = list.clone();
        let processing_id = processing_id.clone();
        let delete_target = delete_target.clone();
        Callback::from(move |()| {
            let Some(category) = (*delete_target).clone() else {
                return;
            };
            let list = list.clone();
            let processing_id = processing_id.clone();
            let delete_target = delete_target.clone();
            processing_id.set(Some(category.id));
            spawn_local(async move {
                let client = MedanClient::shared();
                match client.soft_delete_category(category.id).await {
                    Ok(()) => {
                        delete_target.set(None);
                        list.refresh();
                    }
                    Err(err) => alert(&format!("Failed to delete category: {err}")),
                }
                processing_id.set(None);
            });
        })
    };

    let body = if list.loading() {
        html! { <Loading label="Loading categories..." /> }
    } else if let Some(message) = list.error() {
        let on_retry = {
            let list = list.clone();
            Callback::from(move |()| list.refresh())
        };
        html! { <ErrorView {message} {on_retry} /> }
    } else if list.items.is_empty() {
        html! {
            <div class="text-center py-20 text-base-content/60">
                {"No categories yet. Add the first one."}
            </div>
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.items.iter().map(|category| {
                            let is_processing = *processing_id == Some(category.id);
                            let open_modal = {
                                let delete_target = delete_target.clone();
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| {
                                    delete_target.set(Some(category.clone()));
                                })
                            };
                            html! {
                                <tr key={category.id} class={if category.is_deleted { "opacity-50" } else { "" }}>
                                    <td class="text-sm text-base-content/60">{ category.id }</td>
                                    <td class="font-bold">{ &category.name }</td>
                                    <td>
                                        if category.is_deleted {
                                            <span class="badge badge-ghost">{"Deleted"}</span>
                                        } else {
                                            <span class="badge badge-success">{"Active"}</span>
                                        }
                                    </td>
                                    <td>
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            title="Delete Category"
                                            disabled={is_processing || category.is_deleted}
                                            onclick={open_modal}
                                        >
                                            if is_processing {
                                                <span class="loading loading-spinner loading-sm"></span>
                                            } else {
                                                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-5 h-5" />
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

    let delete_message = (*delete_target).as_ref().map_or_else(String::new, |category| {
        format!(
            "Delete \"{}\"? The category is kept on record but hidden from the app.",
            category.name
        )
    });

    html! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <button class="btn btn-primary" onclick={on_open_add}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                    {"Add Category"}
                </button>
            </div>

            <div class="bg-base-100 rounded-box shadow border border-base-300 overflow-hidden">
                { body }
            </div>

            <AddCategoryModal
                open={*show_add_modal}
                busy={*is_creating}
                on_submit={on_create}
                on_close={on_close_add}
            />
            <ConfirmModal
                open={delete_target.is_some()}
                title="Delete Category"
                message={delete_message}
                confirm_label="Delete"
                danger=true
                busy={processing_id.is_some()}
                on_confirm={on_confirm_delete}
                on_close={on_close_delete}
            />
        </div>
    }
}
