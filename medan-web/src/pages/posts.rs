use crate::api::MedanClient;
use crate::components::{
    confirm_modal::ConfirmModal, error_view::ErrorView, loading::Loading, search_box::SearchBox,
};
use crate::hooks::use_remote_list;
use crate::pages::alert;
use futures::FutureExt;
use shared::models::{Post, format_date};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let list = use_remote_list((), |()| {
        let client = MedanClient::shared();
        async move { client.list_posts().await }.boxed_local()
    });
    let query = use_state(String::new);
    let deleting_id = use_state(|| None::<i64>);
    let pending_delete = use_state(|| None::<Post>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let list = list.clone();
        let deleting_id = deleting_id.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| {
            let Some(post) = (*pending_delete).clone() else {
                return;
            };
            let list = list.clone();
            let deleting_id = deleting_id.clone();
            let pending_delete = pending_delete.clone();
            deleting_id.set(Some(post.id));
            spawn_local(async move {
                let client = MedanClient::shared();
                match client.delete_post(post.id).await {
                    Ok(()) => {
                        // Confirmed delete: patch the list locally, no refetch.
                        let remaining: Vec<Post> = list
                            .items
                            .iter()
                            .filter(|p| p.id != post.id)
                            .cloned()
                            .collect();
                        list.items.set(remaining);
                    }
                    Err(err) => alert(&format!("Failed to delete post: {err}")),
                }
                deleting_id.set(None);
                pending_delete.set(None);
            });
        })
    };

    let filtered: Vec<Post> = list
        .items
        .iter()
        .filter(|post| post.matches(&query))
        .cloned()
        .collect();

    let body = if list.loading() {
        html! { <Loading label="Loading posts..." /> }
    } else if let Some(message) = list.error() {
        let on_retry = {
            let list = list.clone();
            Callback::from(move |()| list.refresh())
        };
        html! { <ErrorView {message} {on_retry} /> }
    } else if filtered.is_empty() {
        let empty = if query.is_empty() {
            "No posts available".to_string()
        } else {
            format!("No posts found matching \"{}\"", *query)
        };
        html! { <div class="text-center py-20 text-base-content/60">{ empty }</div> }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Media"}</th>
                            <th>{"Post Title"}</th>
                            <th>{"City"}</th>
                            <th>{"Category"}</th>
                            <th>{"Created"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.iter().map(|post| {
                            let is_deleting = *deleting_id == Some(post.id);
                            let open_modal = {
                                let pending_delete = pending_delete.clone();
                                let post = post.clone();
                                Callback::from(move |_: MouseEvent| {
                                    pending_delete.set(Some(post.clone()));
                                })
                            };
                            html! {
                                <tr key={post.id}>
                                    <td>
                                        if let Some(thumbnail) = post.thumbnail() {
                                            <img
                                                src={MedanClient::shared().asset_url(thumbnail)}
                                                class="w-16 h-16 object-cover rounded-lg"
                                                alt=""
                                            />
                                        } else {
                                            <div class="w-16 h-16 rounded-lg bg-base-300 flex items-center justify-center">
                                                <Icon icon_id={IconId::HeroiconsOutlinePhoto} class="w-6 h-6 text-base-content/40" />
                                            </div>
                                        }
                                    </td>
                                    <td class="font-bold">{ &post.title }</td>
                                    <td>{ &post.city }</td>
                                    <td>{ &post.category_name }</td>
                                    <td class="text-sm text-base-content/60">{ format_date(&post.created_at) }</td>
                                    <td>
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            title="Delete Post"
                                            disabled={is_deleting}
                                            onclick={open_modal}
                                        >
                                            if is_deleting {
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

    let modal_title = (*pending_delete)
        .as_ref()
        .map(|post| post.title.clone())
        .unwrap_or_default();

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <span class="badge badge-primary">
                    { format!("{} posts", list.items.len()) }
                </span>
                <SearchBox
                    value={(*query).clone()}
                    placeholder="Search by title..."
                    on_change={on_search}
                />
            </div>

            <div class="bg-base-100 rounded-box shadow border border-base-300 overflow-hidden">
                { body }
            </div>

            <ConfirmModal
                open={pending_delete.is_some()}
                title="Delete Post"
                message={format!("Are you sure you want to delete \"{modal_title}\"? This cannot be undone.")}
                confirm_label="Delete"
                danger=true
                busy={deleting_id.is_some()}
                on_confirm={on_confirm_delete}
                on_close={on_close_modal}
            />
        </div>
    }
}
