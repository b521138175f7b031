use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddCategoryModalProps {
    pub open: bool,
    pub busy: bool,
    /// Emitted with the trimmed, non-empty category name.
    pub on_submit: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(AddCategoryModal)]
pub fn add_category_modal(props: &AddCategoryModalProps) -> Html {
    let name = use_state(String::new);

    if !props.open {
        return Html::default();
    }

    let oninput = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let trimmed = name.trim().to_string();
    let can_submit = !trimmed.is_empty() && !props.busy;

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let name = name.clone();
        let trimmed = trimmed.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit(trimmed.clone());
            name.set(String::new());
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        let name = name.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            on_close.emit(());
        })
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"Add Category"}</h3>
                <div class="form-control py-4">
                    <label class="label" for="category-name">
                        <span class="label-text">{"Category name"}</span>
                    </label>
                    <input
                        id="category-name"
                        class="input input-bordered"
                        type="text"
                        placeholder="e.g. Events"
                        value={(*name).clone()}
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
                        {"Create"}
                    </button>
                </div>
            </div>
        </div>
    }
}
