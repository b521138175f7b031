use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
    /// Emitted on every keystroke; filtering is client-side only.
    pub on_change: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <label class="input input-bordered flex items-center gap-2 w-full md:w-80">
            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 text-base-content/40" />
            <input
                type="text"
                class="grow"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </label>
    }
}
