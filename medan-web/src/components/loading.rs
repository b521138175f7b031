use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-20">
            <span class="loading loading-spinner loading-lg text-primary mb-4"></span>
            <p class="text-base-content/60 font-medium">{ props.label.clone() }</p>
        </div>
    }
}
