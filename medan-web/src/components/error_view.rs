use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorViewProps {
    pub message: AttrValue,
    /// Retry control; re-runs the fetch that failed.
    pub on_retry: Callback<()>,
}

/// Inline read-failure state with a retry affordance.
#[function_component(ErrorView)]
pub fn error_view(props: &ErrorViewProps) -> Html {
    let on_retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="flex flex-col items-center justify-center py-20 px-4">
            <p class="text-error font-medium text-center mb-4">{ props.message.clone() }</p>
            <button class="btn btn-primary" onclick={on_retry}>
                {"Try Again"}
            </button>
        </div>
    }
}
