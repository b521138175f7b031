use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Confirm"))]
    pub confirm_label: AttrValue,
    /// Renders the confirm button in the error color for destructive
    /// actions.
    #[prop_or_default]
    pub danger: bool,
    /// Disables both controls while the mutating call is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Blocking confirmation dialog used by every destructive action
/// (delete post, ban/unban, reject recharge, soft-delete category).
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let confirm_class = if props.danger {
        "btn btn-error"
    } else {
        "btn btn-primary"
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                <p class="py-4">{ props.message.clone() }</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_close} disabled={props.busy}>
                        {"Cancel"}
                    </button>
                    <button class={confirm_class} onclick={on_confirm} disabled={props.busy}>
                        if props.busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
