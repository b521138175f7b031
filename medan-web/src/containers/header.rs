use crate::models::session::Session;
use crate::routes::Route;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_selector, use_store};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: Route,
}

/// Top bar: current page title, operator identity, logout.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let email = use_selector(|session: &Session| {
        session.user.as_ref().map(|user| user.email.clone())
    });
    let (_, dispatch) = use_store::<Session>();

    let on_logout = Callback::from(move |_: MouseEvent| {
        dispatch.set(Session::logout());
    });

    html! {
        <header class="navbar bg-base-300 px-6 justify-between">
            <h1 class="text-xl font-bold">{ props.current_route.title() }</h1>
            <div class="flex items-center gap-4">
                if let Some(email) = (*email).clone() {
                    <span class="text-sm text-base-content/60">{ email }</span>
                }
                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                    {"Logout"}
                </button>
            </div>
        </header>
    }
}
