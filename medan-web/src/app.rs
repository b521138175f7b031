use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Router shell. The per-route guard in [`crate::routes::switch`] decides
/// between the login view and the authenticated layout, so nothing here
/// needs to inspect the session.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
