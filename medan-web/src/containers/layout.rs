use crate::containers::header::Header;
use crate::routes::Route;
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: Route,
}

/// Authenticated shell: fixed sidebar with one entry per management
/// area, top bar, and the page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex bg-base-100">
            <aside class="w-60 bg-base-200 border-r border-base-300 flex flex-col">
                <div class="px-6 py-5 text-lg font-bold">{"Medan Admin"}</div>
                <ul class="menu px-4 gap-1 flex-grow">
                    { for Route::nav_routes().into_iter().map(|route| {
                        let active = route == props.current_route;
                        html! {
                            <li>
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!(active.then_some("active"))}
                                >
                                    <Icon icon_id={route.icon()} class="w-5 h-5" />
                                    { route.title() }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </aside>
            <div class="flex-grow flex flex-col">
                <Header current_route={props.current_route.clone()} />
                <main class="flex-grow p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
