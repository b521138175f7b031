use crate::{containers::layout::Layout, models::session::Session, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The console routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/posts")]
    Posts,
    #[at("/reports")]
    Reports,
    #[at("/users")]
    Users,
    #[at("/recharges")]
    Recharges,
    #[at("/categories")]
    Categories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar label and page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Login => "Sign in",
            Self::Posts => "Posts",
            Self::Reports => "Reports",
            Self::Users => "Users",
            Self::Recharges => "Recharges",
            Self::Categories => "Categories",
            Self::NotFound => "Not Found",
        }
    }

    /// Sidebar icon.
    pub fn icon(&self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineChartBarSquare,
            Self::Login => IconId::HeroiconsOutlineArrowRightOnRectangle,
            Self::Posts => IconId::HeroiconsOutlineDocumentText,
            Self::Reports => IconId::HeroiconsOutlineFlag,
            Self::Users => IconId::HeroiconsOutlineUsers,
            Self::Recharges => IconId::HeroiconsOutlineBanknotes,
            Self::Categories => IconId::HeroiconsOutlineTag,
            Self::NotFound => IconId::HeroiconsOutlineQuestionMarkCircle,
        }
    }

    /// Routes that appear in the sidebar, in order.
    pub fn nav_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| !matches!(route, Self::Login | Self::NotFound))
            .collect()
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: Route,
}

/// Route guard: every view except login requires an authenticated
/// session, and an authenticated visitor has no business on the login
/// view. Both redirects are pure derived state from the session cell.
#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let is_authenticated = use_selector(|session: &Session| session.is_authenticated());

    if props.route == Route::Login {
        return if *is_authenticated {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        } else {
            html! { <LoginPage /> }
        };
    }

    if !*is_authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let page = match props.route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Posts => html! { <PostsPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Recharges => html! { <RechargesPage /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::NotFound => html! {
            <div class="text-center py-20 text-base-content/60">
                <p class="text-4xl font-bold mb-2">{"404"}</p>
                <p>{"This page does not exist."}</p>
            </div>
        },
        // Handled by the early return above.
        Route::Login => Html::default(),
    };

    html! {
        <Layout current_route={props.route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function for the router.
pub fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}
