use crate::api::MedanClient;
use crate::components::{error_view::ErrorView, stat_card::StatCard};
use futures::future::try_join3;
use shared::models::format_number;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::IconId;

/// The three backend aggregates plus one derived figure.
#[derive(Clone, PartialEq, Default)]
struct DashboardStats {
    total_users: f64,
    pending_orders: f64,
    total_revenue: f64,
}

impl DashboardStats {
    /// Revenue as a share of the fixed 1,000,000 SYP target.
    fn revenue_goal_percent(&self) -> f64 {
        (self.total_revenue / 1_000_000.0) * 100.0
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(DashboardStats::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let tick = use_state(|| 0u32);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*tick, move |_| {
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let client = MedanClient::shared();
                // The three aggregates are independent; fetch them
                // concurrently and fail the whole join on the first error.
                let result = try_join3(
                    client.total_users(),
                    client.pending_orders(),
                    client.total_balance(),
                )
                .await;
                match result {
                    Ok((total_users, pending_orders, total_revenue)) => {
                        stats.set(DashboardStats {
                            total_users,
                            pending_orders,
                            total_revenue,
                        });
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_refresh = {
        let tick = tick.clone();
        Callback::from(move |_: MouseEvent| tick.set(tick.wrapping_add(1)))
    };
    let on_retry = {
        let tick = tick.clone();
        Callback::from(move |()| tick.set(tick.wrapping_add(1)))
    };

    if let Some(message) = (*error).clone() {
        return html! { <ErrorView {message} on_retry={on_retry} /> };
    }

    let is_loading = *loading;
    let current = (*stats).clone();

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Statistics Overview"}</h2>
                <button class="btn btn-ghost btn-sm text-primary" onclick={on_refresh}>
                    {"Refresh Data"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Total Revenue"
                    value={format!("SYP {}", format_number(current.total_revenue, 0))}
                    subtitle="Total balance transactions"
                    icon={IconId::HeroiconsOutlineBanknotes}
                    loading={is_loading}
                />
                <StatCard
                    title="Total Users"
                    value={format_number(current.total_users, 0)}
                    subtitle="Active registered users"
                    icon={IconId::HeroiconsOutlineUsers}
                    loading={is_loading}
                />
                <StatCard
                    title="Revenue Goal"
                    value={format!("{}%", format_number(current.revenue_goal_percent(), 2))}
                    subtitle="% of target"
                    icon={IconId::HeroiconsOutlineChartBar}
                    loading={is_loading}
                />
                <StatCard
                    title="Pending Orders"
                    value={format_number(current.pending_orders, 0)}
                    subtitle="Orders awaiting processing"
                    icon={IconId::HeroiconsOutlineShoppingCart}
                    loading={is_loading}
                />
            </div>
        </div>
    }
}
