use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub icon: IconId,
    #[prop_or_default]
    pub loading: bool,
}

/// One dashboard aggregate tile.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-box shadow">
            <div class="stat-figure text-primary">
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="stat-title uppercase text-xs tracking-wide">{ props.title.clone() }</div>
            <div class="stat-value">
                if props.loading {
                    <span class="loading loading-dots loading-md"></span>
                } else {
                    { props.value.clone() }
                }
            </div>
            if let Some(subtitle) = &props.subtitle {
                <div class="stat-desc">{ subtitle.clone() }</div>
            }
        </div>
    }
}
