use std::rc::Rc;

use common::{MetricCard, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: Rc<Vec<MetricCard>>,
    pub mounted: bool,
}

#[function_component(MetricCards)]
pub fn metric_cards(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            { for props.metrics.iter().enumerate().map(|(idx, metric)| {
                let section = Section::MetricCard(idx);
                html! {
                    <div key={idx} class={section.classes(props.mounted)} style={section.style()}>
                        <MetricTile metric={metric.clone()} />
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricTileProps {
    pub metric: MetricCard,
}

#[function_component(MetricTile)]
fn metric_tile(props: &MetricTileProps) -> Html {
    let metric = &props.metric;

    html! {
        <div class="bg-white/10 backdrop-blur-lg rounded-2xl p-6 border border-white/20 hover:bg-white/15 transition-all duration-300 hover:scale-105 hover:shadow-2xl">
            <div class="flex items-center justify-between mb-4">
                <div class={classes!("bg-gradient-to-br", metric.gradient.clone(), "p-3", "rounded-xl", "shadow-lg")}>
                    <i class={classes!(metric.icon.icon_class(), "w-6", "h-6", "text-white")}></i>
                </div>
                <div class={classes!("flex", "items-center", "gap-1", "px-3", "py-1", "rounded-full", metric.trend.badge_class())}>
                    <i class={classes!(metric.trend.icon_class(), "text-sm")}></i>
                    <span class="text-sm font-semibold">{&metric.change}</span>
                </div>
            </div>
            <p class="text-purple-200 text-sm mb-1">{&metric.title}</p>
            <p class="text-white text-3xl font-bold">{&metric.value}</p>
        </div>
    }
}
