use std::rc::Rc;

use common::QuickStat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: Rc<Vec<QuickStat>>,
}

#[function_component(QuickStats)]
pub fn quick_stats(props: &Props) -> Html {
    html! {
        <div class="space-y-4">
            { for props.stats.iter().enumerate().map(|(idx, stat)| html! {
                <div key={idx} class="flex items-center justify-between p-4 bg-white/5 rounded-xl hover:bg-white/10 transition-all duration-300">
                    <div class="flex items-center gap-3">
                        <div class={classes!("w-3", "h-3", "rounded-full", stat.dot_class.clone(), "animate-pulse")}></div>
                        <span class="text-purple-200">{&stat.label}</span>
                    </div>
                    <span class="text-white font-bold text-lg">{&stat.value}</span>
                </div>
            })}
        </div>
    }
}
