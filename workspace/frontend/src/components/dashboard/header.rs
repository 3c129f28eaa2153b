use common::{Period, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: Period,
    pub on_select: Callback<Period>,
    pub mounted: bool,
}

#[function_component(DashboardHeader)]
pub fn dashboard_header(props: &Props) -> Html {
    let section = Section::Header;

    html! {
        <div class={classes!("mb-8", section.classes(props.mounted))}>
            <h1 class="text-4xl font-bold text-white mb-2">{"Dashboard Entreprise"}</h1>
            <p class="text-purple-200">{"Vue d'ensemble des performances"}</p>
            <PeriodSelector selected={props.selected} on_select={props.on_select.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeriodSelectorProps {
    pub selected: Period,
    pub on_select: Callback<Period>,
}

/// Week / month / year buttons. Only the highlighted button changes; the
/// datasets are not filtered by period.
#[function_component(PeriodSelector)]
pub fn period_selector(props: &PeriodSelectorProps) -> Html {
    html! {
        <div class="mt-4 flex gap-2">
            { for Period::ALL.iter().map(|period| {
                let period = *period;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(period))
                };

                html! {
                    <button
                        key={period.key()}
                        {onclick}
                        class={classes!(
                            "px-4", "py-2", "rounded-lg", "font-medium", "transition-all", "duration-300",
                            period.button_class(props.selected)
                        )}
                    >
                        {period.label()}
                    </button>
                }
            })}
        </div>
    }
}
