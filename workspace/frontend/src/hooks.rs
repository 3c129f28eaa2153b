use common::EntranceFlag;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delay before the entrance transition starts, leaving the browser one
/// frame to paint the hidden state.
const ENTRANCE_DELAY_MS: u32 = 16;

/// Returns `false` on the first render and `true` once the component has
/// been painted. The flag flips once per mount and never reverts.
#[hook]
pub fn use_mounted() -> bool {
    let flag = use_state(EntranceFlag::new);

    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            // Fire and forget: the update is never cancelled.
            Timeout::new(ENTRANCE_DELAY_MS, move || {
                let mut next = *flag;
                if next.mount() {
                    log::debug!("Dashboard painted, starting entrance transition");
                    flag.set(next);
                }
            })
            .forget();
            || ()
        });
    }

    flag.is_mounted()
}
