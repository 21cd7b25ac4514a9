use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::state::{Stopwatch, StopwatchAction};

#[function_component(StopwatchPanel)]
pub fn stopwatch_panel() -> Html {
    let stopwatch = use_reducer(Stopwatch::default);

    // One-second tick while running; cleared on pause/reset/unmount
    {
        let stopwatch = stopwatch.clone();
        let running = stopwatch.is_running();
        use_effect_with(running, move |running| {
            let mut armed = None;
            if *running {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        stopwatch.dispatch(StopwatchAction::Tick);
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        1000,
                    ) {
                        Ok(id) => armed = Some((window, id, tick)),
                        Err(e) => error!("could not start timer interval: {:?}", e),
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = armed {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    let dispatch = |action: StopwatchAction| {
        let stopwatch = stopwatch.clone();
        Callback::from(move |_: MouseEvent| stopwatch.dispatch(action))
    };

    html! {
        <div class="timer">
            <div id="timer-display" class="timer-display">{ stopwatch.display() }</div>
            <div class="timer-controls">
                <button id="start-timer" onclick={dispatch(StopwatchAction::Start)} disabled={stopwatch.is_running()}>{"Start"}</button>
                <button id="pause-timer" onclick={dispatch(StopwatchAction::Pause)} disabled={!stopwatch.is_running()}>{"Pause"}</button>
                <button id="reset-timer" onclick={dispatch(StopwatchAction::Reset)}>{"Reset"}</button>
            </div>
        </div>
    }
}
