//! Main module for the Sketch Timer application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use gloo_timers::callback::Interval;
use log::warn;
use sketch_timer::{CountdownTimer, Season, TickOutcome, TimerStatus, DEFAULT_MINUTES};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod audio;
mod background;
mod components;
mod config;
mod utils;

use audio::AudioCues;
use background::SeasonalBackground;
use components::{ControlButtons, ProgressBar, TimerReadout};
use config::*;
use utils::is_minutes_draft;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Deadline for the currently remaining seconds, measured on the JS clock.
fn deadline_from_now(remaining_seconds: u32) -> f64 {
    js_sys::Date::now() + f64::from(remaining_seconds) * 1000.0
}

/// Remaining whole seconds until the deadline, rounded up so the final
/// second stays on screen until the deadline actually passes.
fn remaining_until(deadline_ms: f64) -> u32 {
    ((deadline_ms - js_sys::Date::now()) / 1000.0).ceil().max(0.0) as u32
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    // Canonical timer state. Kept in a mut ref so the tick callback always
    // mutates the live value; `view` mirrors it for rendering.
    let timer = use_mut_ref(|| CountdownTimer::new(DEFAULT_MINUTES));
    let view = use_state(|| timer.borrow().clone());

    // Wall-clock deadline the running countdown converges on.
    let deadline_ms = use_mut_ref(|| 0.0_f64);

    // Shared audio context, created once and torn down with the component.
    let cues = use_mut_ref(AudioCues::new);

    let minutes_text = use_state(|| DEFAULT_MINUTES_TEXT.to_string());
    let minutes_error = use_state(|| None::<String>);

    // Recomputed on every progress change; the backdrop reads only this.
    let season = Season::from_progress(view.progress(), view.status());

    // One-second tick source. It exists only while the countdown runs and
    // is cancelled by the effect destructor on any status change or
    // unmount, so at most one decrementing source is ever alive.
    {
        let timer = timer.clone();
        let view = view.clone();
        let deadline_ms = deadline_ms.clone();
        let cues = cues.clone();
        use_effect_with(view.status(), move |&status| {
            let interval = (status == TimerStatus::Running).then(|| {
                Interval::new(TICK_INTERVAL_MS, move || {
                    let remaining = remaining_until(*deadline_ms.borrow());
                    let outcome = timer.borrow_mut().sync_remaining(remaining);
                    if outcome == TickOutcome::Completed {
                        cues.borrow().play_end();
                    }
                    if outcome != TickOutcome::Ignored {
                        view.set(timer.borrow().clone());
                    }
                })
            });
            move || drop(interval)
        });
    }

    let on_minutes_input = {
        let minutes_text = minutes_text.clone();
        let minutes_error = minutes_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if is_minutes_draft(&value) {
                minutes_error.set(None);
                minutes_text.set(value);
            } else {
                // Push the rejected draft back to the last accepted text.
                input.set_value(&minutes_text);
            }
        })
    };

    let on_toggle = {
        let timer = timer.clone();
        let view = view.clone();
        let deadline_ms = deadline_ms.clone();
        let cues = cues.clone();
        let minutes_text = minutes_text.clone();
        let minutes_error = minutes_error.clone();
        Callback::from(move |_: ()| {
            let mut current = timer.borrow_mut();
            match current.status() {
                TimerStatus::Running => current.pause(),
                _ => match current.start(&minutes_text) {
                    Ok(()) => {
                        *deadline_ms.borrow_mut() =
                            deadline_from_now(current.remaining_seconds());
                        minutes_error.set(None);
                        cues.borrow().play_start();
                    }
                    Err(err) => {
                        warn!("rejected start: {}", err);
                        minutes_error.set(Some(err.to_string()));
                        return;
                    }
                },
            }
            view.set(current.clone());
        })
    };

    let on_reset = {
        let timer = timer.clone();
        let view = view.clone();
        let minutes_text = minutes_text.clone();
        let minutes_error = minutes_error.clone();
        Callback::from(move |_: ()| {
            let mut current = timer.borrow_mut();
            current.reset(&minutes_text);
            minutes_error.set(None);
            view.set(current.clone());
        })
    };

    let show_input = matches!(
        view.status(),
        TimerStatus::Idle | TimerStatus::Completed
    );

    html! {
        <div class="app-shell">
            <SeasonalBackground season={season} />

            <div class="timer-card">
                <h1 class="card-title">{ format!("{} Time", season) }</h1>

                <TimerReadout
                    remaining_seconds={view.remaining_seconds()}
                    status={view.status()}
                />

                if show_input {
                    <div class="minutes-entry">
                        <label for="minutes-input">{ "Set Minutes:" }</label>
                        <input
                            id="minutes-input"
                            type="text"
                            inputmode="numeric"
                            maxlength={MAX_MINUTES_DIGITS.to_string()}
                            value={(*minutes_text).clone()}
                            class={if minutes_error.is_some() { "invalid" } else { "" }}
                            oninput={on_minutes_input}
                        />
                        if let Some(ref err) = *minutes_error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                }

                <ControlButtons
                    status={view.status()}
                    on_toggle={on_toggle}
                    on_reset={on_reset}
                />

                <div class="progress-section">
                    <ProgressBar progress={view.progress()} />
                </div>
            </div>

            <footer class="footer">
                { format!("Sketch Timer © {}", js_sys::Date::new_0().get_full_year()) }
            </footer>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
