//! Pure Yew view components for the Sketch Timer UI.
//!
//! Stateless components that render based on props, keeping the main
//! module focused on state and side effects.

use sketch_timer::{format_mm_ss, TimerStatus};
use yew::prelude::*;

/// Caption shown under the time readout.
pub fn status_line(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Idle => "Ready to start",
        TimerStatus::Running => "Time is flowing...",
        TimerStatus::Paused => "Time paused",
        TimerStatus::Completed => "Time is up!",
    }
}

/// Large MM:SS readout with the status caption.
#[derive(Properties, PartialEq)]
pub struct TimerReadoutProps {
    pub remaining_seconds: u32,
    pub status: TimerStatus,
}

#[function_component(TimerReadout)]
pub fn timer_readout(props: &TimerReadoutProps) -> Html {
    html! {
        <div class="timer-readout">
            <div class="time-display">{ format_mm_ss(props.remaining_seconds) }</div>
            <p class="status-line">{ status_line(props.status) }</p>
        </div>
    }
}

/// Horizontal progress bar with a rounded percentage label.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub progress: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let clamped = props.progress.clamp(0.0, 1.0);
    let fill_style = format!("width: {:.1}%", clamped * 100.0);
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={fill_style}></div>
            <div class="progress-label">
                { format!("{}%", (clamped * 100.0).round() as u32) }
            </div>
        </div>
    }
}

/// Start/Pause toggle plus the always-available Reset button.
#[derive(Properties, PartialEq)]
pub struct ControlButtonsProps {
    pub status: TimerStatus,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ControlButtons)]
pub fn control_buttons(props: &ControlButtonsProps) -> Html {
    let toggle_label = if props.status == TimerStatus::Running {
        "Pause"
    } else {
        "Start"
    };
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="controls">
            <button class="btn btn-primary" onclick={on_toggle}>{ toggle_label }</button>
            <button class="btn" onclick={on_reset} title="Reset">{ "Reset" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_covers_every_state() {
        assert_eq!(status_line(TimerStatus::Idle), "Ready to start");
        assert_eq!(status_line(TimerStatus::Running), "Time is flowing...");
        assert_eq!(status_line(TimerStatus::Paused), "Time paused");
        assert_eq!(status_line(TimerStatus::Completed), "Time is up!");
    }
}
