//! Fire-and-forget audio cues synthesized with the Web Audio API.
//!
//! No external sound assets: each cue schedules a handful of oscillator
//! tones whose volume decays exponentially over the tone. Every failure
//! path is silent; a missing or blocked audio backend never reaches timer
//! logic.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

// Tones open at PEAK_GAIN and ramp toward MIN_GAIN over their duration.
const PEAK_GAIN: f32 = 0.1;
const MIN_GAIN: f32 = 0.001;

/// Owner of the shared audio context, created once by the app shell and
/// torn down with it.
pub struct AudioCues {
    context: Option<AudioContext>,
}

impl AudioCues {
    /// Try to bring up an audio context. When the backend is unavailable
    /// every cue degrades to a no-op.
    pub fn new() -> Self {
        let context = AudioContext::new()
            .map_err(|err| log::warn!("audio context unavailable: {:?}", err))
            .ok();
        AudioCues { context }
    }

    /// Cheerful upward arpeggio played when the countdown starts.
    pub fn play_start(&self) {
        self.tone(440.0, OscillatorType::Sine, 0.3, 0.0); // A4
        self.tone(554.37, OscillatorType::Sine, 0.3, 0.1); // C#5
        self.tone(659.25, OscillatorType::Sine, 0.6, 0.2); // E5
    }

    /// Gentle ding-dong pattern played when the countdown completes.
    pub fn play_end(&self) {
        self.tone(880.0, OscillatorType::Triangle, 1.0, 0.0); // A5
        self.tone(698.46, OscillatorType::Triangle, 1.5, 0.4); // F5
    }

    fn tone(&self, freq: f32, shape: OscillatorType, duration: f64, delay: f64) {
        if let Some(context) = &self.context {
            if let Err(err) = schedule_tone(context, freq, shape, duration, delay) {
                log::debug!("dropped audio cue: {:?}", err);
            }
        }
    }
}

/// Schedule a single oscillator tone on the context timeline.
fn schedule_tone(
    context: &AudioContext,
    freq: f32,
    shape: OscillatorType,
    duration: f64,
    delay: f64,
) -> Result<(), JsValue> {
    // Autoplay policies leave the context suspended until a user gesture;
    // cues fire from click handlers, so resuming here is enough.
    if context.state() == AudioContextState::Suspended {
        let _ = context.resume();
    }

    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    let at = context.current_time() + delay;

    oscillator.set_type(shape);
    oscillator.frequency().set_value_at_time(freq, at)?;

    gain.gain().set_value_at_time(PEAK_GAIN, at)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(MIN_GAIN, at + duration)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    oscillator.start_with_when(at)?;
    oscillator.stop_with_when(at + duration)?;
    Ok(())
}
