use bevy::prelude::*;

use crate::engine::assets::overlay_manifest::OverlayManifest;

#[derive(Event, Debug, Clone, Copy)]
pub struct SingleTap;

#[derive(Event, Debug, Clone, Copy)]
pub struct DoubleTap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Single,
    Double,
}

/// Splits primary-button presses into single and double taps.
///
/// A press within the double-tap window of the previous one is a double
/// tap. A lone press is held back until the window has passed, so a double
/// tap never mis-fires a placement first. Callers must [`poll`] before
/// [`press`] each frame; `poll` is what releases a held single tap.
///
/// [`poll`]: TapRecognizer::poll
/// [`press`]: TapRecognizer::press
#[derive(Resource, Default)]
pub struct TapRecognizer {
    pending_since: Option<f32>,
}

impl TapRecognizer {
    /// Register a press at `now` seconds.
    pub fn press(&mut self, now: f32, window: f32) -> Option<Tap> {
        match self.pending_since {
            Some(since) if now - since <= window => {
                self.pending_since = None;
                Some(Tap::Double)
            }
            _ => {
                self.pending_since = Some(now);
                None
            }
        }
    }

    /// Release a held press once its window has closed.
    pub fn poll(&mut self, now: f32, window: f32) -> Option<Tap> {
        match self.pending_since {
            Some(since) if now - since > window => {
                self.pending_since = None;
                Some(Tap::Single)
            }
            _ => None,
        }
    }
}

/// Feed the recogniser from the primary mouse button and fan recognised
/// taps out as events. Frontend-injected taps (RPC) bypass this and write
/// the events directly.
pub fn recognise_taps(
    mut recognizer: ResMut<TapRecognizer>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    manifest: Res<OverlayManifest>,
    mut single_taps: EventWriter<SingleTap>,
    mut double_taps: EventWriter<DoubleTap>,
) {
    let now = time.elapsed_secs();
    let window = manifest.double_tap_window_secs;

    if let Some(tap) = recognizer.poll(now, window) {
        dispatch_tap(tap, &mut single_taps, &mut double_taps);
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(tap) = recognizer.press(now, window) {
            dispatch_tap(tap, &mut single_taps, &mut double_taps);
        }
    }
}

fn dispatch_tap(
    tap: Tap,
    single_taps: &mut EventWriter<SingleTap>,
    double_taps: &mut EventWriter<DoubleTap>,
) {
    match tap {
        Tap::Single => {
            single_taps.write(SingleTap);
        }
        Tap::Double => {
            double_taps.write(DoubleTap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f32 = 0.3;

    #[test]
    fn a_lone_press_becomes_a_single_tap_after_the_window() {
        let mut recognizer = TapRecognizer::default();
        assert_eq!(recognizer.press(1.0, WINDOW), None);
        assert_eq!(recognizer.poll(1.2, WINDOW), None);
        assert_eq!(recognizer.poll(1.31, WINDOW), Some(Tap::Single));
        assert_eq!(recognizer.poll(1.4, WINDOW), None);
    }

    #[test]
    fn two_presses_within_the_window_are_one_double_tap() {
        let mut recognizer = TapRecognizer::default();
        assert_eq!(recognizer.press(1.0, WINDOW), None);
        assert_eq!(recognizer.press(1.2, WINDOW), Some(Tap::Double));
        // Nothing held back afterwards: no trailing single tap.
        assert_eq!(recognizer.poll(2.0, WINDOW), None);
    }

    #[test]
    fn presses_outside_the_window_are_two_single_taps() {
        let mut recognizer = TapRecognizer::default();
        assert_eq!(recognizer.press(1.0, WINDOW), None);
        assert_eq!(recognizer.poll(1.4, WINDOW), Some(Tap::Single));
        assert_eq!(recognizer.press(1.5, WINDOW), None);
        assert_eq!(recognizer.poll(1.9, WINDOW), Some(Tap::Single));
    }

    #[test]
    fn a_double_tap_can_follow_a_single_tap() {
        let mut recognizer = TapRecognizer::default();
        recognizer.press(1.0, WINDOW);
        assert_eq!(recognizer.poll(1.4, WINDOW), Some(Tap::Single));
        recognizer.press(2.0, WINDOW);
        assert_eq!(recognizer.press(2.1, WINDOW), Some(Tap::Double));
    }
}
