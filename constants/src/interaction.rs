/// Two presses of the primary button within this window count as a double
/// tap; a lone press is reported once the window has passed.
pub const DOUBLE_TAP_WINDOW_SECS: f32 = 0.3;

/// Right-drag look-around sensitivity, radians per pixel of mouse motion.
pub const LOOK_YAW_SENSITIVITY: f32 = 0.0035;
pub const LOOK_PITCH_SENSITIVITY: f32 = 0.0030;

/// Pitch clamp keeping the look-around short of the poles, in radians.
pub const PITCH_LIMIT: f32 = 1.55;

/// Seconds between FPS notifications pushed to the control surface.
pub const FPS_NOTIFY_INTERVAL_SECS: f32 = 0.5;
