use bevy::math::Vec3;

pub const CAMERA_FOV_DEGREES: f32 = 55.0;

pub const RING_THICKNESS: f32 = 0.005;
pub const BAND_RING_OPACITY: f32 = 0.18;
pub const BAND_LABEL_OPACITY: f32 = 0.6;

/// Sideways offset of a band label from the overlay axis, in metres.
pub const BAND_LABEL_OFFSET_X: f32 = 0.9;

pub const MARKER_RADIUS: f32 = 0.05;

/// Upward lift applied to the ruler label above the endpoint midpoint.
pub const RULER_LABEL_LIFT: Vec3 = Vec3::new(0.0, 0.15, 0.0);

pub const BAND_LABEL_FONT_PX: f32 = 14.0;
pub const RULER_LABEL_FONT_PX: f32 = 20.0;
pub const HUD_FONT_PX: f32 = 16.0;
