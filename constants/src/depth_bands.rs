/// Depth step between consecutive band rings, in metres.
pub const BAND_STEP: f32 = 0.5;

/// Number of band rings spawned in front of the viewer.
pub const BAND_COUNT: u32 = 12;

/// Ring radius of the nearest band; each further band widens by
/// [`BAND_RADIUS_STEP`] so rings stay visually separable in depth.
pub const BAND_BASE_RADIUS: f32 = 0.75;
pub const BAND_RADIUS_STEP: f32 = 0.05;

/// Repeating marker placement distances, in metres.
pub const CYCLE_DISTANCES: [f32; 3] = [0.5, 1.5, 3.0];

/// Band classification boundaries, in metres. A distance on a boundary
/// belongs to the further band: 1.0 is mid, 2.0 is far.
pub const NEAR_LIMIT: f32 = 1.0;
pub const MID_LIMIT: f32 = 2.0;

pub const NEAR_COLOUR: [f32; 3] = [1.0, 0.0, 0.0]; // red
pub const MID_COLOUR: [f32; 3] = [1.0, 0.5, 0.0]; // orange
pub const FAR_COLOUR: [f32; 3] = [0.0, 0.75, 0.0]; // green
