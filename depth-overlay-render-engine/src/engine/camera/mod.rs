//! Head-anchored camera rig for the immersive overlay.
//!
//! The overlay root is a child of the camera, so bands, markers, and ruler
//! endpoints ride with the viewer the way a head anchor carries them in an
//! AR runtime.

/// Camera rig spawning and the native look-around controller.
pub mod head_rig;
