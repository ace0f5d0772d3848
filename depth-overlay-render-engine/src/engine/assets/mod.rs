//! Asset types loaded at startup.

/// Overlay manifest asset describing band layout and interaction tuning.
///
/// Mirrors the JSON structure exactly; every field defaults to the built-in
/// constants so a partial manifest stays usable.
pub mod overlay_manifest;
