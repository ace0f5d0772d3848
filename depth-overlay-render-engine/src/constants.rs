//! Engine-local constants that do not belong in the shared tuning crate.

pub mod path {
    /// Overlay manifest location relative to the asset root.
    pub const OVERLAY_MANIFEST_PATH: &str = "overlay/manifest.json";
}
