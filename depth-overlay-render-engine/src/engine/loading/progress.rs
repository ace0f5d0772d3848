use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    /// The manifest either loaded or was replaced by defaults; both unblock
    /// the transition out of `Loading`.
    pub manifest_resolved: bool,
}
