use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::depth_bands::{BAND_COUNT, BAND_STEP, CYCLE_DISTANCES};
use constants::interaction::DOUBLE_TAP_WINDOW_SECS;

/// Overlay configuration as a Bevy asset. Once resolved it is inserted as a
/// resource and stays immutable for the rest of the run.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct OverlayManifest {
    #[serde(default = "default_band_step")]
    pub band_step: f32,
    #[serde(default = "default_band_count")]
    pub band_count: u32,
    #[serde(default = "default_cycle_distances")]
    pub cycle_distances: Vec<f32>,
    #[serde(default = "default_double_tap_window")]
    pub double_tap_window_secs: f32,
}

impl Default for OverlayManifest {
    fn default() -> Self {
        Self {
            band_step: default_band_step(),
            band_count: default_band_count(),
            cycle_distances: default_cycle_distances(),
            double_tap_window_secs: default_double_tap_window(),
        }
    }
}

impl OverlayManifest {
    /// Replace values the placement loop cannot work with. The cycle list in
    /// particular must never be empty: every placement indexes into it.
    pub fn sanitised(mut self) -> Self {
        if self.cycle_distances.is_empty() {
            warn!("Manifest cycle_distances is empty, using built-in cycle");
            self.cycle_distances = default_cycle_distances();
        }
        if self.band_step <= 0.0 {
            warn!("Manifest band_step {} is not positive, using default", self.band_step);
            self.band_step = default_band_step();
        }
        if self.double_tap_window_secs <= 0.0 {
            self.double_tap_window_secs = default_double_tap_window();
        }
        self
    }
}

fn default_band_step() -> f32 {
    BAND_STEP
}

fn default_band_count() -> u32 {
    BAND_COUNT
}

fn default_cycle_distances() -> Vec<f32> {
    CYCLE_DISTANCES.to_vec()
}

fn default_double_tap_window() -> f32 {
    DOUBLE_TAP_WINDOW_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_builtin_constants() {
        let manifest = OverlayManifest::default();
        assert_eq!(manifest.band_step, BAND_STEP);
        assert_eq!(manifest.band_count, BAND_COUNT);
        assert_eq!(manifest.cycle_distances, CYCLE_DISTANCES.to_vec());
        assert_eq!(manifest.double_tap_window_secs, DOUBLE_TAP_WINDOW_SECS);
    }

    #[test]
    fn sanitise_rejects_an_empty_cycle() {
        let manifest = OverlayManifest {
            cycle_distances: Vec::new(),
            ..Default::default()
        }
        .sanitised();
        assert_eq!(manifest.cycle_distances, CYCLE_DISTANCES.to_vec());
    }

    #[test]
    fn sanitise_rejects_a_degenerate_band_step() {
        let manifest = OverlayManifest {
            band_step: -1.0,
            ..Default::default()
        }
        .sanitised();
        assert_eq!(manifest.band_step, BAND_STEP);
    }
}
