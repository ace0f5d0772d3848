use bevy::prelude::*;

use constants::depth_bands::{FAR_COLOUR, MID_COLOUR, MID_LIMIT, NEAR_COLOUR, NEAR_LIMIT};
use constants::render_settings::MARKER_RADIUS;

use crate::engine::assets::overlay_manifest::OverlayManifest;
use crate::engine::camera::head_rig::OverlayRoot;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::gestures::SingleTap;
use crate::tools::ruler::{RulerEndpoint, RulerLabel, RulerTool, RulerUpdate};

#[derive(Component)]
pub struct DepthMarker;

/// Distance class of a placed marker. Boundaries are closed on the far
/// side: exactly 1.0 m is mid and exactly 2.0 m is far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBand {
    Near,
    Mid,
    Far,
}

impl DistanceBand {
    pub fn classify(distance: f32) -> Self {
        if distance < NEAR_LIMIT {
            Self::Near
        } else if distance < MID_LIMIT {
            Self::Mid
        } else {
            Self::Far
        }
    }

    pub fn colour(&self) -> [f32; 3] {
        match self {
            Self::Near => NEAR_COLOUR,
            Self::Mid => MID_COLOUR,
            Self::Far => FAR_COLOUR,
        }
    }

    /// Identifier used in frontend notifications.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Mid => "mid",
            Self::Far => "far",
        }
    }
}

/// Repeating placement cycle. The counter only grows; every read reduces it
/// modulo the cycle length, so wrapping is never observable.
#[derive(Resource, Default)]
pub struct MarkerCycle {
    placed: usize,
}

impl MarkerCycle {
    /// Distance for the next placement, advancing the cycle.
    ///
    /// `distances` must be non-empty, which the manifest guarantees.
    pub fn advance(&mut self, distances: &[f32]) -> f32 {
        let distance = distances[self.placed % distances.len()];
        self.placed = self.placed.wrapping_add(1);
        distance
    }

    pub fn placed(&self) -> usize {
        self.placed
    }
}

/// Single tap: spawn the next cycled marker in front of the viewer and feed
/// its position to the ruler.
pub fn place_marker_system(
    mut commands: Commands,
    mut taps: EventReader<SingleTap>,
    mut cycle: ResMut<MarkerCycle>,
    mut ruler: ResMut<RulerTool>,
    manifest: Res<OverlayManifest>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    root_query: Query<Entity, With<OverlayRoot>>,
    endpoints: Query<Entity, With<RulerEndpoint>>,
    labels: Query<Entity, With<RulerLabel>>,
) {
    let Ok(root) = root_query.single() else {
        return;
    };

    for _ in taps.read() {
        let distance = cycle.advance(&manifest.cycle_distances);
        let band = DistanceBand::classify(distance);
        let position = Vec3::new(0.0, 0.0, -distance);
        let colour = band.colour();

        let marker = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(MARKER_RADIUS))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(colour[0], colour[1], colour[2]),
                    perceptual_roughness: 0.4,
                    ..default()
                })),
                Transform::from_translation(position),
                DepthMarker,
                ChildOf(root),
            ))
            .id();

        info!("Placed {} marker at {distance}m", band.name());
        rpc_interface.send_notification(
            "marker_placed",
            serde_json::json!({
                "distance": distance,
                "band": band.name(),
            }),
        );

        match ruler.record_placement(position) {
            RulerUpdate::StartedPair => {
                // Starting a pair discards the previous endpoints and label
                for entity in &endpoints {
                    commands.entity(entity).despawn();
                }
                for entity in &labels {
                    commands.entity(entity).despawn();
                }
                commands.entity(marker).insert(RulerEndpoint::A);

                rpc_interface.send_notification(
                    "ruler_started",
                    serde_json::json!({
                        "position": [position.x, position.y, position.z],
                    }),
                );
            }
            RulerUpdate::CompletedPair => {
                commands.entity(marker).insert(RulerEndpoint::B);

                if let Some(span) = ruler.span() {
                    rpc_interface.send_notification(
                        "ruler_completed",
                        serde_json::json!({
                            "end": [position.x, position.y, position.z],
                            "distance": span.distance,
                            "midpoint": [span.midpoint.x, span.midpoint.y, span.midpoint.z],
                        }),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::depth_bands::CYCLE_DISTANCES;

    #[test]
    fn classification_boundaries_are_half_open() {
        assert_eq!(DistanceBand::classify(0.99), DistanceBand::Near);
        assert_eq!(DistanceBand::classify(1.0), DistanceBand::Mid);
        assert_eq!(DistanceBand::classify(1.99), DistanceBand::Mid);
        assert_eq!(DistanceBand::classify(2.0), DistanceBand::Far);
    }

    #[test]
    fn four_placements_wrap_the_cycle() {
        let mut cycle = MarkerCycle::default();
        let distances: Vec<f32> = (0..4).map(|_| cycle.advance(&CYCLE_DISTANCES)).collect();
        assert_eq!(distances, vec![0.5, 1.5, 3.0, 0.5]);

        let bands: Vec<DistanceBand> = distances
            .iter()
            .map(|d| DistanceBand::classify(*d))
            .collect();
        assert_eq!(
            bands,
            vec![
                DistanceBand::Near,
                DistanceBand::Mid,
                DistanceBand::Far,
                DistanceBand::Near,
            ]
        );
    }

    #[test]
    fn placement_k_reads_the_reduced_index() {
        let mut cycle = MarkerCycle::default();
        for k in 0..20 {
            assert_eq!(cycle.placed(), k);
            let distance = cycle.advance(&CYCLE_DISTANCES);
            assert_eq!(distance, CYCLE_DISTANCES[k % CYCLE_DISTANCES.len()]);
        }
    }
}
