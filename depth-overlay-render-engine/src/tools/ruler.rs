use bevy::prelude::*;

use constants::render_settings::{RULER_LABEL_FONT_PX, RULER_LABEL_LIFT};

use crate::engine::camera::head_rig::OverlayRoot;
use crate::engine::scene::labels::FloatingLabel;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::gestures::DoubleTap;
use crate::tools::marker::DepthMarker;

/// Which ruler slot a placed marker occupies.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerEndpoint {
    A,
    B,
}

#[derive(Component)]
pub struct RulerLabel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RulerPhase {
    #[default]
    AwaitingA,
    AwaitingB,
}

/// What a placement did to the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerUpdate {
    /// A fresh pair began; anything left of the previous pair is stale.
    StartedPair,
    /// Both endpoints are now set and a span can be measured.
    CompletedPair,
}

/// Distance and midpoint derived from a completed pair. Never stored; the
/// label is recomputed from the endpoints every time it is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerSpan {
    pub distance: f32,
    pub midpoint: Vec3,
}

impl RulerSpan {
    pub fn label_text(&self) -> String {
        format!("Δ = {}", format_distance(self.distance))
    }

    pub fn label_position(&self) -> Vec3 {
        self.midpoint + RULER_LABEL_LIFT
    }
}

pub fn format_distance(metres: f32) -> String {
    format!("{metres:.2}m")
}

/// Two-slot ruler: placements alternate between the A and B endpoints, in
/// rig-local space. Holds no scene handles; endpoint entities are found by
/// their [`RulerEndpoint`] tags.
#[derive(Resource, Default)]
pub struct RulerTool {
    phase: RulerPhase,
    point_a: Option<Vec3>,
    point_b: Option<Vec3>,
}

impl RulerTool {
    pub fn phase(&self) -> RulerPhase {
        self.phase
    }

    /// Feed one placement into the state machine.
    pub fn record_placement(&mut self, position: Vec3) -> RulerUpdate {
        match self.phase {
            RulerPhase::AwaitingA => {
                self.point_a = Some(position);
                self.point_b = None;
                self.phase = RulerPhase::AwaitingB;
                RulerUpdate::StartedPair
            }
            RulerPhase::AwaitingB => {
                self.point_b = Some(position);
                self.phase = RulerPhase::AwaitingA;
                RulerUpdate::CompletedPair
            }
        }
    }

    /// Clear both points and return to `AwaitingA` in one step, so no label
    /// can outlive the pair it described.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Track an endpoint the host re-anchored. Only refreshes a point that
    /// is still part of the pair; it never resurrects a cleared one.
    pub fn refresh_point(&mut self, endpoint: RulerEndpoint, position: Vec3) {
        match endpoint {
            RulerEndpoint::A => {
                if self.point_a.is_some() {
                    self.point_a = Some(position);
                }
            }
            RulerEndpoint::B => {
                if self.point_b.is_some() {
                    self.point_b = Some(position);
                }
            }
        }
    }

    /// The measured span, present exactly while both endpoints are.
    pub fn span(&self) -> Option<RulerSpan> {
        let a = self.point_a?;
        let b = self.point_b?;
        Some(RulerSpan {
            distance: a.distance(b),
            midpoint: (a + b) * 0.5,
        })
    }
}

/// Double tap: back to placing point A. The label goes immediately; the
/// endpoint markers stay visible until the next pair begins.
pub fn reset_ruler_system(
    mut commands: Commands,
    mut double_taps: EventReader<DoubleTap>,
    mut ruler: ResMut<RulerTool>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    labels: Query<Entity, With<RulerLabel>>,
) {
    if double_taps.is_empty() {
        return;
    }
    double_taps.clear();

    ruler.reset();
    for entity in &labels {
        commands.entity(entity).despawn();
    }
    info!("Ruler reset, awaiting point A");
    rpc_interface.send_notification("ruler_reset", serde_json::json!({}));
}

/// Per-frame label refresh: track re-anchored endpoints, then create or
/// update the single midpoint label. Idempotent while the pair is
/// unchanged; a no-op while either endpoint is missing.
pub fn refresh_ruler_label(
    mut commands: Commands,
    mut ruler: ResMut<RulerTool>,
    endpoints: Query<(&RulerEndpoint, &Transform), With<DepthMarker>>,
    mut labels: Query<(&mut Text, &mut FloatingLabel), With<RulerLabel>>,
    root_query: Query<Entity, With<OverlayRoot>>,
) {
    for (endpoint, transform) in &endpoints {
        ruler.refresh_point(*endpoint, transform.translation);
    }

    let Some(span) = ruler.span() else {
        return;
    };

    if let Ok((mut text, mut label)) = labels.single_mut() {
        text.0 = span.label_text();
        label.offset = span.label_position();
    } else {
        let Ok(root) = root_query.single() else {
            return;
        };
        commands.spawn((
            Text::new(span.label_text()),
            TextFont {
                font_size: RULER_LABEL_FONT_PX,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(-1000.0),
                top: Val::Px(-1000.0),
                ..default()
            },
            FloatingLabel {
                target: root,
                offset: span.label_position(),
            },
            RulerLabel,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_alternate_between_the_slots() {
        let mut ruler = RulerTool::default();
        assert_eq!(ruler.phase(), RulerPhase::AwaitingA);

        assert_eq!(
            ruler.record_placement(Vec3::new(0.0, 0.0, -0.5)),
            RulerUpdate::StartedPair
        );
        assert_eq!(ruler.phase(), RulerPhase::AwaitingB);
        assert!(ruler.span().is_none());

        assert_eq!(
            ruler.record_placement(Vec3::new(0.0, 0.0, -1.5)),
            RulerUpdate::CompletedPair
        );
        assert_eq!(ruler.phase(), RulerPhase::AwaitingA);
        assert!(ruler.span().is_some());
    }

    #[test]
    fn a_fresh_pair_overwrites_the_previous_one() {
        let mut ruler = RulerTool::default();
        ruler.record_placement(Vec3::new(0.0, 0.0, -0.5));
        ruler.record_placement(Vec3::new(0.0, 0.0, -1.5));

        // Third placement starts over; the old span must be gone until the
        // new pair completes.
        assert_eq!(
            ruler.record_placement(Vec3::new(1.0, 0.0, -3.0)),
            RulerUpdate::StartedPair
        );
        assert!(ruler.span().is_none());

        ruler.record_placement(Vec3::new(1.0, 0.0, -1.0));
        let span = ruler.span().unwrap();
        assert_eq!(span.midpoint, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn span_measures_distance_and_midpoint() {
        let mut ruler = RulerTool::default();
        ruler.record_placement(Vec3::new(0.0, 0.0, -0.5));
        ruler.record_placement(Vec3::new(0.0, 0.0, -1.5));

        let span = ruler.span().unwrap();
        assert_eq!(format_distance(span.distance), "1.00m");
        assert_eq!(span.midpoint, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(span.label_text(), "Δ = 1.00m");
        assert_eq!(span.label_position(), Vec3::new(0.0, 0.15, -1.0));
    }

    #[test]
    fn refresh_is_idempotent_for_an_unchanged_pair() {
        let mut ruler = RulerTool::default();
        let a = Vec3::new(0.2, 0.0, -0.5);
        let b = Vec3::new(-0.2, 0.1, -2.0);
        ruler.record_placement(a);
        ruler.record_placement(b);

        let first = ruler.span().unwrap();
        ruler.refresh_point(RulerEndpoint::A, a);
        ruler.refresh_point(RulerEndpoint::B, b);
        let second = ruler.span().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.label_text(), second.label_text());
    }

    #[test]
    fn refresh_tracks_a_moved_endpoint() {
        let mut ruler = RulerTool::default();
        ruler.record_placement(Vec3::new(0.0, 0.0, -0.5));
        ruler.record_placement(Vec3::new(0.0, 0.0, -1.5));

        ruler.refresh_point(RulerEndpoint::B, Vec3::new(0.0, 0.0, -2.5));
        let span = ruler.span().unwrap();
        assert_eq!(format_distance(span.distance), "2.00m");
        assert_eq!(span.midpoint, Vec3::new(0.0, 0.0, -1.5));
    }

    #[test]
    fn reset_mid_pair_discards_the_half_pair() {
        let mut ruler = RulerTool::default();
        ruler.record_placement(Vec3::new(9.0, 9.0, 9.0));
        ruler.reset();
        assert_eq!(ruler.phase(), RulerPhase::AwaitingA);
        assert!(ruler.span().is_none());

        // The next pair stands alone; nothing of the half pair leaks in.
        ruler.record_placement(Vec3::new(0.0, 0.0, -1.0));
        ruler.record_placement(Vec3::new(0.0, 0.0, -2.0));
        let span = ruler.span().unwrap();
        assert_eq!(span.midpoint, Vec3::new(0.0, 0.0, -1.5));
        assert_eq!(format_distance(span.distance), "1.00m");
    }

    #[test]
    fn refresh_never_resurrects_a_cleared_point() {
        let mut ruler = RulerTool::default();
        ruler.record_placement(Vec3::new(0.0, 0.0, -0.5));
        ruler.record_placement(Vec3::new(0.0, 0.0, -1.5));
        ruler.reset();

        // Stale endpoint entities may still report positions for a frame.
        ruler.refresh_point(RulerEndpoint::A, Vec3::new(0.0, 0.0, -0.5));
        ruler.refresh_point(RulerEndpoint::B, Vec3::new(0.0, 0.0, -1.5));
        assert!(ruler.span().is_none());
        assert_eq!(ruler.phase(), RulerPhase::AwaitingA);
    }
}
