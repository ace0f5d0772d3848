use bevy::prelude::*;

use constants::depth_bands::{BAND_BASE_RADIUS, BAND_RADIUS_STEP};
use constants::render_settings::{
    BAND_LABEL_FONT_PX, BAND_LABEL_OFFSET_X, BAND_LABEL_OPACITY, BAND_RING_OPACITY, RING_THICKNESS,
};

use crate::engine::assets::overlay_manifest::OverlayManifest;
use crate::engine::scene::labels::spawn_floating_label;

#[derive(Component)]
pub struct DepthBandRing;

/// Spawn the translucent distance rings and their labels in front of the
/// viewer, one per band step, as children of the overlay root.
pub fn spawn_depth_bands(
    commands: &mut Commands,
    manifest: &OverlayManifest,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    root: Entity,
) {
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, BAND_RING_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    for i in 1..=manifest.band_count {
        let depth = i as f32 * manifest.band_step;
        let radius = BAND_BASE_RADIUS + BAND_RADIUS_STEP * i as f32;

        // Torus primitives lie flat around Y; stand them up to face the
        // viewer along the forward axis.
        commands.spawn((
            Mesh3d(meshes.add(Torus {
                minor_radius: RING_THICKNESS,
                major_radius: radius,
            })),
            MeshMaterial3d(ring_material.clone()),
            Transform::from_xyz(0.0, 0.0, -depth)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            DepthBandRing,
            ChildOf(root),
        ));

        spawn_floating_label(
            commands,
            band_label_text(depth),
            BAND_LABEL_FONT_PX,
            Color::srgba(1.0, 1.0, 1.0, BAND_LABEL_OPACITY),
            root,
            Vec3::new(BAND_LABEL_OFFSET_X, 0.0, -depth),
        );
    }
}

pub fn band_label_text(depth: f32) -> String {
    format!("{depth:.1}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_labels_format_to_one_decimal() {
        assert_eq!(band_label_text(0.5), "0.5m");
        assert_eq!(band_label_text(1.0), "1.0m");
        assert_eq!(band_label_text(6.0), "6.0m");
    }
}
