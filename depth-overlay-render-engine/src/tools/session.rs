use bevy::prelude::*;

use crate::engine::assets::overlay_manifest::OverlayManifest;
use crate::engine::camera::head_rig::{HeadCamera, HeadRig, ImmersiveScene, spawn_overlay_root};
use crate::engine::scene::depth_bands::spawn_depth_bands;
use crate::engine::scene::labels::FloatingLabel;
use crate::tools::gestures::TapRecognizer;
use crate::tools::marker::MarkerCycle;
use crate::tools::ruler::RulerTool;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::{EnterImmersive, ExitImmersive};

/// Build the immersive scene: overlay root under the camera, lighting, and
/// the band rings. Runs on entering `Immersive`, after which gestures
/// become deliverable.
pub fn setup_immersive_scene(
    mut commands: Commands,
    manifest: Res<OverlayManifest>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    camera_query: Query<Entity, With<HeadCamera>>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };

    println!("=== DEPTH OVERLAY: immersive session starting ===");

    let root = spawn_overlay_root(&mut commands, camera);
    spawn_lighting(&mut commands);
    spawn_depth_bands(&mut commands, &manifest, &mut meshes, &mut materials, root);
}

/// Tear the session down: the overlay root (and with it every marker and
/// ring), all projected labels, and the session state. Nothing survives
/// into the next session.
pub fn teardown_immersive_scene(
    mut commands: Commands,
    scene_query: Query<Entity, With<ImmersiveScene>>,
    label_query: Query<Entity, With<FloatingLabel>>,
    mut camera_query: Query<&mut Transform, With<HeadCamera>>,
    mut cycle: ResMut<MarkerCycle>,
    mut ruler: ResMut<RulerTool>,
    mut recognizer: ResMut<TapRecognizer>,
    mut rig: ResMut<HeadRig>,
) {
    for entity in &scene_query {
        commands.entity(entity).despawn();
    }
    for entity in &label_query {
        commands.entity(entity).despawn();
    }

    *cycle = MarkerCycle::default();
    ruler.reset();
    *recognizer = TapRecognizer::default();
    *rig = HeadRig::default();
    if let Ok(mut transform) = camera_query.single_mut() {
        transform.rotation = Quat::IDENTITY;
    }

    println!("=== DEPTH OVERLAY: immersive session ended ===");
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
        ImmersiveScene,
    ));
}

/// System handling keyboard shortcuts for the session lifecycle (native
/// builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_session_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut enter_events: EventWriter<EnterImmersive>,
    mut exit_events: EventWriter<ExitImmersive>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        enter_events.write(EnterImmersive);
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        exit_events.write(ExitImmersive);
    }
}

/// Placeholder system for WASM builds where keyboard shortcuts are
/// disabled - the session is driven over RPC only.
#[cfg(target_arch = "wasm32")]
pub fn handle_session_keyboard_shortcuts() {}
