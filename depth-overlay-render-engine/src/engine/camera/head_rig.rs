use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use constants::interaction::{LOOK_PITCH_SENSITIVITY, LOOK_YAW_SENSITIVITY, PITCH_LIMIT};
use constants::render_settings::CAMERA_FOV_DEGREES;

/// Everything spawned for one immersive session carries this tag and is
/// despawned (with descendants) on exit.
#[derive(Component)]
pub struct ImmersiveScene;

/// The viewer. Persistent across sessions so the HUD always has a camera;
/// only the overlay content comes and goes.
#[derive(Component)]
pub struct HeadCamera;

/// Head-anchored parent of all overlay content. Children are placed in rig
/// space, where the forward axis is -Z.
#[derive(Component)]
pub struct OverlayRoot;

/// Look-around orientation standing in for head tracking on desktop.
#[derive(Resource, Default)]
pub struct HeadRig {
    pub yaw: f32,
    pub pitch: f32,
}

/// Startup: spawn the viewer camera at the origin, facing -Z.
pub fn spawn_head_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::default(),
        HeadCamera,
    ));
}

/// Spawn the head-anchored overlay root as a camera child. Returns the root
/// so scene setup can hang bands and markers off it.
pub fn spawn_overlay_root(commands: &mut Commands, camera: Entity) -> Entity {
    commands
        .spawn((
            OverlayRoot,
            Transform::default(),
            Visibility::default(),
            ImmersiveScene,
            ChildOf(camera),
        ))
        .id()
}

/// Right-drag look-around. The overlay root is a camera child, so turning
/// the head carries every placed entity with it; only the labels' projected
/// screen positions change.
pub fn head_look_controller(
    mut rig: ResMut<HeadRig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut camera_query: Query<&mut Transform, With<HeadCamera>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        rig.yaw += -mouse_delta.x * LOOK_YAW_SENSITIVITY;
        rig.pitch += -mouse_delta.y * LOOK_PITCH_SENSITIVITY;
        rig.pitch = rig.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
}
