use bevy::prelude::*;

use crate::engine::camera::head_rig::HeadCamera;

/// Screen-projected label pinned to a point in an entity's local space.
#[derive(Component)]
pub struct FloatingLabel {
    pub target: Entity,
    pub offset: Vec3,
}

pub fn spawn_floating_label(
    commands: &mut Commands,
    text: String,
    font_px: f32,
    colour: Color,
    target: Entity,
    offset: Vec3,
) -> Entity {
    commands
        .spawn((
            Text::new(text),
            TextFont {
                font_size: font_px,
                ..default()
            },
            TextColor(colour),
            Node {
                position_type: PositionType::Absolute,
                // Parked off-screen until the first projection pass runs.
                left: Val::Px(-1000.0),
                top: Val::Px(-1000.0),
                ..default()
            },
            FloatingLabel { target, offset },
        ))
        .id()
}

/// Reproject every label through the camera. Labels whose anchor is behind
/// the viewer are hidden rather than wrapped across the screen.
pub fn project_floating_labels(
    mut labels: Query<(&FloatingLabel, &mut Node, &mut Visibility)>,
    targets: Query<&GlobalTransform>,
    camera_query: Query<(&Camera, &GlobalTransform), With<HeadCamera>>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, mut node, mut visibility) in &mut labels {
        let Ok(target) = targets.get(label.target) else {
            continue;
        };
        let world_point = target.transform_point(label.offset);

        match camera.world_to_viewport(camera_transform, world_point) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
