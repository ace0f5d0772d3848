use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::HUD_FONT_PX;

// Crate engine modules
use crate::engine::assets::overlay_manifest::OverlayManifest;
use crate::engine::camera::head_rig::{HeadRig, head_look_controller, spawn_head_camera};
use crate::engine::core::app_state::{
    AppState, EnterImmersive, ExitImmersive, FpsText, HintText, handle_immersive_transitions,
    transition_to_idle,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::labels::project_floating_labels;
use crate::engine::systems::fps_tracking::{fps_notification_system, fps_text_update_system};

// Crate tools modules
use crate::tools::{
    gestures::{DoubleTap, SingleTap, TapRecognizer, recognise_taps},
    marker::{MarkerCycle, place_marker_system},
    ruler::{RulerTool, refresh_ruler_label, reset_ruler_system},
    session::{
        handle_session_keyboard_shortcuts, setup_immersive_scene, teardown_immersive_scene,
    },
};

// Crate Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers OverlayManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<OverlayManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .init_state::<AppState>();

    // Initialise session resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<MarkerCycle>()
        .init_resource::<RulerTool>()
        .init_resource::<TapRecognizer>()
        .init_resource::<HeadRig>()
        .add_event::<SingleTap>()
        .add_event::<DoubleTap>()
        .add_event::<EnterImmersive>()
        .add_event::<ExitImmersive>();

    // State-based system scheduling
    app.add_systems(Startup, (spawn_head_camera, setup_hud, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_idle)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (handle_session_keyboard_shortcuts, handle_immersive_transitions).chain(),
        )
        .add_systems(OnEnter(AppState::Idle), show_idle_hint)
        .add_systems(
            OnEnter(AppState::Immersive),
            (setup_immersive_scene, show_immersive_hint),
        )
        .add_systems(OnExit(AppState::Immersive), teardown_immersive_scene);

    // Session systems - only run while the immersive overlay is up. Gesture
    // recognition feeds placement before the ruler refresh sees the frame.
    let immersive_systems = (
        recognise_taps,
        place_marker_system,
        reset_ruler_system,
        refresh_ruler_label,
        head_look_controller,
        project_floating_labels,
    )
        .chain();

    app.add_systems(
        Update,
        immersive_systems.run_if(in_state(AppState::Immersive)),
    );

    app.add_systems(Update, (fps_text_update_system, fps_notification_system));

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn setup_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading overlay manifest..."),
                TextFont {
                    font_size: HUD_FONT_PX,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                HintText,
            ));

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: HUD_FONT_PX,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn show_idle_hint(mut query: Query<&mut Text, With<HintText>>) {
    for mut text in &mut query {
        text.0 = "Enter: open the immersive overlay".to_string();
    }
}

fn show_immersive_hint(mut query: Query<&mut Text, With<HintText>>) {
    for mut text in &mut query {
        text.0 =
            "tap: place marker | double tap: reset ruler | right drag: look | Esc: exit"
                .to_string();
    }
}
