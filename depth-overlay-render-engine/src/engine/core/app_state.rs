use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

/// Application lifecycle. `Immersive` is unreachable until the overlay
/// manifest has resolved, so no gesture can be delivered before setup.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Idle,
    Immersive,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct HintText;

/// Request to open the immersive overlay, from the control surface
/// (RPC `enter_immersive`) or the native Enter shortcut.
#[derive(Event)]
pub struct EnterImmersive;

/// Request to close the immersive overlay. Always honoured.
#[derive(Event)]
pub struct ExitImmersive;

// Transition to Idle once the manifest has resolved (loaded or defaulted)
pub fn transition_to_idle(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_resolved {
        println!("→ Transitioning to Idle state");
        next_state.set(AppState::Idle);
    }
}

/// Apply queued enter/exit requests. Entry is only valid from `Idle`; exit
/// is a no-op unless a session is running, so it cannot fail.
pub fn handle_immersive_transitions(
    mut enter_events: EventReader<EnterImmersive>,
    mut exit_events: EventReader<ExitImmersive>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !enter_events.is_empty() {
        enter_events.clear();
        if *state.get() == AppState::Idle {
            next_state.set(AppState::Immersive);
            rpc_interface.send_notification("immersive_entered", serde_json::json!({}));
        } else {
            warn!("Ignoring enter request while in {:?}", state.get());
        }
    }

    if !exit_events.is_empty() {
        exit_events.clear();
        if *state.get() == AppState::Immersive {
            next_state.set(AppState::Idle);
            rpc_interface.send_notification("immersive_exited", serde_json::json!({}));
        }
    }
}
