use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::OVERLAY_MANIFEST_PATH;
use crate::engine::assets::overlay_manifest::OverlayManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<OverlayManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(OVERLAY_MANIFEST_PATH));
}

// Poll the manifest handle; insert the resource once it resolves
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<OverlayManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Overlay manifest loaded successfully");
        commands.insert_resource(manifest.clone().sanitised());
        loading_progress.manifest_resolved = true;
        return;
    }

    // A broken or missing manifest must not wedge the app in Loading; the
    // built-in defaults are always a valid session.
    if matches!(
        asset_server.get_load_state(handle),
        Some(LoadState::Failed(_))
    ) {
        warn!(
            "Overlay manifest '{}' failed to load, using built-in defaults",
            OVERLAY_MANIFEST_PATH
        );
        commands.insert_resource(OverlayManifest::default());
        loading_progress.manifest_resolved = true;
    }
}
