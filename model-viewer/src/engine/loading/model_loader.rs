use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::{ModelLoad, ViewerState};
use crate::engine::loading::animation::animation_driver;
use crate::engine::loading::model_fit::{ViewerModel, fit_model_on_ready};
use crate::error::ViewerError;

/// Sent once when the GLB has loaded and its scene has been spawned.
#[derive(Event, Debug, Clone)]
pub struct ModelLoaded {
    pub clips: usize,
}

/// Sent once when the GLB could not be loaded.
#[derive(Event, Debug, Clone)]
pub struct ModelLoadFailed {
    pub error: ViewerError,
}

/// What the asset server currently reports for the pending handle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadProgress {
    Loading,
    Loaded,
    /// The GLB itself loaded but one of its dependencies did not.
    Partial(String),
    Failed(String),
}

/// Collapse the asset and dependency states into one progress value.
///
/// Only a failure of the GLB itself is fatal. A failed texture still lets
/// the mesh show once everything else has settled.
pub fn load_progress(
    load: Option<LoadState>,
    dependencies: Option<RecursiveDependencyLoadState>,
) -> LoadProgress {
    match (load, dependencies) {
        (Some(LoadState::Failed(error)), _) => LoadProgress::Failed(error.to_string()),
        (Some(LoadState::Loaded), Some(RecursiveDependencyLoadState::Loaded)) => {
            LoadProgress::Loaded
        }
        (Some(LoadState::Loaded), Some(RecursiveDependencyLoadState::Failed(error))) => {
            LoadProgress::Partial(error.to_string())
        }
        _ => LoadProgress::Loading,
    }
}

/// Kick off the asynchronous GLB load.
pub fn start_model_load(
    mut state: ResMut<ViewerState>,
    config: Res<ViewerConfig>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading model from: {}", config.asset_path);
    state.load = ModelLoad::Pending(asset_server.load(config.asset_path.clone()));
}

/// Fold the latest progress into a pending load.
///
/// Returns `Some` only on the frame the load settles, so each outcome is
/// reported once. Loads that are not pending are left untouched.
pub fn settle_load(
    load: &mut ModelLoad,
    progress: LoadProgress,
    path: &str,
) -> Option<Result<Handle<Gltf>, ViewerError>> {
    let ModelLoad::Pending(handle) = load else {
        return None;
    };

    match progress {
        LoadProgress::Loading => None,
        LoadProgress::Loaded => Some(Ok(handle.clone())),
        LoadProgress::Partial(reason) => {
            warn!("Model {} loaded with missing dependencies: {}", path, reason);
            Some(Ok(handle.clone()))
        }
        LoadProgress::Failed(reason) => {
            let error = ViewerError::AssetLoad {
                path: path.to_string(),
                reason,
            };
            *load = ModelLoad::Failed(error.clone());
            Some(Err(error))
        }
    }
}

/// Poll the pending load once per frame without blocking rendering.
pub fn poll_model_load(
    mut commands: Commands,
    mut state: ResMut<ViewerState>,
    config: Res<ViewerConfig>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut loaded: EventWriter<ModelLoaded>,
    mut failed: EventWriter<ModelLoadFailed>,
) {
    let progress = match &state.load {
        ModelLoad::Pending(handle) => load_progress(
            asset_server.get_load_state(handle),
            asset_server.get_recursive_dependency_load_state(handle),
        ),
        _ => return,
    };

    let handle = match settle_load(&mut state.load, progress, &config.asset_path) {
        None => return,
        Some(Err(error)) => {
            failed.write(ModelLoadFailed { error });
            return;
        }
        Some(Ok(handle)) => handle,
    };

    let Some(gltf) = gltfs.get(&handle) else {
        return;
    };

    let Some(scene) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        let error = ViewerError::AssetLoad {
            path: config.asset_path.clone(),
            reason: "asset contains no scene".to_string(),
        };
        state.load = ModelLoad::Failed(error.clone());
        failed.write(ModelLoadFailed { error });
        return;
    };

    let clips = gltf.animations.len();
    state.animation = animation_driver(gltf.animations.clone(), &mut graphs);

    // Hidden until the scene instance is ready and fitted.
    commands
        .spawn((
            SceneRoot(scene),
            Transform::default(),
            Visibility::Hidden,
            ViewerModel,
        ))
        .observe(fit_model_on_ready);

    state.load = ModelLoad::Ready { clips };
    loaded.write(ModelLoaded { clips });
}

/// Log the load outcome. Failures are reported here and nowhere else.
pub fn report_load_outcome(
    mut loaded: EventReader<ModelLoaded>,
    mut failed: EventReader<ModelLoadFailed>,
) {
    for event in loaded.read() {
        info!("✓ Model loaded ({} animation clips)", event.clips);
    }
    for event in failed.read() {
        error!("Error loading GLB model: {}", event.error);
    }
}
