use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::camera::viewer_camera::{handle_resize, spawn_viewer_camera};
use crate::engine::core::app_state::{ViewerCommand, ViewerPhase, apply_viewer_commands};
use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::ViewerState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::host::{Container, ContainerHost};
use crate::engine::input::pointer::{ActiveTouches, track_cursor, track_touch};
use crate::engine::loading::model_loader::{
    ModelLoadFailed, ModelLoaded, poll_model_load, report_load_outcome, start_model_load,
};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::frame::animate_model;
use crate::engine::systems::lifecycle::teardown_viewer;
use crate::error::{ViewerError, ViewerResult};
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

/// Locate the container, attach the surface and build the app.
///
/// A missing container aborts before anything is constructed, so no window,
/// renderer or listener exists afterwards.
pub fn init_viewer(host: &impl ContainerHost, config: ViewerConfig) -> ViewerResult<App> {
    let container =
        host.find_container(&config.container_id)
            .ok_or_else(|| ViewerError::MissingContainer {
                id: config.container_id.clone(),
            })?;
    let canvas = host.attach_surface(&config.container_id)?;

    Ok(create_app(container, canvas, config))
}

pub fn create_app(container: Container, canvas: Option<String>, config: ViewerConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&container, canvas))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .add_plugins(ViewerPlugin { container, config });

    app
}

/// Viewer resources, lifecycle and per-frame systems.
pub struct ViewerPlugin {
    pub container: Container,
    pub config: ViewerConfig,
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.container)
            .insert_resource(self.config.clone())
            .insert_resource(ClearColor(Color::NONE))
            .init_resource::<ViewerState>()
            .init_resource::<ActiveTouches>()
            .init_state::<ViewerPhase>()
            .add_event::<ViewerCommand>()
            .add_event::<ModelLoaded>()
            .add_event::<ModelLoadFailed>();

        app.add_systems(
            OnEnter(ViewerPhase::Running),
            (spawn_viewer_camera, spawn_lighting, start_model_load),
        )
        .add_systems(OnExit(ViewerPhase::Running), teardown_viewer);

        // Lifecycle commands are honoured in every phase.
        app.add_systems(Update, (apply_viewer_commands, report_load_outcome));

        app.add_systems(
            Update,
            (
                poll_model_load,
                track_cursor,
                track_touch,
                handle_resize,
                animate_model,
                fps_notification_system,
            )
                .chain()
                .run_if(in_state(ViewerPhase::Running)),
        );
    }
}

fn create_default_plugins(container: &Container, canvas: Option<String>) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(container, canvas)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
