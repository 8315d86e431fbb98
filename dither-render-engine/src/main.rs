use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;

use engine::camera::{OrbitCamera, camera_controller};
use engine::field::{FieldRotation, rebuild_field, rotate_field};
use engine::hud::{hud_update_system, spawn_hud};
use engine::image_drop::{SourceImage, handle_dropped_files, load_startup_image};
use engine::params::{ControlState, control_input_system};
use engine::presets::{ControlsPreset, PresetLoader, preset_load_system};
use engine::scene::{spawn_camera, spawn_lighting};

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Assemble the dither field viewer application.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<ControlsPreset>::new(&["dither.json"]));

    app.init_resource::<ControlState>()
        .init_resource::<SourceImage>()
        .init_resource::<FieldRotation>()
        .init_resource::<OrbitCamera>()
        .init_resource::<PresetLoader>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                preset_load_system,
                handle_dropped_files,
                control_input_system,
                rebuild_field,
                rotate_field,
            )
                .chain(),
        )
        .add_systems(Update, (camera_controller, hud_update_system));

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

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "3D Dither".to_string(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "3D Dither".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

fn setup(mut commands: Commands, mut source: ResMut<SourceImage>) {
    println!("=== 3D DITHER FIELD VIEWER ===");
    println!("Drop a png/jpg/jpeg/gif onto the window to project it.");
    println!("Keys: 1-9 shape, arrows grid/depth, C colours, R spin, [ ] threshold, N/M contours, P save preset");

    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_hud(&mut commands);
    load_startup_image(&mut source);
}
