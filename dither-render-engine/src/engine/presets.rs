use bevy::prelude::*;
use serde::Deserialize;

use dither_core::DitherControls;

use super::params::ControlState;

const DEFAULT_PRESET_PATH: &str = "default.dither.json";

/// JSON preset wrapper so control snapshots load through the asset server.
#[derive(Asset, TypePath, Deserialize)]
#[serde(transparent)]
pub struct ControlsPreset(pub DitherControls);

#[derive(Resource, Default)]
pub struct PresetLoader {
    handle: Option<Handle<ControlsPreset>>,
    loaded: bool,
}

/// Kick off the default preset load on the first frame and copy it into the
/// parameter store once the asset arrives. A missing preset file simply
/// leaves the built-in defaults in place.
pub fn preset_load_system(
    mut loader: ResMut<PresetLoader>,
    mut state: ResMut<ControlState>,
    asset_server: Res<AssetServer>,
    presets: Res<Assets<ControlsPreset>>,
) {
    if loader.handle.is_none() {
        println!("Loading controls preset from: {}", DEFAULT_PRESET_PATH);
        loader.handle = Some(asset_server.load(DEFAULT_PRESET_PATH));
        return;
    }

    if !loader.loaded {
        if let Some(ref handle) = loader.handle {
            if let Some(preset) = presets.get(handle) {
                println!("Applied controls preset");
                state.controls = preset.0.clone();
                loader.loaded = true;
            }
        }
    }
}
