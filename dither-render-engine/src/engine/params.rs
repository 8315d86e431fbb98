use bevy::prelude::*;

use dither_core::{DitherControls, ShapeKind};

/// The parameter store. Systems read the snapshot; every edit replaces the
/// whole struct so downstream change detection always sees a complete,
/// consistent configuration.
#[derive(Resource, Default)]
pub struct ControlState {
    pub controls: DitherControls,
}

const ROTATION_SPEEDS: &[f32] = &[0.0, 0.0025, 0.005, 0.01, 0.02];

const PRESET_SAVE_PATH: &str = "dither_preset.dither.json";

/// Keyboard-driven control edits.
///
/// 1-9 select the shape variant, arrow keys adjust grid size and depth
/// intensity, C toggles colour sampling, R cycles rotation speed, brackets
/// move the threshold, N/M the contour level count, P saves a preset.
pub fn control_input_system(
    mut state: ResMut<ControlState>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let mut next = state.controls.clone();
    let mut changed = false;

    const SHAPE_KEYS: &[KeyCode] = &[
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    for (key, shape) in SHAPE_KEYS.iter().zip(ShapeKind::SELECTABLE) {
        if keyboard.just_pressed(*key) {
            next.shape = *shape;
            changed = true;
            println!("Shape: {}", shape.label());
        }
    }

    if keyboard.just_pressed(KeyCode::ArrowUp) {
        next.grid_size = (next.grid_size + 5).min(200);
        changed = true;
        println!("Grid size: {}", next.grid_size);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        next.grid_size = next.grid_size.saturating_sub(5).max(1);
        changed = true;
        println!("Grid size: {}", next.grid_size);
    }

    if keyboard.just_pressed(KeyCode::ArrowRight) {
        next.depth_intensity = (next.depth_intensity + 0.25).min(5.0);
        changed = true;
        println!("Depth intensity: {:.2}", next.depth_intensity);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        next.depth_intensity = (next.depth_intensity - 0.25).max(0.0);
        changed = true;
        println!("Depth intensity: {:.2}", next.depth_intensity);
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        next.color_sampling = !next.color_sampling;
        changed = true;
        println!(
            "Colour sampling: {}",
            if next.color_sampling { "on" } else { "off" }
        );
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        let current = ROTATION_SPEEDS
            .iter()
            .position(|&s| (s - next.rotation_speed).abs() < 1e-6)
            .unwrap_or(0);
        next.rotation_speed = ROTATION_SPEEDS[(current + 1) % ROTATION_SPEEDS.len()];
        changed = true;
        println!("Rotation speed: {:.4}", next.rotation_speed);
    }

    if keyboard.just_pressed(KeyCode::BracketRight) {
        next.threshold = (next.threshold + 8.0).min(255.0);
        changed = true;
        println!("Threshold: {}", next.threshold);
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        next.threshold = (next.threshold - 8.0).max(0.0);
        changed = true;
        println!("Threshold: {}", next.threshold);
    }

    if keyboard.just_pressed(KeyCode::KeyM) {
        next.contour_levels = (next.contour_levels + 1).min(40);
        changed = true;
        println!("Contour levels: {}", next.contour_levels);
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        next.contour_levels = next.contour_levels.saturating_sub(1).max(1);
        changed = true;
        println!("Contour levels: {}", next.contour_levels);
    }

    if keyboard.just_pressed(KeyCode::KeyP) {
        save_preset(&next);
    }

    if changed {
        state.controls = next;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_preset(controls: &DitherControls) {
    match serde_json::to_string_pretty(controls) {
        Ok(json) => match std::fs::write(PRESET_SAVE_PATH, json) {
            Ok(()) => println!("Saved preset to {}", PRESET_SAVE_PATH),
            Err(err) => eprintln!("Failed to write {}: {}", PRESET_SAVE_PATH, err),
        },
        Err(err) => eprintln!("Failed to serialize preset: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn save_preset(_controls: &DitherControls) {
    eprintln!("Preset saving is not available in the browser build");
}
