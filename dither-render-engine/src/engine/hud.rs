use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use super::image_drop::SourceImage;
use super::params::ControlState;

#[derive(Component)]
pub struct FpsText;

/// Top-left status line: source image and the active control summary.
#[derive(Component)]
pub struct StatusText;

pub fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
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
            parent.spawn((
                Text::new("drop an image to begin"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}

pub fn hud_update_system(
    diagnostics: Res<DiagnosticsStore>,
    source: Res<SourceImage>,
    state: Res<ControlState>,
    mut fps_query: Query<&mut Text, (With<FpsText>, Without<StatusText>)>,
    mut status_query: Query<&mut Text, (With<StatusText>, Without<FpsText>)>,
) {
    for mut text in &mut fps_query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }

    if !source.is_changed() && !state.is_changed() {
        return;
    }
    let controls = &state.controls;
    let summary = if source.buffer.is_some() {
        format!(
            "{} | shape: {} | grid: {} | depth: {:.2} | threshold: {:.0}",
            source.name,
            controls.shape.label(),
            controls.grid_size,
            controls.depth_intensity,
            controls.threshold,
        )
    } else {
        "drop an image to begin".to_string()
    };
    for mut text in &mut status_query {
        text.0 = summary.clone();
    }
}
