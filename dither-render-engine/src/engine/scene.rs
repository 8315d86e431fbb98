use bevy::prelude::*;

use constants::render_settings::{
    AMBIENT_BRIGHTNESS, CAMERA_FOV_DEGREES, CAMERA_START, POINT_LIGHT_INTENSITY,
    POINT_LIGHT_POSITION,
};

/// Spawn the field camera and scene backdrop.
pub fn spawn_camera(commands: &mut Commands) {
    let [x, y, z] = CAMERA_START;
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(ClearColor(Color::BLACK));
}

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    let [x, y, z] = POINT_LIGHT_POSITION;
    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(x, y, z),
    ));
}
