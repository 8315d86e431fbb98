use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::render_settings::{ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE};

/// Orbit state around the field origin: the camera only ever reads this,
/// the transform is derived fresh every frame.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub focus: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 30.0,
            focus: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    fn target_transform(&self) -> Transform {
        let offset = self.rotation() * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }
}

/// Right-drag rotates, middle-drag pans, scroll wheel zooms. The camera
/// transform eases toward the orbit target for smooth motion.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        let zoom_factor = if scroll.y > 0.0 { 0.9 } else { 1.1 };
        orbit.distance =
            (orbit.distance * zoom_factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    let total_motion: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_button.pressed(MouseButton::Right) && total_motion != Vec2::ZERO {
        orbit.yaw -= total_motion.x * 0.005;
        orbit.pitch = (orbit.pitch - total_motion.y * 0.005).clamp(-1.5, 1.5);
    }

    if mouse_button.pressed(MouseButton::Middle) && total_motion != Vec2::ZERO {
        let sensitivity = orbit.distance * 0.001;
        let rotation = orbit.rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        orbit.focus += right * -total_motion.x * sensitivity + up * total_motion.y * sensitivity;
    }

    let target = orbit.target_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
