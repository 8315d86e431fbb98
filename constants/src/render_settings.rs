/// Camera framing for the dither field scene.
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 30.0];
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Orbit distance limits for the camera zoom.
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;

/// Lighting levels for the field scene.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;

/// Sphere mesh detail limits; the control value is clamped into this range.
pub const SPHERE_DETAIL_MIN: usize = 3;
pub const SPHERE_DETAIL_MAX: usize = 64;

/// Torus mesh tessellation (minor, major).
pub const TORUS_MINOR_RESOLUTION: usize = 8;
pub const TORUS_MAJOR_RESOLUTION: usize = 16;

/// Cone mesh tessellation.
pub const CONE_RESOLUTION: u32 = 16;
