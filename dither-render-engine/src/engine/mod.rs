pub mod camera;
pub mod field;
pub mod hud;
pub mod image_drop;
pub mod params;
pub mod presets;
pub mod scene;
