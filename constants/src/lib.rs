pub mod dither;
pub mod image_formats;
pub mod render_settings;
