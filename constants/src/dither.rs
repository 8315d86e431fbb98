/// World-space extent of the projected field along its widest image axis.
/// Every source image is scaled so its geometry spans roughly this width,
/// keeping the camera framing independent of pixel dimensions.
pub const FIELD_EXTENT: f32 = 25.0;

/// Fixed post-adjustment multiplier applied to sampled colours.
/// Channels may exceed 1.0 after the boost; the renderer clamps on output.
pub const VIBRANCY_BOOST: f32 = 1.3;

/// Grayscale base and span used for brightness-shaded grid lines.
pub const GRID_SHADE_BASE: f32 = 0.7;
pub const GRID_SHADE_SPAN: f32 = 0.3;

/// Cross-section side length of a `line` shape bar.
pub const BAR_THICKNESS: f32 = 0.2;
