//! Image-to-geometry projection pipeline.
//!
//! Converts a decoded RGBA pixel buffer into a renderable 3D point/shape
//! field: subsampled brightness grid, depth/size/colour attribution, shape
//! variant projection and iso-depth contour extraction. Pure CPU code with no
//! rendering dependencies; the render engine consumes [`RenderSet`] payloads.

pub mod attributes;
pub mod contour;
pub mod controls;
pub mod field;
pub mod pixels;
pub mod projector;
pub mod sampler;

pub use attributes::Sample;
pub use contour::ContourSegment;
pub use controls::{DitherControls, ShapeKind};
pub use field::{GridCell, GridField};
pub use pixels::PixelBuffer;
pub use projector::{RenderSet, project};
