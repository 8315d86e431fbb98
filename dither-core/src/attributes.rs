use constants::dither::{FIELD_EXTENT, VIBRANCY_BOOST};

use crate::controls::DitherControls;
use crate::pixels::PixelBuffer;
use crate::sampler::RawSample;

/// One fully attributed grid sample, ready for shape projection.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub brightness: f32,
}

/// Pixel-to-world scale. Fixes the projected field to a roughly constant
/// visual extent regardless of source image size.
pub fn world_scale(max_dimension: usize) -> f32 {
    FIELD_EXTENT / max_dimension.max(1) as f32
}

/// Depth from inverted adjusted brightness: dark pixels sit deep.
pub fn depth_value(brightness: f32, controls: &DitherControls) -> f32 {
    (1.0 - brightness) * controls.depth_scale + controls.depth_offset
}

/// World position for a pixel coordinate: image centred on the origin,
/// Y flipped (pixel rows grow downward), Z from scaled depth.
pub fn world_position(
    x: usize,
    y: usize,
    buffer: &PixelBuffer,
    depth: f32,
    controls: &DitherControls,
) -> [f32; 3] {
    let scale = world_scale(buffer.max_dimension());
    [
        (x as f32 - buffer.width() as f32 / 2.0) * scale,
        -(y as f32 - buffer.height() as f32 / 2.0) * scale,
        depth * controls.depth_intensity,
    ]
}

/// Derive position, size and colour for a sampled coordinate.
pub fn attribute_sample(raw: &RawSample, buffer: &PixelBuffer, controls: &DitherControls) -> Sample {
    let depth = depth_value(raw.brightness, controls);
    let size = controls.min_dot_size
        + (controls.max_dot_size - controls.min_dot_size) * raw.brightness;

    let color = if controls.color_sampling {
        sampled_color(raw.r, raw.g, raw.b, controls)
    } else {
        controls.point_color_rgb()
    };

    Sample {
        position: world_position(raw.x, raw.y, buffer, depth, controls),
        size,
        color,
        brightness: raw.brightness,
    }
}

/// Per-channel contrast/brightness adjustment plus the fixed vibrancy boost.
/// The boost is applied after clamping and may push channels past 1.0; the
/// renderer clamps on output.
fn sampled_color(r: u8, g: u8, b: u8, controls: &DitherControls) -> [f32; 3] {
    let adjust = |channel: u8| {
        (((channel as f32 / 255.0 - 0.5) * controls.contrast + 0.5) * controls.brightness)
            .clamp(0.0, 1.0)
            * VIBRANCY_BOOST
    };
    [adjust(r), adjust(g), adjust(b)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample_pixels;

    fn solid_buffer(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        PixelBuffer::new(width, height, data)
    }

    #[test]
    fn size_stays_within_configured_bounds() {
        let buffer = solid_buffer(3, 3, [180, 90, 40]);
        let mut controls = DitherControls::default();
        controls.min_dot_size = 0.5;
        controls.max_dot_size = 2.5;
        for raw in sample_pixels(&buffer, &controls) {
            let sample = attribute_sample(&raw, &buffer, &controls);
            assert!(sample.size >= controls.min_dot_size);
            assert!(sample.size <= controls.max_dot_size);
        }
    }

    #[test]
    fn flat_color_ignores_pixel_values() {
        let buffer = solid_buffer(2, 2, [12, 200, 99]);
        let mut controls = DitherControls::default();
        controls.color_sampling = false;
        controls.point_color = "#ff0000".to_string();
        for raw in sample_pixels(&buffer, &controls) {
            let sample = attribute_sample(&raw, &buffer, &controls);
            assert_eq!(sample.color, [1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn sampled_color_carries_vibrancy_boost_unclamped() {
        let controls = DitherControls::default();
        let color = sampled_color(255, 255, 255, &controls);
        for channel in color {
            assert!((channel - VIBRANCY_BOOST).abs() < 1e-6);
        }
    }

    #[test]
    fn white_pixels_project_to_max_size_at_depth_offset() {
        let buffer = solid_buffer(4, 4, [255, 255, 255]);
        let mut controls = DitherControls::default();
        controls.depth_offset = 0.7;
        let samples = sample_pixels(&buffer, &controls);
        assert_eq!(samples.len(), 16);
        for raw in samples {
            let sample = attribute_sample(&raw, &buffer, &controls);
            assert_eq!(sample.size, controls.max_dot_size);
            // (1 - 1) * depth_scale = 0, so z = depth_offset * intensity
            assert!((sample.position[2] - 0.7).abs() < 1e-6);
        }
    }

    #[test]
    fn positions_are_centred_and_y_flipped() {
        let buffer = solid_buffer(4, 4, [255, 255, 255]);
        let controls = DitherControls::default();
        let scale = world_scale(4);

        let top_left = world_position(0, 0, &buffer, 0.0, &controls);
        assert!((top_left[0] + 2.0 * scale).abs() < 1e-6);
        assert!((top_left[1] - 2.0 * scale).abs() < 1e-6);

        let below = world_position(0, 3, &buffer, 0.0, &controls);
        assert!(below[1] < top_left[1]);
    }

    #[test]
    fn depth_follows_inverted_brightness() {
        let mut controls = DitherControls::default();
        controls.depth_scale = 2.0;
        controls.depth_offset = 0.5;
        assert!((depth_value(1.0, &controls) - 0.5).abs() < 1e-6);
        assert!((depth_value(0.0, &controls) - 2.5).abs() < 1e-6);
    }
}
