use crate::controls::DitherControls;
use crate::pixels::PixelBuffer;

/// One grid coordinate that survived the threshold filter, with its source
/// channels and adjusted brightness.
#[derive(Debug, Clone, Copy)]
pub struct RawSample {
    pub x: usize,
    pub y: usize,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub brightness: f32,
}

/// Pixel stride between sampled grid points. Clamped to a minimum of 1 so a
/// large `grid_size` against a small image can never produce a zero step.
pub fn grid_step(max_dimension: usize, grid_size: u32) -> usize {
    let divisor = (grid_size as usize * 2).max(1);
    (max_dimension / divisor).max(1)
}

/// Contrast/brightness transform over a raw 0-255 channel average,
/// clamped to [0, 1].
pub fn adjust_brightness(raw: f32, controls: &DitherControls) -> f32 {
    (((raw / 255.0 - 0.5) * controls.contrast + 0.5) * controls.brightness).clamp(0.0, 1.0)
}

/// Walk the buffer on the subsampling grid and emit every coordinate whose
/// adjusted brightness strictly exceeds the threshold. Row-major order.
pub fn sample_pixels(buffer: &PixelBuffer, controls: &DitherControls) -> Vec<RawSample> {
    let step = grid_step(buffer.max_dimension(), controls.grid_size);
    let cutoff = controls.threshold / 255.0;
    let mut samples = Vec::new();

    for y in (0..buffer.height()).step_by(step) {
        for x in (0..buffer.width()).step_by(step) {
            let (r, g, b) = buffer.rgb(x, y);
            let raw = (r as f32 + g as f32 + b as f32) / 3.0;
            let brightness = adjust_brightness(raw, controls);
            if brightness > cutoff {
                samples.push(RawSample {
                    x,
                    y,
                    r,
                    g,
                    b,
                    brightness,
                });
            }
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_buffer(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        PixelBuffer::new(width, height, data)
    }

    #[test]
    fn step_is_clamped_to_one() {
        // floor(4 / 100) = 0 -> clamp to 1
        assert_eq!(grid_step(4, 50), 1);
        assert_eq!(grid_step(0, 50), 1);
        assert_eq!(grid_step(100, 0), 100);
    }

    #[test]
    fn doubling_grid_size_never_increases_step() {
        for max_dimension in [1usize, 7, 64, 513, 4096] {
            for grid_size in [1u32, 2, 10, 50, 100] {
                let coarse = grid_step(max_dimension, grid_size);
                let fine = grid_step(max_dimension, grid_size * 2);
                assert!(fine <= coarse, "dim {max_dimension} grid {grid_size}");
            }
        }
    }

    #[test]
    fn black_pixel_under_neutral_knobs_adjusts_to_zero() {
        let controls = DitherControls::default();
        // (0/255 - 0.5) * 1 + 0.5 = 0, times brightness 1 = 0
        assert_eq!(adjust_brightness(0.0, &controls), 0.0);
    }

    #[test]
    fn adjusted_brightness_stays_in_unit_range() {
        let mut controls = DitherControls::default();
        controls.contrast = 2.0;
        controls.brightness = 2.0;
        for raw in [0.0f32, 10.0, 127.5, 200.0, 255.0] {
            let adjusted = adjust_brightness(raw, &controls);
            assert!((0.0..=1.0).contains(&adjusted), "raw {raw} -> {adjusted}");
        }
    }

    #[test]
    fn threshold_boundary_is_strict() {
        // 128-valued channels: raw 128, adjusted = 128/255 under neutral knobs.
        let buffer = solid_buffer(2, 2, [128, 128, 128]);
        let mut controls = DitherControls::default();

        controls.threshold = 128.0;
        assert!(sample_pixels(&buffer, &controls).is_empty());

        controls.threshold = 127.0;
        assert_eq!(sample_pixels(&buffer, &controls).len(), 4);
    }

    #[test]
    fn white_4x4_image_yields_sixteen_full_brightness_samples() {
        let buffer = solid_buffer(4, 4, [255, 255, 255]);
        let controls = DitherControls::default(); // grid 50 -> step clamps to 1
        let samples = sample_pixels(&buffer, &controls);
        assert_eq!(samples.len(), 16);
        for sample in &samples {
            assert_eq!(sample.brightness, 1.0);
        }
    }

    #[test]
    fn samples_are_row_major_ordered() {
        let buffer = solid_buffer(3, 2, [200, 200, 200]);
        let controls = DitherControls::default();
        let samples = sample_pixels(&buffer, &controls);
        let coords: Vec<(usize, usize)> = samples.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }
}
