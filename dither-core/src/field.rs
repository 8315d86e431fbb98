use crate::attributes::{depth_value, world_position};
use crate::controls::DitherControls;
use crate::pixels::PixelBuffer;
use crate::sampler::{adjust_brightness, grid_step};

/// Position and depth at one grid cell. Depth here is the final Z value
/// (already scaled by depth intensity), so contour levels live in world units.
#[derive(Debug, Clone, Copy)]
pub struct GridCell {
    pub position: [f32; 3],
    pub depth: f32,
    pub brightness: f32,
}

/// Dense 2D sampling grid backed by a flat row-major arena of optional cells.
/// Unlike the filtered sample list, the field ignores the threshold so the
/// line-based variants keep their structural continuity. Cells can be unset;
/// consumers must skip them, never substitute a default.
#[derive(Debug, Clone)]
pub struct GridField {
    cols: usize,
    rows: usize,
    cells: Vec<Option<GridCell>>,
}

impl GridField {
    /// Build the dense field from the buffer, one cell per grid coordinate.
    pub fn build(buffer: &PixelBuffer, controls: &DitherControls) -> Self {
        let step = grid_step(buffer.max_dimension(), controls.grid_size);
        let cols = buffer.width().div_ceil(step);
        let rows = buffer.height().div_ceil(step);
        let mut cells = vec![None; cols * rows];

        for y in (0..buffer.height()).step_by(step) {
            let row = y / step;
            if row >= rows {
                continue;
            }
            for x in (0..buffer.width()).step_by(step) {
                let col = x / step;
                if col >= cols {
                    continue;
                }
                let (r, g, b) = buffer.rgb(x, y);
                let raw = (r as f32 + g as f32 + b as f32) / 3.0;
                let brightness = adjust_brightness(raw, controls);
                let depth = depth_value(brightness, controls);
                let position = world_position(x, y, buffer, depth, controls);
                cells[row * cols + col] = Some(GridCell {
                    position,
                    // position[2] is depth * intensity; keep them identical
                    depth: position[2],
                    brightness,
                });
            }
        }

        Self { cols, rows, cells }
    }

    /// Construct directly from an arena. `cells.len()` must be `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<GridCell>>) -> Self {
        assert_eq!(cells.len(), rows * cols);
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// Observed min/max depth over populated cells, or None when the field
    /// has no populated cells at all.
    pub fn depth_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for cell in self.cells.iter().flatten() {
            range = Some(match range {
                Some((min, max)) => (min.min(cell.depth), max.max(cell.depth)),
                None => (cell.depth, cell.depth),
            });
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_buffer(width: usize, height: usize) -> PixelBuffer {
        // Brightness ramps left to right.
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..height {
            for x in 0..width {
                let v = (x * 255 / width.max(1)) as u8;
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, data)
    }

    #[test]
    fn field_dimensions_round_up() {
        let buffer = gradient_buffer(5, 3);
        let mut controls = DitherControls::default();
        controls.grid_size = 1; // step = floor(5 / 2) = 2
        let field = GridField::build(&buffer, &controls);
        assert_eq!(field.cols(), 3); // ceil(5 / 2)
        assert_eq!(field.rows(), 2); // ceil(3 / 2)
    }

    #[test]
    fn field_is_dense_regardless_of_threshold() {
        let buffer = gradient_buffer(4, 4);
        let mut controls = DitherControls::default();
        controls.threshold = 255.0; // would exclude every filtered sample
        let field = GridField::build(&buffer, &controls);
        for row in 0..field.rows() {
            for col in 0..field.cols() {
                assert!(field.get(row, col).is_some());
            }
        }
    }

    #[test]
    fn depth_range_skips_unset_cells() {
        let cell = |depth: f32| {
            Some(GridCell {
                position: [0.0, 0.0, depth],
                depth,
                brightness: 0.5,
            })
        };
        let field = GridField::from_cells(2, 2, vec![cell(1.0), None, None, cell(3.0)]);
        assert_eq!(field.depth_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn empty_field_has_no_depth_range() {
        let field = GridField::from_cells(2, 2, vec![None; 4]);
        assert_eq!(field.depth_range(), None);
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let buffer = gradient_buffer(2, 2);
        let field = GridField::build(&buffer, &DitherControls::default());
        assert!(field.get(10, 0).is_none());
        assert!(field.get(0, 10).is_none());
    }
}
