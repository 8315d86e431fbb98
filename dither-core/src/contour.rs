use crate::controls::DitherControls;
use crate::field::{GridCell, GridField};

/// One iso-depth line segment: a single edge-crossing pair inside one 2x2
/// block of the grid at one contour level.
#[derive(Debug, Clone, Copy)]
pub struct ContourSegment {
    pub a: [f32; 3],
    pub b: [f32; 3],
    pub color: [f32; 3],
}

/// Edges of a 2x2 block as corner index pairs: top, right, bottom, left.
const BLOCK_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

/// Extract iso-depth contour lines from the field, marching-squares style,
/// restricted to the unambiguous 2-crossing case. Blocks with a missing
/// corner are skipped entirely; saddle blocks (3 or 4 crossings) are dropped
/// rather than resolved. A field with zero depth range emits nothing.
pub fn extract_contours(field: &GridField, controls: &DitherControls) -> Vec<ContourSegment> {
    let levels = controls.contour_levels;
    if levels == 0 || field.rows() < 2 || field.cols() < 2 {
        return Vec::new();
    }
    let Some((min_depth, max_depth)) = field.depth_range() else {
        return Vec::new();
    };
    let range = max_depth - min_depth;
    if range <= 0.0 {
        // Uniform depth: every level would sit exactly on every cell and the
        // inclusive straddle rule degenerates. Deterministic policy: nothing.
        return Vec::new();
    }

    let interval = range / levels as f32;
    let low = controls.topo_color_low_rgb();
    let high = controls.topo_color_high_rgb();
    let mut segments = Vec::new();

    for level in 0..levels {
        let depth = min_depth + level as f32 * interval;
        let t = level as f32 / levels as f32;
        let color = [
            low[0] + (high[0] - low[0]) * t,
            low[1] + (high[1] - low[1]) * t,
            low[2] + (high[2] - low[2]) * t,
        ];

        for row in 0..field.rows() - 1 {
            for col in 0..field.cols() - 1 {
                let corners = [
                    field.get(row, col),
                    field.get(row, col + 1),
                    field.get(row + 1, col + 1),
                    field.get(row + 1, col),
                ];
                let [Some(c0), Some(c1), Some(c2), Some(c3)] = corners else {
                    continue;
                };
                if let Some((a, b)) = block_crossings(&[c0, c1, c2, c3], depth) {
                    segments.push(ContourSegment { a, b, color });
                }
            }
        }
    }

    segments
}

/// Test each block edge for a level crossing and return the segment endpoints
/// when exactly two edges cross. The straddle test is inclusive on both
/// sides, so corners sitting exactly on the level count on both adjacent
/// edges; duplicate or zero-length segments in that case are left as-is.
fn block_crossings(corners: &[&GridCell; 4], level: f32) -> Option<([f32; 3], [f32; 3])> {
    let mut crossings: Vec<[f32; 3]> = Vec::with_capacity(4);

    for (i, j) in BLOCK_EDGES {
        let depth_a = corners[i].depth;
        let depth_b = corners[j].depth;
        let straddles = (depth_a <= level && depth_b >= level)
            || (depth_a >= level && depth_b <= level);
        if !straddles {
            continue;
        }

        let t = if depth_b == depth_a {
            0.0
        } else {
            ((level - depth_a) / (depth_b - depth_a)).abs()
        };
        let pos_a = corners[i].position;
        let pos_b = corners[j].position;
        crossings.push([
            pos_a[0] + t * (pos_b[0] - pos_a[0]),
            pos_a[1] + t * (pos_b[1] - pos_a[1]),
            level,
        ]);
    }

    match crossings.as_slice() {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}
