use std::f32::consts::FRAC_PI_2;

use constants::dither::{GRID_SHADE_BASE, GRID_SHADE_SPAN};

use crate::attributes::{Sample, attribute_sample};
use crate::contour::extract_contours;
use crate::controls::{DitherControls, ShapeKind};
use crate::field::GridField;
use crate::pixels::PixelBuffer;
use crate::sampler::sample_pixels;

/// Particle batch: three parallel arrays, one entry per sample.
#[derive(Debug, Clone, Default)]
pub struct PointBatch {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
}

/// Geometry of the repeated primitive for the instanced variants, carrying
/// its shape-specific knobs from the controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidPrimitive {
    Cube { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32, detail: u32 },
    Torus { outer_radius: f32, inner_radius: f32 },
    Cone { radius: f32, height: f32 },
    Triangle { radius: f32, height: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct ShapeInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub scale: f32,
}

/// One primitive placed per sample, sharing geometry and Euler rotation.
#[derive(Debug, Clone)]
pub struct InstancedSet {
    pub primitive: SolidPrimitive,
    pub rotation: [f32; 3],
    pub instances: Vec<ShapeInstance>,
}

/// One vertical elevation bar; `size` is the bar height.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub a: [f32; 3],
    pub b: [f32; 3],
    pub color: [f32; 3],
}

/// Line-segment payload shared by the grid and topographic variants.
#[derive(Debug, Clone)]
pub struct SegmentSet {
    pub segments: Vec<Segment>,
    pub stroke_width: f32,
}

/// Renderable output of one projection pass. Exactly one variant per
/// configuration; `Empty` is the silent "nothing to draw" terminal state.
#[derive(Debug, Clone, Default)]
pub enum RenderSet {
    #[default]
    Empty,
    Points(PointBatch),
    Instanced(InstancedSet),
    Bars(Vec<Bar>),
    Segments(SegmentSet),
}

impl RenderSet {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderSet::Empty)
    }
}

/// Project the source image into the configured shape variant. An absent
/// buffer, an empty post-threshold sample set, or an unrecognized shape tag
/// all produce `Empty` rather than an error.
pub fn project(buffer: Option<&PixelBuffer>, controls: &DitherControls) -> RenderSet {
    let Some(buffer) = buffer else {
        return RenderSet::Empty;
    };

    let samples: Vec<Sample> = sample_pixels(buffer, controls)
        .iter()
        .map(|raw| attribute_sample(raw, buffer, controls))
        .collect();
    if samples.is_empty() {
        return RenderSet::Empty;
    }

    match controls.shape {
        ShapeKind::Point => RenderSet::Points(point_batch(&samples)),
        ShapeKind::Cube => instanced(
            SolidPrimitive::Cube {
                width: controls.cube_width,
                height: controls.cube_height,
                depth: controls.cube_depth,
            },
            shared_rotation(controls),
            &samples,
        ),
        ShapeKind::Sphere => instanced(
            SolidPrimitive::Sphere {
                radius: controls.sphere_radius,
                detail: controls.sphere_detail,
            },
            shared_rotation(controls),
            &samples,
        ),
        ShapeKind::Torus => instanced(
            SolidPrimitive::Torus {
                outer_radius: controls.torus_outer_radius,
                inner_radius: controls.torus_inner_radius,
            },
            shared_rotation(controls),
            &samples,
        ),
        ShapeKind::Cone => instanced(
            SolidPrimitive::Cone {
                radius: controls.cone_radius,
                height: controls.cone_height,
            },
            shared_rotation(controls),
            &samples,
        ),
        ShapeKind::Triangle => {
            // Stand the triangular prism on the depth axis.
            let mut rotation = shared_rotation(controls);
            rotation[0] += FRAC_PI_2;
            instanced(
                SolidPrimitive::Triangle {
                    radius: controls.triangle_radius,
                    height: controls.triangle_height,
                },
                rotation,
                &samples,
            )
        }
        ShapeKind::Line => RenderSet::Bars(bars(&samples)),
        ShapeKind::Grid => RenderSet::Segments(SegmentSet {
            segments: grid_segments(&GridField::build(buffer, controls), controls),
            stroke_width: controls.stroke_width,
        }),
        ShapeKind::Topographic => RenderSet::Segments(SegmentSet {
            segments: extract_contours(&GridField::build(buffer, controls), controls)
                .into_iter()
                .map(|c| Segment {
                    a: c.a,
                    b: c.b,
                    color: c.color,
                })
                .collect(),
            stroke_width: controls.stroke_width,
        }),
        ShapeKind::Unknown => RenderSet::Empty,
    }
}

fn shared_rotation(controls: &DitherControls) -> [f32; 3] {
    [
        controls.shape_rotation_x,
        controls.shape_rotation_y,
        controls.shape_rotation_z,
    ]
}

fn point_batch(samples: &[Sample]) -> PointBatch {
    let mut batch = PointBatch {
        positions: Vec::with_capacity(samples.len()),
        colors: Vec::with_capacity(samples.len()),
        sizes: Vec::with_capacity(samples.len()),
    };
    for sample in samples {
        batch.positions.push(sample.position);
        batch.colors.push(sample.color);
        batch.sizes.push(sample.size);
    }
    batch
}

fn instanced(primitive: SolidPrimitive, rotation: [f32; 3], samples: &[Sample]) -> RenderSet {
    RenderSet::Instanced(InstancedSet {
        primitive,
        rotation,
        instances: samples
            .iter()
            .map(|sample| ShapeInstance {
                position: sample.position,
                color: sample.color,
                scale: sample.size,
            })
            .collect(),
    })
}

/// Vertical bars rest with their midpoint dropped by a quarter height so the
/// bar visually grows downward from the sample position.
fn bars(samples: &[Sample]) -> Vec<Bar> {
    samples
        .iter()
        .map(|sample| Bar {
            position: [
                sample.position[0],
                sample.position[1] - sample.size / 4.0,
                sample.position[2],
            ],
            size: sample.size,
            color: sample.color,
        })
        .collect()
}

/// Connect each populated cell to its right and below neighbours. Segments
/// with an unset endpoint are skipped, never defaulted. Colour is a
/// near-white shade of the first endpoint's brightness when colour sampling
/// is on, else the flat configured colour.
fn grid_segments(field: &GridField, controls: &DitherControls) -> Vec<Segment> {
    let flat_color = controls.point_color_rgb();
    let segment_color = |brightness: f32| -> [f32; 3] {
        if controls.color_sampling {
            let shade = GRID_SHADE_BASE + brightness * GRID_SHADE_SPAN;
            [shade, shade, shade]
        } else {
            flat_color
        }
    };

    let mut segments = Vec::new();
    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let Some(cell) = field.get(row, col) else {
                continue;
            };
            if let Some(right) = field.get(row, col + 1) {
                segments.push(Segment {
                    a: cell.position,
                    b: right.position,
                    color: segment_color(cell.brightness),
                });
            }
            if let Some(below) = field.get(row + 1, col) {
                segments.push(Segment {
                    a: cell.position,
                    b: below.position,
                    color: segment_color(cell.brightness),
                });
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GridCell;

    fn solid_buffer(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        PixelBuffer::new(width, height, data)
    }

    #[test]
    fn absent_buffer_projects_to_empty() {
        assert!(project(None, &DitherControls::default()).is_empty());
    }

    #[test]
    fn fully_thresholded_image_projects_to_empty() {
        let buffer = solid_buffer(4, 4, [10, 10, 10]);
        let mut controls = DitherControls::default();
        controls.threshold = 255.0;
        assert!(project(Some(&buffer), &controls).is_empty());
    }

    #[test]
    fn unknown_shape_projects_to_empty() {
        let buffer = solid_buffer(4, 4, [255, 255, 255]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Unknown;
        assert!(project(Some(&buffer), &controls).is_empty());
    }

    #[test]
    fn point_batch_arrays_stay_parallel() {
        let buffer = solid_buffer(4, 4, [200, 120, 80]);
        let controls = DitherControls::default();
        let RenderSet::Points(batch) = project(Some(&buffer), &controls) else {
            panic!("expected point batch");
        };
        assert_eq!(batch.positions.len(), 16);
        assert_eq!(batch.colors.len(), 16);
        assert_eq!(batch.sizes.len(), 16);
    }

    #[test]
    fn triangle_rotation_is_offset_a_quarter_turn() {
        let buffer = solid_buffer(2, 2, [255, 255, 255]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Triangle;
        controls.shape_rotation_x = 0.25;
        let RenderSet::Instanced(set) = project(Some(&buffer), &controls) else {
            panic!("expected instanced set");
        };
        assert!((set.rotation[0] - (FRAC_PI_2 + 0.25)).abs() < 1e-6);

        controls.shape = ShapeKind::Cone;
        let RenderSet::Instanced(set) = project(Some(&buffer), &controls) else {
            panic!("expected instanced set");
        };
        assert!((set.rotation[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn bars_drop_by_a_quarter_of_their_height() {
        let buffer = solid_buffer(2, 2, [255, 255, 255]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Line;
        let RenderSet::Bars(bars) = project(Some(&buffer), &controls) else {
            panic!("expected bars");
        };
        assert_eq!(bars.len(), 4);
        for bar in &bars {
            assert_eq!(bar.size, controls.max_dot_size);
        }
    }

    #[test]
    fn grid_skips_segments_with_unset_endpoints() {
        // 2x2 field with one corner missing: only the two segments between
        // populated neighbours survive.
        let cell = |x: f32, y: f32| {
            Some(GridCell {
                position: [x, y, 0.0],
                depth: 0.0,
                brightness: 1.0,
            })
        };
        let field = GridField::from_cells(
            2,
            2,
            vec![cell(0.0, 0.0), cell(1.0, 0.0), cell(0.0, -1.0), None],
        );
        let segments = grid_segments(&field, &DitherControls::default());
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn grid_segment_count_for_full_field() {
        // Dense r x c grid: r*(c-1) horizontal + (r-1)*c vertical segments.
        let buffer = solid_buffer(3, 3, [255, 255, 255]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Grid;
        let RenderSet::Segments(set) = project(Some(&buffer), &controls) else {
            panic!("expected segments");
        };
        assert_eq!(set.segments.len(), 3 * 2 + 2 * 3);
    }

    #[test]
    fn grid_uses_flat_color_when_sampling_is_off() {
        let buffer = solid_buffer(2, 2, [60, 60, 60]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Grid;
        controls.color_sampling = false;
        controls.point_color = "#00ff00".to_string();
        let RenderSet::Segments(set) = project(Some(&buffer), &controls) else {
            panic!("expected segments");
        };
        for segment in &set.segments {
            assert_eq!(segment.color, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn uniform_image_topographic_projects_no_segments() {
        let buffer = solid_buffer(4, 4, [128, 128, 128]);
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Topographic;
        let RenderSet::Segments(set) = project(Some(&buffer), &controls) else {
            panic!("expected segments");
        };
        assert!(set.segments.is_empty());
    }
}
