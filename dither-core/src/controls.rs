use serde::{Deserialize, Serialize};

/// Closed set of rendering variants. An unrecognized tag in a preset file
/// deserializes to `Unknown`, which projects to the empty render set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Point,
    Cube,
    Sphere,
    Grid,
    Line,
    Triangle,
    Torus,
    Cone,
    Topographic,
    #[serde(other)]
    Unknown,
}

impl ShapeKind {
    /// All selectable variants, in HUD/keyboard order.
    pub const SELECTABLE: &[ShapeKind] = &[
        ShapeKind::Point,
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Grid,
        ShapeKind::Line,
        ShapeKind::Triangle,
        ShapeKind::Torus,
        ShapeKind::Cone,
        ShapeKind::Topographic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Grid => "grid",
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Torus => "torus",
            ShapeKind::Cone => "cone",
            ShapeKind::Topographic => "topographic",
            ShapeKind::Unknown => "unknown",
        }
    }
}

/// Full control configuration. Owned by the parameter store; replaced as a
/// whole snapshot on every edit, never partially mutated mid-recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DitherControls {
    pub grid_size: u32,
    pub min_dot_size: f32,
    pub max_dot_size: f32,
    pub brightness: f32,
    pub contrast: f32,
    pub depth_intensity: f32,
    pub depth_offset: f32,
    pub depth_scale: f32,
    pub point_opacity: f32,
    pub threshold: f32,
    pub rotation_speed: f32,
    pub point_color: String,
    pub color_sampling: bool,
    pub shape: ShapeKind,
    pub contour_levels: u32,
    pub stroke_width: f32,
    pub topo_color_low: String,
    pub topo_color_high: String,
    pub shape_rotation_x: f32,
    pub shape_rotation_y: f32,
    pub shape_rotation_z: f32,
    pub torus_outer_radius: f32,
    pub torus_inner_radius: f32,
    pub cone_radius: f32,
    pub cone_height: f32,
    pub cube_width: f32,
    pub cube_height: f32,
    pub cube_depth: f32,
    pub sphere_radius: f32,
    pub sphere_detail: u32,
    pub triangle_radius: f32,
    pub triangle_height: f32,
}

impl Default for DitherControls {
    fn default() -> Self {
        Self {
            grid_size: 50,
            min_dot_size: 0.2,
            max_dot_size: 3.0,
            brightness: 1.0,
            contrast: 1.0,
            depth_intensity: 1.0,
            depth_offset: 0.0,
            depth_scale: 1.0,
            point_opacity: 0.8,
            threshold: 0.0,
            rotation_speed: 0.005,
            point_color: "#ffffff".to_string(),
            color_sampling: true,
            shape: ShapeKind::Point,
            contour_levels: 10,
            stroke_width: 1.0,
            topo_color_low: "#0044ff".to_string(),
            topo_color_high: "#ff4400".to_string(),
            shape_rotation_x: 0.0,
            shape_rotation_y: 0.0,
            shape_rotation_z: 0.0,
            torus_outer_radius: 0.5,
            torus_inner_radius: 0.2,
            cone_radius: 0.5,
            cone_height: 1.0,
            cube_width: 1.0,
            cube_height: 1.0,
            cube_depth: 1.0,
            sphere_radius: 0.5,
            sphere_detail: 16,
            triangle_radius: 0.5,
            triangle_height: 1.0,
        }
    }
}

impl DitherControls {
    pub fn point_color_rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.point_color)
    }

    pub fn topo_color_low_rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.topo_color_low)
    }

    pub fn topo_color_high_rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.topo_color_high)
    }
}

/// Parse a `#rrggbb` hex colour into linear 0-1 channels.
/// Malformed input falls back to white rather than erroring.
pub fn parse_hex_color(hex: &str) -> [f32; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return [1.0, 1.0, 1.0];
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| v as f32 / 255.0)
            .unwrap_or(1.0)
    };
    [channel(0..2), channel(2..4), channel(4..6)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ffffff"), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_color("#000000"), [0.0, 0.0, 0.0]);
        let [r, g, b] = parse_hex_color("#ff8000");
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(parse_hex_color("not a color"), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_color("#ff"), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn unknown_shape_tag_deserializes_to_unknown() {
        let json = r#"{ "shape": "dodecahedron" }"#;
        let controls: DitherControls = serde_json::from_str(json).unwrap();
        assert_eq!(controls.shape, ShapeKind::Unknown);
    }

    #[test]
    fn controls_round_trip() {
        let mut controls = DitherControls::default();
        controls.shape = ShapeKind::Topographic;
        controls.contour_levels = 24;
        let json = serde_json::to_string(&controls).unwrap();
        let back: DitherControls = serde_json::from_str(&json).unwrap();
        assert_eq!(back, controls);
    }
}
