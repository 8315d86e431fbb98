use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{MeshBuilder, PrimitiveTopology};

use constants::dither::BAR_THICKNESS;
use constants::render_settings::{
    CONE_RESOLUTION, SPHERE_DETAIL_MAX, SPHERE_DETAIL_MIN, TORUS_MAJOR_RESOLUTION,
    TORUS_MINOR_RESOLUTION,
};
use dither_core::projector::{RenderSet, SolidPrimitive, project};

use super::image_drop::SourceImage;
use super::params::ControlState;

/// Root entity of the spawned field; all renderable children hang off it so
/// a rebuild is a single recursive despawn.
#[derive(Component)]
pub struct DitherField;

/// Accumulated spin of the field group. Lives outside the entity tree so the
/// angle survives rebuilds.
#[derive(Resource, Default)]
pub struct FieldRotation {
    pub angle: f32,
}

/// Recompute-on-change: whenever the source image or the control snapshot
/// changes, throw the whole field away and project it again from scratch.
/// There is deliberately no incremental path.
pub fn rebuild_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    source: Res<SourceImage>,
    state: Res<ControlState>,
    rotation: Res<FieldRotation>,
    existing: Query<Entity, With<DitherField>>,
) {
    if !source.is_changed() && !state.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let render_set = project(source.buffer.as_ref(), &state.controls);
    if render_set.is_empty() {
        return;
    }

    let controls = state.controls.clone();
    let opacity = controls.point_opacity;
    let root = commands
        .spawn((
            DitherField,
            Transform::from_rotation(Quat::from_rotation_y(rotation.angle)),
            Visibility::default(),
        ))
        .id();

    commands.entity(root).with_children(|parent| {
        match render_set {
            RenderSet::Empty => {}
            RenderSet::Points(batch) => {
                println!("Dither field: {} points", batch.positions.len());
                let colors: Vec<[f32; 4]> = batch
                    .colors
                    .iter()
                    .map(|c| [c[0].clamp(0.0, 1.0), c[1].clamp(0.0, 1.0), c[2].clamp(0.0, 1.0), 1.0])
                    .collect();
                let mut mesh = Mesh::new(
                    PrimitiveTopology::PointList,
                    RenderAssetUsages::RENDER_WORLD,
                );
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, batch.positions);
                mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
                parent.spawn((
                    Mesh3d(meshes.add(mesh)),
                    MeshMaterial3d(materials.add(line_material(opacity))),
                ));
            }
            RenderSet::Instanced(set) => {
                println!(
                    "Dither field: {} instanced solids",
                    set.instances.len()
                );
                let mesh_handle = meshes.add(primitive_mesh(&set.primitive));
                let instance_rotation = Quat::from_euler(
                    EulerRot::XYZ,
                    set.rotation[0],
                    set.rotation[1],
                    set.rotation[2],
                );
                // One material per instance only when colours actually vary.
                let shared_material = (!controls.color_sampling)
                    .then(|| materials.add(solid_material(controls.point_color_rgb(), opacity)));
                for instance in &set.instances {
                    let material = match &shared_material {
                        Some(handle) => handle.clone(),
                        None => materials.add(solid_material(instance.color, opacity)),
                    };
                    parent.spawn((
                        Mesh3d(mesh_handle.clone()),
                        MeshMaterial3d(material),
                        Transform {
                            translation: Vec3::from_array(instance.position),
                            rotation: instance_rotation,
                            scale: Vec3::splat(instance.scale),
                        },
                    ));
                }
            }
            RenderSet::Bars(bars) => {
                println!("Dither field: {} bars", bars.len());
                let mesh_handle =
                    meshes.add(Mesh::from(Cuboid::new(BAR_THICKNESS, 1.0, BAR_THICKNESS)));
                let shared_material = (!controls.color_sampling)
                    .then(|| materials.add(solid_material(controls.point_color_rgb(), opacity)));
                for bar in &bars {
                    let material = match &shared_material {
                        Some(handle) => handle.clone(),
                        None => materials.add(solid_material(bar.color, opacity)),
                    };
                    parent.spawn((
                        Mesh3d(mesh_handle.clone()),
                        MeshMaterial3d(material),
                        Transform {
                            translation: Vec3::from_array(bar.position),
                            rotation: Quat::IDENTITY,
                            scale: Vec3::new(1.0, bar.size, 1.0),
                        },
                    ));
                }
            }
            RenderSet::Segments(set) => {
                println!("Dither field: {} line segments", set.segments.len());
                if set.segments.is_empty() {
                    return;
                }
                // One LineList mesh for the whole segment set, vertex-coloured
                // per segment. Line width is fixed by the GPU line primitive;
                // the configured stroke width is carried but not applied.
                let mut positions = Vec::with_capacity(set.segments.len() * 2);
                let mut colors = Vec::with_capacity(set.segments.len() * 2);
                for segment in &set.segments {
                    let color = [
                        segment.color[0].clamp(0.0, 1.0),
                        segment.color[1].clamp(0.0, 1.0),
                        segment.color[2].clamp(0.0, 1.0),
                        1.0,
                    ];
                    positions.push(segment.a);
                    positions.push(segment.b);
                    colors.push(color);
                    colors.push(color);
                }
                let mut mesh = Mesh::new(
                    PrimitiveTopology::LineList,
                    RenderAssetUsages::RENDER_WORLD,
                );
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
                mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
                parent.spawn((
                    Mesh3d(meshes.add(mesh)),
                    MeshMaterial3d(materials.add(line_material(opacity))),
                ));
            }
        }
    });
}

/// Advance the field group's spin by the configured radians per frame,
/// wrapped so the angle cannot drift over long sessions.
pub fn rotate_field(
    state: Res<ControlState>,
    mut rotation: ResMut<FieldRotation>,
    mut query: Query<&mut Transform, With<DitherField>>,
) {
    if state.controls.rotation_speed == 0.0 {
        return;
    }
    rotation.angle = (rotation.angle + state.controls.rotation_speed) % TAU;
    for mut transform in &mut query {
        transform.rotation = Quat::from_rotation_y(rotation.angle);
    }
}

fn primitive_mesh(primitive: &SolidPrimitive) -> Mesh {
    match *primitive {
        SolidPrimitive::Cube {
            width,
            height,
            depth,
        } => Mesh::from(Cuboid::new(width, height, depth)),
        SolidPrimitive::Sphere { radius, detail } => {
            let detail = (detail as usize).clamp(SPHERE_DETAIL_MIN, SPHERE_DETAIL_MAX);
            Sphere::new(radius).mesh().uv(detail as u32, detail as u32)
        }
        SolidPrimitive::Torus {
            outer_radius,
            inner_radius,
        } => Torus {
            major_radius: outer_radius,
            minor_radius: inner_radius,
        }
        .mesh()
        .minor_resolution(TORUS_MINOR_RESOLUTION)
        .major_resolution(TORUS_MAJOR_RESOLUTION)
        .build(),
        SolidPrimitive::Cone { radius, height } => Cone::new(radius, height)
            .mesh()
            .resolution(CONE_RESOLUTION)
            .build(),
        SolidPrimitive::Triangle { radius, height } => Cone::new(radius, height)
            .mesh()
            .resolution(3)
            .build(),
    }
}

/// Opaque-ish lit material for the solid variants; colours past 1.0 from the
/// vibrancy boost are clamped on conversion.
fn solid_material(color: [f32; 3], opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(
            color[0].clamp(0.0, 1.0),
            color[1].clamp(0.0, 1.0),
            color[2].clamp(0.0, 1.0),
            opacity,
        ),
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Unlit vertex-coloured material for point and line meshes.
fn line_material(opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}
