//! Vertex export for a rendering collaborator
//!
//! Each wheel becomes 360 independent triangles (center, arc start, arc end),
//! one per degree bucket, flat-colored from the table. Nothing here talks to
//! a GPU; the buffers are `Pod` so a renderer can upload them as-is.

use bytemuck::{Pod, Zeroable};

use crate::color::ColorTable;
use crate::consts::TABLE_SIZE;
use crate::polar_to_cartesian;
use crate::sim::{LayerView, LayeredWheelEngine};
use crate::wrap_degrees;

/// Vertices per wheel
pub const WHEEL_VERTEX_COUNT: usize = TABLE_SIZE * 3;

/// Position + color vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }
}

/// Triangles for one wheel rotated by `angle_degrees`, placed at depth `z`
pub fn wheel_vertices(table: &ColorTable, radius: f32, angle_degrees: f64, z: f32) -> Vec<Vertex> {
    let rotation = wrap_degrees(angle_degrees) as f32;
    let mut vertices = Vec::with_capacity(WHEEL_VERTEX_COUNT);

    for (j, color) in table.iter().enumerate() {
        let color = color.to_array();
        let start = (j as f32 + rotation).to_radians();
        let end = (j as f32 + 1.0 + rotation).to_radians();

        let p1 = polar_to_cartesian(radius, start).extend(z);
        let p2 = polar_to_cartesian(radius, end).extend(z);

        vertices.push(Vertex::new(0.0, 0.0, z, color));
        vertices.push(Vertex::new(p1.x, p1.y, p1.z, color));
        vertices.push(Vertex::new(p2.x, p2.y, p2.z, color));
    }

    vertices
}

/// Triangles for one layer view
pub fn layer_vertices(view: &LayerView<'_>, radius: f32) -> Vec<Vertex> {
    wheel_vertices(view.table, radius, view.angle_degrees, view.z_offset)
}

/// Triangles for the whole stack, in stack order
pub fn engine_vertices(engine: &LayeredWheelEngine, radius: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(engine.len() * WHEEL_VERTEX_COUNT);
    for view in engine.layer_views() {
        vertices.extend(layer_vertices(&view, radius));
    }
    vertices
}
