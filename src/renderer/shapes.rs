//! Shape generation for 2D primitives

use glam::{Mat2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used when tessellating circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Corners of a rectangle scaled and rotated (degrees) about its top-left
pub fn rect_corners(origin: Vec2, size: Vec2, scale: f32, rotation_deg: f32) -> [Vec2; 4] {
    let basis = Mat2::from_angle(rotation_deg.to_radians()) * scale;
    [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ]
    .map(|corner| origin + basis * corner)
}

/// Two triangles covering the quad a-b-c-d (in winding order)
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled, transformed rectangle
pub fn rect(origin: Vec2, size: Vec2, scale: f32, rotation_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    quad(rect_corners(origin, size, scale, rotation_deg), color).to_vec()
}

/// Generate vertices for an axis-aligned rectangle outline
///
/// The outline grows outward from the rectangle edge by `thickness`.
pub fn rect_outline(origin: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness;
    let outer_min = origin - Vec2::splat(t);
    let outer_max = origin + size + Vec2::splat(t);

    let bands = [
        // Top and bottom span the full outer width
        (outer_min, Vec2::new(outer_max.x, origin.y)),
        (Vec2::new(outer_min.x, origin.y + size.y), outer_max),
        // Left and right fill the gap between them
        (Vec2::new(outer_min.x, origin.y), Vec2::new(origin.x, origin.y + size.y)),
        (Vec2::new(origin.x + size.x, origin.y), Vec2::new(outer_max.x, origin.y + size.y)),
    ];

    let mut vertices = Vec::with_capacity(bands.len() * 6);
    for (min, max) in bands {
        vertices.extend(quad(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        ));
    }
    vertices
}
