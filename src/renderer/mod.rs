//! Rendering module
//!
//! The simulation never talks to a window. It projects world state onto a
//! [`DrawSurface`], which accepts a handful of primitive shapes per frame.

pub mod shapes;
pub mod surface;
pub mod vertex;

pub use surface::VertexSurface;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::cell_origin;
use crate::consts::*;
use crate::sim::World;

/// Something that can draw primitive shapes
///
/// Each frame is bracketed by `clear` and `present`.
pub trait DrawSurface {
    fn clear(&mut self, color: [f32; 4]);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Filled rectangle, scaled and rotated (degrees) about its top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, scale: f32, rotation: f32, color: [f32; 4]);

    fn outline_rect(&mut self, origin: Vec2, size: Vec2, thickness: f32, color: [f32; 4]);

    fn present(&mut self);
}

/// Draw one full frame of the world
///
/// Order: terrain, selection highlight, orbs, exit, player.
pub fn render_world<S: DrawSurface + ?Sized>(world: &World, surface: &mut S) {
    surface.clear(colors::BACKGROUND);

    for segment in world.terrain.iter() {
        segment.render(surface);
    }

    surface.outline_rect(
        cell_origin(world.cursor.y(), world.cursor.x()),
        Vec2::splat(CELL_SIZE),
        HIGHLIGHT_THICKNESS,
        colors::HIGHLIGHT,
    );

    for orb in &world.orbs {
        orb.render(surface);
    }

    let exit_color = if world.exit_active() {
        colors::EXIT_OPEN
    } else {
        colors::EXIT_CLOSED
    };
    surface.fill_circle(EXIT_POSITION + Vec2::splat(EXIT_RADIUS), EXIT_RADIUS, exit_color);

    world.player.render(surface);

    surface.present();
}
