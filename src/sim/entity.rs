//! World entities
//!
//! Every object in the world is one of three kinds. Each kind carries the
//! same operation set (`update`, `render`, position access, liveness,
//! `scale`, `rotate`). The [`Entity`] sum type borrows one of them mutably
//! and dispatches the shared mutation contract; rendering goes through the
//! concrete kinds since the renderer interleaves non-entity shapes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{DrawSurface, colors};

/// Cached draw transform, kept in sync with the logical state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Top-left of the shape's bounding box
    pub origin: Vec2,
    pub scale: f32,
    /// Degrees, about `origin`
    pub rotation: f32,
}

impl Transform {
    pub fn at(origin: Vec2) -> Self {
        Self {
            origin,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// The player token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    position: Vec2,
    transform: Transform,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            transform: Transform::at(position),
        }
    }

    pub fn update(&mut self, _dt: f32) {}

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.is_active() {
            surface.fill_circle(
                self.transform.origin + Vec2::splat(PLAYER_RADIUS),
                PLAYER_RADIUS,
                colors::PLAYER,
            );
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.transform.origin = position;
    }

    /// The player is never deactivated
    pub fn is_active(&self) -> bool {
        true
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

/// One cell of the terrain grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainSegment {
    position: Vec2,
    scale_factor: f32,
    /// Accumulated degrees, never normalized
    rotation: f32,
    transform: Transform,
}

impl TerrainSegment {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale_factor: 1.0,
            rotation: 0.0,
            transform: Transform::at(position),
        }
    }

    /// Re-derive the draw transform from the stored factors
    pub fn update(&mut self, _dt: f32) {
        self.transform.scale = self.scale_factor;
        self.transform.rotation = self.rotation;
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.is_active() {
            surface.fill_rect(
                self.transform.origin,
                Vec2::splat(CELL_SIZE),
                self.transform.scale,
                self.transform.rotation,
                colors::TERRAIN,
            );
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.transform.origin = position;
    }

    pub fn is_active(&self) -> bool {
        true
    }

    /// Multiply the scale factor, then clamp it to the allowed range
    ///
    /// `max`/`min` drop a NaN operand, so a NaN factor lands on the lower bound.
    pub fn scale(&mut self, factor: f32) {
        self.scale_factor = (self.scale_factor * factor)
            .max(TERRAIN_MIN_SCALE)
            .min(TERRAIN_MAX_SCALE);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

/// A collectible orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    position: Vec2,
    active: bool,
    transform: Transform,
}

impl Orb {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            active: true,
            transform: Transform::at(position),
        }
    }

    pub fn update(&mut self, _dt: f32) {}

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.is_active() {
            surface.fill_circle(
                self.transform.origin + Vec2::splat(ORB_RADIUS),
                ORB_RADIUS,
                colors::ORB,
            );
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.transform.origin = position;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivate the orb. There is no way back short of a world reset.
    pub fn collect(&mut self) {
        self.active = false;
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

/// Mutable view of any world entity
#[derive(Debug, PartialEq)]
pub enum Entity<'a> {
    Player(&'a mut Player),
    Terrain(&'a mut TerrainSegment),
    Orb(&'a mut Orb),
}

impl Entity<'_> {
    pub fn update(&mut self, dt: f32) {
        match self {
            Entity::Player(player) => player.update(dt),
            Entity::Terrain(segment) => segment.update(dt),
            Entity::Orb(orb) => orb.update(dt),
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Entity::Player(player) => player.position(),
            Entity::Terrain(segment) => segment.position(),
            Entity::Orb(orb) => orb.position(),
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Entity::Player(player) => player.set_position(position),
            Entity::Terrain(segment) => segment.set_position(position),
            Entity::Orb(orb) => orb.set_position(position),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Entity::Player(player) => player.is_active(),
            Entity::Terrain(segment) => segment.is_active(),
            Entity::Orb(orb) => orb.is_active(),
        }
    }

    /// Only terrain has a visual scale; no-op otherwise
    pub fn scale(&mut self, factor: f32) {
        if let Entity::Terrain(segment) = self {
            segment.scale(factor);
        }
    }

    /// Only terrain rotates; no-op otherwise
    pub fn rotate(&mut self, degrees: f32) {
        if let Entity::Terrain(segment) = self {
            segment.rotate(degrees);
        }
    }

    pub fn transform(&self) -> Transform {
        match self {
            Entity::Player(player) => player.transform(),
            Entity::Terrain(segment) => segment.transform(),
            Entity::Orb(orb) => orb.transform(),
        }
    }
}

impl<'a> From<&'a mut Player> for Entity<'a> {
    fn from(player: &'a mut Player) -> Self {
        Entity::Player(player)
    }
}

impl<'a> From<&'a mut TerrainSegment> for Entity<'a> {
    fn from(segment: &'a mut TerrainSegment) -> Self {
        Entity::Terrain(segment)
    }
}

impl<'a> From<&'a mut Orb> for Entity<'a> {
    fn from(orb: &'a mut Orb) -> Self {
        Entity::Orb(orb)
    }
}
