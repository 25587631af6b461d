//! Orb Grid - collect the orbs, open the exit
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, world state, input intents, step)
//! - `renderer`: Projection of world state onto a draw surface
//! - `game`: Frame loop tying input, simulation and rendering together
//! - `settings`: Player-editable configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Clock, FixedClock, FrameOutcome, Game, SystemClock};
pub use settings::{KeyBinding, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Grid is always GRID_SIZE x GRID_SIZE cells
    pub const GRID_SIZE: usize = 5;
    pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
    /// Side length of one terrain cell (world units)
    pub const CELL_SIZE: f32 = 50.0;
    /// Top-left corner of cell (0, 0)
    pub const GRID_ORIGIN: Vec2 = Vec2::new(250.0, 150.0);

    /// Player defaults
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(300.0, 250.0);
    pub const PLAYER_STEP: f32 = 50.0;
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Player may only stand inside these bounds (inclusive)
    pub const PLAYER_MIN: Vec2 = Vec2::new(250.0, 150.0);
    pub const PLAYER_MAX: Vec2 = Vec2::new(450.0, 350.0);

    /// Orb defaults
    pub const ORB_SPAWNS: [Vec2; 2] = [Vec2::new(400.0, 200.0), Vec2::new(350.0, 300.0)];
    pub const ORB_RADIUS: f32 = 5.0;
    /// Player-to-orb distance below which the orb is collected
    pub const COLLECT_RADIUS: f32 = 15.0;

    /// Terrain scale clamp
    pub const TERRAIN_MIN_SCALE: f32 = 0.5;
    pub const TERRAIN_MAX_SCALE: f32 = 2.0;
    /// Edit factors applied to the selected segment
    pub const GROW_FACTOR: f32 = 1.1;
    pub const SHRINK_FACTOR: f32 = 0.9;
    pub const ROTATE_STEP_DEG: f32 = 45.0;
    /// Terrain generation: chance a fresh segment gets shrunk once
    pub const TERRAIN_SHRINK_CHANCE: f32 = 0.3;
    pub const TERRAIN_SHRINK_FACTOR: f32 = 0.5;

    /// Exit marker
    pub const EXIT_POSITION: Vec2 = Vec2::new(400.0, 350.0);
    pub const EXIT_RADIUS: f32 = 10.0;

    /// Selection highlight outline thickness
    pub const HIGHLIGHT_THICKNESS: f32 = 2.0;
}

/// Top-left corner of the grid cell at (row, col)
#[inline]
pub fn cell_origin(row: usize, col: usize) -> Vec2 {
    consts::GRID_ORIGIN + Vec2::new(col as f32, row as f32) * consts::CELL_SIZE
}

/// Whether a player position lies inside the walkable rectangle
#[inline]
pub fn within_player_bounds(pos: Vec2) -> bool {
    pos.cmpge(consts::PLAYER_MIN).all() && pos.cmple(consts::PLAYER_MAX).all()
}
