//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, drawn during terrain generation
//! - Discrete, per-key-press movement
//! - No window or platform dependencies (rendering goes through `DrawSurface`)

pub mod entity;
pub mod input;
pub mod state;
pub mod tick;

pub use entity::{Entity, Orb, Player, TerrainSegment, Transform};
pub use input::{Control, Direction, InputEvent, Intent, Key, apply_intent, intents_from_events};
pub use state::{GridCoord, Snapshot, TerrainGrid, World};
pub use tick::{GameEvent, step};
