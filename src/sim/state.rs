//! World state
//!
//! Everything the simulation mutates lives in [`World`]: the terrain grid,
//! the orbs, the player, the selection cursor and the exit flag.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Orb, Player, TerrainSegment};
use crate::cell_origin;
use crate::consts::*;

/// A cell of the grid. Coordinates are always inside `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawGridCoord")]
pub struct GridCoord {
    x: usize,
    y: usize,
}

impl GridCoord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Build a coordinate, clamping each axis into the grid
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x: x.min(GRID_SIZE - 1),
            y: y.min(GRID_SIZE - 1),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Move by (dx, dy), clamped to the grid edges (no wraparound)
    pub fn shift(self, dx: isize, dy: isize) -> Self {
        let max = (GRID_SIZE - 1) as isize;
        Self {
            x: (self.x as isize + dx).clamp(0, max) as usize,
            y: (self.y as isize + dy).clamp(0, max) as usize,
        }
    }

    /// Row-major index into the grid
    pub fn index(&self) -> usize {
        self.y * GRID_SIZE + self.x
    }
}

/// Unchecked wire form; deserialization clamps through `GridCoord::new`
#[derive(Deserialize)]
struct RawGridCoord {
    x: usize,
    y: usize,
}

impl From<RawGridCoord> for GridCoord {
    fn from(raw: RawGridCoord) -> Self {
        GridCoord::new(raw.x, raw.y)
    }
}

/// Fixed 5x5 grid of terrain segments, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainGrid {
    cells: [TerrainSegment; GRID_CELLS],
}

impl TerrainGrid {
    /// Build a fresh grid. Each cell has a fixed chance of being shrunk once.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let cells = std::array::from_fn(|i| {
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            let mut segment = TerrainSegment::new(cell_origin(row, col));
            if rng.random::<f32>() < TERRAIN_SHRINK_CHANCE {
                segment.scale(TERRAIN_SHRINK_FACTOR);
            }
            segment
        });
        Self { cells }
    }

    pub fn at(&self, coord: GridCoord) -> &TerrainSegment {
        &self.cells[coord.index()]
    }

    pub fn at_mut(&mut self, coord: GridCoord) -> &mut TerrainSegment {
        &mut self.cells[coord.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerrainSegment> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TerrainSegment> {
        self.cells.iter_mut()
    }
}

/// Serializable view of the world, for logging and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub player: Vec2,
    pub cursor: GridCoord,
    pub orbs: Vec<Orb>,
    pub exit_active: bool,
    pub scale_factors: Vec<f32>,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the generator was created from
    pub seed: u64,
    pub terrain: TerrainGrid,
    pub orbs: Vec<Orb>,
    pub player: Player,
    pub cursor: GridCoord,
    /// Orb layout restored on every reset
    orb_spawns: Vec<Vec2>,
    exit_active: bool,
    /// Only consumed by terrain generation; survives resets
    rng: Pcg32,
}

impl World {
    /// Create a world with the standard orb layout
    pub fn new(seed: u64) -> Self {
        Self::with_orbs(seed, ORB_SPAWNS.to_vec())
    }

    /// Create a world with a custom orb layout (may be empty)
    pub fn with_orbs(seed: u64, orb_spawns: Vec<Vec2>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = TerrainGrid::generate(&mut rng);
        let orbs = orb_spawns.iter().copied().map(Orb::new).collect();
        log::info!(
            "World created with seed {} ({} orbs)",
            seed,
            orb_spawns.len()
        );

        Self {
            seed,
            terrain,
            orbs,
            player: Player::new(PLAYER_SPAWN),
            cursor: GridCoord::ORIGIN,
            orb_spawns,
            exit_active: false,
            rng,
        }
    }

    /// Discard and rebuild everything except the random generator
    pub fn reset(&mut self) {
        self.terrain = TerrainGrid::generate(&mut self.rng);
        self.player.set_position(PLAYER_SPAWN);
        self.orbs = self.orb_spawns.iter().copied().map(Orb::new).collect();
        self.cursor = GridCoord::ORIGIN;
        self.exit_active = false;
        log::info!("World reset");
    }

    pub fn exit_active(&self) -> bool {
        self.exit_active
    }

    pub(crate) fn set_exit_active(&mut self, active: bool) {
        self.exit_active = active;
    }

    /// The segment under the selection cursor
    pub fn selected(&self) -> &TerrainSegment {
        self.terrain.at(self.cursor)
    }

    pub fn active_orbs(&self) -> usize {
        self.orbs.iter().filter(|orb| orb.is_active()).count()
    }

    /// Every entity in update order: player, terrain, orbs
    pub fn entities_mut(&mut self) -> impl Iterator<Item = Entity<'_>> {
        std::iter::once(Entity::from(&mut self.player))
            .chain(self.terrain.iter_mut().map(Entity::from))
            .chain(self.orbs.iter_mut().map(Entity::from))
    }

    /// The segment under the cursor, as an entity
    pub fn selected_entity(&mut self) -> Entity<'_> {
        Entity::from(self.terrain.at_mut(self.cursor))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            player: self.player.position(),
            cursor: self.cursor,
            orbs: self.orbs.clone(),
            exit_active: self.exit_active,
            scale_factors: self.terrain.iter().map(|s| s.scale_factor()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let mut world = World::new(42);
        assert_eq!(world.player.position(), PLAYER_SPAWN);
        assert_eq!(world.orbs.len(), 2);
        assert_eq!(world.active_orbs(), 2);
        assert_eq!(world.cursor, GridCoord::ORIGIN);
        assert!(!world.exit_active());
        assert_eq!(world.entities_mut().count(), 1 + GRID_CELLS + 2);
    }

    #[test]
    fn test_terrain_layout() {
        let world = World::new(7);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let segment = world.terrain.at(GridCoord::new(col, row));
                assert_eq!(segment.position(), cell_origin(row, col));
                let scale = segment.scale_factor();
                // Either untouched or shrunk once (and clamped)
                assert!(scale == 1.0 || scale == TERRAIN_MIN_SCALE);
            }
        }
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = World::new(1234);
        let b = World::new(1234);
        assert_eq!(a.terrain, b.terrain);
    }

    #[test]
    fn test_reset_reuses_generator() {
        let mut world = World::new(99);
        let mut fresh = World::new(99);
        assert_eq!(world.terrain, fresh.terrain);

        // Reset draws the next 25 values rather than reseeding
        world.reset();
        let mut rng = Pcg32::seed_from_u64(99);
        let _first = TerrainGrid::generate(&mut rng);
        let second = TerrainGrid::generate(&mut rng);
        assert_eq!(world.terrain, second);

        fresh.reset();
        assert_eq!(world.terrain, fresh.terrain);
    }

    #[test]
    fn test_cursor_clamps() {
        let corner = GridCoord::new(4, 4);
        assert_eq!(corner.shift(1, 0), corner);
        assert_eq!(corner.shift(0, 1), corner);
        assert_eq!(GridCoord::ORIGIN.shift(-1, -1), GridCoord::ORIGIN);
        assert_eq!(GridCoord::ORIGIN.shift(1, 0).index(), 1);
        assert_eq!(GridCoord::ORIGIN.shift(0, 1).index(), GRID_SIZE);
        assert_eq!(GridCoord::new(9, 9), corner);
        assert_eq!(corner.index(), GRID_CELLS - 1);
    }

    #[test]
    fn test_entities_in_update_order() {
        let mut world = World::new(42);
        let mut entities = world.entities_mut();
        assert!(matches!(entities.next(), Some(Entity::Player(_))));
        let terrain = entities
            .by_ref()
            .take(GRID_CELLS)
            .filter(|e| matches!(e, Entity::Terrain(_)))
            .count();
        assert_eq!(terrain, GRID_CELLS);
        assert!(entities.all(|e| matches!(e, Entity::Orb(_))));
    }

    #[test]
    fn test_selected_entity_follows_cursor() {
        let mut world = World::new(42);
        world.cursor = GridCoord::new(2, 3);
        assert_eq!(world.selected_entity().position(), cell_origin(3, 2));
        world.selected_entity().rotate(90.0);
        assert_eq!(world.terrain.at(GridCoord::new(2, 3)).rotation(), 90.0);
    }

    #[test]
    fn test_deserialized_coord_is_clamped() {
        let coord: GridCoord = serde_json::from_str(r#"{"x":7,"y":0}"#).unwrap();
        assert_eq!(coord, GridCoord::new(4, 0));
        assert!(coord.index() < GRID_CELLS);

        let coord: GridCoord = serde_json::from_str(r#"{"x":2,"y":99}"#).unwrap();
        assert_eq!(coord.index(), (GRID_SIZE - 1) * GRID_SIZE + 2);
    }

    #[test]
    fn test_empty_orb_layout() {
        let world = World::with_orbs(5, Vec::new());
        assert!(world.orbs.is_empty());
        assert_eq!(world.active_orbs(), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(3);
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world.snapshot());
        assert_eq!(back.scale_factors.len(), GRID_CELLS);
    }
}
