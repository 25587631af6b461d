//! Per-frame simulation step
//!
//! Advances the world by one frame: entity updates, orb collection, exit check.

use glam::Vec2;

use super::state::World;
use crate::consts::COLLECT_RADIUS;

/// Notable things that happened during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Orb at `index` in `World::orbs` was collected
    OrbCollected { index: usize, position: Vec2 },
    /// Every orb is gone and the exit just opened
    ExitOpened,
}

/// Advance the world by one frame
///
/// Processing order:
///   1. Entity updates: player, then terrain, then orbs
///   2. Orb collection (against the updated player and orb positions)
///   3. Exit flag recomputed from the orb set
pub fn step(world: &mut World, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for mut entity in world.entities_mut() {
        entity.update(dt);
    }

    let player_pos = world.player.position();
    for (index, orb) in world.orbs.iter_mut().enumerate() {
        if orb.is_active() && player_pos.distance(orb.position()) < COLLECT_RADIUS {
            orb.collect();
            log::debug!("Collected orb {} at {:?}", index, orb.position());
            events.push(GameEvent::OrbCollected {
                index,
                position: orb.position(),
            });
        }
    }

    // Derived every step, never tracked incrementally
    let was_active = world.exit_active();
    let exit_active = world.orbs.iter().all(|orb| !orb.is_active());
    world.set_exit_active(exit_active);
    if exit_active && !was_active {
        log::info!("All orbs collected, exit open");
        events.push(GameEvent::ExitOpened);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_step_without_contact() {
        let mut world = World::new(12345);
        let events = step(&mut world, DT);
        assert!(events.is_empty());
        assert_eq!(world.active_orbs(), 2);
        assert!(!world.exit_active());
    }

    #[test]
    fn test_collect_one_then_both() {
        let mut world = World::new(12345);

        world.player.set_position(Vec2::new(400.0, 200.0));
        let events = step(&mut world, DT);
        assert_eq!(
            events,
            vec![GameEvent::OrbCollected {
                index: 0,
                position: Vec2::new(400.0, 200.0),
            }]
        );
        assert!(!world.orbs[0].is_active());
        assert!(world.orbs[1].is_active());
        assert!(!world.exit_active());

        world.player.set_position(Vec2::new(350.0, 300.0));
        let events = step(&mut world, DT);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], GameEvent::ExitOpened);
        assert!(world.exit_active());

        // Exit stays open and no event repeats
        assert!(step(&mut world, DT).is_empty());
        assert!(world.exit_active());
    }

    #[test]
    fn test_collection_radius_is_strict() {
        let mut world = World::with_orbs(1, vec![Vec2::new(300.0, 265.0)]);
        // Exactly 15 units away: not collected
        step(&mut world, DT);
        assert!(world.orbs[0].is_active());

        world.player.set_position(Vec2::new(300.0, 251.0));
        step(&mut world, DT);
        assert!(!world.orbs[0].is_active());
    }

    #[test]
    fn test_multiple_orbs_same_step() {
        let mut world = World::with_orbs(
            1,
            vec![
                Vec2::new(305.0, 250.0),
                Vec2::new(295.0, 250.0),
                Vec2::new(400.0, 400.0),
            ],
        );
        let events = step(&mut world, DT);
        assert_eq!(events.len(), 2);
        assert_eq!(world.active_orbs(), 1);
    }

    #[test]
    fn test_zero_orbs_opens_exit() {
        let mut world = World::with_orbs(1, Vec::new());
        let events = step(&mut world, DT);
        assert_eq!(events, vec![GameEvent::ExitOpened]);
        assert!(world.exit_active());
    }

    #[test]
    fn test_step_applies_terrain_transform() {
        let mut world = World::new(8);
        world.selected_entity().scale(2.0);
        world.selected_entity().rotate(45.0);
        step(&mut world, DT);
        let transform = world.selected().transform();
        assert_eq!(transform.scale, world.selected().scale_factor());
        assert_eq!(transform.rotation, 45.0);

        // Untouched cells keep an identity rotation after the update pass
        let rotated = world
            .terrain
            .iter()
            .filter(|segment| segment.transform().rotation == 45.0)
            .count();
        assert_eq!(rotated, 1);
    }

    proptest! {
        #[test]
        fn prop_collection_is_monotonic(
            moves in prop::collection::vec((0usize..5, 0usize..5), 1..30)
        ) {
            let mut world = World::new(77);
            let mut collected = vec![false; world.orbs.len()];
            for (col, row) in moves {
                world.player.set_position(crate::cell_origin(row, col));
                step(&mut world, DT);
                for (i, orb) in world.orbs.iter().enumerate() {
                    // Once inactive, never active again
                    prop_assert!(!(collected[i] && orb.is_active()));
                    collected[i] |= !orb.is_active();
                }
                let all_gone = world.orbs.iter().all(|orb| !orb.is_active());
                prop_assert_eq!(world.exit_active(), all_gone);
            }
        }
    }

    #[test]
    fn test_default_layout_constants() {
        assert_eq!(ORB_SPAWNS.len(), 2);
        assert!(PLAYER_SPAWN.distance(ORB_SPAWNS[0]) >= COLLECT_RADIUS);
        assert!(PLAYER_SPAWN.distance(ORB_SPAWNS[1]) >= COLLECT_RADIUS);
    }
}
