//! Frame loop
//!
//! One frame runs in strict sequence: apply the frame's input intents,
//! advance the simulation one step, render.

use std::time::Instant;

use crate::renderer::{DrawSurface, render_world};
use crate::sim::{Control, GameEvent, InputEvent, World, apply_intent, intents_from_events, step};

/// Source of per-frame elapsed time
pub trait Clock {
    /// Seconds since the previous call, never negative
    fn delta(&mut self) -> f32;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Clock that always reports the same step (tests, replays)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f32);

impl Clock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.0.max(0.0)
    }
}

/// Result of running one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub control: Control,
    pub events: Vec<GameEvent>,
}

/// A running session
#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    frame_count: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::from_world(World::new(seed))
    }

    pub fn from_world(world: World) -> Self {
        Self {
            world,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// One-line summary of the session, for logging
    pub fn status(&self) -> String {
        let world = &self.world;
        format!(
            "frame {} | player {:?} | cursor ({}, {}) | orbs left {} | exit {}",
            self.frame_count,
            world.player.position(),
            world.cursor.x(),
            world.cursor.y(),
            world.active_orbs(),
            if world.exit_active() { "open" } else { "closed" },
        )
    }

    /// Run one frame
    ///
    /// Intents apply in event order. A quit intent ends the frame at once:
    /// later intents, the step and the render are skipped.
    pub fn frame<S: DrawSurface + ?Sized>(
        &mut self,
        input: &[InputEvent],
        dt: f32,
        surface: &mut S,
    ) -> FrameOutcome {
        for intent in intents_from_events(input) {
            if apply_intent(&mut self.world, intent) == Control::Quit {
                log::info!("Quit after {} frames", self.frame_count);
                return FrameOutcome {
                    control: Control::Quit,
                    events: Vec::new(),
                };
            }
        }

        let events = step(&mut self.world, dt);
        render_world(&self.world, surface);
        self.frame_count += 1;
        log::trace!("Frame {} done (dt={:.4})", self.frame_count, dt);

        FrameOutcome {
            control: Control::Continue,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexSurface;
    use crate::sim::Key;

    fn keys(keys: &[Key]) -> Vec<InputEvent> {
        keys.iter().copied().map(InputEvent::KeyPressed).collect()
    }

    #[test]
    fn test_frame_sequence() {
        let mut game = Game::new(4);
        let mut surface = VertexSurface::new();
        let mut clock = FixedClock(1.0 / 60.0);

        let outcome = game.frame(&keys(&[Key::Right, Key::Right, Key::Up]), clock.delta(), &mut surface);
        assert_eq!(outcome.control, Control::Continue);
        // Intents applied before the step, so the orb is collected this frame
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(game.frame_count(), 1);

        let outcome = game.frame(&keys(&[Key::Left, Key::Down, Key::Down]), clock.delta(), &mut surface);
        assert_eq!(outcome.events.last(), Some(&GameEvent::ExitOpened));
        assert!(game.world.exit_active());
    }

    #[test]
    fn test_quit_skips_rest_of_frame() {
        let mut game = Game::new(4);
        let mut surface = VertexSurface::new();
        let before = game.world.player.position();

        let outcome = game.frame(&keys(&[Key::Quit, Key::Right]), 0.0, &mut surface);
        assert_eq!(outcome.control, Control::Quit);
        assert_eq!(game.world.player.position(), before);
        assert_eq!(surface.frames_presented(), 0);

        let outcome = game.frame(&[InputEvent::WindowClosed], 0.0, &mut surface);
        assert_eq!(outcome.control, Control::Quit);
    }

    #[test]
    fn test_empty_frame_still_renders() {
        let mut game = Game::new(4);
        let mut surface = VertexSurface::new();
        let outcome = game.frame(&[], 0.016, &mut surface);
        assert!(outcome.events.is_empty());
        assert!(!surface.frame().is_empty());
    }

    #[test]
    fn test_status_line() {
        let mut game = Game::new(4);
        let mut surface = VertexSurface::new();
        assert!(game.status().contains("orbs left 2 | exit closed"));

        game.frame(&keys(&[Key::Right, Key::CursorDown]), 0.016, &mut surface);
        let status = game.status();
        assert!(status.starts_with("frame 1 |"));
        assert!(status.contains("cursor (0, 1)"));
        assert!(status.contains("Vec2(350.0, 250.0)"));
    }

    #[test]
    fn test_clocks_non_negative() {
        assert_eq!(FixedClock(-1.0).delta(), 0.0);
        let mut clock = SystemClock::new();
        assert!(clock.delta() >= 0.0);
    }
}
