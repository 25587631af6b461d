//! Input-to-intent mapping
//!
//! Discrete key presses become intents; intents are applied to the world
//! with the boundary rules of the grid. Nothing here touches a window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::state::World;
use crate::consts::*;
use crate::within_player_bounds;

/// Logical key identifiers, independent of any physical keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Quit,
    Reset,
    Up,
    Down,
    Left,
    Right,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Grow,
    Shrink,
    Rotate,
}

/// A discrete event captured during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    WindowClosed,
    KeyPressed(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in screen space (y grows downward)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        let (dx, dy) = self.offset();
        Vec2::new(dx as f32, dy as f32)
    }
}

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Reset,
    Quit,
    MovePlayer(Direction),
    MoveCursor(Direction),
    GrowSelected,
    ShrinkSelected,
    RotateSelected,
}

impl From<Key> for Intent {
    fn from(key: Key) -> Self {
        match key {
            Key::Quit => Intent::Quit,
            Key::Reset => Intent::Reset,
            Key::Up => Intent::MovePlayer(Direction::Up),
            Key::Down => Intent::MovePlayer(Direction::Down),
            Key::Left => Intent::MovePlayer(Direction::Left),
            Key::Right => Intent::MovePlayer(Direction::Right),
            Key::CursorUp => Intent::MoveCursor(Direction::Up),
            Key::CursorDown => Intent::MoveCursor(Direction::Down),
            Key::CursorLeft => Intent::MoveCursor(Direction::Left),
            Key::CursorRight => Intent::MoveCursor(Direction::Right),
            Key::Grow => Intent::GrowSelected,
            Key::Shrink => Intent::ShrinkSelected,
            Key::Rotate => Intent::RotateSelected,
        }
    }
}

impl From<InputEvent> for Intent {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::WindowClosed => Intent::Quit,
            InputEvent::KeyPressed(key) => key.into(),
        }
    }
}

/// Whether the session should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Map one frame's events to intents, preserving order
pub fn intents_from_events(events: &[InputEvent]) -> Vec<Intent> {
    events.iter().copied().map(Intent::from).collect()
}

/// Apply one intent to the world
///
/// Illegal moves are dropped silently: the player never leaves the walkable
/// rectangle and the cursor never leaves the grid.
pub fn apply_intent(world: &mut World, intent: Intent) -> Control {
    match intent {
        Intent::Quit => return Control::Quit,
        Intent::Reset => world.reset(),
        Intent::MovePlayer(dir) => {
            let mut player = Entity::from(&mut world.player);
            let target = player.position() + dir.as_vec2() * PLAYER_STEP;
            if within_player_bounds(target) {
                player.set_position(target);
            } else {
                log::debug!("Move {:?} to {:?} rejected", dir, target);
            }
        }
        Intent::MoveCursor(dir) => {
            let (dx, dy) = dir.offset();
            world.cursor = world.cursor.shift(dx, dy);
        }
        Intent::GrowSelected => world.selected_entity().scale(GROW_FACTOR),
        Intent::ShrinkSelected => world.selected_entity().scale(SHRINK_FACTOR),
        Intent::RotateSelected => world.selected_entity().rotate(ROTATE_STEP_DEG),
    }
    Control::Continue
}
