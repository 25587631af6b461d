//! Orb Grid entry point
//!
//! Native driver: every line read from stdin is one frame worth of key
//! presses. End of input closes the session like a window close would.

use std::io::{self, BufRead};

use orb_grid::renderer::VertexSurface;
use orb_grid::sim::{Control, GameEvent, InputEvent};
use orb_grid::{Clock, Game, Settings, SystemClock};

fn main() {
    env_logger::init();
    log::info!("Orb Grid starting...");

    let settings = Settings::load_from_env();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(seed);
    let mut surface = VertexSurface::new();
    let mut clock = SystemClock::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let input = match lines.next() {
            Some(Ok(line)) => line
                .chars()
                .filter_map(|c| settings.binding_for(c))
                .map(InputEvent::KeyPressed)
                .collect::<Vec<_>>(),
            Some(Err(e)) => {
                log::warn!("Input error: {}", e);
                vec![InputEvent::WindowClosed]
            }
            None => vec![InputEvent::WindowClosed],
        };

        let outcome = game.frame(&input, clock.delta(), &mut surface);
        if outcome.control == Control::Quit {
            break;
        }

        for event in &outcome.events {
            match event {
                GameEvent::OrbCollected { index, .. } => log::info!("Collected orb {}", index + 1),
                GameEvent::ExitOpened => log::info!("Exit open!"),
            }
        }
        log::debug!("{}", game.status());

        if settings.log_frames {
            match serde_json::to_string(&game.world.snapshot()) {
                Ok(json) => log::debug!("{}", json),
                Err(e) => log::warn!("Snapshot failed: {}", e),
            }
        }
    }

    log::info!("Orb Grid exiting after {} frames", game.frame_count());
}
