//! Headless play session
//!
//! Spawns the player on the default level, walks right, jumps, and prints
//! the trajectory plus the button messages a client would send.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_run`, optionally
//! passing a config TOML path as the first argument.

use anyhow::Result;
use ledge_engine::game::{handle_key_event, init_play_state, update_play};
use ledge_engine::level::default_level;
use ledge_engine::network::encode_button_message;
use ledge_engine::{KeyAction, KeyCode, SimulationConfig};
use std::path::Path;

const TICK: f32 = 1.0 / 60.0;
const TICKS: u64 = 120;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(Path::new(&path))?,
        None => SimulationConfig::default(),
    };
    let level = default_level(config.drawable_width, config.drawable_height);
    let mut state = init_play_state(config, &level)?;

    println!("Ledge Engine headless run ({} ticks at {:.4}s)", TICKS, TICK);

    for tick in 0..TICKS {
        match tick {
            10 => {
                handle_key_event(&mut state, KeyCode::D, KeyAction::Down { repeat: false });
            }
            40 => {
                handle_key_event(&mut state, KeyCode::Space, KeyAction::Down { repeat: false });
            }
            45 => {
                handle_key_event(&mut state, KeyCode::Space, KeyAction::Up);
            }
            90 => {
                handle_key_event(&mut state, KeyCode::D, KeyAction::Up);
            }
            _ => {}
        }

        let output = update_play(&mut state, TICK);

        if let Some(downs) = output.button_downs {
            println!("  tick {:3}: send {:?}", output.tick, encode_button_message(&downs));
        }
        if output.step.jumped {
            println!("  tick {:3}: jump", output.tick);
        }
        if output.tick % 10 == 0 {
            println!(
                "  tick {:3}: position=({:7.2}, {:7.2}) velocity=({:7.2}, {:7.2}) {:?}",
                output.tick,
                state.player.position.x,
                state.player.position.y,
                state.player.velocity.x,
                state.player.velocity.y,
                output.step.resolution
            );
        }
    }

    println!(
        "Final position: ({:.2}, {:.2})",
        state.player.position.x, state.player.position.y
    );
    Ok(())
}
