//! Elastic Disks headless runner
//!
//! Drives the physics core without a window: spawns the configured disks,
//! pulls them toward the arena center, pushes them away again, then lets them
//! settle, logging a status line every simulated second.
//!
//! Usage: `elastic-disks [settings.json] [ticks]`

use glam::Vec2;

use elastic_disks::Settings;
use elastic_disks::consts::SIM_DT;
use elastic_disks::sim::{Control, SimulationState, TickInput, apply_control, tick};

const DEFAULT_TICKS: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Elastic Disks (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let ticks = match args.next().map(|t| t.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(err)) => {
            log::warn!("Invalid tick count ({err}), running {DEFAULT_TICKS}");
            DEFAULT_TICKS
        }
        None => DEFAULT_TICKS,
    };

    let mut state = SimulationState::new(settings);
    log::info!("{}", state.status());

    let center = Vec2::new(state.arena.width, state.arena.height) * 0.5;
    let ticks_per_second = (1.0 / SIM_DT).round() as u64;

    for n in 1..=ticks {
        // Vortex held for the first two thirds, attracting then repelling
        let input = TickInput {
            cursor: center,
            vortex_active: n <= ticks * 2 / 3,
        };
        tick(&mut state, &input, SIM_DT);

        if n == ticks / 3 {
            apply_control(&mut state, Control::FlipVortex);
        }
        if n % ticks_per_second == 0 {
            log::info!("t={:.1}s {}", n as f32 * SIM_DT, state.status());
        }
    }

    println!("{}", state.status());
}
