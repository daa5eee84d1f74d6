//! Simulation tick
//!
//! One tick runs to completion: collisions, walls, external forces, then
//! integration. Nothing carries over between ticks except the state itself.

use glam::Vec2;

use super::boundary::resolve_walls;
use super::collision::{CollisionReport, resolve_collisions};
use super::state::SimulationState;

/// Per-tick input from the viewport layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Cursor position in arena coordinates
    pub cursor: Vec2,
    /// Vortex button held; `cursor` is ignored otherwise
    pub vortex_active: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Elapsed time actually integrated
    pub dt: f32,
    pub collisions: CollisionReport,
    pub wall_bounces: usize,
    /// Disks the vortex acted on
    pub vortex_hits: usize,
}

/// Clamp elapsed time to `[0, max_dt]`; negative, NaN and infinite become 0
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Rejected elapsed time {dt}, using 0");
        return 0.0;
    }
    dt.min(max_dt)
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) -> TickReport {
    let dt = sanitize_dt(dt, state.settings.max_dt);
    state.dt = dt;
    state.time_ticks += 1;

    state.field.vortex.active = input.vortex_active;
    if input.vortex_active {
        state.field.vortex.origin = input.cursor;
    }

    let palette = state.palette();
    let collisions = resolve_collisions(&mut state.disks, palette, &mut state.rng);

    let wall_bounces = resolve_walls(&mut state.disks, state.arena, state.settings.wall_policy);

    let mut vortex_hits = 0;
    let vortex = state.field.vortex;
    if vortex.active {
        for disk in &mut state.disks {
            if disk.apply_vortex(vortex.origin, vortex.force, dt) {
                vortex_hits += 1;
            }
        }
    }

    let gravity = state.field.gravity;
    if gravity.enabled {
        for disk in &mut state.disks {
            disk.apply_gravity(gravity.accel, dt);
        }
    }

    for disk in &mut state.disks {
        disk.integrate(dt);
    }

    let report = TickReport {
        dt,
        collisions,
        wall_bounces,
        vortex_hits,
    };
    log::trace!("tick {}: {:?}", state.time_ticks, report);
    report
}
