//! Simulation state
//!
//! Everything the physics core needs between ticks lives in one struct that is
//! passed explicitly into `tick`. There is no global state.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::boundary::Arena;
use super::disk::{Disk, Palette};
use super::forces::ForceField;
use super::spawn::{SpawnParams, spawn_disks};
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Sanitized settings the state was built from
    pub settings: Settings,
    /// Current arena bounds (changes on resize)
    pub arena: Arena,
    /// External-force configuration
    pub field: ForceField,
    /// Disk count used by the next reset
    pub requested_count: usize,
    /// Sanitized elapsed time of the last tick
    pub dt: f32,
    /// Ticks run so far
    pub time_ticks: u64,
    /// Active disks, stable order within and across ticks
    pub(super) disks: Vec<Disk>,
    /// Spawn sampling and collision colors
    pub(super) rng: Pcg32,
    /// Next entity ID (never reused, so stale contact handles match nothing)
    next_id: u32,
}

impl SimulationState {
    /// Build a state and spawn the configured number of disks
    pub fn new(settings: Settings) -> Self {
        let mut state = Self::empty(settings);
        state.reset();
        state
    }

    /// Build a state with no disks
    pub fn empty(settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            arena: Arena::new(settings.arena_width, settings.arena_height),
            field: ForceField::new(settings.vortex_force, settings.gravity, settings.gravity_enabled),
            requested_count: settings.disk_count,
            dt: 0.0,
            time_ticks: 0,
            disks: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
            settings,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.allocate_ids(1)
    }

    /// Reserve `count` consecutive IDs and return the first
    ///
    /// Once the `u32` space runs out, allocation wraps back to 1 and old IDs
    /// may be handed out again.
    fn allocate_ids(&mut self, count: u32) -> u32 {
        match self.next_id.checked_add(count) {
            Some(next) => {
                let first = self.next_id;
                self.next_id = next;
                first
            }
            None => {
                log::warn!("entity IDs exhausted, wrapping to 1");
                self.next_id = count.saturating_add(1);
                1
            }
        }
    }

    /// Read-only view for renderers
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    pub fn palette(&self) -> Palette {
        Palette::from_flashing(self.settings.flashing_colors)
    }

    /// Replace the whole disk set with freshly spawned disks
    pub fn reset(&mut self) {
        let count = self.requested_count;
        let params = SpawnParams::from(&self.settings);
        let first_id = self.allocate_ids(u32::try_from(count).unwrap_or(u32::MAX));
        self.disks = spawn_disks(count, first_id, self.arena, &params, &mut self.rng);
        log::debug!(
            "Reset: {} disks in {}x{} arena",
            count,
            self.arena.width,
            self.arena.height
        );
    }

    /// Set the count for the next reset, clamped to `[0, max_disks]`
    pub fn set_requested_count(&mut self, count: i64) {
        let max = i64::try_from(self.settings.max_disks).unwrap_or(i64::MAX);
        let clamped = count.clamp(0, max);
        if clamped != count {
            log::warn!("Requested disk count {count} clamped to {clamped}");
        }
        self.requested_count = usize::try_from(clamped).unwrap_or(self.settings.max_disks);
    }

    /// Replace the whole disk set with caller-built disks
    ///
    /// IDs at or above the next entity ID are reserved so later spawns never
    /// collide with them.
    pub fn replace_disks(&mut self, disks: Vec<Disk>) {
        if let Some(max_id) = disks.iter().map(|d| d.id).max() {
            match max_id.checked_add(1) {
                Some(next) => self.next_id = self.next_id.max(next),
                None => {
                    log::warn!("disk ID {max_id} leaves no IDs to allocate, wrapping to 1");
                    self.next_id = 1;
                }
            }
        }
        self.disks = disks;
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.disks.iter().map(Disk::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.disks.iter().map(Disk::momentum).sum()
    }

    /// HUD snapshot
    pub fn status(&self) -> Status {
        Status {
            disks: self.disks.len(),
            requested: self.requested_count,
            vortex_kn: self.field.vortex_kilonewtons(),
            gravity: self.field.gravity.enabled,
            kinetic_energy: self.total_kinetic_energy(),
            momentum: self.total_momentum(),
        }
    }
}

/// Summary numbers for a HUD or log line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub disks: usize,
    pub requested: usize,
    pub vortex_kn: f32,
    pub gravity: bool,
    pub kinetic_energy: f32,
    pub momentum: Vec2,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "disks: {} (next reset: {}) | vortex: {} kN | gravity: {} | KE: {:.1} | p: ({:.1}, {:.1})",
            self.disks,
            self.requested,
            self.vortex_kn,
            if self.gravity { "on" } else { "off" },
            self.kinetic_energy,
            self.momentum.x,
            self.momentum.y,
        )
    }
}
