//! Simulation settings
//!
//! Every tunable of the simulation lives here. Settings can be loaded from a
//! JSON file; missing fields fall back to the defaults in [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::WallPolicy;

/// Errors raised while loading settings from disk
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Disks ===
    /// Smallest spawn radius
    pub radius_min: f32,
    /// Largest spawn radius
    pub radius_max: f32,
    /// Smallest spawn velocity component
    pub speed_min: f32,
    /// Largest spawn velocity component
    pub speed_max: f32,
    /// Cylinder thickness used for the mass formula
    pub disk_height: f32,
    /// Material density used for the mass formula
    pub disk_density: f32,
    /// Number of disks spawned on start/reset
    pub disk_count: usize,
    /// Upper bound for `disk_count`
    pub max_disks: usize,
    /// Randomize disk colors on every collision (solid red otherwise)
    pub flashing_colors: bool,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Arena never shrinks below these on resize
    pub min_arena_width: f32,
    pub min_arena_height: f32,
    /// Whether walls consider disk radius
    pub wall_policy: WallPolicy,

    // === Force field ===
    /// Vortex force magnitude (negative repels)
    pub vortex_force: f32,
    /// Amount added/removed by one strengthen/weaken step
    pub vortex_step: f32,
    pub gravity_enabled: bool,
    /// Downward acceleration while gravity is enabled
    pub gravity: f32,

    // === Timing ===
    /// Longest elapsed time integrated in one tick
    pub max_dt: f32,
    /// RNG seed for spawning and colors
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius_min: DISK_RADIUS_MIN,
            radius_max: DISK_RADIUS_MAX,
            speed_min: DISK_SPEED_MIN,
            speed_max: DISK_SPEED_MAX,
            disk_height: DISK_HEIGHT,
            disk_density: DISK_DENSITY,
            disk_count: DISK_COUNT,
            max_disks: MAX_DISKS,
            flashing_colors: true,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            min_arena_width: ARENA_MIN_WIDTH,
            min_arena_height: ARENA_MIN_HEIGHT,
            wall_policy: WallPolicy::default(),

            vortex_force: VORTEX_FORCE,
            vortex_step: VORTEX_STEP,
            gravity_enabled: false,
            gravity: GRAVITY,

            max_dt: MAX_DT,
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Return a copy with every degenerate value repaired
    ///
    /// Inverted ranges are swapped, non-positive or non-finite physical
    /// constants fall back to their defaults, and the arena is grown to its
    /// minimum size.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut s = self.clone();

        s.min_arena_width = positive_or(s.min_arena_width, defaults.min_arena_width);
        s.min_arena_height = positive_or(s.min_arena_height, defaults.min_arena_height);
        s.arena_width = finite_or(s.arena_width, defaults.arena_width).max(s.min_arena_width);
        s.arena_height = finite_or(s.arena_height, defaults.arena_height).max(s.min_arena_height);

        s.radius_min = finite_or(s.radius_min, defaults.radius_min);
        s.radius_max = finite_or(s.radius_max, defaults.radius_max);
        if s.radius_min > s.radius_max {
            log::warn!("radius range inverted ({} > {}), swapping", s.radius_min, s.radius_max);
            std::mem::swap(&mut s.radius_min, &mut s.radius_max);
        }
        s.radius_min = s.radius_min.max(DISK_RADIUS_FLOOR);
        s.radius_max = s.radius_max.max(s.radius_min);

        s.speed_min = finite_or(s.speed_min, defaults.speed_min);
        s.speed_max = finite_or(s.speed_max, defaults.speed_max);
        if s.speed_min > s.speed_max {
            log::warn!("speed range inverted ({} > {}), swapping", s.speed_min, s.speed_max);
            std::mem::swap(&mut s.speed_min, &mut s.speed_max);
        }

        s.disk_height = positive_or(s.disk_height, defaults.disk_height);
        s.disk_density = positive_or(s.disk_density, defaults.disk_density);

        if s.max_disks > MAX_DISKS {
            log::warn!("max_disks {} above limit, capping to {}", s.max_disks, MAX_DISKS);
            s.max_disks = MAX_DISKS;
        }
        if s.disk_count > s.max_disks {
            log::warn!("disk_count {} exceeds max_disks {}", s.disk_count, s.max_disks);
            s.disk_count = s.max_disks;
        }

        s.vortex_force = finite_or(s.vortex_force, defaults.vortex_force);
        s.vortex_step = finite_or(s.vortex_step, defaults.vortex_step).abs();
        s.gravity = finite_or(s.gravity, defaults.gravity);
        s.max_dt = positive_or(s.max_dt, defaults.max_dt);

        s
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("non-finite setting {value}, using {fallback}");
        fallback
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("setting must be positive, got {value}; using {fallback}");
        fallback
    }
}
