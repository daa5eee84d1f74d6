//! Elastic Disks - rigid disks bouncing around a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic physics core (disks, collisions, walls, force fields, tick)
//! - `settings`: Tunable constants, loadable from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Simulation configuration constants
pub mod consts {
    /// Fixed timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest elapsed time a single tick will integrate (seconds)
    pub const MAX_DT: f32 = 0.1;

    /// Disk radius range (pixels)
    pub const DISK_RADIUS_MIN: f32 = 20.0;
    pub const DISK_RADIUS_MAX: f32 = 50.0;
    /// Smallest radius a disk may ever have
    pub const DISK_RADIUS_FLOOR: f32 = 0.5;
    /// Per-axis velocity range (pixels/s)
    pub const DISK_SPEED_MIN: f32 = 25.0;
    pub const DISK_SPEED_MAX: f32 = 50.0;
    /// Cylinder thickness and density used to derive mass
    pub const DISK_HEIGHT: f32 = 30.0;
    pub const DISK_DENSITY: f32 = 0.001;
    /// Disks spawned on start
    pub const DISK_COUNT: usize = 10;
    /// Hard cap on the requested disk count
    pub const MAX_DISKS: usize = 2000;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 1000.0;
    pub const ARENA_MIN_WIDTH: f32 = 200.0;
    pub const ARENA_MIN_HEIGHT: f32 = 200.0;

    /// Vortex force (newton-ish units, constant with distance)
    pub const VORTEX_FORCE: f32 = 100_000.0;
    /// Scroll-wheel adjustment of the vortex force
    pub const VORTEX_STEP: f32 = 10_000.0;

    /// Downward gravitational acceleration (pixels/s²)
    pub const GRAVITY: f32 = 981.0;
}
