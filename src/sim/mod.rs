//! Deterministic physics core
//!
//! This module must stay pure and deterministic:
//! - Elapsed time supplied by the caller, never measured here
//! - Seeded RNG only
//! - Stable iteration order (disk vector order)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod control;
pub mod disk;
pub mod forces;
pub mod spawn;
pub mod state;
pub mod tick;

pub use boundary::{Arena, WallPolicy, resolve_walls};
pub use collision::{CollisionReport, disks_overlap, resolve_collisions, resolve_pair, separate_pair};
pub use control::{Control, apply_control};
pub use disk::{Disk, Impact, Palette, Rgb, disk_mass};
pub use forces::{ForceField, Gravity, Vortex, gravity_acceleration, vortex_acceleration};
pub use spawn::{SpawnParams, spawn_disks};
pub use state::{SimulationState, Status};
pub use tick::{TickInput, TickReport, sanitize_dt, tick};
