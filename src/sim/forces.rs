//! External force fields
//!
//! Stateless acceleration contributions: a constant-magnitude point force
//! ("vortex") around the cursor and uniform downward gravity.

use glam::Vec2;

/// Point force around a reference position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vortex {
    /// Where the force points to (cursor position)
    pub origin: Vec2,
    /// Force magnitude; negative repels
    pub force: f32,
    /// Only applied while active (button held)
    pub active: bool,
}

/// Uniform vertical acceleration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub accel: f32,
    pub enabled: bool,
}

/// Active external-force configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceField {
    pub vortex: Vortex,
    pub gravity: Gravity,
}

impl ForceField {
    pub fn new(vortex_force: f32, gravity: f32, gravity_enabled: bool) -> Self {
        Self {
            vortex: Vortex {
                origin: Vec2::ZERO,
                force: vortex_force,
                active: false,
            },
            gravity: Gravity {
                accel: gravity,
                enabled: gravity_enabled,
            },
        }
    }

    /// Vortex force in kilonewtons, as shown on the HUD
    pub fn vortex_kilonewtons(&self) -> f32 {
        self.vortex.force / 1000.0
    }
}

/// Acceleration of a body of `mass` at `pos` under a vortex at `origin`
///
/// The force has magnitude `|force|` regardless of distance. Returns `None`
/// when `pos == origin` because the direction is undefined.
#[inline]
pub fn vortex_acceleration(pos: Vec2, mass: f32, origin: Vec2, force: f32) -> Option<Vec2> {
    let dir = (origin - pos).try_normalize()?;
    Some(dir * (force / mass))
}

/// Gravity points down the screen (+y)
#[inline]
pub fn gravity_acceleration(accel: f32) -> Vec2 {
    Vec2::new(0.0, accel)
}
