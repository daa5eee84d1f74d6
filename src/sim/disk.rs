//! Disk entity and its self-contained responses
//!
//! A disk is a point mass with a circular extent. It knows how to bounce off
//! another disk, off the arena walls, and how to take up external forces.

use glam::Vec2;
use rand::Rng;

use super::boundary::{Arena, WallPolicy};
use super::forces;
use crate::consts::DISK_RADIUS_FLOOR;

/// Display color of a disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random color, each channel in 10..=255 so disks never go black
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(10..=255),
            rng.random_range(10..=255),
            rng.random_range(10..=255),
        )
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// How disks are colored on spawn and on every collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// New random color per event
    Flashing,
    /// Always the same color
    Solid(Rgb),
}

impl Palette {
    pub fn from_flashing(flashing: bool) -> Self {
        if flashing {
            Palette::Flashing
        } else {
            Palette::Solid(Rgb::RED)
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        match self {
            Palette::Flashing => Rgb::random(rng),
            Palette::Solid(color) => *color,
        }
    }
}

/// Mass of a uniform cylinder: π·r²·height·density
#[inline]
pub fn disk_mass(radius: f32, height: f32, density: f32) -> f32 {
    std::f32::consts::PI * radius * radius * height * density
}

/// State of the other disk at the moment of impact
///
/// Captured before either disk of a pair is mutated so both sides resolve
/// from the same pre-collision data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
}

/// A rigid circular body
#[derive(Debug, Clone, PartialEq)]
pub struct Disk {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    radius: f32,
    mass: f32,
    /// Id of the most recent collision partner (weak handle, never dereferenced)
    last_collided_with: Option<u32>,
}

impl Disk {
    /// Create a disk with an explicit mass
    ///
    /// Non-positive or NaN radius/mass are raised to a tiny positive floor.
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Self {
        let radius = if radius > DISK_RADIUS_FLOOR { radius } else { DISK_RADIUS_FLOOR };
        let mass = if mass > 0.0 && mass.is_finite() { mass } else { f32::MIN_POSITIVE };
        Self {
            id,
            pos,
            vel,
            color: Rgb::RED,
            radius,
            mass,
            last_collided_with: None,
        }
    }

    /// Create a disk whose mass follows from its cylinder volume
    pub fn from_density(id: u32, pos: Vec2, vel: Vec2, radius: f32, height: f32, density: f32) -> Self {
        Self::new(id, pos, vel, radius, disk_mass(radius, height, density))
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn last_collided_with(&self) -> Option<u32> {
        self.last_collided_with
    }

    /// Snapshot used as the "other" side of a collision
    pub fn impact(&self) -> Impact {
        Impact {
            id: self.id,
            pos: self.pos,
            vel: self.vel,
            mass: self.mass,
        }
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Whether `self` and `other` are still marked as the same contact
    pub fn in_contact_with(&self, other: &Disk) -> bool {
        self.last_collided_with == Some(other.id) && other.last_collided_with == Some(self.id)
    }

    /// Elastic response against `other`
    ///
    /// Only the velocity component along the center line changes; the
    /// tangential part is kept. Returns false (and changes nothing) when the
    /// centers coincide.
    pub fn resolve_collision(&mut self, other: &Impact, color: Rgb) -> bool {
        let Some(normal) = (other.pos - self.pos).try_normalize() else {
            return false;
        };

        let v1n = normal * self.vel.dot(normal);
        let v1t = self.vel - v1n;
        let v2n = normal * other.vel.dot(normal);

        let total = self.mass + other.mass;
        let new_normal = v1n * ((self.mass - other.mass) / total) + v2n * (2.0 * other.mass / total);

        self.vel = new_normal + v1t;
        self.color = color;
        self.last_collided_with = Some(other.id);
        true
    }

    /// Bounce off the arena walls
    ///
    /// Each axis is handled on its own: a center outside the allowed interval
    /// is clamped back in and the velocity on that axis is pointed inward.
    /// Returns true when any wall was hit.
    pub fn resolve_wall(&mut self, arena: Arena, policy: WallPolicy) -> bool {
        let (min_x, max_x) = policy.interval(arena.width, self.radius);
        let (min_y, max_y) = policy.interval(arena.height, self.radius);

        let hit_x = bounce_axis(&mut self.pos.x, &mut self.vel.x, min_x, max_x);
        let hit_y = bounce_axis(&mut self.pos.y, &mut self.vel.y, min_y, max_y);

        if hit_x || hit_y {
            self.last_collided_with = None;
        }
        hit_x || hit_y
    }

    /// Accelerate toward `origin` with a constant-magnitude force
    ///
    /// Skipped when the disk sits exactly on the origin.
    pub fn apply_vortex(&mut self, origin: Vec2, force: f32, dt: f32) -> bool {
        match forces::vortex_acceleration(self.pos, self.mass, origin, force) {
            Some(accel) => {
                self.vel += accel * dt;
                self.last_collided_with = None;
                true
            }
            None => false,
        }
    }

    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vel += forces::gravity_acceleration(gravity) * dt;
    }

    /// Advance position at constant velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Clamp one coordinate into `[min, max]`, reflecting its velocity inward
fn bounce_axis(pos: &mut f32, vel: &mut f32, min: f32, max: f32) -> bool {
    if *pos < min {
        *pos = min;
        *vel = vel.abs();
        true
    } else if *pos > max {
        *pos = max;
        *vel = -vel.abs();
        true
    } else {
        false
    }
}
