//! Random disk creation for start and reset

use glam::Vec2;
use rand::Rng;

use super::boundary::{Arena, WallPolicy};
use super::disk::{Disk, Palette};
use crate::settings::Settings;

/// Sampling ranges and material constants for new disks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub radius_min: f32,
    pub radius_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub height: f32,
    pub density: f32,
    pub wall_policy: WallPolicy,
    pub palette: Palette,
}

impl From<&Settings> for SpawnParams {
    fn from(s: &Settings) -> Self {
        Self {
            radius_min: s.radius_min,
            radius_max: s.radius_max,
            speed_min: s.speed_min,
            speed_max: s.speed_max,
            height: s.disk_height,
            density: s.disk_density,
            wall_policy: s.wall_policy,
            palette: Palette::from_flashing(s.flashing_colors),
        }
    }
}

/// Uniform sample in `[a, b]`, tolerating reversed or empty bounds
fn sample<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi { lo } else { rng.random_range(lo..=hi) }
}

/// Build `count` disks with ids `first_id..first_id + count`
///
/// Centers are uniform over the part of the arena the wall policy allows for
/// each disk's radius. Each velocity component is drawn independently from
/// the speed range, so headings are not uniformly distributed.
pub fn spawn_disks<R: Rng + ?Sized>(
    count: usize,
    first_id: u32,
    arena: Arena,
    params: &SpawnParams,
    rng: &mut R,
) -> Vec<Disk> {
    (0..count)
        .map(|i| {
            let radius = sample(rng, params.radius_min, params.radius_max);
            let (min_x, max_x) = params.wall_policy.interval(arena.width, radius);
            let (min_y, max_y) = params.wall_policy.interval(arena.height, radius);
            let pos = Vec2::new(sample(rng, min_x, max_x), sample(rng, min_y, max_y));
            let vel = Vec2::new(
                sample(rng, params.speed_min, params.speed_max),
                sample(rng, params.speed_min, params.speed_max),
            );
            let color = params.palette.pick(rng);
            let id = first_id.wrapping_add(i as u32);
            Disk::from_density(id, pos, vel, radius, params.height, params.density).with_color(color)
        })
        .collect()
}
