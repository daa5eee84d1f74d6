//! Arena bounds and wall reflection

use serde::{Deserialize, Serialize};

use super::disk::Disk;

/// Whether walls see a disk as a circle or as its center point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallPolicy {
    /// Center kept in `[radius, extent - radius]`; the rim touches the wall
    #[default]
    Radius,
    /// Center kept in `[0, extent]`; disks overlap the wall by up to a radius
    Center,
}

impl WallPolicy {
    /// Allowed interval for a disk center along an axis of length `extent`
    ///
    /// When a disk is wider than the arena the interval collapses to the
    /// middle of the axis.
    pub fn interval(self, extent: f32, radius: f32) -> (f32, f32) {
        match self {
            WallPolicy::Radius => {
                let (min, max) = (radius, extent - radius);
                if min > max {
                    let mid = extent * 0.5;
                    (mid, mid)
                } else {
                    (min, max)
                }
            }
            WallPolicy::Center => (0.0, extent),
        }
    }
}

/// Rectangular arena with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow each side to at least the given minimum
    pub fn clamped(self, min_width: f32, min_height: f32) -> Self {
        Self::new(self.width.max(min_width), self.height.max(min_height))
    }
}

/// Reflect every disk that left the arena, returning how many bounced
pub fn resolve_walls(disks: &mut [Disk], arena: Arena, policy: WallPolicy) -> usize {
    disks
        .iter_mut()
        .map(|disk| disk.resolve_wall(arena, policy))
        .filter(|&bounced| bounced)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_interval_policies() {
        assert_eq!(WallPolicy::Radius.interval(1000.0, 20.0), (20.0, 980.0));
        assert_eq!(WallPolicy::Center.interval(1000.0, 20.0), (0.0, 1000.0));
    }

    #[test]
    fn test_interval_disk_wider_than_arena() {
        assert_eq!(WallPolicy::Radius.interval(30.0, 20.0), (15.0, 15.0));
    }

    #[test]
    fn test_arena_clamped() {
        let arena = Arena::new(150.0, 900.0).clamped(200.0, 200.0);
        assert_eq!(arena, Arena::new(200.0, 900.0));
    }

    #[test]
    fn test_resolve_walls_counts_bounces() {
        let arena = Arena::new(100.0, 100.0);
        let mut disks = vec![
            Disk::new(1, Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 5.0, 1.0),
            Disk::new(2, Vec2::new(99.0, 50.0), Vec2::new(7.0, -2.0), 5.0, 1.0),
            Disk::new(3, Vec2::new(50.0, 2.0), Vec2::new(0.0, -4.0), 5.0, 1.0),
        ];
        assert_eq!(resolve_walls(&mut disks, arena, WallPolicy::Radius), 2);

        // Normal component reversed, tangential kept, center back inside
        assert_eq!(disks[1].pos, Vec2::new(95.0, 50.0));
        assert_eq!(disks[1].vel, Vec2::new(-7.0, -2.0));
        assert_eq!(disks[2].pos, Vec2::new(50.0, 5.0));
        assert_eq!(disks[2].vel, Vec2::new(0.0, 4.0));
        assert_eq!(disks[0].vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_constant_velocity_toward_wall_reflects() {
        let arena = Arena::new(200.0, 200.0);
        let mut disks = vec![Disk::new(1, Vec2::new(100.0, 100.0), Vec2::new(60.0, 15.0), 10.0, 1.0)];
        for _ in 0..120 {
            resolve_walls(&mut disks, arena, WallPolicy::Radius);
            disks[0].integrate(1.0 / 60.0);
            let (min, max) = WallPolicy::Radius.interval(200.0, 10.0);
            assert!(disks[0].pos.x <= max + 60.0 / 60.0 && disks[0].pos.x >= min - 1.0);
        }
        assert_eq!(disks[0].vel.x.abs(), 60.0);
        assert_eq!(disks[0].vel.y.abs(), 15.0);
        assert!(disks[0].vel.x < 0.0);
    }
}
