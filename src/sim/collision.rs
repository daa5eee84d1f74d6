//! Pairwise disk collision detection and response
//!
//! All-pairs, O(n²). Runs in two passes over the same stable pair order:
//! 1. Detection and velocity response, on positions as they were when the
//!    phase started (only velocities change in this pass).
//! 2. Positional separation of every overlapping pair, on current positions,
//!    so disks under sustained force do not sink into each other.

use rand::Rng;

use super::disk::{Disk, Palette};

/// What the collision phase did during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Overlapping pairs found this tick
    pub overlaps: usize,
    /// Overlaps that were new contacts and got a velocity response
    pub responses: usize,
    /// Pairs skipped because their centers coincide
    pub degenerate: usize,
}

/// Whether two disks overlap (touching counts)
#[inline]
pub fn disks_overlap(a: &Disk, b: &Disk) -> bool {
    let reach = a.radius() + b.radius();
    a.pos.distance_squared(b.pos) <= reach * reach
}

/// Borrow two distinct disks mutably, `i < j`
fn pair_mut(disks: &mut [Disk], i: usize, j: usize) -> (&mut Disk, &mut Disk) {
    debug_assert!(i < j);
    let (head, tail) = disks.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Elastic response for a new contact between `a` and `b`
///
/// Both sides read the other's velocity from before either was changed.
pub fn resolve_pair<R: Rng + ?Sized>(a: &mut Disk, b: &mut Disk, palette: Palette, rng: &mut R) -> bool {
    let (impact_a, impact_b) = (a.impact(), b.impact());
    let color_a = palette.pick(rng);
    let color_b = palette.pick(rng);
    a.resolve_collision(&impact_b, color_a) && b.resolve_collision(&impact_a, color_b)
}

/// Push an overlapping pair apart along the center line until they touch
///
/// Each disk moves half of the correction. Pairs that are already apart,
/// or whose centers coincide, are left alone.
pub fn separate_pair(a: &mut Disk, b: &mut Disk) -> bool {
    let offset = b.pos - a.pos;
    let Some(dir) = offset.try_normalize() else {
        return false;
    };
    let dist = offset.length();
    let reach = a.radius() + b.radius();
    if dist >= reach {
        return false;
    }

    let correction = dir * (reach - dist);
    a.pos -= correction * 0.5;
    b.pos += correction * 0.5;
    true
}

/// Run the collision phase over the whole disk set
pub fn resolve_collisions<R: Rng + ?Sized>(
    disks: &mut [Disk],
    palette: Palette,
    rng: &mut R,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut overlapping: Vec<(usize, usize)> = Vec::new();

    // Pass 1: positions are untouched here, so detection sees start-of-phase state
    let n = disks.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if !disks_overlap(&disks[i], &disks[j]) {
                continue;
            }
            // No usable contact normal (coincident or subnormally close centers)
            if (disks[j].pos - disks[i].pos).try_normalize().is_none() {
                report.degenerate += 1;
                continue;
            }
            report.overlaps += 1;
            overlapping.push((i, j));

            let (a, b) = pair_mut(disks, i, j);
            if !a.in_contact_with(b) && resolve_pair(a, b, palette, rng) {
                report.responses += 1;
            }
        }
    }

    // Pass 2
    for (i, j) in overlapping {
        let (a, b) = pair_mut(disks, i, j);
        separate_pair(a, b);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::disk::Rgb;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    fn disk(id: u32, x: f32, y: f32, vx: f32, vy: f32, r: f32) -> Disk {
        Disk::new(id, Vec2::new(x, y), Vec2::new(vx, vy), r, 1.0)
    }

    #[test]
    fn test_subnormal_offset_treated_as_coincident() {
        let mut a = disk(1, 0.0, 0.0, 1.0, 0.0, 10.0);
        let mut b = disk(2, 1e-40, 0.0, -1.0, 0.0, 10.0);
        assert_ne!(a.pos, b.pos);
        assert!(!separate_pair(&mut a, &mut b));
        assert!(a.pos.is_finite() && b.pos.is_finite());

        let mut disks = vec![a, b];
        let report = resolve_collisions(&mut disks, Palette::Solid(Rgb::RED), &mut rng());
        assert_eq!(report.degenerate, 1);
        assert_eq!(report.responses, 0);
        assert!(disks.iter().all(|d| d.pos.is_finite() && d.vel.is_finite()));
    }

    #[test]
    fn test_overlap_includes_touching() {
        assert!(disks_overlap(&disk(1, 0.0, 0.0, 0.0, 0.0, 1.0), &disk(2, 2.0, 0.0, 0.0, 0.0, 1.0)));
        assert!(!disks_overlap(&disk(1, 0.0, 0.0, 0.0, 0.0, 1.0), &disk(2, 2.01, 0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_head_on_swap_through_phase() {
        let mut disks = vec![disk(1, 100.0, 100.0, 10.0, 0.0, 10.0), disk(2, 119.0, 100.0, -10.0, 0.0, 10.0)];
        let report = resolve_collisions(&mut disks, Palette::Solid(Rgb::RED), &mut rng());
        assert_eq!(report.overlaps, 1);
        assert_eq!(report.responses, 1);
        assert!((disks[0].vel - Vec2::new(-10.0, 0.0)).length() < 1e-4);
        assert!((disks[1].vel - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_separation_restores_touching_distance() {
        let mut disks = vec![disk(1, 0.0, 0.0, 0.0, 0.0, 20.0), disk(2, 12.0, 9.0, 0.0, 0.0, 30.0)];
        resolve_collisions(&mut disks, Palette::Flashing, &mut rng());
        let dist = disks[0].pos.distance(disks[1].pos);
        assert!((dist - 50.0).abs() < 1e-3);
        // Midpoint is preserved since both move half the correction
        let mid = (disks[0].pos + disks[1].pos) * 0.5;
        assert!((mid - Vec2::new(6.0, 4.5)).length() < 1e-3);
        // Direction of the center line is kept
        let dir = (disks[1].pos - disks[0].pos).normalize();
        assert!((dir - Vec2::new(0.8, 0.6)).length() < 1e-4);
    }

    #[test]
    fn test_continued_contact_is_not_re_resolved() {
        let mut disks = vec![disk(1, 0.0, 0.0, 5.0, 0.0, 10.0), disk(2, 15.0, 0.0, -5.0, 0.0, 10.0)];
        let mut rng = rng();
        let first = resolve_collisions(&mut disks, Palette::Flashing, &mut rng);
        assert_eq!(first.responses, 1);
        let after_first = (disks[0].vel, disks[1].vel);

        // Still touching after separation, and still mutually marked
        let second = resolve_collisions(&mut disks, Palette::Flashing, &mut rng);
        assert_eq!(second.overlaps, 1);
        assert_eq!(second.responses, 0);
        assert_eq!((disks[0].vel, disks[1].vel), after_first);
    }

    #[test]
    fn test_guard_requires_both_sides() {
        let mut disks = vec![disk(1, 0.0, 0.0, 5.0, 0.0, 10.0), disk(2, 15.0, 0.0, -5.0, 0.0, 10.0)];
        let mut rng = rng();
        resolve_collisions(&mut disks, Palette::Flashing, &mut rng);
        assert!(disks[0].in_contact_with(&disks[1]));

        // A zero-strength vortex clears one side's mark without touching velocity
        assert!(disks[1].apply_vortex(Vec2::new(100.0, 100.0), 0.0, 1.0));
        assert!(!disks[0].in_contact_with(&disks[1]));

        let report = resolve_collisions(&mut disks, Palette::Flashing, &mut rng);
        assert_eq!(report.responses, 1);
        assert!((disks[0].vel - Vec2::new(5.0, 0.0)).length() < 1e-4);
        assert!(disks[0].in_contact_with(&disks[1]));
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let mut disks = vec![disk(1, 5.0, 5.0, 1.0, 0.0, 3.0), disk(2, 5.0, 5.0, -1.0, 0.0, 3.0)];
        let report = resolve_collisions(&mut disks, Palette::Flashing, &mut rng());
        assert_eq!(report.degenerate, 1);
        assert_eq!(report.responses, 0);
        assert_eq!(disks[0].pos, Vec2::new(5.0, 5.0));
        assert_eq!(disks[0].vel, Vec2::new(1.0, 0.0));
        assert!(disks.iter().all(|d| d.pos.is_finite() && d.vel.is_finite()));
    }

    #[test]
    fn test_separated_pairs_untouched() {
        let mut disks = vec![disk(1, 0.0, 0.0, 1.0, 0.0, 3.0), disk(2, 50.0, 0.0, -1.0, 0.0, 3.0)];
        let report = resolve_collisions(&mut disks, Palette::Flashing, &mut rng());
        assert_eq!(report, CollisionReport::default());
        assert_eq!(disks[0].vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_response_uses_start_of_phase_positions() {
        // Disk 1 overlaps both neighbours; separating the first pair must not
        // change which pairs respond in the same tick.
        let mut disks = vec![
            disk(1, 0.0, 0.0, 0.0, 0.0, 10.0),
            disk(2, 19.0, 0.0, -4.0, 0.0, 10.0),
            disk(3, -19.5, 0.0, 4.0, 0.0, 10.0),
        ];
        let report = resolve_collisions(&mut disks, Palette::Flashing, &mut rng());
        assert_eq!(report.overlaps, 2);
        assert_eq!(report.responses, 2);
    }
}
