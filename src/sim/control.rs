//! Discrete commands from the input layer
//!
//! Applied between ticks, never during one.

use super::boundary::Arena;
use super::state::SimulationState;

/// One user command (key press, wheel click, window event)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Rebuild the disk set at the requested count
    Reset,
    /// One more disk on the next reset
    IncreaseCount,
    /// One fewer disk on the next reset
    DecreaseCount,
    /// Swap attraction and repulsion
    FlipVortex,
    StrengthenVortex,
    WeakenVortex,
    ToggleGravity,
    /// Window resized; disks are left where they are and corrected by the
    /// walls on the next tick
    Resize { width: f32, height: f32 },
}

/// Apply a command to the state
pub fn apply_control(state: &mut SimulationState, control: Control) {
    match control {
        Control::Reset => state.reset(),
        Control::IncreaseCount => state.set_requested_count(state.requested_count as i64 + 1),
        Control::DecreaseCount => state.set_requested_count(state.requested_count as i64 - 1),
        Control::FlipVortex => state.field.vortex.force = -state.field.vortex.force,
        Control::StrengthenVortex => state.field.vortex.force += state.settings.vortex_step,
        Control::WeakenVortex => state.field.vortex.force -= state.settings.vortex_step,
        Control::ToggleGravity => state.field.gravity.enabled = !state.field.gravity.enabled,
        Control::Resize { width, height } => {
            let width = if width.is_finite() { width } else { state.arena.width };
            let height = if height.is_finite() { height } else { state.arena.height };
            state.arena = Arena::new(width, height)
                .clamped(state.settings.min_arena_width, state.settings.min_arena_height);
        }
    }
    log::debug!("{:?} -> {}", control, state.status());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_count_steps_clamp_at_zero() {
        let mut state = SimulationState::new(Settings { disk_count: 1, ..Default::default() });
        apply_control(&mut state, Control::DecreaseCount);
        apply_control(&mut state, Control::DecreaseCount);
        assert_eq!(state.requested_count, 0);
        // Count only changes the next reset
        assert_eq!(state.disk_count(), 1);
        apply_control(&mut state, Control::Reset);
        assert_eq!(state.disk_count(), 0);
        apply_control(&mut state, Control::IncreaseCount);
        apply_control(&mut state, Control::Reset);
        assert_eq!(state.disk_count(), 1);
    }

    #[test]
    fn test_vortex_adjustments() {
        let mut state = SimulationState::empty(Settings::default());
        apply_control(&mut state, Control::StrengthenVortex);
        assert_eq!(state.field.vortex.force, 110_000.0);
        apply_control(&mut state, Control::WeakenVortex);
        apply_control(&mut state, Control::WeakenVortex);
        assert_eq!(state.field.vortex.force, 90_000.0);
        apply_control(&mut state, Control::FlipVortex);
        assert_eq!(state.field.vortex.force, -90_000.0);
    }

    #[test]
    fn test_toggle_gravity() {
        let mut state = SimulationState::empty(Settings::default());
        apply_control(&mut state, Control::ToggleGravity);
        assert!(state.field.gravity.enabled);
        apply_control(&mut state, Control::ToggleGravity);
        assert!(!state.field.gravity.enabled);
    }

    #[test]
    fn test_resize_clamps_and_keeps_disks() {
        let mut state = SimulationState::new(Settings::default());
        let before: Vec<_> = state.disks().iter().map(|d| d.pos).collect();
        apply_control(&mut state, Control::Resize { width: 120.0, height: 640.0 });
        assert_eq!(state.arena, Arena::new(200.0, 640.0));
        let after: Vec<_> = state.disks().iter().map(|d| d.pos).collect();
        assert_eq!(before, after);

        apply_control(&mut state, Control::Resize { width: f32::NAN, height: 300.0 });
        assert_eq!(state.arena, Arena::new(200.0, 300.0));
    }
}
