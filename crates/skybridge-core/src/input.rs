use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical game actions the simulation consumes. How physical keys or
/// buttons map onto these is the front end's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    SummonPlatform,
}

/// Held-state of every action for a single tick.
///
/// This is a plain value: the world reads it, never mutates it, and any
/// edge-trigger bookkeeping (previous-frame flags, latches) lives in the
/// simulation state, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub summon: bool,
}

impl InputSnapshot {
    pub fn held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            Action::SummonPlatform => self.summon,
        }
    }

    /// Returns a copy with `action` marked as held. Handy for building
    /// snapshots in scripts and tests.
    pub fn with(mut self, action: Action) -> Self {
        match action {
            Action::MoveLeft => self.move_left = true,
            Action::MoveRight => self.move_right = true,
            Action::Jump => self.jump = true,
            Action::SummonPlatform => self.summon = true,
        }
        self
    }
}

/// Folds press/release events from a window layer into per-tick snapshots.
///
/// The tracker never polls devices; the front end calls `press`/`release`
/// as its event loop observes transitions, then takes a `snapshot` once per
/// tick to hand to the simulation.
#[derive(Debug, Default)]
pub struct InputTracker {
    held: HashSet<Action>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Current held-state of all actions as an immutable snapshot.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.is_held(Action::MoveLeft),
            move_right: self.is_held(Action::MoveRight),
            jump: self.is_held(Action::Jump),
            summon: self.is_held(Action::SummonPlatform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut tracker = InputTracker::new();
        tracker.press(Action::Jump);
        assert!(tracker.is_held(Action::Jump));
        assert!(tracker.snapshot().jump);

        tracker.release(Action::Jump);
        assert!(!tracker.is_held(Action::Jump));
        assert!(!tracker.snapshot().jump);
    }

    #[test]
    fn duplicate_press_is_idempotent() {
        let mut tracker = InputTracker::new();
        tracker.press(Action::MoveRight);
        tracker.press(Action::MoveRight);
        assert!(tracker.is_held(Action::MoveRight));
        tracker.release(Action::MoveRight);
        assert!(!tracker.is_held(Action::MoveRight));
    }

    #[test]
    fn snapshot_covers_all_actions() {
        let mut tracker = InputTracker::new();
        tracker.press(Action::MoveLeft);
        tracker.press(Action::SummonPlatform);
        let snap = tracker.snapshot();
        assert!(snap.move_left);
        assert!(snap.summon);
        assert!(!snap.move_right);
        assert!(!snap.jump);
    }

    #[test]
    fn snapshot_builder_marks_held() {
        let snap = InputSnapshot::default()
            .with(Action::MoveRight)
            .with(Action::Jump);
        assert!(snap.held(Action::MoveRight));
        assert!(snap.held(Action::Jump));
        assert!(!snap.held(Action::MoveLeft));
        assert!(!snap.held(Action::SummonPlatform));
    }
}
