pub mod clock;
pub mod color;
pub mod geometry;
pub mod input;
pub mod scene;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::{Action, InputSnapshot};

    /// Build a snapshot with the given actions held and everything else
    /// released.
    pub fn held(actions: &[Action]) -> InputSnapshot {
        actions
            .iter()
            .fold(InputSnapshot::default(), |snap, &a| snap.with(a))
    }

    /// A snapshot with nothing held.
    pub fn no_input() -> InputSnapshot {
        InputSnapshot::default()
    }
}
