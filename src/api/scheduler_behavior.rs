use crate::core::CascadeTuning;

use super::{FeedbackBehavior, GestureInputBehavior, SnapBehavior};

/// Runtime behavior/configuration state grouped separately from core day data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct SchedulerBehaviorState {
    pub(super) snap: SnapBehavior,
    pub(super) feedback: FeedbackBehavior,
    pub(super) gesture_input: GestureInputBehavior,
    pub(super) cascade: CascadeTuning,
}
