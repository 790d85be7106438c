use crate::core::AppointmentId;
use crate::extensions::SchedulerPlugin;

use super::feedback::FeedbackState;
use super::{InvalidationMask, RescheduleRequest};

/// What a tracked press will resolve into if it ends without moving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TapTarget {
    Card(AppointmentId),
    Slot(u32),
}

/// Press that can only ever become a tap; voided by the same vertical slack
/// that voids a pending long-press.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PendingTap {
    pub(super) pointer_id: u64,
    pub(super) origin_y: f64,
    pub(super) target: TapTarget,
}

/// Runtime orchestration state grouped separately from model/behavior.
pub(super) struct SchedulerRuntimeState {
    pub(super) plugins: Vec<Box<dyn SchedulerPlugin>>,
    pub(super) pending_invalidation: InvalidationMask,
    pub(super) pending_reschedule: Option<RescheduleRequest>,
    pub(super) pending_tap: Option<PendingTap>,
    /// Set while a committed reschedule waits on the host; blocks new input.
    pub(super) is_updating: bool,
    /// Set while a drag owns the pointer; hosts pause ambient scrolling.
    pub(super) scroll_locked: bool,
    /// Taps before this host-clock instant are leftovers of a finished drag.
    pub(super) tap_suppressed_until_ms: Option<f64>,
    pub(super) feedback: FeedbackState,
}

impl SchedulerRuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            plugins: Vec::new(),
            pending_invalidation: InvalidationMask::full(),
            pending_reschedule: None,
            pending_tap: None,
            is_updating: false,
            scroll_locked: false,
            tap_suppressed_until_ms: None,
            feedback: FeedbackState::default(),
        }
    }
}
