use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::LongPressTuning;

fn default_true() -> bool {
    true
}

/// Grid quantization applied to drag candidates and tap-to-create slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapBehavior {
    /// Drag candidates round to the nearest multiple of this step.
    pub step_minutes: u32,
    /// Length of the tappable empty slots between bookings.
    pub slot_minutes: u32,
}

impl Default for SnapBehavior {
    fn default() -> Self {
        Self {
            step_minutes: 15,
            slot_minutes: 30,
        }
    }
}

impl SnapBehavior {
    pub(super) fn validate(self) -> SchedulerResult<()> {
        if self.step_minutes == 0 {
            return Err(SchedulerError::InvalidData(
                "snap step must be > 0 minutes".to_owned(),
            ));
        }
        if self.slot_minutes == 0 {
            return Err(SchedulerError::InvalidData(
                "slot length must be > 0 minutes".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Lifetimes of the transient feedback surfaces, in host-clock milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBehavior {
    /// Toasts auto-hide this long after (re)display.
    pub toast_duration_ms: f64,
    /// Zoom percent badge hides this long after the last pinch update.
    pub zoom_badge_duration_ms: f64,
    /// Taps landing within this window after a finished drag are swallowed.
    pub tap_suppression_ms: f64,
}

impl Default for FeedbackBehavior {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000.0,
            zoom_badge_duration_ms: 1000.0,
            tap_suppression_ms: 100.0,
        }
    }
}

impl FeedbackBehavior {
    pub(super) fn validate(self) -> SchedulerResult<()> {
        for (name, value) in [
            ("toast duration", self.toast_duration_ms),
            ("zoom badge duration", self.zoom_badge_duration_ms),
            ("tap suppression window", self.tap_suppression_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SchedulerError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Host-configurable gesture gates for the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureInputBehavior {
    /// Enables long-press drag-to-reschedule on cards.
    #[serde(default = "default_true")]
    pub handle_drag_reschedule: bool,
    /// Enables pinch-driven density zoom.
    #[serde(default = "default_true")]
    pub handle_pinch_zoom: bool,
    /// Enables taps on empty slots between bookings.
    #[serde(default = "default_true")]
    pub handle_slot_taps: bool,
}

impl Default for GestureInputBehavior {
    fn default() -> Self {
        Self {
            handle_drag_reschedule: true,
            handle_pinch_zoom: true,
            handle_slot_taps: true,
        }
    }
}

impl GestureInputBehavior {
    #[must_use]
    pub(crate) fn allows_drag_reschedule(self) -> bool {
        self.handle_drag_reschedule
    }

    #[must_use]
    pub(crate) fn allows_pinch_zoom(self) -> bool {
        self.handle_pinch_zoom
    }

    #[must_use]
    pub(crate) fn allows_slot_taps(self) -> bool {
        self.handle_slot_taps
    }
}

pub(super) fn validate_long_press(tuning: LongPressTuning) -> SchedulerResult<()> {
    if !tuning.hold_ms.is_finite() || tuning.hold_ms <= 0.0 {
        return Err(SchedulerError::InvalidData(
            "long-press hold must be finite and > 0 ms".to_owned(),
        ));
    }
    if !tuning.jitter_px.is_finite() || tuning.jitter_px < 0.0 {
        return Err(SchedulerError::InvalidData(
            "long-press jitter slack must be finite and >= 0 px".to_owned(),
        ));
    }
    Ok(())
}
