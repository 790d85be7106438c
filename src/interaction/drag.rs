use serde::{Deserialize, Serialize};

use crate::core::types::AppointmentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Press accepted; waiting out the hold delay with the pointer steady.
    PendingLongPress,
    /// Hold elapsed; the card follows the pointer until release.
    Dragging,
}

/// Tuning for long-press recognition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongPressTuning {
    /// Hold time before a press becomes a drag.
    pub hold_ms: f64,
    /// Vertical slack before a pending press is voided as a scroll.
    pub jitter_px: f64,
}

impl Default for LongPressTuning {
    fn default() -> Self {
        Self {
            hold_ms: 500.0,
            jitter_px: 10.0,
        }
    }
}

/// Seed for one press on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPress {
    pub appointment_id: AppointmentId,
    pub pointer_id: u64,
    pub y: f64,
    pub pressed_at_ms: f64,
    pub original_start_minute: f64,
    pub duration_minutes: f64,
}

/// Live state of one press/drag, public to hosts for overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub appointment_id: AppointmentId,
    pub pointer_id: u64,
    pub origin_y: f64,
    pub current_y: f64,
    pub pressed_at_ms: f64,
    pub original_start_minute: f64,
    pub duration_minutes: f64,
    /// Snapped candidate start under the pointer; equals the original start
    /// until the first drag movement lands.
    pub candidate_start_minute: f64,
    /// Last candidate a snap pulse fired for.
    pub last_snapped_minute: Option<f64>,
    /// Latched once the pointer leaves the jitter radius while dragging.
    pub moved_beyond_jitter: bool,
}

impl DragSession {
    fn from_press(press: DragPress) -> Self {
        Self {
            appointment_id: press.appointment_id,
            pointer_id: press.pointer_id,
            origin_y: press.y,
            current_y: press.y,
            pressed_at_ms: press.pressed_at_ms,
            original_start_minute: press.original_start_minute,
            duration_minutes: press.duration_minutes,
            candidate_start_minute: press.original_start_minute,
            last_snapped_minute: None,
            moved_beyond_jitter: false,
        }
    }

    #[must_use]
    pub fn drag_offset_y(&self) -> f64 {
        self.current_y - self.origin_y
    }

    /// `true` when the candidate differs from where the booking started.
    #[must_use]
    pub fn candidate_changed(&self) -> bool {
        (self.candidate_start_minute - self.original_start_minute).abs() > f64::EPSILON
    }
}

/// Outcome of feeding a pointer movement into the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum DragMove {
    /// Not our pointer, or nothing in flight.
    Ignored,
    /// Still pending, pointer within the jitter radius.
    Holding,
    /// Pending press voided by early movement; the gesture is over and the
    /// release that follows means nothing.
    CancelledByJitter,
    /// Dragging; session updated with the new pointer position.
    Dragged(DragSession),
}

/// Outcome of releasing the tracked pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum DragRelease {
    Ignored,
    /// Released before the hold elapsed: a plain tap on the card.
    TapCandidate(DragSession),
    /// Released mid-drag; the caller decides whether it commits.
    Finished(DragSession),
}

/// Long-press drag state machine.
///
/// The tracker never reads a real clock; hosts feed `tick` with the same
/// millisecond timeline they stamp presses with, which keeps recognition
/// reproducible in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
    session: Option<DragSession>,
    tuning: LongPressTuning,
}

impl DragTracker {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn tuning(&self) -> LongPressTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: LongPressTuning) {
        self.tuning = tuning;
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// `true` while a press or drag is in flight; pinch input is ignored then.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Accepts a primary-pointer press on a card.
    ///
    /// Returns `false` (and changes nothing) when another gesture is already
    /// in flight.
    pub fn on_press(&mut self, press: DragPress) -> bool {
        if self.phase != DragPhase::Idle {
            return false;
        }

        self.session = Some(DragSession::from_press(press));
        self.phase = DragPhase::PendingLongPress;
        true
    }

    /// Advances the hold timer; promotes a steady press into a drag.
    ///
    /// Returns the session snapshot when the promotion happens on this call.
    pub fn tick(&mut self, now_ms: f64) -> Option<DragSession> {
        if self.phase != DragPhase::PendingLongPress {
            return None;
        }

        let session = self.session.as_ref()?;
        if now_ms - session.pressed_at_ms < self.tuning.hold_ms {
            return None;
        }

        self.phase = DragPhase::Dragging;
        self.session.clone()
    }

    pub fn on_move(&mut self, pointer_id: u64, y: f64) -> DragMove {
        let Some(session) = self.session.as_mut() else {
            return DragMove::Ignored;
        };

        if session.pointer_id != pointer_id {
            return DragMove::Ignored;
        }

        match self.phase {
            DragPhase::Idle => DragMove::Ignored,
            DragPhase::PendingLongPress => {
                if (y - session.origin_y).abs() > self.tuning.jitter_px {
                    self.phase = DragPhase::Idle;
                    self.session = None;
                    DragMove::CancelledByJitter
                } else {
                    DragMove::Holding
                }
            }
            DragPhase::Dragging => {
                session.current_y = y;
                if (y - session.origin_y).abs() > self.tuning.jitter_px {
                    session.moved_beyond_jitter = true;
                }
                DragMove::Dragged(session.clone())
            }
        }
    }

    /// Writes a freshly computed snapped candidate into the live session.
    pub fn set_candidate(&mut self, candidate_start_minute: f64) {
        if let Some(session) = self.session.as_mut() {
            session.candidate_start_minute = candidate_start_minute;
            session.last_snapped_minute = Some(candidate_start_minute);
        }
    }

    pub fn on_release(&mut self, pointer_id: u64) -> DragRelease {
        let Some(session) = self.session.as_ref() else {
            return DragRelease::Ignored;
        };

        if session.pointer_id != pointer_id {
            return DragRelease::Ignored;
        }

        let session = session.clone();
        let phase = self.phase;
        self.phase = DragPhase::Idle;
        self.session = None;

        match phase {
            DragPhase::Idle => DragRelease::Ignored,
            DragPhase::PendingLongPress => DragRelease::TapCandidate(session),
            DragPhase::Dragging => DragRelease::Finished(session),
        }
    }

    /// Drops any in-flight gesture without emitting a release outcome.
    ///
    /// Used for pointer-cancel and for when the pressed card disappears from
    /// under the gesture.
    pub fn cancel(&mut self) -> bool {
        let was_engaged = self.is_engaged();
        self.phase = DragPhase::Idle;
        self.session = None;
        was_engaged
    }
}
