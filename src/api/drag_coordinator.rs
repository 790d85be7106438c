use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::time_axis::{format_clock_label, minute_to_time};
use crate::core::{AppointmentId, HapticStrength, ToastKind};
use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::{DragMove, DragPress, DragRelease, DragSession};
use crate::render::Renderer;

use super::scheduler_runtime::{PendingTap, TapTarget};
use super::{InvalidationTopic, PluginEvent, SchedulerEngine};

const CONFLICT_TOAST: &str = "Time slot has other appointments";
const RESCHEDULED_TOAST: &str = "Appointment rescheduled";
const RESCHEDULE_FAILED_TOAST: &str = "Failed to reschedule";

/// One normalized pointer sample in grid-content coordinates.
///
/// `x` runs from the component's left edge (gutter included); `y` runs down
/// the scrollable day content with zero at the window start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pointer_id: u64,
    pub is_primary: bool,
    pub x: f64,
    pub y: f64,
}

impl PointerInput {
    #[must_use]
    pub fn new(pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            is_primary: true,
            x,
            y,
        }
    }

    fn validate(self) -> SchedulerResult<()> {
        ensure_finite(self.x, "pointer x")?;
        ensure_finite(self.y, "pointer y")
    }
}

/// Persistence hand-off produced by a committed drag.
///
/// The engine never mutates bookings itself; the host saves the move and
/// reports back through `resolve_reschedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub appointment_id: AppointmentId,
    pub new_start_time: NaiveDateTime,
    pub new_end_time: NaiveDateTime,
    /// The target slot overlaps other visible bookings. Informational; the
    /// save still proceeds.
    pub conflict: bool,
}

/// Host-reported persistence result for the pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RescheduleOutcome {
    Applied,
    Failed,
}

/// Ghost-card geometry for the drag overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    pub appointment_id: AppointmentId,
    pub start_minute: f64,
    pub end_minute: f64,
    pub top_y: f64,
    pub height_px: f64,
    /// "9:15 AM - 10:15 AM" label shown above the ghost.
    pub badge_label: String,
}

struct CardPressTarget {
    appointment_id: AppointmentId,
    start_minute: f64,
    duration_minutes: f64,
}

impl<R: Renderer> SchedulerEngine<R> {
    /// Feeds a pointer-down sample.
    ///
    /// Returns `true` when the press armed a long-press candidate on a card.
    /// Secondary pointers never gesture, and all input is shed while a
    /// reschedule save is in flight.
    pub fn pointer_down(&mut self, input: PointerInput, at_ms: f64) -> SchedulerResult<bool> {
        input.validate()?;
        ensure_finite(at_ms, "press timestamp")?;

        if !input.is_primary {
            return Ok(false);
        }
        if self.core.runtime.is_updating {
            trace!("press ignored while reschedule save is in flight");
            return Ok(false);
        }
        if self.core.model.drag.is_engaged() || self.core.runtime.pending_tap.is_some() {
            return Ok(false);
        }

        if let Some(target) = self.card_press_target(input.x, input.y) {
            if self.core.behavior.gesture_input.allows_drag_reschedule() {
                let armed = self.core.model.drag.on_press(DragPress {
                    appointment_id: target.appointment_id.clone(),
                    pointer_id: input.pointer_id,
                    y: input.y,
                    pressed_at_ms: at_ms,
                    original_start_minute: target.start_minute,
                    duration_minutes: target.duration_minutes,
                });
                if armed {
                    trace!(appointment_id = %target.appointment_id, "long-press candidate armed");
                }
                return Ok(armed);
            }

            // Drags disabled; the press can still resolve into a tap.
            self.core.runtime.pending_tap = Some(PendingTap {
                pointer_id: input.pointer_id,
                origin_y: input.y,
                target: TapTarget::Card(target.appointment_id),
            });
            return Ok(false);
        }

        if self.core.behavior.gesture_input.allows_slot_taps()
            && let Some(slot_minute) = self.slot_minute_at(input.x, input.y)
        {
            self.core.runtime.pending_tap = Some(PendingTap {
                pointer_id: input.pointer_id,
                origin_y: input.y,
                target: TapTarget::Slot(slot_minute),
            });
        }

        Ok(false)
    }

    /// Feeds a pointer movement sample.
    ///
    /// While dragging, the pointer offset converts to minutes at the current
    /// density, snaps to the grid step, and clamps so the whole booking stays
    /// inside the day window.
    pub fn pointer_move(&mut self, input: PointerInput) -> SchedulerResult<()> {
        input.validate()?;

        if self
            .core
            .runtime
            .pending_tap
            .as_ref()
            .is_some_and(|tap| {
                tap.pointer_id == input.pointer_id
                    && (input.y - tap.origin_y).abs() > self.core.model.drag.tuning().jitter_px
            })
        {
            // Moved too far to still be a tap; the host scroll owns it now.
            self.core.runtime.pending_tap = None;
        }

        match self.core.model.drag.on_move(input.pointer_id, input.y) {
            DragMove::Ignored | DragMove::Holding => Ok(()),
            DragMove::CancelledByJitter => {
                trace!("pending long-press voided by early movement");
                Ok(())
            }
            DragMove::Dragged(session) => self.advance_drag(&session),
        }
    }

    fn advance_drag(&mut self, session: &DragSession) -> SchedulerResult<()> {
        let axis = self.core.model.axis;
        let minutes_offset = session.drag_offset_y() / axis.minute_height();
        let raw = session.original_start_minute + minutes_offset;
        let snapped = axis.snap_minute(raw, self.core.behavior.snap.step_minutes)?;
        let candidate = axis.clamp_start_for_duration(snapped, session.duration_minutes);

        let boundary_crossed = session.last_snapped_minute != Some(candidate);
        self.core.model.drag.set_candidate(candidate);
        if boundary_crossed {
            self.emit_haptic(HapticStrength::Light);
        }

        trace!(candidate_start_minute = candidate, "drag candidate updated");
        self.invalidate_overlay(InvalidationTopic::Drag);
        Ok(())
    }

    /// Advances gesture clocks: promotes ready long-presses and drops expired
    /// transient feedback. Hosts call this from their frame timer.
    pub fn tick(&mut self, now_ms: f64) -> SchedulerResult<()> {
        ensure_finite(now_ms, "tick timestamp")?;

        if let Some(session) = self.core.model.drag.tick(now_ms) {
            debug!(appointment_id = %session.appointment_id, "long-press promoted to drag");
            self.core.runtime.scroll_locked = true;
            self.emit_haptic(HapticStrength::Heavy);
            self.emit_plugin_event(PluginEvent::DragStarted {
                appointment_id: session.appointment_id,
            });
            self.invalidate_overlay(InvalidationTopic::Drag);
        }

        if self.core.runtime.feedback.expire(now_ms) {
            self.invalidate_overlay(InvalidationTopic::Feedback);
        }

        Ok(())
    }

    /// Feeds the release of a pointer.
    ///
    /// A release after a real drag commits a reschedule request; releases
    /// that never left the jitter radius resolve as taps.
    pub fn pointer_up(&mut self, pointer_id: u64, at_ms: f64) -> SchedulerResult<()> {
        ensure_finite(at_ms, "release timestamp")?;

        if let Some(tap) = self.core.runtime.pending_tap.take() {
            if tap.pointer_id == pointer_id {
                self.resolve_tap(tap.target, at_ms);
                return Ok(());
            }
            self.core.runtime.pending_tap = Some(tap);
        }

        match self.core.model.drag.on_release(pointer_id) {
            DragRelease::Ignored => Ok(()),
            DragRelease::TapCandidate(session) => {
                self.resolve_tap(TapTarget::Card(session.appointment_id), at_ms);
                Ok(())
            }
            DragRelease::Finished(session) => {
                self.core.runtime.scroll_locked = false;
                self.invalidate_overlay(InvalidationTopic::Drag);

                if !session.moved_beyond_jitter {
                    // Held long enough to lift the card but never carried it.
                    self.resolve_tap(TapTarget::Card(session.appointment_id), at_ms);
                    return Ok(());
                }
                self.commit_drag(&session, at_ms)
            }
        }
    }

    /// Host-side gesture interruption: pointer capture loss or a scroll
    /// container taking over. Nothing is committed.
    pub fn pointer_cancel(&mut self, pointer_id: u64) {
        if self
            .core
            .runtime
            .pending_tap
            .as_ref()
            .is_some_and(|tap| tap.pointer_id == pointer_id)
        {
            self.core.runtime.pending_tap = None;
        }

        let Some(appointment_id) = self
            .core
            .model
            .drag
            .session()
            .filter(|session| session.pointer_id == pointer_id)
            .map(|session| session.appointment_id.clone())
        else {
            return;
        };

        let was_dragging = self.core.model.drag.is_dragging();
        self.core.model.drag.cancel();
        self.core.runtime.scroll_locked = false;

        if was_dragging {
            debug!(appointment_id = %appointment_id, "drag aborted by pointer cancel");
            self.emit_plugin_event(PluginEvent::DragAborted { appointment_id });
            self.invalidate_overlay(InvalidationTopic::Drag);
        }
    }

    /// Settles the pending reschedule with the host's persistence result.
    pub fn resolve_reschedule(
        &mut self,
        outcome: RescheduleOutcome,
        at_ms: f64,
    ) -> SchedulerResult<()> {
        ensure_finite(at_ms, "resolve timestamp")?;

        let Some(request) = self.core.runtime.pending_reschedule.take() else {
            return Err(SchedulerError::InvalidData(
                "no reschedule request in flight".to_owned(),
            ));
        };

        self.core.runtime.is_updating = false;
        self.emit_haptic(HapticStrength::Heavy);

        let applied = matches!(outcome, RescheduleOutcome::Applied);
        if applied {
            debug!(appointment_id = %request.appointment_id, "reschedule applied");
            self.emit_toast(ToastKind::Success, RESCHEDULED_TOAST, at_ms);
        } else {
            warn!(appointment_id = %request.appointment_id, "reschedule failed");
            self.emit_toast(ToastKind::Error, RESCHEDULE_FAILED_TOAST, at_ms);
        }

        self.emit_plugin_event(PluginEvent::RescheduleSettled {
            appointment_id: request.appointment_id,
            applied,
        });
        self.invalidate_overlay(InvalidationTopic::Feedback);
        Ok(())
    }

    /// Ghost geometry and badge label while a drag is being carried.
    #[must_use]
    pub fn drag_preview(&self) -> Option<DragPreview> {
        if !self.core.model.drag.is_dragging() {
            return None;
        }
        let session = self.core.model.drag.session()?;

        let axis = self.core.model.axis;
        let start = session.candidate_start_minute;
        let end = start + session.duration_minutes;
        Some(DragPreview {
            appointment_id: session.appointment_id.clone(),
            start_minute: start,
            end_minute: end,
            top_y: axis.minute_to_y(start),
            height_px: session.duration_minutes * axis.minute_height(),
            badge_label: format!(
                "{} - {}",
                format_clock_label(minute_to_time(start)),
                format_clock_label(minute_to_time(end))
            ),
        })
    }

    fn commit_drag(&mut self, session: &DragSession, at_ms: f64) -> SchedulerResult<()> {
        // A tap event fired right on the heels of a drag is leftover noise.
        self.core.runtime.tap_suppressed_until_ms =
            Some(at_ms + self.core.behavior.feedback.tap_suppression_ms);

        if !session.candidate_changed() {
            trace!("drag settled back on its original slot");
            return Ok(());
        }

        let candidate_start = session.candidate_start_minute;
        let candidate_end = candidate_start + session.duration_minutes;

        let conflict = self.has_conflict(&session.appointment_id, candidate_start, candidate_end);
        if conflict {
            self.emit_haptic(HapticStrength::Medium);
            self.emit_toast(ToastKind::Warning, CONFLICT_TOAST, at_ms);
        }

        let Some(date) = self
            .core
            .model
            .appointments
            .iter()
            .find(|appointment| appointment.id == session.appointment_id)
            .map(|appointment| appointment.start_time.date())
        else {
            warn!(appointment_id = %session.appointment_id, "dragged booking vanished before commit");
            return Ok(());
        };

        let request = RescheduleRequest {
            appointment_id: session.appointment_id.clone(),
            new_start_time: date.and_time(minute_to_time(candidate_start)),
            new_end_time: date.and_time(minute_to_time(candidate_end)),
            conflict,
        };

        debug!(
            appointment_id = %request.appointment_id,
            start_minute = candidate_start,
            conflict,
            "reschedule requested"
        );
        self.core.runtime.is_updating = true;
        self.core.runtime.pending_reschedule = Some(request.clone());
        self.emit_haptic(HapticStrength::Medium);
        self.emit_plugin_event(PluginEvent::RescheduleRequested {
            appointment_id: request.appointment_id,
            start_minute: candidate_start,
            conflict,
        });
        self.invalidate_overlay(InvalidationTopic::Drag);
        Ok(())
    }

    /// Overlap test against the other visible bookings, in minutes of day.
    fn has_conflict(&self, id: &AppointmentId, start_minute: f64, end_minute: f64) -> bool {
        self.core.model.layout.entries().any(|entry| {
            entry.id != *id && start_minute < entry.end_minute && entry.start_minute < end_minute
        })
    }

    fn resolve_tap(&mut self, target: TapTarget, at_ms: f64) {
        if self
            .core
            .runtime
            .tap_suppressed_until_ms
            .is_some_and(|until| at_ms < until)
        {
            trace!("tap suppressed right after drag");
            return;
        }

        match target {
            TapTarget::Card(appointment_id) => {
                self.emit_plugin_event(PluginEvent::AppointmentTapped { appointment_id });
            }
            TapTarget::Slot(slot_minute) => {
                self.emit_plugin_event(PluginEvent::SlotTapped { slot_minute });
            }
        }
    }

    fn card_press_target(&self, x: f64, y: f64) -> Option<CardPressTarget> {
        let gutter = self.core.style.time_gutter_width_px;
        let column_width = f64::from(self.core.model.viewport.width) - gutter;
        if x < gutter || column_width <= 0.0 {
            return None;
        }

        let minute = self.core.model.axis.y_to_minute(y);
        let entry = self.core.model.layout.card_at(minute, x - gutter, column_width)?;
        Some(CardPressTarget {
            appointment_id: entry.id.clone(),
            start_minute: entry.start_minute,
            duration_minutes: entry.duration_minutes(),
        })
    }

    pub(super) fn emit_haptic(&mut self, strength: HapticStrength) {
        self.emit_plugin_event(PluginEvent::HapticPulse { strength });
    }

    pub(super) fn emit_toast(&mut self, kind: ToastKind, message: &str, now_ms: f64) {
        let expires_at_ms = now_ms + self.core.behavior.feedback.toast_duration_ms;
        self.core
            .runtime
            .feedback
            .show_toast(kind, message, expires_at_ms);
        self.emit_plugin_event(PluginEvent::ToastShown {
            kind,
            message: message.to_owned(),
        });
        self.invalidate_overlay(InvalidationTopic::Feedback);
    }
}

pub(super) fn ensure_finite(value: f64, what: &str) -> SchedulerResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SchedulerError::InvalidData(format!("{what} must be finite")))
    }
}
