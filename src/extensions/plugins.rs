use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppointmentId, HapticStrength, StatusFilter, ToastKind, Viewport};
use crate::interaction::DragPhase;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub display_date: NaiveDate,
    pub zoom_level: f64,
    pub status_filter: StatusFilter,
    pub visible_len: usize,
    pub drag_phase: DragPhase,
    pub is_updating: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    AppointmentsUpdated {
        visible_len: usize,
        total_len: usize,
    },
    DisplayDateChanged {
        date: NaiveDate,
    },
    ZoomChanged {
        level: f64,
    },
    DragStarted {
        appointment_id: AppointmentId,
    },
    DragAborted {
        appointment_id: AppointmentId,
    },
    RescheduleRequested {
        appointment_id: AppointmentId,
        start_minute: f64,
        conflict: bool,
    },
    RescheduleSettled {
        appointment_id: AppointmentId,
        applied: bool,
    },
    AppointmentTapped {
        appointment_id: AppointmentId,
    },
    SlotTapped {
        slot_minute: u32,
    },
    HapticPulse {
        strength: HapticStrength,
    },
    ToastShown {
        kind: ToastKind,
        message: String,
    },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating
/// scheduler internals directly. Hosts typically use this to bridge haptic
/// pulses and toasts onto platform facilities.
pub trait SchedulerPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
