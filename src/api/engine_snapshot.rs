use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::{Appointment, LayoutEntry, StatusFilter, Viewport};
use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::{DragPhase, DragSession};
use crate::render::Renderer;

use super::{RescheduleRequest, SchedulerEngine, Toast, ZoomBadge};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub display_date: NaiveDate,
    pub window_start_minute: u32,
    pub window_end_minute: u32,
    pub zoom_level: f64,
    pub content_height: f64,
    pub status_filter: StatusFilter,
    pub appointments: Vec<Appointment>,
    /// Placement entries in paint order.
    pub layout: Vec<LayoutEntry>,
    pub drag_phase: DragPhase,
    pub drag_session: Option<DragSession>,
    pub pending_reschedule: Option<RescheduleRequest>,
    pub is_updating: bool,
    pub wall_clock: Option<NaiveTime>,
    pub toast: Option<Toast>,
    pub zoom_badge: Option<ZoomBadge>,
}

impl<R: Renderer> SchedulerEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let window = self.core.model.axis.window();
        EngineSnapshot {
            viewport: self.core.model.viewport,
            display_date: self.core.model.display_date,
            window_start_minute: window.start_minute(),
            window_end_minute: window.end_minute(),
            zoom_level: self.core.model.zoom.level(),
            content_height: self.core.model.axis.content_height(),
            status_filter: self.core.model.status_filter,
            appointments: self.core.model.appointments.clone(),
            layout: self.core.model.layout.entries().cloned().collect(),
            drag_phase: self.core.model.drag.phase(),
            drag_session: self.core.model.drag.session().cloned(),
            pending_reschedule: self.core.runtime.pending_reschedule.clone(),
            is_updating: self.core.runtime.is_updating,
            wall_clock: self.core.model.wall_clock,
            toast: self.core.runtime.feedback.toast.clone(),
            zoom_badge: self.core.runtime.feedback.zoom_badge,
        }
    }

    pub fn snapshot_json_pretty(&self) -> SchedulerResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| SchedulerError::InvalidData(format!("snapshot serialization: {err}")))
    }
}
