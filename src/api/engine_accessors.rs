use chrono::{NaiveDate, NaiveTime};

use crate::core::time_axis::minute_of_day;
use crate::core::{Appointment, DayLayout, DayWindow, StatusFilter, TimeAxis, Viewport};
use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::{DragPhase, DragSession};
use crate::render::Renderer;

use super::{InvalidationTopic, RescheduleRequest, SchedulerEngine, Toast, ZoomBadge};

impl<R: Renderer> SchedulerEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Updates viewport dimensions used by hit testing and frame layout.
    pub fn set_viewport(&mut self, viewport: Viewport) -> SchedulerResult<()> {
        if !viewport.is_valid() {
            return Err(SchedulerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.model.viewport = viewport;
        self.invalidate_full();
        Ok(())
    }

    #[must_use]
    pub fn display_date(&self) -> NaiveDate {
        self.core.model.display_date
    }

    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.core.model.status_filter
    }

    #[must_use]
    pub fn day_window(&self) -> DayWindow {
        self.core.model.axis.window()
    }

    #[must_use]
    pub fn time_axis(&self) -> TimeAxis {
        self.core.model.axis
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.core.model.zoom.level()
    }

    /// Rubber-banded visual excess while a pinch is pushed past its limits.
    #[must_use]
    pub fn zoom_overshoot(&self) -> f64 {
        self.core.model.zoom.overshoot()
    }

    #[must_use]
    pub fn minute_height(&self) -> f64 {
        self.core.model.axis.minute_height()
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.core.model.axis.content_height()
    }

    /// Card text size at the current zoom, clamped into the readable band.
    #[must_use]
    pub fn card_font_px(&self) -> f64 {
        let style = self.core.style;
        (self.core.model.zoom.level() * style.card_font_base_px)
            .clamp(style.card_font_min_px, style.card_font_max_px)
    }

    /// Initial scroll offset hosts jump to when the day opens: 07:00, or the
    /// window edge when the day starts later.
    #[must_use]
    pub fn default_scroll_anchor_y(&self) -> f64 {
        let axis = self.core.model.axis;
        axis.minute_to_y(axis.window().clamp_minute(7.0 * 60.0))
    }

    /// Full appointment set for the day, sorted by `(start, id)`.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.core.model.appointments
    }

    /// Appointments admitted by the active status filter, in layout order.
    pub fn visible_appointments(&self) -> impl Iterator<Item = &Appointment> {
        let filter = self.core.model.status_filter;
        self.core
            .model
            .appointments
            .iter()
            .filter(move |appointment| filter.admits(appointment.status))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.core.model.layout.len()
    }

    #[must_use]
    pub fn layout(&self) -> &DayLayout {
        &self.core.model.layout
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.core.model.drag.phase()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.core.model.drag.session()
    }

    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.core.runtime.is_updating
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.core.runtime.scroll_locked
    }

    #[must_use]
    pub fn pending_reschedule(&self) -> Option<&RescheduleRequest> {
        self.core.runtime.pending_reschedule.as_ref()
    }

    #[must_use]
    pub fn active_toast(&self) -> Option<&Toast> {
        self.core.runtime.feedback.toast.as_ref()
    }

    #[must_use]
    pub fn zoom_badge(&self) -> Option<ZoomBadge> {
        self.core.runtime.feedback.zoom_badge
    }

    /// Drives the now marker. The marker is date-blind; hosts decide whether
    /// the displayed date counts as today before feeding a clock.
    pub fn set_wall_clock(&mut self, time_of_day: NaiveTime) {
        self.core.model.wall_clock = Some(time_of_day);
        self.invalidate_overlay(InvalidationTopic::NowMarker);
    }

    pub fn clear_wall_clock(&mut self) {
        if self.core.model.wall_clock.take().is_some() {
            self.invalidate_overlay(InvalidationTopic::NowMarker);
        }
    }

    #[must_use]
    pub fn wall_clock(&self) -> Option<NaiveTime> {
        self.core.model.wall_clock
    }

    /// Pixel offset of the now marker, or `None` when the clock is unset or
    /// outside the day window.
    #[must_use]
    pub fn now_marker_y(&self) -> Option<f64> {
        let time = self.core.model.wall_clock?;
        let minute = minute_of_day(time);
        let axis = self.core.model.axis;
        if !axis.window().contains_minute(minute) {
            return None;
        }
        Some(axis.minute_to_y(minute))
    }

    /// Topmost card under a content-space position, or `None` over the gutter
    /// and empty grid.
    #[must_use]
    pub fn appointment_at(&self, x: f64, y: f64) -> Option<&Appointment> {
        let gutter = self.core.style.time_gutter_width_px;
        let column_width = f64::from(self.core.model.viewport.width) - gutter;
        if x < gutter || column_width <= 0.0 {
            return None;
        }

        let minute = self.core.model.axis.y_to_minute(y);
        let entry = self.core.model.layout.card_at(minute, x - gutter, column_width)?;
        self.core
            .model
            .appointments
            .iter()
            .find(|appointment| appointment.id == entry.id)
    }

    /// Start minute of the empty booking slot under a content-space position.
    #[must_use]
    pub fn slot_minute_at(&self, x: f64, y: f64) -> Option<u32> {
        let gutter = self.core.style.time_gutter_width_px;
        if x < gutter {
            return None;
        }

        let axis = self.core.model.axis;
        let minute = axis.y_to_minute(y);
        let window = axis.window();
        if !window.contains_minute(minute) {
            return None;
        }

        let slot_len = self.core.behavior.snap.slot_minutes;
        let offset = minute as u32 - window.start_minute();
        Some(window.start_minute() + (offset / slot_len) * slot_len)
    }
}
