use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::{Appointment, StatusFilter, layout_day};
use crate::error::{SchedulerError, SchedulerResult};
use crate::render::Renderer;

use super::{InvalidationTopic, PluginEvent, SchedulerEngine};

impl<R: Renderer> SchedulerEngine<R> {
    /// Replaces the full appointment set for the displayed day.
    ///
    /// Bookings are validated and canonicalized to `(start, id)` order; the
    /// overlap layout is rebuilt for the active status filter. A drag whose
    /// card disappeared in the swap is aborted.
    pub fn set_appointments(&mut self, appointments: Vec<Appointment>) -> SchedulerResult<()> {
        let original_count = appointments.len();
        let appointments = canonicalize_appointments(appointments)?;
        debug!(count = original_count, "set appointments");

        self.core.model.appointments = appointments;
        self.relayout()?;
        self.abort_drag_if_target_missing();

        let visible_len = self.core.model.layout.len();
        let total_len = self.core.model.appointments.len();
        self.emit_plugin_event(PluginEvent::AppointmentsUpdated {
            visible_len,
            total_len,
        });
        self.invalidate_layout();
        Ok(())
    }

    /// Switches the displayed day.
    ///
    /// Zoom returns to 100% and any in-flight drag is dropped; the caller is
    /// expected to follow up with `set_appointments` for the new date.
    pub fn set_display_date(&mut self, date: NaiveDate) -> SchedulerResult<()> {
        if date == self.core.model.display_date {
            return Ok(());
        }

        self.abort_engaged_drag();
        self.core.model.display_date = date;
        self.core.model.zoom.reset();
        let level = self.core.model.zoom.level();
        self.core.model.axis.set_zoom(level)?;

        debug!(%date, "display date changed");
        self.emit_plugin_event(PluginEvent::DisplayDateChanged { date });
        self.invalidate_full();
        Ok(())
    }

    /// Narrows or widens which statuses show on the grid.
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) -> SchedulerResult<()> {
        if status_filter == self.core.model.status_filter {
            return Ok(());
        }

        self.core.model.status_filter = status_filter;
        self.relayout()?;
        self.abort_drag_if_target_missing();

        let visible_len = self.core.model.layout.len();
        let total_len = self.core.model.appointments.len();
        self.emit_plugin_event(PluginEvent::AppointmentsUpdated {
            visible_len,
            total_len,
        });
        self.invalidate_layout();
        Ok(())
    }

    pub(super) fn relayout(&mut self) -> SchedulerResult<()> {
        let filter = self.core.model.status_filter;
        let visible: Vec<Appointment> = self
            .core
            .model
            .appointments
            .iter()
            .filter(|appointment| filter.admits(appointment.status))
            .cloned()
            .collect();
        self.core.model.layout = layout_day(&visible, self.core.behavior.cascade)?;
        Ok(())
    }

    /// Drops the drag gesture when its card fell out of the visible set.
    fn abort_drag_if_target_missing(&mut self) {
        let Some(appointment_id) = self
            .core
            .model
            .drag
            .session()
            .map(|session| session.appointment_id.clone())
        else {
            return;
        };

        if self.core.model.layout.get(&appointment_id).is_some() {
            return;
        }

        warn!(appointment_id = %appointment_id, "drag target disappeared, aborting gesture");
        self.core.model.drag.cancel();
        self.core.runtime.scroll_locked = false;
        self.emit_plugin_event(PluginEvent::DragAborted { appointment_id });
        self.invalidate_overlay(InvalidationTopic::Drag);
    }

    fn abort_engaged_drag(&mut self) {
        let Some(appointment_id) = self
            .core
            .model
            .drag
            .session()
            .map(|session| session.appointment_id.clone())
        else {
            return;
        };

        self.core.model.drag.cancel();
        self.core.runtime.scroll_locked = false;
        self.core.runtime.pending_tap = None;
        self.emit_plugin_event(PluginEvent::DragAborted { appointment_id });
        self.invalidate_overlay(InvalidationTopic::Drag);
    }
}

fn canonicalize_appointments(
    mut appointments: Vec<Appointment>,
) -> SchedulerResult<Vec<Appointment>> {
    for appointment in &appointments {
        appointment.validate()?;
    }

    appointments.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut ids: Vec<_> = appointments
        .iter()
        .map(|appointment| &appointment.id)
        .collect();
    ids.sort();
    for pair in ids.windows(2) {
        if pair[0] == pair[1] {
            return Err(SchedulerError::InvalidData(format!(
                "duplicate appointment id: {}",
                pair[0]
            )));
        }
    }

    Ok(appointments)
}
