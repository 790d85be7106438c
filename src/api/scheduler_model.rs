use chrono::{NaiveDate, NaiveTime};

use crate::core::{Appointment, DayLayout, StatusFilter, TimeAxis, Viewport};
use crate::interaction::{DragTracker, PinchZoom};

/// Core day-grid domain state.
///
/// This struct intentionally groups the mutable scheduling state (axis,
/// bookings, placement, gesture trackers) so the engine facade can stay a thin
/// coordination layer over it.
pub struct SchedulerModel {
    pub(super) viewport: Viewport,
    pub(super) display_date: NaiveDate,
    pub(super) axis: TimeAxis,
    pub(super) appointments: Vec<Appointment>,
    pub(super) layout: DayLayout,
    pub(super) status_filter: StatusFilter,
    pub(super) drag: DragTracker,
    pub(super) zoom: PinchZoom,
    /// Time of day driving the now marker; `None` keeps the marker hidden.
    pub(super) wall_clock: Option<NaiveTime>,
}

pub struct SchedulerModelBootstrap {
    pub viewport: Viewport,
    pub display_date: NaiveDate,
    pub axis: TimeAxis,
    pub status_filter: StatusFilter,
    pub drag: DragTracker,
    pub zoom: PinchZoom,
}

impl SchedulerModel {
    #[must_use]
    pub fn new(bootstrap: SchedulerModelBootstrap) -> Self {
        Self {
            viewport: bootstrap.viewport,
            display_date: bootstrap.display_date,
            axis: bootstrap.axis,
            appointments: Vec::new(),
            layout: DayLayout::default(),
            status_filter: bootstrap.status_filter,
            drag: bootstrap.drag,
            zoom: bootstrap.zoom,
            wall_clock: None,
        }
    }
}
