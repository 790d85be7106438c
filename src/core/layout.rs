use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::time_axis::minute_of_day;
use crate::core::types::{Appointment, AppointmentId};
use crate::error::{SchedulerError, SchedulerResult};

/// Tuning controls for overlap placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CascadeTuning {
    /// Percent of the card column each covering layer steps right and gives up.
    pub width_reduction_per_layer: f64,
    /// Floor below which cascaded cards stop shrinking.
    pub min_width_percent: f64,
    /// Pixel gutter between cards that split a same-start group.
    pub same_start_gap_px: f64,
}

impl Default for CascadeTuning {
    fn default() -> Self {
        Self {
            width_reduction_per_layer: 5.0,
            min_width_percent: 30.0,
            same_start_gap_px: 5.0,
        }
    }
}

impl CascadeTuning {
    pub(crate) fn validate(self) -> SchedulerResult<Self> {
        if !self.width_reduction_per_layer.is_finite() || self.width_reduction_per_layer < 0.0 {
            return Err(SchedulerError::InvalidData(
                "cascade width reduction must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_width_percent.is_finite()
            || self.min_width_percent <= 0.0
            || self.min_width_percent > 100.0
        {
            return Err(SchedulerError::InvalidData(
                "cascade min width must be within (0, 100]".to_owned(),
            ));
        }

        if !self.same_start_gap_px.is_finite() || self.same_start_gap_px < 0.0 {
            return Err(SchedulerError::InvalidData(
                "same-start gap must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Computed placement for one card.
///
/// Horizontal values are percentages of the card column; vertical values are
/// whole minutes of day, resolved to pixels by the time axis at paint time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: AppointmentId,
    pub start_minute: f64,
    pub end_minute: f64,
    /// Number of earlier-starting bookings still running at this one's start.
    pub layer: usize,
    pub width_percent: f64,
    pub left_offset_percent: f64,
    pub gap_px: f64,
    pub same_start_group: bool,
}

impl LayoutEntry {
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.end_minute - self.start_minute
    }

    /// Resolves the percent placement into `(left_px, width_px)` for a card
    /// column of `column_width` pixels. Same-start cards center the gutter by
    /// shifting half the gap right and giving up the full gap in width.
    #[must_use]
    pub fn resolve_x(&self, column_width: f64) -> (f64, f64) {
        let left = column_width * self.left_offset_percent / 100.0 + self.gap_px / 2.0;
        let width = (column_width * self.width_percent / 100.0 - self.gap_px).max(0.0);
        (left, width)
    }
}

/// Placement of every visible card for one day, keyed by appointment id.
///
/// Iteration order is `(start, id)` ascending and doubles as paint order, so
/// deeper cascade layers draw above the cards they cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    entries: IndexMap<AppointmentId, LayoutEntry>,
}

impl DayLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &AppointmentId) -> Option<&LayoutEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn max_layer(&self) -> usize {
        self.entries
            .values()
            .map(|entry| entry.layer)
            .max()
            .unwrap_or(0)
    }

    /// Topmost card under a `(minute, x)` position, honoring paint order.
    #[must_use]
    pub fn card_at(&self, minute: f64, x_px: f64, column_width: f64) -> Option<&LayoutEntry> {
        self.entries.values().rev().find(|entry| {
            if minute < entry.start_minute || minute >= entry.end_minute {
                return false;
            }
            let (left, width) = entry.resolve_x(column_width);
            x_px >= left && x_px < left + width
        })
    }
}

/// Lays out one day of (already filtered) appointments.
///
/// Bookings that start at the exact same minute split the column evenly with
/// a small gutter; everything else cascades, stepping right and shrinking one
/// notch per booking already running when it starts.
pub fn layout_day(appointments: &[Appointment], tuning: CascadeTuning) -> SchedulerResult<DayLayout> {
    let tuning = tuning.validate()?;

    for appointment in appointments {
        appointment.validate()?;
    }

    // Whole minutes of day; seconds are dropped so same-start grouping
    // compares exactly.
    let mut order: Vec<(i64, i64, &Appointment)> = appointments
        .iter()
        .map(|appointment| {
            let start = minute_of_day(appointment.start_time.time()).floor() as i64;
            let end = start + appointment.duration_minutes();
            (start, end, appointment)
        })
        .collect();
    order.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.id.cmp(&b.2.id)));

    let mut entries = IndexMap::with_capacity(order.len());
    for (index, &(start, end, appointment)) in order.iter().enumerate() {
        // Earlier-starting bookings still running when this one begins.
        let layer = order
            .iter()
            .filter(|other| other.0 < start && other.1 > start)
            .count();

        let group: SmallVec<[usize; 4]> = order
            .iter()
            .enumerate()
            .filter(|(_, other)| other.0 == start)
            .map(|(other_index, _)| other_index)
            .collect();

        let entry = if group.len() > 1 {
            let position = group
                .iter()
                .position(|&other_index| other_index == index)
                .unwrap_or(0);
            let width_percent = 100.0 / group.len() as f64;

            LayoutEntry {
                id: appointment.id.clone(),
                start_minute: start as f64,
                end_minute: end as f64,
                layer,
                width_percent,
                left_offset_percent: width_percent * position as f64,
                gap_px: tuning.same_start_gap_px,
                same_start_group: true,
            }
        } else {
            let reduction = layer as f64 * tuning.width_reduction_per_layer;

            LayoutEntry {
                id: appointment.id.clone(),
                start_minute: start as f64,
                end_minute: end as f64,
                layer,
                width_percent: (100.0 - reduction).max(tuning.min_width_percent),
                left_offset_percent: reduction,
                gap_px: 0.0,
                same_start_group: false,
            }
        };

        if entries.insert(appointment.id.clone(), entry).is_some() {
            return Err(SchedulerError::InvalidData(format!(
                "duplicate appointment id: {}",
                appointment.id
            )));
        }
    }

    Ok(DayLayout { entries })
}
