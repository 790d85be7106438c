use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Visible slice of the working day, in whole minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    start_minute: u32,
    end_minute: u32,
}

impl Default for DayWindow {
    /// Grooming day runs 06:00 to 20:00.
    fn default() -> Self {
        Self {
            start_minute: 6 * 60,
            end_minute: 20 * 60,
        }
    }
}

impl DayWindow {
    pub fn new(start_minute: u32, end_minute: u32) -> SchedulerResult<Self> {
        if end_minute <= start_minute || end_minute > MINUTES_PER_DAY {
            return Err(SchedulerError::InvalidData(
                "day window must satisfy start < end <= 24h".to_owned(),
            ));
        }

        Ok(Self {
            start_minute,
            end_minute,
        })
    }

    pub fn from_hours(start_hour: u32, end_hour: u32) -> SchedulerResult<Self> {
        Self::new(start_hour * 60, end_hour * 60)
    }

    #[must_use]
    pub fn start_minute(self) -> u32 {
        self.start_minute
    }

    #[must_use]
    pub fn end_minute(self) -> u32 {
        self.end_minute
    }

    #[must_use]
    pub fn span_minutes(self) -> u32 {
        self.end_minute - self.start_minute
    }

    #[must_use]
    pub fn contains_minute(self, minute: f64) -> bool {
        minute >= f64::from(self.start_minute) && minute < f64::from(self.end_minute)
    }

    #[must_use]
    pub fn clamp_minute(self, minute: f64) -> f64 {
        minute.clamp(f64::from(self.start_minute), f64::from(self.end_minute))
    }

    /// Start minutes of the hour rows inside the window, ascending.
    ///
    /// The closing bound is exclusive: a 06:00..20:00 window labels 6 AM
    /// through 7 PM.
    #[must_use]
    pub fn hour_row_minutes(self) -> Vec<u32> {
        let first_hour = self.start_minute.div_ceil(60);
        (first_hour..)
            .map(|hour| hour * 60)
            .take_while(|&minute| minute < self.end_minute)
            .collect()
    }

    /// Start minutes of the tappable booking slots, ascending.
    #[must_use]
    pub fn slot_minutes(self, slot_minutes: u32) -> Vec<u32> {
        if slot_minutes == 0 {
            return Vec::new();
        }

        (self.start_minute..self.end_minute)
            .step_by(slot_minutes as usize)
            .collect()
    }
}

/// Vertical time axis: maps wall-clock minutes to canvas pixels under the
/// current zoom density.
///
/// Zoom changes vertical spacing only; nothing is scaled as a bitmap, the
/// grid is simply re-laid-out at a different pixels-per-minute density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    window: DayWindow,
    base_minute_height: f64,
    zoom: f64,
}

impl TimeAxis {
    /// Creates an axis at 100% zoom.
    pub fn new(window: DayWindow, base_minute_height: f64) -> SchedulerResult<Self> {
        if !base_minute_height.is_finite() || base_minute_height <= 0.0 {
            return Err(SchedulerError::InvalidData(
                "base minute height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            window,
            base_minute_height,
            zoom: 1.0,
        })
    }

    #[must_use]
    pub fn window(self) -> DayWindow {
        self.window
    }

    #[must_use]
    pub fn base_minute_height(self) -> f64 {
        self.base_minute_height
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) -> SchedulerResult<()> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SchedulerError::InvalidData(
                "zoom level must be finite and > 0".to_owned(),
            ));
        }

        self.zoom = zoom;
        Ok(())
    }

    #[must_use]
    pub fn minute_height(self) -> f64 {
        self.base_minute_height * self.zoom
    }

    /// Full canvas height of the day content at the current density.
    #[must_use]
    pub fn content_height(self) -> f64 {
        f64::from(self.window.span_minutes()) * self.minute_height()
    }

    /// Linear minute-to-pixel mapping; out-of-window minutes extrapolate.
    #[must_use]
    pub fn minute_to_y(self, minute: f64) -> f64 {
        (minute - f64::from(self.window.start_minute())) * self.minute_height()
    }

    #[must_use]
    pub fn y_to_minute(self, y: f64) -> f64 {
        f64::from(self.window.start_minute()) + y / self.minute_height()
    }

    #[must_use]
    pub fn time_to_y(self, time: NaiveTime) -> f64 {
        self.minute_to_y(minute_of_day(time))
    }

    /// Rounds to the nearest multiple of `step_minutes`, then clamps into the
    /// window. Rounding first keeps the familiar quarter-hour feel even when
    /// the raw position sits just outside the day.
    pub fn snap_minute(self, minute: f64, step_minutes: u32) -> SchedulerResult<f64> {
        if step_minutes == 0 {
            return Err(SchedulerError::InvalidData(
                "snap step must be > 0 minutes".to_owned(),
            ));
        }

        if !minute.is_finite() {
            return Err(SchedulerError::InvalidData(
                "minute must be finite".to_owned(),
            ));
        }

        let step = f64::from(step_minutes);
        let snapped = (minute / step).round() * step;
        Ok(self.window.clamp_minute(snapped))
    }

    /// Clamps a candidate start so the whole duration stays inside the window.
    #[must_use]
    pub fn clamp_start_for_duration(self, start_minute: f64, duration_minutes: f64) -> f64 {
        let earliest = f64::from(self.window.start_minute());
        let latest = (f64::from(self.window.end_minute()) - duration_minutes.max(0.0))
            .max(earliest);
        start_minute.clamp(earliest, latest)
    }
}

/// Minutes elapsed since midnight, with a fractional part for seconds.
#[must_use]
pub fn minute_of_day(time: NaiveTime) -> f64 {
    f64::from(time.hour() * 60 + time.minute()) + f64::from(time.second()) / 60.0
}

/// Converts a minute of day back into a wall-clock time, rounding to whole
/// minutes and clamping into `[00:00, 24:00)`.
#[must_use]
pub fn minute_to_time(minute: f64) -> NaiveTime {
    let upper = f64::from(MINUTES_PER_DAY - 1);
    let total = minute.round().clamp(0.0, upper) as u32;
    NaiveTime::from_hms_opt(total / 60, total % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// "6 AM" style label used in the hour gutter.
#[must_use]
pub fn format_hour_label(minute_of_day: u32) -> String {
    let (display, suffix) = hour_12((minute_of_day / 60) % 24);
    format!("{display} {suffix}")
}

/// "9:45 AM" style label used on cards and the drag time badge.
#[must_use]
pub fn format_clock_label(time: NaiveTime) -> String {
    let (display, suffix) = hour_12(time.hour());
    format!("{display}:{:02} {suffix}", time.minute())
}

fn hour_12(hour: u32) -> (u32, &'static str) {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    (display, suffix)
}
