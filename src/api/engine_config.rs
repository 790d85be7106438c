use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{CascadeTuning, DayWindow, StatusFilter, Viewport};
use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::{LongPressTuning, PinchZoomConfig};

use super::{FeedbackBehavior, GestureInputBehavior, SnapBehavior};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load grid setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerEngineConfig {
    pub viewport: Viewport,
    pub display_date: NaiveDate,
    #[serde(default)]
    pub window: DayWindow,
    #[serde(default = "default_base_minute_height")]
    pub base_minute_height: f64,
    #[serde(default)]
    pub status_filter: StatusFilter,
    #[serde(default)]
    pub long_press: LongPressTuning,
    #[serde(default)]
    pub snap: SnapBehavior,
    #[serde(default)]
    pub zoom: PinchZoomConfig,
    #[serde(default)]
    pub cascade: CascadeTuning,
    #[serde(default)]
    pub feedback: FeedbackBehavior,
    #[serde(default)]
    pub gesture_input: GestureInputBehavior,
}

fn default_base_minute_height() -> f64 {
    1.5
}

impl SchedulerEngineConfig {
    /// Creates a minimal config with the standard grooming-day defaults.
    #[must_use]
    pub fn new(viewport: Viewport, display_date: NaiveDate) -> Self {
        Self {
            viewport,
            display_date,
            window: DayWindow::default(),
            base_minute_height: default_base_minute_height(),
            status_filter: StatusFilter::default(),
            long_press: LongPressTuning::default(),
            snap: SnapBehavior::default(),
            zoom: PinchZoomConfig::default(),
            cascade: CascadeTuning::default(),
            feedback: FeedbackBehavior::default(),
            gesture_input: GestureInputBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: DayWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_base_minute_height(mut self, base_minute_height: f64) -> Self {
        self.base_minute_height = base_minute_height;
        self
    }

    #[must_use]
    pub fn with_status_filter(mut self, status_filter: StatusFilter) -> Self {
        self.status_filter = status_filter;
        self
    }

    #[must_use]
    pub fn with_long_press(mut self, long_press: LongPressTuning) -> Self {
        self.long_press = long_press;
        self
    }

    #[must_use]
    pub fn with_snap(mut self, snap: SnapBehavior) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: PinchZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_cascade(mut self, cascade: CascadeTuning) -> Self {
        self.cascade = cascade;
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: FeedbackBehavior) -> Self {
        self.feedback = feedback;
        self
    }

    #[must_use]
    pub fn with_gesture_input(mut self, gesture_input: GestureInputBehavior) -> Self {
        self.gesture_input = gesture_input;
        self
    }

    pub fn to_json_pretty(&self) -> SchedulerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SchedulerError::InvalidData(format!("config serialization: {err}")))
    }

    pub fn from_json_str(json: &str) -> SchedulerResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| SchedulerError::InvalidData(format!("config deserialization: {err}")))
    }
}
