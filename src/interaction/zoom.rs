use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

/// Tuning for pinch density zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchZoomConfig {
    pub min_level: f64,
    pub max_level: f64,
    /// Fraction of out-of-range excess that shows through as visual stretch
    /// while the fingers are still down.
    pub rubber_band: f64,
}

impl Default for PinchZoomConfig {
    fn default() -> Self {
        Self {
            min_level: 0.5,
            max_level: 2.5,
            rubber_band: 0.15,
        }
    }
}

/// One pinch in flight: where it started and where the raw (unclamped)
/// gesture scale currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchGesture {
    pub start_level: f64,
    pub raw_level: f64,
}

/// Pinch zoom bookkeeping.
///
/// The applied level is hard-clamped into the configured range on every
/// update; pushing past a limit only shows up as rubber-banded overshoot,
/// which disappears the moment the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchZoom {
    config: PinchZoomConfig,
    level: f64,
    gesture: Option<PinchGesture>,
}

impl Default for PinchZoom {
    fn default() -> Self {
        Self {
            config: PinchZoomConfig::default(),
            level: 1.0,
            gesture: None,
        }
    }
}

impl PinchZoom {
    #[must_use]
    pub fn level(self) -> f64 {
        self.level
    }

    #[must_use]
    pub fn config(self) -> PinchZoomConfig {
        self.config
    }

    /// Swaps tuning and re-clamps the applied level into the new range.
    pub fn set_config(&mut self, config: PinchZoomConfig) -> SchedulerResult<()> {
        if !config.min_level.is_finite()
            || !config.max_level.is_finite()
            || config.min_level <= 0.0
            || config.max_level < config.min_level
        {
            return Err(SchedulerError::InvalidData(
                "zoom limits must be finite and satisfy 0 < min <= max".to_owned(),
            ));
        }

        if !config.rubber_band.is_finite() || !(0.0..=1.0).contains(&config.rubber_band) {
            return Err(SchedulerError::InvalidData(
                "zoom rubber band must be within [0, 1]".to_owned(),
            ));
        }

        self.config = config;
        self.level = self.level.clamp(config.min_level, config.max_level);
        Ok(())
    }

    #[must_use]
    pub fn is_pinching(self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn gesture(self) -> Option<PinchGesture> {
        self.gesture
    }

    pub fn begin(&mut self) {
        self.gesture = Some(PinchGesture {
            start_level: self.level,
            raw_level: self.level,
        });
    }

    /// Applies a cumulative scale factor relative to the gesture start.
    ///
    /// Begins a gesture implicitly when the host never sent an explicit
    /// begin. Returns the clamped applied level.
    pub fn update(&mut self, scale_factor: f64) -> SchedulerResult<f64> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(SchedulerError::InvalidData(
                "pinch scale factor must be finite and > 0".to_owned(),
            ));
        }

        if self.gesture.is_none() {
            self.begin();
        }

        if let Some(gesture) = self.gesture.as_mut() {
            gesture.raw_level = gesture.start_level * scale_factor;
            self.level = gesture
                .raw_level
                .clamp(self.config.min_level, self.config.max_level);
        }

        Ok(self.level)
    }

    /// Ends the gesture; the applied level is already inside the limits, so
    /// settling just drops the overshoot.
    pub fn end(&mut self) -> f64 {
        self.gesture = None;
        self.level
    }

    /// Rubber-banded visual excess beyond the limits; zero when settled or
    /// inside the range. Negative when squeezing below the minimum.
    #[must_use]
    pub fn overshoot(self) -> f64 {
        let Some(gesture) = self.gesture else {
            return 0.0;
        };

        if gesture.raw_level > self.config.max_level {
            (gesture.raw_level - self.config.max_level) * self.config.rubber_band
        } else if gesture.raw_level < self.config.min_level {
            (gesture.raw_level - self.config.min_level) * self.config.rubber_band
        } else {
            0.0
        }
    }

    /// Programmatic level change, clamped into the limits.
    pub fn set_level(&mut self, level: f64) -> SchedulerResult<()> {
        if !level.is_finite() || level <= 0.0 {
            return Err(SchedulerError::InvalidData(
                "zoom level must be finite and > 0".to_owned(),
            ));
        }

        self.level = level.clamp(self.config.min_level, self.config.max_level);
        Ok(())
    }

    /// Back to 100%, dropping any gesture. Runs on every date change.
    pub fn reset(&mut self) {
        self.gesture = None;
        self.level = 1.0_f64.clamp(self.config.min_level, self.config.max_level);
    }
}
