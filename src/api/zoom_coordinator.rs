use tracing::trace;

use crate::error::SchedulerResult;
use crate::render::Renderer;

use super::drag_coordinator::ensure_finite;
use super::{InvalidationLevel, InvalidationTopic, InvalidationTopics, PluginEvent, SchedulerEngine};

impl<R: Renderer> SchedulerEngine<R> {
    /// Marks the start of a two-finger pinch.
    pub fn pinch_begin(&mut self) {
        if !self.allows_pinch() {
            return;
        }
        self.core.model.zoom.begin();
    }

    /// Applies a cumulative pinch scale factor relative to the gesture start.
    ///
    /// Returns the applied (clamped) zoom level. Pinches are shed while a
    /// drag gesture owns the pointer so one finger cannot feed both machines.
    pub fn pinch_update(&mut self, scale_factor: f64, at_ms: f64) -> SchedulerResult<f64> {
        ensure_finite(at_ms, "pinch timestamp")?;

        if !self.allows_pinch() {
            trace!("pinch update ignored");
            return Ok(self.core.model.zoom.level());
        }

        let previous = self.core.model.zoom.level();
        let level = self.core.model.zoom.update(scale_factor)?;
        self.core.model.axis.set_zoom(level)?;
        self.show_zoom_badge(level, at_ms);

        if (level - previous).abs() > f64::EPSILON {
            trace!(level, "pinch zoom level applied");
            self.emit_plugin_event(PluginEvent::ZoomChanged { level });
            self.invalidate_with_detail(
                InvalidationLevel::Full,
                InvalidationTopics::from_topic(InvalidationTopic::Zoom),
            );
        } else {
            // Level pinned at a limit; only the badge deadline moved.
            self.invalidate_overlay(InvalidationTopic::Feedback);
        }

        Ok(level)
    }

    /// Settles the pinch; rubber-banded overshoot snaps back here.
    pub fn pinch_end(&mut self) -> f64 {
        let had_overshoot = self.core.model.zoom.overshoot() != 0.0;
        let level = self.core.model.zoom.end();
        if had_overshoot {
            self.invalidate_overlay(InvalidationTopic::Zoom);
        }
        level
    }

    /// Programmatic zoom change, clamped into the configured limits. Shows no
    /// percent badge.
    pub fn set_zoom_level(&mut self, level: f64) -> SchedulerResult<()> {
        let previous = self.core.model.zoom.level();
        self.core.model.zoom.set_level(level)?;
        let applied = self.core.model.zoom.level();
        self.core.model.axis.set_zoom(applied)?;

        if (applied - previous).abs() > f64::EPSILON {
            self.emit_plugin_event(PluginEvent::ZoomChanged { level: applied });
            self.invalidate_with_detail(
                InvalidationLevel::Full,
                InvalidationTopics::from_topic(InvalidationTopic::Zoom),
            );
        }
        Ok(())
    }

    fn allows_pinch(&self) -> bool {
        self.core.behavior.gesture_input.allows_pinch_zoom() && !self.core.model.drag.is_engaged()
    }

    fn show_zoom_badge(&mut self, level: f64, at_ms: f64) {
        let percent = (level * 100.0).round() as u32;
        let expires_at_ms = at_ms + self.core.behavior.feedback.zoom_badge_duration_ms;
        self.core
            .runtime
            .feedback
            .show_zoom_badge(percent, expires_at_ms);
    }
}
