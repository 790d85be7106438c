use crate::error::{SchedulerError, SchedulerResult};
use crate::render::Color;

/// Style contract for the day-grid frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub background_color: Color,
    pub hour_line_color: Color,
    pub quarter_line_color: Color,
    pub hour_line_width: f64,
    pub quarter_line_width: f64,
    pub hour_label_color: Color,
    pub hour_label_font_px: f64,
    /// Hour-label gutter on the left edge; cards occupy the rest.
    pub time_gutter_width_px: f64,
    pub card_fill_color: Color,
    pub card_corner_radius_px: f64,
    pub card_title_color: Color,
    pub card_time_color: Color,
    pub card_service_color: Color,
    pub paid_tag_color: Color,
    /// Card text size at 100% zoom; the applied size tracks zoom inside the
    /// min/max clamp below.
    pub card_font_base_px: f64,
    pub card_font_min_px: f64,
    pub card_font_max_px: f64,
    /// Opacity of the stationary card while its ghost is being dragged.
    pub drag_source_alpha: f64,
    pub drag_ghost_alpha: f64,
    pub drag_badge_color: Color,
    pub drag_badge_text_color: Color,
    pub drag_badge_font_px: f64,
    /// Gap between the ghost top edge and its time badge.
    pub drag_badge_offset_px: f64,
    pub now_line_color: Color,
    pub now_line_width: f64,
    pub now_dot_radius_px: f64,
    pub zoom_badge_fill_color: Color,
    pub zoom_badge_text_color: Color,
    pub zoom_badge_font_px: f64,
    pub toast_success_color: Color,
    pub toast_error_color: Color,
    pub toast_warning_color: Color,
    pub toast_text_color: Color,
    pub toast_font_px: f64,
    pub saving_veil_color: Color,
    pub saving_text_color: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            hour_line_color: Color::rgb(0.90, 0.91, 0.92),
            quarter_line_color: Color::rgb(0.95, 0.96, 0.96),
            hour_line_width: 1.0,
            quarter_line_width: 1.0,
            hour_label_color: Color::rgb(0.42, 0.45, 0.50),
            hour_label_font_px: 12.0,
            time_gutter_width_px: 64.0,
            card_fill_color: Color::rgb(0.91, 0.84, 1.0),
            card_corner_radius_px: 8.0,
            card_title_color: Color::rgb(0.07, 0.09, 0.15),
            card_time_color: Color::rgb(0.58, 0.20, 0.92),
            card_service_color: Color::rgb(0.22, 0.25, 0.32),
            paid_tag_color: Color::rgb(0.09, 0.64, 0.29),
            card_font_base_px: 12.8,
            card_font_min_px: 11.2,
            card_font_max_px: 16.0,
            drag_source_alpha: 0.4,
            drag_ghost_alpha: 0.85,
            drag_badge_color: Color::rgb(0.58, 0.20, 0.92),
            drag_badge_text_color: Color::rgb(1.0, 1.0, 1.0),
            drag_badge_font_px: 11.0,
            drag_badge_offset_px: 22.0,
            now_line_color: Color::rgb(0.94, 0.27, 0.27),
            now_line_width: 2.0,
            now_dot_radius_px: 4.0,
            zoom_badge_fill_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            zoom_badge_text_color: Color::rgb(1.0, 1.0, 1.0),
            zoom_badge_font_px: 12.0,
            toast_success_color: Color::rgb(0.09, 0.64, 0.29),
            toast_error_color: Color::rgb(0.86, 0.15, 0.15),
            toast_warning_color: Color::rgb(0.98, 0.45, 0.09),
            toast_text_color: Color::rgb(1.0, 1.0, 1.0),
            toast_font_px: 13.0,
            saving_veil_color: Color::rgba(1.0, 1.0, 1.0, 0.7),
            saving_text_color: Color::rgb(0.22, 0.25, 0.32),
        }
    }
}

impl GridStyle {
    pub fn validate(self) -> SchedulerResult<()> {
        for color in [
            self.background_color,
            self.hour_line_color,
            self.quarter_line_color,
            self.hour_label_color,
            self.card_fill_color,
            self.card_title_color,
            self.card_time_color,
            self.card_service_color,
            self.paid_tag_color,
            self.drag_badge_color,
            self.drag_badge_text_color,
            self.now_line_color,
            self.zoom_badge_fill_color,
            self.zoom_badge_text_color,
            self.toast_success_color,
            self.toast_error_color,
            self.toast_warning_color,
            self.toast_text_color,
            self.saving_veil_color,
            self.saving_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("hour line width", self.hour_line_width),
            ("quarter line width", self.quarter_line_width),
            ("hour label font size", self.hour_label_font_px),
            ("card font base size", self.card_font_base_px),
            ("card font min size", self.card_font_min_px),
            ("card font max size", self.card_font_max_px),
            ("drag badge font size", self.drag_badge_font_px),
            ("now line width", self.now_line_width),
            ("zoom badge font size", self.zoom_badge_font_px),
            ("toast font size", self.toast_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SchedulerError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("time gutter width", self.time_gutter_width_px),
            ("card corner radius", self.card_corner_radius_px),
            ("drag badge offset", self.drag_badge_offset_px),
            ("now dot radius", self.now_dot_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SchedulerError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("drag source alpha", self.drag_source_alpha),
            ("drag ghost alpha", self.drag_ghost_alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SchedulerError::InvalidData(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }

        if self.card_font_min_px > self.card_font_max_px {
            return Err(SchedulerError::InvalidData(
                "card font min size must not exceed max size".to_owned(),
            ));
        }

        Ok(())
    }
}
