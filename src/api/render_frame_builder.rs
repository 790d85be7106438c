use crate::core::time_axis::{format_clock_label, format_hour_label};
use crate::core::{Appointment, PaymentStatus, ToastKind};
use crate::error::SchedulerResult;
use crate::render::{
    Color, GridFrame, LinePrimitive, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::SchedulerEngine;

/// Per-character width factor used to size badge and toast boxes without a
/// real text measurer.
const TEXT_WIDTH_FACTOR: f64 = 0.6;

const SAVING_LABEL: &str = "Rescheduling...";

fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * TEXT_WIDTH_FACTOR
}

/// Resolved pixel box of one card, gutter offset already applied.
#[derive(Debug, Clone, Copy)]
struct CardBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl<R: Renderer> SchedulerEngine<R> {
    /// Materializes the full day-grid scene for the current state.
    ///
    /// Coordinates are content-space: y zero at the window start, extending
    /// to `content_height` regardless of how the host scrolls the viewport.
    pub fn build_frame(&self) -> SchedulerResult<GridFrame> {
        let mut frame = GridFrame::new(self.core.model.viewport);

        self.push_scaffold(&mut frame);
        self.push_cards(&mut frame);
        self.push_drag_overlay(&mut frame);
        self.push_now_marker(&mut frame);
        self.push_feedback(&mut frame);

        Ok(frame)
    }

    /// Background, hour/quarter rules, and the gutter hour labels.
    fn push_scaffold(&self, frame: &mut GridFrame) {
        let style = self.core.style;
        let axis = self.core.model.axis;
        let window = axis.window();
        let width = f64::from(self.core.model.viewport.width);
        let gutter = style.time_gutter_width_px;

        frame.rects.push(RectPrimitive::new(
            0.0,
            0.0,
            width,
            axis.content_height(),
            style.background_color,
        ));

        for minute in window.hour_row_minutes() {
            let y = axis.minute_to_y(f64::from(minute));
            frame.lines.push(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.hour_line_width,
                style.hour_line_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_hour_label(minute),
                gutter - 8.0,
                y + 4.0,
                style.hour_label_font_px,
                style.hour_label_color,
                TextHAlign::Right,
            ));
        }

        // Quarter rules start after the gutter so the labels stay clear.
        let mut minute = window.start_minute().next_multiple_of(15);
        while minute < window.end_minute() {
            if minute % 60 != 0 {
                let y = axis.minute_to_y(f64::from(minute));
                frame.lines.push(LinePrimitive::new(
                    gutter,
                    y,
                    width,
                    y,
                    style.quarter_line_width,
                    style.quarter_line_color,
                ));
            }
            minute += 15;
        }
    }

    fn push_cards(&self, frame: &mut GridFrame) {
        let style = self.core.style;
        let axis = self.core.model.axis;
        let gutter = style.time_gutter_width_px;
        let column_width = f64::from(self.core.model.viewport.width) - gutter;
        if column_width <= 0.0 {
            return;
        }

        let dragged_id = self
            .core
            .model
            .drag
            .session()
            .filter(|_| self.core.model.drag.is_dragging())
            .map(|session| session.appointment_id.clone());
        let font = self.card_font_px();

        for entry in self.core.model.layout.entries() {
            let Some(appointment) = self
                .core
                .model
                .appointments
                .iter()
                .find(|appointment| appointment.id == entry.id)
            else {
                continue;
            };

            let (left_in_column, card_width) = entry.resolve_x(column_width);
            let card_box = CardBox {
                left: gutter + left_in_column,
                top: axis.minute_to_y(entry.start_minute),
                width: card_width,
                height: entry.duration_minutes() * axis.minute_height(),
            };

            // The stationary card fades while its ghost is carried around.
            let dimmed = dragged_id.as_ref() == Some(&entry.id);
            let alpha = if dimmed { style.drag_source_alpha } else { 1.0 };
            let fill = card_fill(appointment, style.card_fill_color).with_alpha(alpha);

            frame.rects.push(
                RectPrimitive::new(card_box.left, card_box.top, card_box.width, card_box.height, fill)
                    .with_corner_radius(style.card_corner_radius_px),
            );

            if entry.duration_minutes() <= 30.0 {
                self.push_short_card_text(frame, appointment, card_box, font, alpha);
            } else {
                self.push_long_card_text(frame, appointment, card_box, font, alpha);
            }
        }
    }

    /// Cards of half an hour or less get one line: name left, time right.
    fn push_short_card_text(
        &self,
        frame: &mut GridFrame,
        appointment: &Appointment,
        card_box: CardBox,
        font: f64,
        alpha: f64,
    ) {
        let style = self.core.style;
        let baseline = card_box.top + card_box.height / 2.0 + font * 0.35;

        frame.texts.push(TextPrimitive::new(
            format!("{} | {}", appointment.client_name, appointment.pet_name),
            card_box.left + 6.0,
            baseline,
            font,
            style.card_title_color.with_alpha(alpha),
            TextHAlign::Left,
        ));
        frame.texts.push(TextPrimitive::new(
            format_clock_label(appointment.start_time.time()),
            card_box.left + card_box.width - 6.0,
            baseline,
            font * 0.85,
            style.card_time_color.with_alpha(alpha),
            TextHAlign::Right,
        ));
    }

    /// Longer cards stack name, time range, service, and the paid tag,
    /// clipped to whatever fits.
    fn push_long_card_text(
        &self,
        frame: &mut GridFrame,
        appointment: &Appointment,
        card_box: CardBox,
        font: f64,
        alpha: f64,
    ) {
        let style = self.core.style;
        let small = font * 0.85;
        let line_step = font * 1.25;
        let bottom = card_box.top + card_box.height - 4.0;
        let mut baseline = card_box.top + 4.0 + font;

        let mut lines: Vec<(String, f64, Color)> = vec![
            (
                format!("{} ({})", appointment.client_name, appointment.pet_name),
                font,
                style.card_title_color,
            ),
            (
                format!(
                    "{} - {}",
                    format_clock_label(appointment.start_time.time()),
                    format_clock_label(appointment.end_time.time())
                ),
                small,
                style.card_time_color,
            ),
        ];
        if !appointment.service_name.is_empty() {
            lines.push((appointment.service_name.clone(), small, style.card_service_color));
        }
        if appointment.payment_status == PaymentStatus::Paid {
            lines.push(("\u{2713} Paid".to_owned(), small, style.paid_tag_color));
        }

        for (text, size, color) in lines {
            if baseline > bottom {
                break;
            }
            frame.texts.push(TextPrimitive::new(
                text,
                card_box.left + 6.0,
                baseline,
                size,
                color.with_alpha(alpha),
                TextHAlign::Left,
            ));
            baseline += line_step;
        }
    }

    /// Snapped ghost of the dragged card plus its time badge.
    fn push_drag_overlay(&self, frame: &mut GridFrame) {
        let Some(preview) = self.drag_preview() else {
            return;
        };

        let style = self.core.style;
        let gutter = style.time_gutter_width_px;
        let width = f64::from(self.core.model.viewport.width);
        let ghost_width = (width - gutter - 8.0).max(0.0);

        let fill = self
            .core
            .model
            .appointments
            .iter()
            .find(|appointment| appointment.id == preview.appointment_id)
            .map(|appointment| card_fill(appointment, style.card_fill_color))
            .unwrap_or(style.card_fill_color);

        frame.rects.push(
            RectPrimitive::new(
                gutter,
                preview.top_y,
                ghost_width,
                preview.height_px,
                fill.with_alpha(style.drag_ghost_alpha),
            )
            .with_corner_radius(style.card_corner_radius_px),
        );

        let badge_font = style.drag_badge_font_px;
        let badge_width = estimate_text_width(&preview.badge_label, badge_font) + 12.0;
        let badge_height = badge_font + 7.0;
        let badge_top = preview.top_y - style.drag_badge_offset_px;
        frame.rects.push(
            RectPrimitive::new(gutter, badge_top, badge_width, badge_height, style.drag_badge_color)
                .with_corner_radius(4.0),
        );
        frame.texts.push(TextPrimitive::new(
            preview.badge_label.clone(),
            gutter + badge_width / 2.0,
            badge_top + badge_font + 2.0,
            badge_font,
            style.drag_badge_text_color,
            TextHAlign::Center,
        ));
    }

    fn push_now_marker(&self, frame: &mut GridFrame) {
        let Some(y) = self.now_marker_y() else {
            return;
        };

        let style = self.core.style;
        let gutter = style.time_gutter_width_px;
        let width = f64::from(self.core.model.viewport.width);
        let radius = style.now_dot_radius_px;

        frame.lines.push(LinePrimitive::new(
            gutter,
            y,
            width,
            y,
            style.now_line_width,
            style.now_line_color,
        ));
        frame.rects.push(
            RectPrimitive::new(
                gutter - radius,
                y - radius,
                radius * 2.0,
                radius * 2.0,
                style.now_line_color,
            )
            .with_corner_radius(radius),
        );
    }

    /// Zoom badge, saving veil, and toast, in that stacking order.
    fn push_feedback(&self, frame: &mut GridFrame) {
        let style = self.core.style;
        let axis = self.core.model.axis;
        let width = f64::from(self.core.model.viewport.width);

        if let Some(badge) = self.core.runtime.feedback.zoom_badge {
            let label = format!("{}%", badge.percent);
            let badge_width = estimate_text_width(&label, style.zoom_badge_font_px) + 16.0;
            let badge_height = 24.0;
            let left = (width - badge_width) / 2.0;
            frame.rects.push(
                RectPrimitive::new(left, 16.0, badge_width, badge_height, style.zoom_badge_fill_color)
                    .with_corner_radius(badge_height / 2.0),
            );
            frame.texts.push(TextPrimitive::new(
                label,
                width / 2.0,
                16.0 + badge_height / 2.0 + style.zoom_badge_font_px * 0.35,
                style.zoom_badge_font_px,
                style.zoom_badge_text_color,
                TextHAlign::Center,
            ));
        }

        if self.core.runtime.is_updating {
            frame.rects.push(RectPrimitive::new(
                0.0,
                0.0,
                width,
                axis.content_height(),
                style.saving_veil_color,
            ));
            frame.texts.push(TextPrimitive::new(
                SAVING_LABEL,
                width / 2.0,
                axis.content_height() / 2.0,
                14.0,
                style.saving_text_color,
                TextHAlign::Center,
            ));
        }

        if let Some(toast) = &self.core.runtime.feedback.toast {
            let (icon, fill) = match toast.kind {
                ToastKind::Success => ('\u{2713}', style.toast_success_color),
                ToastKind::Error => ('\u{2717}', style.toast_error_color),
                ToastKind::Warning => ('\u{26a0}', style.toast_warning_color),
            };
            let label = format!("{icon} {}", toast.message);
            let toast_width = estimate_text_width(&label, style.toast_font_px) + 24.0;
            let toast_height = 38.0;
            let left = (width - toast_width) / 2.0;
            let top = axis.content_height() - 90.0;
            frame.rects.push(
                RectPrimitive::new(left, top, toast_width, toast_height, fill)
                    .with_corner_radius(10.0),
            );
            frame.texts.push(TextPrimitive::new(
                label,
                width / 2.0,
                top + toast_height / 2.0 + style.toast_font_px * 0.35,
                style.toast_font_px,
                style.toast_text_color,
                TextHAlign::Center,
            ));
        }
    }
}

/// Card color override stored on the booking, falling back to the theme fill.
fn card_fill(appointment: &Appointment, fallback: Color) -> Color {
    appointment
        .color
        .as_deref()
        .and_then(|hex| Color::from_hex(hex).ok())
        .unwrap_or(fallback)
}
