use chrono::{NaiveDate, NaiveTime};
use daygrid_rs::api::{
    PointerInput, RescheduleOutcome, SchedulerEngine, SchedulerEngineConfig,
};
use daygrid_rs::core::{
    Appointment, AppointmentId, AppointmentStatus, DayWindow, PaymentStatus, Viewport,
};
use daygrid_rs::render::{GridFrame, NullRenderer, TextHAlign};
use rust_decimal::Decimal;

fn display_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).expect("valid date")
}

fn booking(id: &str, hour: u32, minute: u32, duration_minutes: i64, paid: bool) -> Appointment {
    let start_time = display_date()
        .and_hms_opt(hour, minute, 0)
        .expect("valid start");
    Appointment {
        id: AppointmentId::new(id),
        client_name: "Dana".to_owned(),
        pet_name: "Biscuit".to_owned(),
        service_name: "Full Groom".to_owned(),
        start_time,
        end_time: start_time + chrono::Duration::minutes(duration_minutes),
        status: AppointmentStatus::Scheduled,
        price: Decimal::new(8500, 2),
        payment_status: if paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        },
        payment_method: None,
        notes: None,
        color: None,
    }
}

fn build_engine() -> SchedulerEngine<NullRenderer> {
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), display_date());
    SchedulerEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn text_count(frame: &GridFrame, needle: &str) -> usize {
    frame
        .texts
        .iter()
        .filter(|text| text.text.contains(needle))
        .count()
}

#[test]
fn an_empty_day_renders_just_the_scaffold() {
    let engine = build_engine();
    let frame = engine.build_frame().expect("frame");

    // 14 hour rules plus 3 quarter rules in each of the 14 hours.
    assert_eq!(frame.lines.len(), 56);
    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.texts.len(), 14);

    let first_label = &frame.texts[0];
    assert_eq!(first_label.text, "6 AM");
    assert_eq!(first_label.h_align, TextHAlign::Right);
    assert!((first_label.x - 56.0).abs() <= 1e-9);

    // Background covers the whole content, not just the viewport.
    let background = &frame.rects[0];
    assert!((background.width - 400.0).abs() <= 1e-9);
    assert!((background.height - 1_260.0).abs() <= 1e-9);

    frame.validate().expect("valid frame");
}

#[test]
fn rule_counts_follow_a_narrower_window() {
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), display_date())
        .with_window(DayWindow::from_hours(9, 12).expect("window"));
    let engine = SchedulerEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.lines.len(), 12);
    assert_eq!(frame.texts.len(), 3);
    assert_eq!(frame.texts[0].text, "9 AM");
}

#[test]
fn card_text_stacks_by_duration_and_payment() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![
            booking("short", 7, 0, 30, false),
            booking("long", 9, 0, 60, false),
            booking("paid", 11, 0, 60, true),
        ])
        .expect("set appointments");

    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.rects.len(), 4);
    // Scaffold labels plus 2 + 3 + 4 card lines.
    assert_eq!(frame.texts.len(), 23);

    assert_eq!(text_count(&frame, "Dana | Biscuit"), 1);
    assert_eq!(text_count(&frame, "Dana (Biscuit)"), 2);
    assert_eq!(text_count(&frame, "Full Groom"), 2);
    assert_eq!(text_count(&frame, "\u{2713} Paid"), 1);
    assert_eq!(text_count(&frame, "9:00 AM - 10:00 AM"), 1);
}

#[test]
fn long_card_text_clips_to_the_card_box() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![booking("tight", 8, 0, 31, true)])
        .expect("set appointments");

    // 46.5 px tall: the name and time fit, service and paid tag do not.
    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.texts.len(), 16);
    assert_eq!(text_count(&frame, "Dana (Biscuit)"), 1);
    assert_eq!(text_count(&frame, "Full Groom"), 0);
    assert_eq!(text_count(&frame, "\u{2713} Paid"), 0);
}

#[test]
fn booking_color_overrides_the_theme_fill() {
    let mut engine = build_engine();
    let mut custom = booking("tinted", 9, 0, 60, false);
    custom.color = Some("#FF8800".to_owned());
    let mut fallback = booking("plain", 12, 0, 60, false);
    fallback.color = Some("not-a-color".to_owned());
    engine
        .set_appointments(vec![custom, fallback])
        .expect("set appointments");

    let frame = engine.build_frame().expect("frame");
    let tinted = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 270.0).abs() <= 1e-9)
        .expect("tinted card rect");
    assert!((tinted.fill.red - 1.0).abs() <= 1e-9);
    assert!((tinted.fill.green - 136.0 / 255.0).abs() <= 1e-9);
    assert!((tinted.fill.blue - 0.0).abs() <= 1e-9);

    // Unparseable overrides fall back to the theme fill.
    let plain = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 540.0).abs() <= 1e-9)
        .expect("plain card rect");
    assert!((plain.fill.red - 0.91).abs() <= 1e-9);
}

#[test]
fn a_carried_drag_dims_the_source_and_adds_ghost_and_badge() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![booking("a", 9, 0, 60, false)])
        .expect("set appointments");

    engine
        .pointer_down(PointerInput::new(1, 200.0, 300.0), 0.0)
        .expect("pointer down");
    engine.tick(500.0).expect("tick");
    engine
        .pointer_move(PointerInput::new(1, 200.0, 333.0))
        .expect("pointer move");

    let frame = engine.build_frame().expect("frame");
    // Background, dimmed source card, ghost, badge.
    assert_eq!(frame.rects.len(), 4);

    let source = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 270.0).abs() <= 1e-9)
        .expect("source card");
    assert!((source.fill.alpha - 0.4).abs() <= 1e-9);

    let ghost = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 292.5).abs() <= 1e-9)
        .expect("ghost");
    assert!((ghost.fill.alpha - 0.85).abs() <= 1e-9);
    assert!((ghost.x - 64.0).abs() <= 1e-9);
    assert!((ghost.width - 328.0).abs() <= 1e-9);
    assert!((ghost.height - 90.0).abs() <= 1e-9);

    let badge = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 270.5).abs() <= 1e-9)
        .expect("badge");
    assert!(badge.height > 0.0);
    assert_eq!(text_count(&frame, "9:15 AM - 10:15 AM"), 1);

    // The dimmed card's own text fades with it.
    let title = frame
        .texts
        .iter()
        .find(|text| text.text == "Dana (Biscuit)")
        .expect("card title");
    assert!((title.color.alpha - 0.4).abs() <= 1e-9);
}

#[test]
fn now_marker_shows_only_inside_the_window() {
    let mut engine = build_engine();

    engine.set_wall_clock(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"));
    assert!((engine.now_marker_y().expect("marker") - 540.0).abs() <= 1e-9);

    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.lines.len(), 57);
    assert_eq!(frame.rects.len(), 2);

    let marker = frame
        .lines
        .iter()
        .find(|line| (line.y1 - 540.0).abs() <= 1e-9 && (line.x1 - 64.0).abs() <= 1e-9)
        .expect("marker line");
    assert!((marker.stroke_width - 2.0).abs() <= 1e-9);

    let dot = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 536.0).abs() <= 1e-9)
        .expect("marker dot");
    assert!((dot.x - 60.0).abs() <= 1e-9);
    assert!((dot.corner_radius - 4.0).abs() <= 1e-9);

    // Before opening, the marker stays off the grid entirely.
    engine.set_wall_clock(NaiveTime::from_hms_opt(3, 0, 0).expect("valid time"));
    assert!(engine.now_marker_y().is_none());
    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.lines.len(), 56);

    engine.clear_wall_clock();
    assert!(engine.now_marker_y().is_none());
}

#[test]
fn feedback_surfaces_stack_over_the_grid() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![booking("a", 9, 0, 60, false)])
        .expect("set appointments");

    engine
        .pointer_down(PointerInput::new(1, 200.0, 300.0), 0.0)
        .expect("pointer down");
    engine.tick(500.0).expect("tick");
    engine
        .pointer_move(PointerInput::new(1, 200.0, 333.0))
        .expect("pointer move");
    engine.pointer_up(1, 1_000.0).expect("pointer up");
    assert!(engine.is_updating());

    let frame = engine.build_frame().expect("frame");
    assert_eq!(text_count(&frame, "Rescheduling..."), 1);
    let veil = frame
        .rects
        .iter()
        .find(|rect| (rect.fill.alpha - 0.7).abs() <= 1e-9)
        .expect("saving veil");
    assert!((veil.height - 1_260.0).abs() <= 1e-9);

    engine
        .resolve_reschedule(RescheduleOutcome::Applied, 1_100.0)
        .expect("resolve");
    let frame = engine.build_frame().expect("frame");
    assert_eq!(text_count(&frame, "Rescheduling..."), 0);
    assert_eq!(text_count(&frame, "\u{2713} Appointment rescheduled"), 1);
    let toast = frame
        .rects
        .iter()
        .find(|rect| (rect.y - 1_170.0).abs() <= 1e-9)
        .expect("toast");
    assert!((toast.height - 38.0).abs() <= 1e-9);

    engine.pinch_begin();
    engine.pinch_update(1.4, 1_200.0).expect("pinch update");
    engine.pinch_end();
    let frame = engine.build_frame().expect("frame");
    assert_eq!(text_count(&frame, "140%"), 1);
}

#[test]
fn busy_frames_validate_and_flow_through_the_renderer() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![
            booking("a", 9, 0, 60, true),
            booking("b", 9, 30, 60, false),
            booking("c", 14, 0, 30, false),
        ])
        .expect("set appointments");
    engine.set_wall_clock(NaiveTime::from_hms_opt(10, 15, 0).expect("valid time"));

    let frame = engine.build_frame().expect("frame");
    frame.validate().expect("valid frame");
    assert!(!frame.is_empty());

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_line_count, frame.lines.len());
    assert_eq!(renderer.last_rect_count, frame.rects.len());
    assert_eq!(renderer.last_text_count, frame.texts.len());
}
