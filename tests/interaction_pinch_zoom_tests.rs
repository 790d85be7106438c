use chrono::NaiveDate;
use daygrid_rs::SchedulerError;
use daygrid_rs::api::{
    GestureInputBehavior, InvalidationLevel, InvalidationTopic, PointerInput, SchedulerEngine,
    SchedulerEngineConfig,
};
use daygrid_rs::core::{
    Appointment, AppointmentId, AppointmentStatus, PaymentStatus, Viewport,
};
use daygrid_rs::render::NullRenderer;
use rust_decimal::Decimal;

fn display_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).expect("valid date")
}

fn build_engine() -> SchedulerEngine<NullRenderer> {
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), display_date());
    SchedulerEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn booking(id: &str, hour: u32) -> Appointment {
    let start_time = display_date().and_hms_opt(hour, 0, 0).expect("valid start");
    Appointment {
        id: AppointmentId::new(id),
        client_name: "Sam".to_owned(),
        pet_name: "Waffles".to_owned(),
        service_name: "Nail Trim".to_owned(),
        start_time,
        end_time: start_time + chrono::Duration::minutes(60),
        status: AppointmentStatus::Scheduled,
        price: Decimal::new(2500, 2),
        payment_status: PaymentStatus::Unpaid,
        payment_method: None,
        notes: None,
        color: None,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn pinch_scale_is_cumulative_from_the_gesture_start() {
    let mut engine = build_engine();
    engine.pinch_begin();

    let level = engine.pinch_update(1.4, 0.0).expect("pinch update");
    assert_close(level, 1.4);
    assert_close(engine.minute_height(), 2.1);

    // Scale factors are relative to where the gesture began, not chained.
    let level = engine.pinch_update(2.0, 16.0).expect("pinch update");
    assert_close(level, 2.0);
    assert_close(engine.content_height(), 2_520.0);

    assert_close(engine.pinch_end(), 2.0);
    assert_close(engine.zoom_level(), 2.0);
}

#[test]
fn zoom_pins_at_the_limits_with_rubber_band_overshoot() {
    let mut engine = build_engine();

    engine.pinch_begin();
    let level = engine.pinch_update(3.0, 0.0).expect("pinch update");
    assert_close(level, 2.5);
    assert_close(engine.zoom_overshoot(), 0.075);
    assert_eq!(engine.zoom_badge().expect("badge").percent, 250);

    // Settling drops the stretch but keeps the applied level.
    assert_close(engine.pinch_end(), 2.5);
    assert_close(engine.zoom_overshoot(), 0.0);
    assert_close(engine.content_height(), 3_150.0);

    engine.pinch_begin();
    let level = engine.pinch_update(0.12, 100.0).expect("pinch update");
    assert_close(level, 0.5);
    assert_close(engine.zoom_overshoot(), (0.3 - 0.5) * 0.15);
    assert_eq!(engine.zoom_badge().expect("badge").percent, 50);
    engine.pinch_end();
    assert_close(engine.content_height(), 630.0);
}

#[test]
fn updates_pinned_at_a_limit_only_refresh_the_badge() {
    let mut engine = build_engine();
    engine.pinch_begin();
    engine.pinch_update(3.0, 0.0).expect("pinch update");

    engine.clear_pending_invalidation();
    let level = engine.pinch_update(3.4, 500.0).expect("pinch update");
    assert_close(level, 2.5);

    assert_eq!(
        engine.pending_invalidation_level(),
        InvalidationLevel::Overlay
    );
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Feedback));
    assert!(!engine.has_pending_invalidation_topic(InvalidationTopic::Zoom));
    assert_close(engine.zoom_badge().expect("badge").expires_at_ms, 1_500.0);
}

#[test]
fn zoom_badge_rides_the_last_update_and_expires_on_tick() {
    let mut engine = build_engine();
    engine.pinch_begin();
    engine.pinch_update(1.2, 0.0).expect("pinch update");
    assert_close(engine.zoom_badge().expect("badge").expires_at_ms, 1_000.0);

    engine.pinch_update(1.3, 400.0).expect("pinch update");
    let badge = engine.zoom_badge().expect("badge");
    assert_eq!(badge.percent, 130);
    assert_close(badge.expires_at_ms, 1_400.0);
    engine.pinch_end();

    engine.tick(1_399.0).expect("tick");
    assert!(engine.zoom_badge().is_some());

    engine.clear_pending_invalidation();
    engine.tick(1_400.0).expect("tick");
    assert!(engine.zoom_badge().is_none());
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Feedback));
}

#[test]
fn programmatic_zoom_shows_no_badge_and_clamps() {
    let mut engine = build_engine();

    engine.set_zoom_level(1.7).expect("set zoom");
    assert_close(engine.zoom_level(), 1.7);
    assert!(engine.zoom_badge().is_none());
    assert_eq!(engine.pending_invalidation_level(), InvalidationLevel::Full);
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Zoom));

    // Same level again is a no-op.
    engine.clear_pending_invalidation();
    engine.set_zoom_level(1.7).expect("set zoom");
    assert!(!engine.has_pending_invalidation());

    engine.set_zoom_level(9.0).expect("set zoom");
    assert_close(engine.zoom_level(), 2.5);
    engine.set_zoom_level(0.05).expect("set zoom");
    assert_close(engine.zoom_level(), 0.5);

    assert!(matches!(
        engine.set_zoom_level(f64::NAN),
        Err(SchedulerError::InvalidData(_))
    ));
    assert!(matches!(
        engine.set_zoom_level(-1.0),
        Err(SchedulerError::InvalidData(_))
    ));
}

#[test]
fn card_font_stays_inside_the_readable_band() {
    let mut engine = build_engine();

    engine.set_zoom_level(0.5).expect("set zoom");
    assert_close(engine.card_font_px(), 11.2);

    engine.set_zoom_level(1.0).expect("set zoom");
    assert_close(engine.card_font_px(), 12.8);

    engine.set_zoom_level(1.1).expect("set zoom");
    assert_close(engine.card_font_px(), 14.08);

    engine.set_zoom_level(2.5).expect("set zoom");
    assert_close(engine.card_font_px(), 16.0);
}

#[test]
fn pinch_is_shed_while_a_drag_gesture_is_engaged() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![booking("a", 9)])
        .expect("set appointments");

    // y = 300 sits on the 09:00 booking; the press alone engages the tracker.
    let armed = engine
        .pointer_down(PointerInput::new(1, 200.0, 300.0), 0.0)
        .expect("pointer down");
    assert!(armed);

    engine.pinch_begin();
    let level = engine.pinch_update(2.0, 50.0).expect("pinch update");
    assert_close(level, 1.0);
    assert_close(engine.zoom_level(), 1.0);
    assert!(engine.zoom_badge().is_none());

    engine.pointer_cancel(1);
    let level = engine.pinch_update(2.0, 100.0).expect("pinch update");
    assert_close(level, 2.0);
}

#[test]
fn pinch_gate_can_be_disabled_by_configuration() {
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), display_date())
        .with_gesture_input(GestureInputBehavior {
            handle_drag_reschedule: true,
            handle_pinch_zoom: false,
            handle_slot_taps: true,
        });
    let mut engine =
        SchedulerEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.pinch_begin();
    let level = engine.pinch_update(2.0, 0.0).expect("pinch update");
    assert_close(level, 1.0);
    assert_close(engine.minute_height(), 1.5);

    // Programmatic zoom is an API call, not a gesture; the gate leaves it be.
    engine.set_zoom_level(2.0).expect("set zoom");
    assert_close(engine.zoom_level(), 2.0);
}

#[test]
fn degenerate_pinch_scales_are_rejected() {
    let mut engine = build_engine();
    engine.pinch_begin();

    assert!(matches!(
        engine.pinch_update(0.0, 0.0),
        Err(SchedulerError::InvalidData(_))
    ));
    assert!(matches!(
        engine.pinch_update(-2.0, 0.0),
        Err(SchedulerError::InvalidData(_))
    ));
    assert!(matches!(
        engine.pinch_update(f64::NAN, 0.0),
        Err(SchedulerError::InvalidData(_))
    ));
    assert!(matches!(
        engine.pinch_update(2.0, f64::NAN),
        Err(SchedulerError::InvalidData(_))
    ));

    // The gesture survives bad samples.
    let level = engine.pinch_update(1.5, 10.0).expect("pinch update");
    assert_close(level, 1.5);
}

#[test]
fn zoom_density_feeds_drag_distance_math() {
    let mut engine = build_engine();
    engine
        .set_appointments(vec![booking("a", 9)])
        .expect("set appointments");
    engine.set_zoom_level(2.0).expect("set zoom");

    // At 3 px/min the 09:00 card tops out at y = 540.
    let armed = engine
        .pointer_down(PointerInput::new(1, 200.0, 600.0), 0.0)
        .expect("pointer down");
    assert!(armed);
    engine.tick(500.0).expect("tick");

    // +90 px is +30 minutes at this density.
    engine
        .pointer_move(PointerInput::new(1, 200.0, 690.0))
        .expect("pointer move");
    let session = engine.drag_session().expect("session");
    assert_close(session.candidate_start_minute, 570.0);
}
