use chrono::NaiveDate;
use daygrid_rs::api::{
    FeedbackBehavior, GestureInputBehavior, SchedulerEngine, SchedulerEngineConfig, SnapBehavior,
};
use daygrid_rs::core::{CascadeTuning, DayWindow, StatusFilter, Viewport};
use daygrid_rs::error::SchedulerError;
use daygrid_rs::interaction::{LongPressTuning, PinchZoomConfig};
use daygrid_rs::render::NullRenderer;

fn display_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).expect("valid date")
}

fn base_config() -> SchedulerEngineConfig {
    SchedulerEngineConfig::new(Viewport::new(400, 700), display_date())
}

#[test]
fn config_json_round_trips() {
    let config = base_config()
        .with_window(DayWindow::from_hours(8, 18).expect("window"))
        .with_base_minute_height(2.0)
        .with_status_filter(StatusFilter::Scheduled)
        .with_long_press(LongPressTuning {
            hold_ms: 350.0,
            jitter_px: 14.0,
        })
        .with_snap(SnapBehavior {
            step_minutes: 5,
            slot_minutes: 15,
        })
        .with_zoom(PinchZoomConfig {
            min_level: 0.8,
            max_level: 3.0,
            rubber_band: 0.2,
        })
        .with_cascade(CascadeTuning {
            width_reduction_per_layer: 8.0,
            min_width_percent: 40.0,
            same_start_gap_px: 3.0,
        })
        .with_feedback(FeedbackBehavior {
            toast_duration_ms: 2_000.0,
            zoom_badge_duration_ms: 750.0,
            tap_suppression_ms: 150.0,
        })
        .with_gesture_input(GestureInputBehavior {
            handle_drag_reschedule: true,
            handle_pinch_zoom: false,
            handle_slot_taps: true,
        });

    let json = config.to_json_pretty().expect("config json");
    let parsed = SchedulerEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let json = r#"{
        "viewport": { "width": 400, "height": 700 },
        "display_date": "2024-06-12"
    }"#;
    let config = SchedulerEngineConfig::from_json_str(json).expect("parse config");

    assert_eq!(config.window.start_minute(), 360);
    assert_eq!(config.window.end_minute(), 1_200);
    assert!((config.base_minute_height - 1.5).abs() <= 1e-9);
    assert_eq!(config.status_filter, StatusFilter::All);
    assert!((config.long_press.hold_ms - 500.0).abs() <= 1e-9);
    assert!((config.long_press.jitter_px - 10.0).abs() <= 1e-9);
    assert_eq!(config.snap.step_minutes, 15);
    assert_eq!(config.snap.slot_minutes, 30);
    assert!((config.zoom.min_level - 0.5).abs() <= 1e-9);
    assert!((config.zoom.max_level - 2.5).abs() <= 1e-9);
    assert!((config.zoom.rubber_band - 0.15).abs() <= 1e-9);
    assert!((config.cascade.width_reduction_per_layer - 5.0).abs() <= 1e-9);
    assert!((config.cascade.min_width_percent - 30.0).abs() <= 1e-9);
    assert!((config.feedback.toast_duration_ms - 3_000.0).abs() <= 1e-9);
    assert!(config.gesture_input.handle_drag_reschedule);
    assert!(config.gesture_input.handle_pinch_zoom);
    assert!(config.gesture_input.handle_slot_taps);
}

#[test]
fn partial_gesture_gates_keep_the_other_defaults() {
    let json = r#"{
        "viewport": { "width": 400, "height": 700 },
        "display_date": "2024-06-12",
        "gesture_input": { "handle_pinch_zoom": false }
    }"#;
    let config = SchedulerEngineConfig::from_json_str(json).expect("parse config");

    assert!(!config.gesture_input.handle_pinch_zoom);
    assert!(config.gesture_input.handle_drag_reschedule);
    assert!(config.gesture_input.handle_slot_taps);
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = SchedulerEngineConfig::from_json_str("{").expect_err("parse failure");
    assert!(matches!(err, SchedulerError::InvalidData(_)));

    let err = SchedulerEngineConfig::from_json_str("{}").expect_err("missing fields");
    assert!(matches!(err, SchedulerError::InvalidData(_)));
}

#[test]
fn bootstrap_rejects_a_degenerate_viewport() {
    let config = SchedulerEngineConfig::new(Viewport::new(0, 700), display_date());
    let err = SchedulerEngine::new(NullRenderer::default(), config).expect_err("zero width");
    assert!(matches!(
        err,
        SchedulerError::InvalidViewport { width: 0, height: 700 }
    ));
}

#[test]
fn bootstrap_rejects_degenerate_tuning() {
    let cases = [
        base_config().with_snap(SnapBehavior {
            step_minutes: 0,
            slot_minutes: 30,
        }),
        base_config().with_snap(SnapBehavior {
            step_minutes: 15,
            slot_minutes: 0,
        }),
        base_config().with_long_press(LongPressTuning {
            hold_ms: 0.0,
            jitter_px: 10.0,
        }),
        base_config().with_long_press(LongPressTuning {
            hold_ms: 500.0,
            jitter_px: -1.0,
        }),
        base_config().with_base_minute_height(0.0),
        base_config().with_zoom(PinchZoomConfig {
            min_level: 0.0,
            max_level: 2.5,
            rubber_band: 0.15,
        }),
        base_config().with_zoom(PinchZoomConfig {
            min_level: 2.0,
            max_level: 1.0,
            rubber_band: 0.15,
        }),
        base_config().with_zoom(PinchZoomConfig {
            min_level: 0.5,
            max_level: 2.5,
            rubber_band: 1.5,
        }),
        base_config().with_cascade(CascadeTuning {
            width_reduction_per_layer: 5.0,
            min_width_percent: 0.0,
            same_start_gap_px: 5.0,
        }),
        base_config().with_feedback(FeedbackBehavior {
            toast_duration_ms: -1.0,
            zoom_badge_duration_ms: 1_000.0,
            tap_suppression_ms: 100.0,
        }),
    ];

    for config in cases {
        let result = SchedulerEngine::new(NullRenderer::default(), config);
        assert!(matches!(result, Err(SchedulerError::InvalidData(_))));
    }
}

#[test]
fn configured_window_and_filter_flow_into_the_engine() {
    let config = base_config()
        .with_window(DayWindow::from_hours(9, 12).expect("window"))
        .with_base_minute_height(2.0)
        .with_status_filter(StatusFilter::Scheduled);
    let engine = SchedulerEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.status_filter(), StatusFilter::Scheduled);
    assert_eq!(engine.day_window().start_minute(), 540);
    assert_eq!(engine.day_window().end_minute(), 720);
    assert!((engine.content_height() - 360.0).abs() <= 1e-9);
    assert!((engine.minute_height() - 2.0).abs() <= 1e-9);
}

#[test]
fn custom_long_press_tuning_drives_recognition() {
    use daygrid_rs::api::PointerInput;
    use daygrid_rs::core::{
        Appointment, AppointmentId, AppointmentStatus, PaymentStatus,
    };
    use daygrid_rs::interaction::DragPhase;
    use rust_decimal::Decimal;

    let start_time = display_date().and_hms_opt(9, 0, 0).expect("valid start");
    let booking = Appointment {
        id: AppointmentId::new("a"),
        client_name: "Teo".to_owned(),
        pet_name: "Scout".to_owned(),
        service_name: "Wash".to_owned(),
        start_time,
        end_time: start_time + chrono::Duration::minutes(60),
        status: AppointmentStatus::Scheduled,
        price: Decimal::new(3000, 2),
        payment_status: PaymentStatus::Unpaid,
        payment_method: None,
        notes: None,
        color: None,
    };

    let config = base_config().with_long_press(LongPressTuning {
        hold_ms: 250.0,
        jitter_px: 2.0,
    });
    let mut engine =
        SchedulerEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_appointments(vec![booking]).expect("set appointments");

    engine
        .pointer_down(PointerInput::new(1, 200.0, 300.0), 0.0)
        .expect("pointer down");
    engine.tick(249.0).expect("tick");
    assert_eq!(engine.drag_phase(), DragPhase::PendingLongPress);
    engine.tick(250.0).expect("tick");
    assert_eq!(engine.drag_phase(), DragPhase::Dragging);

    // The tighter jitter slack voids a press that barely wiggles.
    engine.pointer_cancel(1);
    engine
        .pointer_down(PointerInput::new(2, 200.0, 300.0), 1_000.0)
        .expect("pointer down");
    engine
        .pointer_move(PointerInput::new(2, 200.0, 303.0))
        .expect("pointer move");
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
}
