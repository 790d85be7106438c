use chrono::NaiveTime;
use daygrid_rs::core::time_axis::{minute_of_day, minute_to_time};
use daygrid_rs::core::{DayWindow, TimeAxis};
use proptest::prelude::*;

fn axis_at(zoom: f64) -> TimeAxis {
    let mut axis = TimeAxis::new(DayWindow::default(), 1.5).expect("axis");
    axis.set_zoom(zoom).expect("set zoom");
    axis
}

proptest! {
    #[test]
    fn pixel_mapping_inverts_at_any_density(
        minute in 360.0..1200.0f64,
        zoom in 0.5..2.5f64,
    ) {
        let axis = axis_at(zoom);
        let y = axis.minute_to_y(minute);
        prop_assert!((axis.y_to_minute(y) - minute).abs() <= 1e-6);
    }

    #[test]
    fn content_height_scales_linearly_with_zoom(zoom in 0.5..2.5f64) {
        let axis = axis_at(zoom);
        prop_assert!((axis.content_height() - 1_260.0 * zoom).abs() <= 1e-6);
        prop_assert!((axis.minute_height() - 1.5 * zoom).abs() <= 1e-9);
    }

    #[test]
    fn snapped_minutes_land_on_the_grid_or_a_window_edge(
        raw in -300.0..1_700.0f64,
        step in 1u32..=60,
    ) {
        let axis = axis_at(1.0);
        let snapped = axis.snap_minute(raw, step).expect("snap");

        prop_assert!(snapped >= 360.0);
        prop_assert!(snapped <= 1_200.0);

        let step = f64::from(step);
        let on_grid = ((snapped / step).round() * step - snapped).abs() <= 1e-6;
        prop_assert!(on_grid || snapped == 360.0 || snapped == 1_200.0);
    }

    #[test]
    fn snapping_is_idempotent_on_grid_steps(
        raw in -300.0..1_700.0f64,
        step in prop::sample::select(vec![5u32, 10, 15, 20, 30, 60]),
    ) {
        let axis = axis_at(1.0);
        let once = axis.snap_minute(raw, step).expect("snap");
        let twice = axis.snap_minute(once, step).expect("snap");
        prop_assert!((twice - once).abs() <= 1e-9);
    }

    #[test]
    fn duration_clamp_keeps_whole_bookings_in_the_day(
        start in -500.0..2_000.0f64,
        duration in 0.0..900.0f64,
    ) {
        let axis = axis_at(1.0);
        let clamped = axis.clamp_start_for_duration(start, duration);

        prop_assert!(clamped >= 360.0);
        prop_assert!(clamped <= 1_200.0);
        if duration <= 840.0 {
            prop_assert!(clamped + duration <= 1_200.0 + 1e-9);
        } else {
            // Oversized bookings pin to the opening edge.
            prop_assert!((clamped - 360.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn wall_clock_minutes_round_trip(hour in 0u32..24, minute in 0u32..60) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time");
        let as_minutes = minute_of_day(time);
        prop_assert_eq!(minute_to_time(as_minutes), time);
    }

    #[test]
    fn snap_never_moves_an_interior_point_more_than_half_a_step(
        raw in 420.0..1_140.0f64,
        step in 1u32..=30,
    ) {
        let axis = axis_at(1.0);
        let snapped = axis.snap_minute(raw, step).expect("snap");
        prop_assert!((snapped - raw).abs() <= f64::from(step) / 2.0 + 1e-9);
    }
}
