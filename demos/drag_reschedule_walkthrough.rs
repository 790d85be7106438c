use chrono::NaiveDate;
use daygrid_rs::api::{PointerInput, RescheduleOutcome, SchedulerEngine, SchedulerEngineConfig};
use daygrid_rs::core::{
    Appointment, AppointmentId, AppointmentStatus, PaymentStatus, Viewport,
};
use daygrid_rs::render::NullRenderer;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = daygrid_rs::telemetry::init_default_tracing();

    let date = NaiveDate::from_ymd_opt(2024, 6, 12).ok_or("bad date")?;
    let renderer = NullRenderer::default();
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), date);
    let mut engine = SchedulerEngine::new(renderer, config)?;

    let bookings: Vec<Appointment> = [
        ("bella", "Maya", "Bella", "Full Groom", 9, 0, 60),
        ("rocky", "Tom", "Rocky", "Bath & Brush", 10, 30, 45),
        ("luna", "Priya", "Luna", "Nail Trim", 10, 45, 15),
    ]
    .into_iter()
    .map(|(id, client, pet, service, hour, minute, duration)| {
        let start_time = date.and_hms_opt(hour, minute, 0).expect("valid booking time");
        Appointment {
            id: AppointmentId::new(id),
            client_name: client.to_owned(),
            pet_name: pet.to_owned(),
            service_name: service.to_owned(),
            start_time,
            end_time: start_time + chrono::Duration::minutes(duration),
            status: AppointmentStatus::Scheduled,
            price: Decimal::new(7800, 2),
            payment_status: PaymentStatus::Unpaid,
            payment_method: None,
            notes: None,
            color: None,
        }
    })
    .collect();
    engine.set_appointments(bookings)?;

    // Press on the 09:00 card and hold until the gesture engages.
    let armed = engine.pointer_down(PointerInput::new(1, 200.0, 300.0), 0.0)?;
    println!("press armed a drag candidate: {armed}");
    engine.tick(500.0)?;
    println!("phase after the hold elapsed: {:?}", engine.drag_phase());

    // Carry the card 22 minutes down; the candidate snaps to 09:15.
    engine.pointer_move(PointerInput::new(1, 200.0, 333.0))?;
    if let Some(preview) = engine.drag_preview() {
        println!(
            "ghost for `{}` over {:.0}..{:.0} badge `{}`",
            preview.appointment_id, preview.start_minute, preview.end_minute, preview.badge_label
        );
    }

    engine.pointer_up(1, 700.0)?;
    let request = engine.pending_reschedule().ok_or("no pending request")?;
    println!(
        "requested move of `{}` to {} (conflict: {})",
        request.appointment_id, request.new_start_time, request.conflict
    );
    println!("engine is updating: {}", engine.is_updating());

    engine.resolve_reschedule(RescheduleOutcome::Applied, 900.0)?;
    if let Some(toast) = engine.active_toast() {
        println!("toast after save: {:?} `{}`", toast.kind, toast.message);
    }

    engine.render()?;
    Ok(())
}
