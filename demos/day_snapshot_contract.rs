use chrono::{NaiveDate, NaiveTime};
use daygrid_rs::api::{EngineSnapshot, SchedulerEngine, SchedulerEngineConfig};
use daygrid_rs::core::{
    Appointment, AppointmentId, AppointmentStatus, PaymentMethod, PaymentStatus, Viewport,
};
use daygrid_rs::render::NullRenderer;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 12).ok_or("bad date")?;
    let renderer = NullRenderer::default();
    let config = SchedulerEngineConfig::new(Viewport::new(400, 700), date);
    let mut engine = SchedulerEngine::new(renderer, config)?;

    let bookings: Vec<Appointment> = (0..8)
        .map(|i| {
            let start_time = date
                .and_hms_opt(8 + i, (i % 2) * 30, 0)
                .expect("valid booking time");
            Appointment {
                id: AppointmentId::new(format!("bk-{i}")),
                client_name: format!("Client {i}"),
                pet_name: format!("Pet {i}"),
                service_name: "Deshed".to_owned(),
                start_time,
                end_time: start_time + chrono::Duration::minutes(50),
                status: AppointmentStatus::Scheduled,
                price: Decimal::new(9100, 2),
                payment_status: if i % 2 == 0 {
                    PaymentStatus::Paid
                } else {
                    PaymentStatus::Unpaid
                },
                payment_method: (i % 2 == 0).then_some(PaymentMethod::Card),
                notes: None,
                color: Some("#AAD4FF".to_owned()),
            }
        })
        .collect();
    engine.set_appointments(bookings)?;
    engine.set_wall_clock(NaiveTime::from_hms_opt(11, 20, 0).ok_or("bad time")?);
    engine.pinch_update(1.4, 100.0)?;
    engine.pinch_end();

    let frame = engine.build_frame()?;
    println!(
        "frame primitives: {} lines, {} rects, {} texts",
        frame.lines.len(),
        frame.rects.len(),
        frame.texts.len()
    );

    let snapshot = engine.snapshot();
    let json = engine.snapshot_json_pretty()?;
    println!("snapshot bytes: {}", json.len());
    println!(
        "visible {} of {} bookings at zoom {:.2}",
        snapshot.layout.len(),
        snapshot.appointments.len(),
        snapshot.zoom_level
    );

    let restored: EngineSnapshot = serde_json::from_str(&json)?;
    assert_eq!(restored, snapshot);
    println!("snapshot json round trip holds");

    engine.render()?;
    Ok(())
}
