pub mod layout;
pub mod time_axis;
pub mod types;

pub use layout::{CascadeTuning, DayLayout, LayoutEntry, layout_day};
pub use time_axis::{DayWindow, TimeAxis};
pub use types::{
    Appointment, AppointmentId, AppointmentStatus, HapticStrength, PaymentMethod, PaymentStatus,
    StatusFilter, ToastKind, Viewport,
};
