use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Stable identifier assigned by the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for AppointmentId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "payid")]
    PayId,
}

/// One booked grooming visit, in salon wall-clock time.
///
/// Times are naive on purpose: the grid lives entirely in the salon's local
/// day, and storage/UTC conversion belongs to the data source feeding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    pub pet_name: String,
    pub service_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub price: Decimal,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Appointment {
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.id.as_str().is_empty() {
            return Err(SchedulerError::InvalidData(
                "appointment id must not be empty".to_owned(),
            ));
        }

        if self.end_time <= self.start_time {
            return Err(SchedulerError::InvalidData(format!(
                "appointment {} must end after it starts",
                self.id
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// `true` when the two bookings occupy intersecting wall-clock ranges.
    #[must_use]
    pub fn overlaps_in_time(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// Vibration strength tiers, mapped to pulse lengths by the feedback layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticStrength {
    Light,
    Medium,
    Heavy,
}

/// Visual tone of a transient toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

/// Status chip selected in the day header; the grid lays out only matching
/// bookings, and conflict checks run against the same visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Scheduled,
    Completed,
}

impl StatusFilter {
    #[must_use]
    pub fn admits(self, status: AppointmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Scheduled => status == AppointmentStatus::Scheduled,
            Self::Completed => status == AppointmentStatus::Completed,
        }
    }
}
