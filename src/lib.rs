//! daygrid-rs: headless day-grid scheduling engine.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split
//! for an interactive appointment day view: time-axis math, overlap layout,
//! pinch-zoom density, and long-press drag-to-reschedule, all deterministic
//! and renderer-agnostic.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SchedulerEngine, SchedulerEngineConfig};
pub use error::{SchedulerError, SchedulerResult};
