//! Opt-in `tracing` bootstrap for hosts embedding `daygrid-rs`.
//!
//! The engine itself only emits spans and events; nothing here runs unless
//! the `telemetry` feature is enabled and a host asks for it. Applications
//! with their own subscriber stack should skip these helpers entirely.

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to `daygrid_rs=info` when the variable is unset.
///
/// Returns `false` when the feature is disabled or another global subscriber
/// already won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("daygrid_rs=info")
}

/// Same as [`init_default_tracing`] but with an explicit fallback filter,
/// e.g. `"daygrid_rs=trace"` while debugging gesture recognition.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
