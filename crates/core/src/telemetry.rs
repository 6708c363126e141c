//! Opt-in tracing setup for applications embedding the chart core.
//!
//! The library only emits `tracing` events. Hosts either call
//! `init_default_tracing` (with the `telemetry` feature) or install their
//! own subscriber.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
