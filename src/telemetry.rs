//! Telemetry helpers for applications embedding `scrobble-timeline`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. These helpers cover the common case.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter("info")
}

/// Same as [`init_default_tracing`] with an explicit fallback directive, e.g.
/// `"scrobble_timeline=debug"` when the timeline runs with `config.debug`.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
