//! Telemetry helpers for applications embedding `epichart`.
//!
//! The library only emits `tracing` events (scope loads, derivation counts,
//! glitch filtering). Installing a subscriber stays the host's call; the
//! helpers below exist for binaries and quick experiments.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive
/// (e.g. `"warn"` or `"epichart=debug"`).
#[must_use]
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
