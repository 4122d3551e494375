//! Opt-in `tracing` subscriber for hosts of `xygraph-rs`.
//!
//! Events are emitted under these targets:
//! - `xygraph_rs::core::memo`: `trace!` on every memo recompute,
//! - `xygraph_rs::core::scale`: `warn!` on scale-kind fallbacks,
//! - `xygraph_rs::core::axis_range`: `trace!` when a range end settles,
//! - `xygraph_rs::api::*`: `debug!` on graphic, data, axis and layout changes,
//!   `trace!` on pointer and selection updates.
//!
//! Without `RUST_LOG` the subscriber shows warnings from everywhere and
//! `debug!` from this crate.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,xygraph_rs=debug")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
