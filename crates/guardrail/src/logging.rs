//! Opt-in `tracing` subscriber for binaries and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or when the host already installed a
/// global subscriber. Safe to call repeatedly.
///
/// ```text
/// RUST_LOG=guardrail=debug cargo test
/// RUST_LOG=guardrail::report=warn my-app
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host subscriber wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging");
    }
}
