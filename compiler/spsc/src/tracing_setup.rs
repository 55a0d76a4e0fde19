//! Subscriber installation for `RUST_LOG`-driven logging.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber if `RUST_LOG` is set. Safe to call more than once.
///
/// `RUST_LOG=sps_eval=debug` logs every procedure call; `trace` logs every executed
/// element. With `SPS_LOG_TREE` set, events nest under their procedure call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("SPS_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
