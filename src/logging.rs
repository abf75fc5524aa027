//! Diagnostics for the host binaries.
//!
//! Output goes to stderr so it never mixes with the board drawn on stdout.
//! Reads `RUST_LOG`, defaulting to `warn`:
//!
//! ```bash
//! RUST_LOG=tttmatch=debug cargo run --bin ttt-cli
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
