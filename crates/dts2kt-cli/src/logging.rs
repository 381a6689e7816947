//! Tracing configuration for the CLI.
//!
//! The subscriber is only initialised when `DTS2KT_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs. `DTS2KT_LOG` takes
//! precedence when both are set; values use the usual env-filter syntax:
//!
//! ```bash
//! DTS2KT_LOG=debug dts2kt index.d.ts
//! DTS2KT_LOG=dts2kt_translate=trace dts2kt index.d.ts
//! ```

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = if std::env::var("DTS2KT_LOG").is_ok() {
        EnvFilter::try_from_env("DTS2KT_LOG")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env()
    } else {
        return;
    };
    if let Ok(filter) = filter {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
