//! Development-time tracing for debugging the app.
//!
//! Reads `RUST_LOG` and stays silent when it is unset. Output goes to a log
//! file rather than stderr, which belongs to the alternate screen while the
//! TUI is up.
//!
//! ```bash
//! RUST_LOG=luapad=debug luapad
//! ```

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file created in the working directory when tracing is enabled.
pub const LOG_FILE: &str = "luapad.log";

/// Initialize the tracing subscriber. No-op unless `RUST_LOG` is set.
pub fn init() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };

    let file = File::create(LOG_FILE)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .init();
    Ok(())
}
