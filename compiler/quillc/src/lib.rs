//! Quill command-line driver.
//!
//! The binary in `main.rs` only parses arguments; everything it runs lives
//! here as functions over a writer, so commands can be exercised in tests.

pub mod commands;
pub mod reporting;

use std::sync::Once;

pub use commands::{
    lex_source, parse_run_options, parse_source_to, read_file, repl, run_file, run_source,
    RunOptions,
};
pub use reporting::Reporter;

/// Exit status for bad arguments or unreadable input.
pub const EXIT_USAGE: i32 = 2;

/// How a command finished.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Success,
    /// Lexing or parsing reported errors; nothing was evaluated.
    ParseErrors,
    /// The program evaluated to an error entity.
    RuntimeError,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::ParseErrors | Outcome::RuntimeError => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=quill_eval=debug` or `RUST_LOG=quill_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
