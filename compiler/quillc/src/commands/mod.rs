//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. Handlers write to a caller-supplied
//! writer and report how they finished with an [`Outcome`](crate::Outcome).

mod debug;
mod repl;
mod run;

pub use debug::{lex_source, parse_source_to};
pub use repl::repl;
pub use run::{parse_run_options, run_file, run_source, RunOptions};

/// Read a source file, turning I/O failures into a user-facing message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
