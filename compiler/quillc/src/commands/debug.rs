//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;

use quill_lexer::lex;
use quill_parse::parse_source;

use crate::{Outcome, Reporter};

/// Print the token stream, one token per line, then any lexer errors.
pub fn lex_source(source: &str, out: &mut dyn Write) -> std::io::Result<Outcome> {
    let lexed = lex(source);

    writeln!(out, "Tokens ({}):", lexed.tokens.len())?;
    for token in &lexed.tokens {
        writeln!(out, "  {:?} {:?} @ {}", token.kind, token.literal, token.span)?;
    }

    if !lexed.has_errors() {
        return Ok(Outcome::Success);
    }
    writeln!(out)?;
    writeln!(out, "Errors:")?;
    for error in &lexed.errors {
        writeln!(out, "  {}: {error}", error.span())?;
    }
    Ok(Outcome::ParseErrors)
}

/// Print the parsed program in its canonical form, then render any errors.
pub fn parse_source_to(
    source: &str,
    reporter: &Reporter,
    out: &mut dyn Write,
) -> std::io::Result<Outcome> {
    let parsed = parse_source(source);

    for stmt in &parsed.program.statements {
        writeln!(out, "{stmt}")?;
    }

    if !parsed.has_errors() {
        return Ok(Outcome::Success);
    }
    reporter.render_parse_errors(source, &parsed.errors, out)?;
    Ok(Outcome::ParseErrors)
}
