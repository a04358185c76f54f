//! Source-annotated error reports, rendered with `ariadne`.

use std::io::Write;

use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use quill_parse::ParseError;

/// Renders parse errors against the source they came from.
#[derive(Clone, Debug)]
pub struct Reporter {
    file_name: String,
    color: bool,
}

impl Reporter {
    /// A reporter without ANSI colors, naming the source `file_name`.
    pub fn new(file_name: impl Into<String>) -> Self {
        Reporter {
            file_name: file_name.into(),
            color: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Write one report per error, in order.
    pub fn render_parse_errors(
        &self,
        source: &str,
        errors: &[ParseError],
        out: &mut dyn Write,
    ) -> std::io::Result<()> {
        let id = self.file_name.as_str();
        for error in errors {
            let mut colors = ColorGenerator::new();
            let range = clamp(error.span().to_range(), source.len());

            let report = Report::build(ReportKind::Error, (id, range.clone()))
                .with_config(
                    Config::default()
                        .with_color(self.color)
                        .with_index_type(IndexType::Byte),
                )
                .with_message(error)
                .with_label(
                    Label::new((id, range))
                        .with_message(label_text(error))
                        .with_color(colors.next()),
                );

            report.finish().write((id, Source::from(source)), &mut *out)?;
        }
        Ok(())
    }
}

/// Spans at end of input may point one past the last byte.
fn clamp(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    range.start.min(len)..range.end.min(len)
}

fn label_text(error: &ParseError) -> String {
    match error {
        ParseError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
        ParseError::NoPrefixRule { .. } => "cannot start an expression".to_owned(),
        ParseError::EmptyIndex { .. } => "missing index".to_owned(),
        ParseError::InvalidInteger { .. } => "does not fit in 64 bits".to_owned(),
        ParseError::Lex(_) => "string starts here".to_owned(),
    }
}
