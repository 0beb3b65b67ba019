//! Diagnostic rendering.
//!
//! Two formats: a one-line `file:line:col: error[CODE]: message` summary and
//! a full labelled snippet drawn by `ariadne`.

use ariadne::{Color, Config, Label as SnippetLabel, Report, ReportKind, Source};

use crate::{Diagnostic, LineOffsetTable, Severity};

/// Color output mode for rendered reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// `path:line:col: error[E1001]: message`
pub fn format_summary(diagnostic: &Diagnostic, path: &str, source: &str) -> String {
    let table = LineOffsetTable::build(source);
    match diagnostic.primary_span() {
        Some(span) => {
            let (line, col) = table.span_start(source, span);
            format!("{path}:{line}:{col}: {diagnostic}")
        }
        None => format!("{path}: {diagnostic}"),
    }
}

/// Render a diagnostic with the offending source lines underlined.
pub fn render(diagnostic: &Diagnostic, source: &str, colors: bool) -> String {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };
    let char_count = source.chars().count();
    let offset = diagnostic
        .primary_span()
        .map_or(0, |span| char_offset(source, span.start));

    let mut report = Report::build(kind, (), offset)
        .with_code(diagnostic.code)
        .with_message(&diagnostic.message)
        .with_config(Config::default().with_color(colors));

    for label in &diagnostic.labels {
        let mut start = char_offset(source, label.span.start);
        let mut end = char_offset(source, label.span.end).max(start);
        // Zero-width spans (e.g. end of input) are widened onto a real char.
        if start == end {
            if start < char_count {
                end = start + 1;
            } else if start > 0 {
                start -= 1;
            }
        }
        let color = if label.is_primary {
            Color::Red
        } else {
            Color::Blue
        };
        report = report.with_label(
            SnippetLabel::new(start..end)
                .with_message(&label.message)
                .with_color(color),
        );
    }
    for note in &diagnostic.notes {
        report = report.with_note(note);
    }
    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    let mut out = Vec::new();
    if report
        .finish()
        .write(Source::from(source.to_string()), &mut out)
        .is_err()
    {
        // Writing into a Vec only fails on a broken source cache; degrade to
        // the plain summary.
        return format_summary(diagnostic, "<input>", source);
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// ariadne addresses characters, spans address bytes.
fn char_offset(source: &str, byte_offset: u32) -> usize {
    let mut byte = (byte_offset as usize).min(source.len());
    while !source.is_char_boundary(byte) {
        byte -= 1;
    }
    source[..byte].chars().count()
}
