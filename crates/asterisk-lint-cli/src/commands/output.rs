//! Rendering lint results.

use anyhow::Result;
use asterisk_lint_core::{LintResult, Severity, ViolationDiagnostic};
use miette::{NamedSource, Report};
use std::io::{self, Write};
use std::path::Path;

use crate::OutputFormat;

/// Prints `result` to stdout. `root` locates sources for `pretty` snippets.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, result)?,
        OutputFormat::Json => write_json(&mut out, result)?,
        OutputFormat::Compact => write_compact(&mut out, result)?,
        OutputFormat::Pretty => write_pretty(&mut out, result, root)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, result: &LintResult) -> io::Result<()> {
    let (errors, warnings, _) = result.count_by_severity();

    for violation in &result.violations {
        let severity = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        writeln!(
            out,
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        )?;
        writeln!(out, "  {severity}: {}", violation.message)?;
        if let Some(suggestion) = &violation.suggestion {
            writeln!(out, "  = help: {}", suggestion.message)?;
        }
        writeln!(out)?;
    }

    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    writeln!(out, "{color}{}\x1b[0m", result.summary())
}

fn write_json(out: &mut impl Write, result: &LintResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

fn write_compact(out: &mut impl Write, result: &LintResult) -> io::Result<()> {
    for violation in &result.violations {
        writeln!(out, "{violation}")?;
    }
    Ok(())
}

fn write_pretty(out: &mut impl Write, result: &LintResult, root: &Path) -> io::Result<()> {
    for violation in &result.violations {
        let file = &violation.location.file;
        let diagnostic = ViolationDiagnostic::from(violation);
        let report = match std::fs::read_to_string(root.join(file)) {
            Ok(content) => Report::new(diagnostic)
                .with_source_code(NamedSource::new(file.display().to_string(), content)),
            Err(e) => {
                tracing::warn!("Cannot read {} for snippet: {}", file.display(), e);
                Report::new(diagnostic)
            }
        };
        writeln!(out, "{report:?}")?;
    }
    writeln!(out, "{}", result.summary())
}
