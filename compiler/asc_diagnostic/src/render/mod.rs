//! Diagnostic renderers.
//!
//! A renderer turns [`DiagnosticMessage`]s into output for a user. The
//! terminal renderer prints [`format_message`] text to any writer.

use std::io::{self, Write};

use asc_ir::SourceMap;

use crate::category::colors;
use crate::{format_message, DiagnosticCategory, DiagnosticMessage, FormatOptions};

/// Trait for emitting diagnostics to some output.
pub trait DiagnosticRenderer {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &DiagnosticMessage);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[DiagnosticMessage]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Color output mode for the terminal renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Writes formatted diagnostics separated by blank lines.
pub struct TerminalRenderer<'s, W: Write> {
    writer: W,
    sources: &'s SourceMap,
    options: FormatOptions,
}

impl<'s, W: Write> TerminalRenderer<'s, W> {
    /// Create a renderer with an explicit color mode.
    ///
    /// Source excerpts are shown unless disabled with [`Self::with_context`].
    pub fn with_color_mode(
        writer: W,
        sources: &'s SourceMap,
        mode: ColorMode,
        is_tty: bool,
    ) -> Self {
        TerminalRenderer {
            writer,
            sources,
            options: FormatOptions {
                colors: mode.should_use_colors(is_tty),
                show_context: true,
            },
        }
    }

    #[must_use]
    pub fn with_context(mut self, show_context: bool) -> Self {
        self.options.show_context = show_context;
        self
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    fn write_label(&mut self, category: DiagnosticCategory, text: &str) {
        if self.options.colors {
            let _ = write!(self.writer, "{}{text}{}", category.color(), colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl<'s> TerminalRenderer<'s, io::Stderr> {
    pub fn stderr(sources: &'s SourceMap, mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), sources, mode, is_tty)
    }
}

impl<'s> TerminalRenderer<'s, io::Stdout> {
    pub fn stdout(sources: &'s SourceMap, mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stdout(), sources, mode, is_tty)
    }
}

impl<W: Write> DiagnosticRenderer for TerminalRenderer<'_, W> {
    fn emit(&mut self, diagnostic: &DiagnosticMessage) {
        let text = format_message(diagnostic, self.sources, self.options);
        let _ = writeln!(self.writer, "{text}\n");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_label(DiagnosticCategory::Error, "ERROR");
            let _ = write!(self.writer, ": {error_count} error{}", plural_s(error_count));
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    ", {warning_count} warning{}",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.write_label(DiagnosticCategory::Warning, "WARNING");
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{}",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
