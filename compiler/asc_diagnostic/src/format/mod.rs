//! Text rendering of diagnostics.
//!
//! A formatted message starts with `<CATEGORY> <PREFIX><code>: <message>`.
//! If the message has a range it is followed either by a ` in <path>(l,c)`
//! locator line, or by a source excerpt with an underline:
//!
//! ```text
//! ERROR TS1127: Invalid character.
//!    :
//!  2 │ let b = @;
//!    │         ~
//!    └─ in src/main.ts(2,9)
//! ```
//!
//! A related range, if any, is rendered the same way below the first one.

use asc_ir::{Range, Source, SourceMap};
use asc_lexer_core::chars::{is_line_break, is_white_space};

use crate::category::colors;
use crate::DiagnosticMessage;

/// Formatting switches, passed explicitly to every call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Wrap the category label and the underline in ANSI colors.
    pub colors: bool,
    /// Render a source excerpt instead of a one-line locator.
    pub show_context: bool,
}

impl FormatOptions {
    pub const PLAIN: FormatOptions = FormatOptions {
        colors: false,
        show_context: false,
    };

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_context(mut self, show_context: bool) -> Self {
        self.show_context = show_context;
        self
    }
}

/// Renders `message` as text.
///
/// Ranges whose source is not registered in `sources` are skipped.
pub fn format_message(
    message: &DiagnosticMessage,
    sources: &SourceMap,
    options: FormatOptions,
) -> String {
    let mut out = String::new();
    let category = message.category;
    if options.colors {
        out.push_str(category.color());
    }
    out.push_str(category.label());
    if options.colors {
        out.push_str(colors::RESET);
    }
    out.push_str(&format!(
        " {}{}: {}",
        message.code.prefix(),
        message.code,
        message.message
    ));

    let Some((range, source)) = resolve(message.range, sources) else {
        return out;
    };
    let related = resolve(message.related_range, sources);

    // Line numbers of both excerpts share one gutter width.
    let min_line = related.map(|(related_range, related_source)| {
        source
            .line_at(range.start)
            .max(related_source.line_at(related_range.start))
    });

    write_location(&mut out, range, source, min_line, options);
    if let Some((related_range, related_source)) = related {
        write_location(&mut out, related_range, related_source, min_line, options);
    }
    out
}

fn resolve(range: Option<Range>, sources: &SourceMap) -> Option<(Range, &Source)> {
    let range = range?;
    Some((range, sources.get(range.source)?))
}

fn write_location(
    out: &mut String,
    range: Range,
    source: &Source,
    min_line: Option<u32>,
    options: FormatOptions,
) {
    out.push('\n');
    if options.show_context {
        out.push_str(&format_context(range, source, min_line, options.colors));
    } else {
        out.push_str(" in ");
        out.push_str(source.normalized_path());
    }
    let (line, column) = source.line_col(range.start);
    out.push_str(&format!("({line},{column})"));
}

/// Renders the source line containing `range.start` with an underline.
///
/// `min_line`, when given, widens the line-number gutter so that excerpts of
/// a message and its related range align. Tabs are shown as two spaces.
pub fn format_context(
    range: Range,
    source: &Source,
    min_line: Option<u32>,
    colors: bool,
) -> String {
    let text = source.text();
    let pos = (range.start as usize).min(text.len());

    let line_number = source.line_at(range.start).to_string();
    let gutter = match min_line {
        Some(min_line) => line_number.len().max(min_line.to_string().len()),
        None => line_number.len(),
    };
    let line_space = " ".repeat(gutter);

    let (start, end) = line_bounds(text, pos);
    let line = text.get(start..end).unwrap_or("");

    let mut out = String::new();
    out.push_str(&format!(
        "{line_space}  :\n {line_number:>gutter$} │ {}\n {line_space} │ ",
        line.replace('\t', "  ")
    ));

    for c in text.get(start..pos).unwrap_or("").chars() {
        out.push_str(if c == '\t' { "  " } else { " " });
    }

    if colors {
        out.push_str(colors::RED);
    }
    if range.is_empty() {
        out.push('^');
    } else {
        let underlined = text.get(pos..range.end as usize).unwrap_or("");
        for (offset, c) in underlined.char_indices() {
            if c == '\t' {
                out.push_str("~~");
            } else if is_line_break(c) {
                out.push(if offset == 0 { '^' } else { '~' });
                break;
            } else {
                out.push('~');
            }
        }
    }
    if colors {
        out.push_str(colors::RESET);
    }

    out.push_str(&format!("\n {line_space} └─ in {}", source.normalized_path()));
    out
}

/// Start (after leading white space) and end of the line containing `pos`.
fn line_bounds(text: &str, pos: usize) -> (usize, usize) {
    let before = text.get(..pos).unwrap_or("");
    let mut start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| is_line_break(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    start += text
        .get(start..)
        .unwrap_or("")
        .chars()
        .take_while(|&c| is_white_space(c))
        .map(char::len_utf8)
        .sum::<usize>();
    let end = text
        .get(pos..)
        .unwrap_or("")
        .char_indices()
        .find(|&(_, c)| is_line_break(c))
        .map_or(text.len(), |(i, _)| pos + i);
    (start, end.max(start))
}

#[cfg(test)]
mod tests;
