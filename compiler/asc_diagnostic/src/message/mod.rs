//! Rendered diagnostic messages.

use std::fmt;

use asc_ir::{Range, SourceMap};

use crate::{DiagnosticCategory, DiagnosticCode};

/// A diagnostic with its template filled in.
///
/// Equality compares every field. Deduplication in the
/// [`DiagnosticEmitter`](crate::DiagnosticEmitter) ignores the category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticMessage {
    pub code: DiagnosticCode,
    pub category: DiagnosticCategory,
    pub message: String,
    pub range: Option<Range>,
    pub related_range: Option<Range>,
}

impl DiagnosticMessage {
    /// Renders `code`'s template with up to three positional arguments.
    ///
    /// Each argument replaces the first occurrence of its placeholder only.
    /// Extra arguments are ignored.
    pub fn create(code: DiagnosticCode, category: DiagnosticCategory, args: &[&str]) -> Self {
        const PLACEHOLDERS: [&str; 3] = ["{0}", "{1}", "{2}"];
        let mut message = code.template().to_string();
        for (placeholder, arg) in PLACEHOLDERS.iter().zip(args) {
            message = message.replacen(placeholder, arg, 1);
        }
        DiagnosticMessage {
            code,
            category,
            message,
            range: None,
            related_range: None,
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_related_range(mut self, range: Range) -> Self {
        self.related_range = Some(range);
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.category == DiagnosticCategory::Warning
    }

    /// Same code, ranges and text; the category does not matter.
    pub(crate) fn is_duplicate_of(&self, other: &DiagnosticMessage) -> bool {
        self.code == other.code
            && self.range == other.range
            && self.related_range == other.related_range
            && self.message == other.message
    }

    /// Display adapter that resolves the range to a path and position.
    pub fn display<'a>(&'a self, sources: &'a SourceMap) -> LocatedMessage<'a> {
        LocatedMessage {
            message: self,
            sources,
        }
    }
}

/// `<CATEGORY> <code>: <message>`, without location.
impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.category, self.code, self.message)
    }
}

/// A message paired with the sources its range points into.
///
/// Renders `<CATEGORY> <code>: "<message>" in <path>(<line>,<column>+<length>)`
/// when the message has a range that resolves, and the plain form otherwise.
pub struct LocatedMessage<'a> {
    message: &'a DiagnosticMessage,
    sources: &'a SourceMap,
}

impl fmt::Display for LocatedMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message;
        let located = message
            .range
            .and_then(|range| Some((range, self.sources.get(range.source)?)));
        match located {
            Some((range, source)) => {
                let (line, column) = source.line_col(range.start);
                write!(
                    f,
                    "{} {}: \"{}\" in {}({line},{column}+{})",
                    message.category,
                    message.code,
                    message.message,
                    source.normalized_path(),
                    range.len(),
                )
            }
            None => fmt::Display::fmt(message, f),
        }
    }
}

#[cfg(test)]
mod tests;
