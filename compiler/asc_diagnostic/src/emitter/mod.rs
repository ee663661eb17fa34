//! Deduplicating diagnostic sink.
//!
//! The same diagnostic can be reported more than once for one location,
//! for instance when a scan is retried after backtracking. The emitter keeps
//! an index of what was already recorded per source and start offset and
//! silently drops structural duplicates.

use asc_ir::{Range, SourceId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{DiagnosticCategory, DiagnosticCode, DiagnosticMessage};

/// Indices into the message list, bucketed by start offset.
type SeenAtPos = FxHashMap<u32, SmallVec<[usize; 2]>>;

/// Append-only list of emitted diagnostics.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticEmitter {
    diagnostics: Vec<DiagnosticMessage>,
    seen: FxHashMap<SourceId, SeenAtPos>,
}

impl DiagnosticEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message from `code` and `args` and records it.
    ///
    /// A message with a range is dropped if an equal one (ignoring category)
    /// was already recorded at the same source and start offset. Messages
    /// without a range are always recorded.
    pub fn emit_diagnostic(
        &mut self,
        code: DiagnosticCode,
        category: DiagnosticCategory,
        range: Option<Range>,
        related_range: Option<Range>,
        args: &[&str],
    ) {
        let mut message = DiagnosticMessage::create(code, category, args);
        message.range = range;
        message.related_range = related_range;
        self.push(message);
    }

    /// Records an already built message, applying the same deduplication.
    pub fn push(&mut self, message: DiagnosticMessage) {
        if let Some(range) = message.range {
            let bucket = self
                .seen
                .entry(range.source)
                .or_default()
                .entry(range.start)
                .or_default();
            if bucket
                .iter()
                .any(|&index| self.diagnostics[index].is_duplicate_of(&message))
            {
                debug!(code = message.code.code(), ?range, "dropping duplicate diagnostic");
                return;
            }
            bucket.push(self.diagnostics.len());
        }
        self.diagnostics.push(message);
    }

    pub fn pedantic(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        args: &[&str],
    ) {
        self.emit_diagnostic(code, DiagnosticCategory::Pedantic, range.into(), None, args);
    }

    pub fn pedantic_related(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        related_range: Range,
        args: &[&str],
    ) {
        self.emit_diagnostic(
            code,
            DiagnosticCategory::Pedantic,
            range.into(),
            Some(related_range),
            args,
        );
    }

    pub fn info(&mut self, code: DiagnosticCode, range: impl Into<Option<Range>>, args: &[&str]) {
        self.emit_diagnostic(code, DiagnosticCategory::Info, range.into(), None, args);
    }

    pub fn info_related(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        related_range: Range,
        args: &[&str],
    ) {
        self.emit_diagnostic(
            code,
            DiagnosticCategory::Info,
            range.into(),
            Some(related_range),
            args,
        );
    }

    pub fn warning(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        args: &[&str],
    ) {
        self.emit_diagnostic(code, DiagnosticCategory::Warning, range.into(), None, args);
    }

    pub fn warning_related(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        related_range: Range,
        args: &[&str],
    ) {
        self.emit_diagnostic(
            code,
            DiagnosticCategory::Warning,
            range.into(),
            Some(related_range),
            args,
        );
    }

    pub fn error(&mut self, code: DiagnosticCode, range: impl Into<Option<Range>>, args: &[&str]) {
        self.emit_diagnostic(code, DiagnosticCategory::Error, range.into(), None, args);
    }

    pub fn error_related(
        &mut self,
        code: DiagnosticCode,
        range: impl Into<Option<Range>>,
        related_range: Range,
        args: &[&str],
    ) {
        self.emit_diagnostic(
            code,
            DiagnosticCategory::Error,
            range.into(),
            Some(related_range),
            args,
        );
    }

    /// Messages in emission order.
    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
        self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests;
