//! Source files and the source registry.
//!
//! A [`Source`] owns the text of one input file together with its path
//! variants and a lazily built line-start table. Sources are registered in a
//! [`SourceMap`] which hands out [`SourceId`]s; ranges and nodes refer to
//! their source through that id only.

use std::cell::{Cell, OnceCell};
use std::ops::Index;

use crate::ast::{Node, NodeKind, Statement};
use crate::path::{mangle_internal_path, LIBRARY_PREFIX, PATH_DELIMITER};
use crate::{Range, SourceId};

/// Sentinel terminating the line cache; larger than any valid offset.
const LINE_CACHE_SENTINEL: u32 = 0x7fff_ffff;

/// Kind of a source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceKind {
    /// User-provided file.
    User,
    /// User-provided entry file.
    UserEntry,
    /// Library-provided file.
    Library,
    /// Library-provided entry file.
    LibraryEntry,
}

/// A source file: text, path variants and line lookup.
#[derive(Debug)]
pub struct Source {
    id: SourceId,
    kind: SourceKind,
    normalized_path: String,
    internal_path: String,
    simple_path: String,
    text: String,
    statements: Vec<Statement>,
    /// Offsets of every line start, terminated by [`LINE_CACHE_SENTINEL`].
    line_cache: OnceCell<Vec<u32>>,
    /// Column remembered by the last [`Source::line_at`] call.
    line_column: Cell<u32>,
}

impl Source {
    fn new(id: SourceId, kind: SourceKind, normalized_path: String, text: String) -> Self {
        let internal_path = mangle_internal_path(&normalized_path);
        let simple_path = match internal_path.rfind(PATH_DELIMITER) {
            Some(pos) => internal_path[pos + 1..].to_owned(),
            None => internal_path.clone(),
        };
        Source {
            id,
            kind,
            normalized_path,
            internal_path,
            simple_path,
            text,
            statements: Vec::new(),
            line_cache: OnceCell::new(),
            line_column: Cell::new(1),
        }
    }

    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Full text of the file.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path as given on registration.
    #[inline]
    pub fn normalized_path(&self) -> &str {
        &self.normalized_path
    }

    /// Mangled path used as module identity.
    #[inline]
    pub fn internal_path(&self) -> &str {
        &self.internal_path
    }

    /// Last segment of the internal path.
    #[inline]
    pub fn simple_path(&self) -> &str {
        &self.simple_path
    }

    /// Byte length of the text as `u32`, saturating for oversized inputs.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Range covering the whole text.
    pub fn range(&self) -> Range {
        Range::new(self.id, 0, self.len())
    }

    /// Whether this is the native pseudo-source.
    pub fn is_native(&self) -> bool {
        self.internal_path == NATIVE_INTERNAL_PATH
    }

    /// Whether this source is part of the (standard) library.
    pub fn is_library(&self) -> bool {
        matches!(self.kind, SourceKind::Library | SourceKind::LibraryEntry)
    }

    /// Top-level statements, as appended by the parser.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn push_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    fn line_cache(&self) -> &[u32] {
        self.line_cache.get_or_init(|| {
            let bytes = self.text.as_bytes();
            let mut cache = Vec::with_capacity(bytes.len() / 32 + 2);
            cache.push(0);
            for lf in memchr::memchr_iter(b'\n', bytes) {
                cache.push(u32::try_from(lf + 1).unwrap_or(LINE_CACHE_SENTINEL));
            }
            cache.push(LINE_CACHE_SENTINEL);
            cache
        })
    }

    /// Determines the 1-based line of `pos` and remembers its column.
    ///
    /// The column is retrieved afterwards through [`Source::column_at`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not below the 31-bit offset bound.
    pub fn line_at(&self, pos: u32) -> u32 {
        let (line, column) = self.line_col(pos);
        self.line_column.set(column);
        line
    }

    /// Column remembered by the last [`Source::line_at`] call.
    pub fn column_at(&self) -> u32 {
        self.line_column.get()
    }

    /// 1-based line and column of `pos`, without touching the remembered column.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not below the 31-bit offset bound.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        assert!(
            pos < LINE_CACHE_SENTINEL,
            "position {pos} exceeds the 31-bit offset bound"
        );
        let cache = self.line_cache();
        // cache[0] == 0 <= pos and the sentinel is > pos, so the index is in 1..len.
        let index = cache.partition_point(|&start| start <= pos) - 1;
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        (line, pos - cache[index] + 1)
    }

    /// Offset of the first byte of the 1-based `line`, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let cache = self.line_cache();
        let index = (line as usize).checked_sub(1)?;
        // The sentinel is not a line.
        if index + 1 >= cache.len() {
            return None;
        }
        Some(cache[index])
    }
}

impl Node for Source {
    fn kind(&self) -> NodeKind {
        NodeKind::Source
    }

    fn range(&self) -> Range {
        Source::range(self)
    }
}

/// Normalized path of the native pseudo-source.
const NATIVE_NORMALIZED_PATH: &str = "~lib/native.ts";
const NATIVE_INTERNAL_PATH: &str = "~lib/native";
const NATIVE_TEXT: &str = "[native code]";

/// Append-only registry of sources.
///
/// Sources are never removed, so every [`SourceId`] handed out stays valid
/// for the lifetime of the map.
#[derive(Debug, Default)]
pub struct SourceMap {
    sources: Vec<Source>,
    native: Option<SourceId>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap::default()
    }

    /// Register a source and return its id.
    pub fn add(
        &mut self,
        kind: SourceKind,
        normalized_path: impl Into<String>,
        text: impl Into<String>,
    ) -> SourceId {
        let id = SourceId::from_raw(u32::try_from(self.sources.len()).unwrap_or(u32::MAX));
        self.sources
            .push(Source::new(id, kind, normalized_path.into(), text.into()));
        id
    }

    /// The native pseudo-source, registered on first use.
    pub fn native(&mut self) -> SourceId {
        if let Some(id) = self.native {
            return id;
        }
        debug_assert!(NATIVE_NORMALIZED_PATH.starts_with(LIBRARY_PREFIX));
        let id = self.add(SourceKind::LibraryEntry, NATIVE_NORMALIZED_PATH, NATIVE_TEXT);
        self.native = Some(id);
        id
    }

    pub fn get(&self, id: SourceId) -> Option<&Source> {
        self.sources.get(id.index())
    }

    pub fn get_mut(&mut self, id: SourceId) -> Option<&mut Source> {
        self.sources.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }
}

impl Index<SourceId> for SourceMap {
    type Output = Source;

    fn index(&self, id: SourceId) -> &Source {
        &self.sources[id.index()]
    }
}

#[cfg(test)]
mod tests;
