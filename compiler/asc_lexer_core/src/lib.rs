//! Low-level scanning primitives for the asc tokenizer.
//!
//! This crate has no `asc_*` dependencies. It provides:
//! - [`chars`]: character classification (line breaks, white space, digits,
//!   identifier characters)
//! - [`Cursor`]: a `Copy` byte cursor over source text with
//!   memchr-accelerated skipping of comment bodies and line-break searches
//!
//! Positions are byte offsets into the source text.

pub mod chars;
mod cursor;

pub use cursor::{has_line_break, Cursor};
