//! Diagnostic reporting for the front-end.
//!
//! - [`DiagnosticCode`]: stable numeric codes with message templates
//! - [`DiagnosticMessage`]: a rendered message with optional ranges
//! - [`DiagnosticEmitter`]: append-only message list that drops duplicates
//! - [`format_message`]: text rendering with optional source excerpts
//! - [`render`]: writers that print messages to a terminal

mod category;
mod code;
mod emitter;
mod format;
mod message;
pub mod render;

pub use category::DiagnosticCategory;
pub use code::DiagnosticCode;
pub use emitter::DiagnosticEmitter;
pub use format::{format_context, format_message, FormatOptions};
pub use message::{DiagnosticMessage, LocatedMessage};
