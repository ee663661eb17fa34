//! Tokenizer for the asc front-end.
//!
//! The [`Tokenizer`] produces one [`Token`](asc_ir::Token) at a time on
//! demand. Tokens carry no payload: once a literal kind is seen, the caller
//! extracts its value with `read_identifier`, `read_string`, `read_integer`
//! or `read_float` from the tokenizer's current position.
//!
//! Lexical errors never abort a scan. They are recorded as diagnostics in
//! the tokenizer's [`DiagnosticEmitter`](asc_diagnostic::DiagnosticEmitter)
//! and scanning continues past the offending input.

mod keywords;
mod tokenizer;

use std::sync::Once;

pub use keywords::{is_illegal_variable_identifier, keyword_token};
pub use tokenizer::{
    CommentHandler, IdentifierHandling, State, TemplatePart, TemplateReader, Tokenizer,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=asc_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
