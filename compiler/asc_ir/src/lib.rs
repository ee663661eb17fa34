//! ASC IR - front-end data model
//!
//! This crate contains the data structures shared by the tokenizer, the
//! diagnostics layer and later compiler stages:
//! - Ranges and source ids for source locations
//! - Sources and the append-only source registry
//! - Path normalization and internal path mangling
//! - Tokens and comment kinds produced by the tokenizer
//! - AST nodes (expressions, statements, declarations, types)
//! - Common flags shared by declarations and parameters
//!
//! # Design
//!
//! - **Ids, not pointers**: ranges refer to their source through a
//!   [`SourceId`] resolved by a [`SourceMap`].
//! - **Closed sum types**: [`ast::Expression`] and [`ast::Statement`] are
//!   enums; every node exposes its [`ast::NodeKind`] through [`ast::Node`].
//! - **Exclusive ownership**: parents own children; there are no back
//!   references.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod comment;
mod flags;
pub mod path;
mod range;
mod source;
mod token;

pub use comment::{CommentKind, CommentNode};
pub use flags::CommonFlags;
pub use range::{Range, RangeError, SourceId};
pub use source::{Source, SourceKind, SourceMap};
pub use token::Token;
