//! Comments reported by the tokenizer.

use crate::ast::{Node, NodeKind};
use crate::Range;

/// Kind of a comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// Line comment: `// ...`
    Line,
    /// Triple-slash line comment: `/// ...`
    Triple,
    /// Block comment: `/* ... */`
    Block,
}

/// A comment collected while tokenizing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct CommentNode {
    pub comment_kind: CommentKind,
    /// Full text of the comment including its delimiters.
    pub text: String,
    pub range: Range,
}

impl CommentNode {
    pub fn new(comment_kind: CommentKind, text: impl Into<String>, range: Range) -> Self {
        CommentNode {
            comment_kind,
            text: text.into(),
            range,
        }
    }
}

impl Node for CommentNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }

    fn range(&self) -> Range {
        self.range
    }
}
