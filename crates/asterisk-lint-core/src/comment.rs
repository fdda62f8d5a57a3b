//! Comment block descriptors handed from locators to rules.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Kind of block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// Plain block comment opened with `/*`.
    Block,
    /// Documentation comment opened with `/**`.
    Doc,
}

impl CommentKind {
    /// Classifies a comment from its raw text.
    ///
    /// `/**/` is an empty plain comment, not a documentation comment.
    #[must_use]
    pub fn from_opener(text: &str) -> Self {
        if text.starts_with("/**") && !text.starts_with("/**/") {
            Self::Doc
        } else {
            Self::Block
        }
    }
}

/// Boundaries of one block comment in a source file.
///
/// Line numbers are 1-based. `end_line` is never smaller than `start_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentBlock {
    /// Line containing the comment opener.
    pub start_line: usize,
    /// Line containing the comment closer.
    pub end_line: usize,
    /// Whether this is a plain or documentation comment.
    pub kind: CommentKind,
}

impl CommentBlock {
    /// Creates a new block, clamping `end_line` up to `start_line`.
    #[must_use]
    pub fn new(start_line: usize, end_line: usize, kind: CommentKind) -> Self {
        Self {
            start_line,
            end_line: end_line.max(start_line),
            kind,
        }
    }

    /// Returns true for documentation comments.
    #[must_use]
    pub fn is_documentation(&self) -> bool {
        self.kind == CommentKind::Doc
    }

    /// Returns true if opener and closer share a line.
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Number of physical lines the block spans.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Line numbers after the opener, up to and including the closer.
    #[must_use]
    pub fn continuation_lines(&self) -> RangeInclusive<usize> {
        (self.start_line + 1)..=self.end_line
    }
}
