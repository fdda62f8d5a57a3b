//! Java comment locator using Tree-sitter.

use asterisk_lint_core::{CommentBlock, CommentLocator, LocateError};
use tree_sitter::Language;

/// Finds `/* */` and Javadoc `/** */` comments in Java source.
pub struct JavaLocator {
    language: Language,
}

impl JavaLocator {
    /// Creates a new Java locator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentLocator for JavaLocator {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn locate(&self, source: &str) -> Result<Vec<CommentBlock>, LocateError> {
        crate::tree::block_comments(&self.language, self.language_id(), source)
    }
}
