//! Kotlin comment locator using Tree-sitter.

use asterisk_lint_core::{CommentBlock, CommentLocator, LocateError};
use tree_sitter::Language;

/// Finds `/* */` and KDoc `/** */` comments in Kotlin source.
pub struct KotlinLocator {
    language: Language,
}

impl KotlinLocator {
    /// Creates a new Kotlin locator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }
}

impl Default for KotlinLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentLocator for KotlinLocator {
    fn language_id(&self) -> &'static str {
        "kotlin"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["kt", "kts"]
    }

    fn locate(&self, source: &str) -> Result<Vec<CommentBlock>, LocateError> {
        crate::tree::block_comments(&self.language, self.language_id(), source)
    }
}
