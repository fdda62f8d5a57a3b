//! Comment discovery trait.
//!
//! `CommentLocator` is the extension point for adding new languages. Rules
//! never scan raw text for comment delimiters themselves; the analyzer asks
//! a locator for the block comments in a file and hands each one to the rules.

use crate::comment::CommentBlock;
use thiserror::Error;

/// Errors raised while locating comments.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader error message.
        message: String,
    },

    /// The parser produced no syntax tree.
    #[error("failed to parse {language} source")]
    Parse {
        /// Language identifier.
        language: &'static str,
    },
}

/// Language-specific discovery of block comments.
pub trait CommentLocator: Send + Sync {
    /// Language identifier (e.g., `"java"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this locator handles, without the dot (e.g., `&["java"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Returns every block comment in `source`, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed at all.
    fn locate(&self, source: &str) -> Result<Vec<CommentBlock>, LocateError>;

    /// Returns true if this locator handles the given extension.
    fn handles(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }
}

/// Type alias for boxed `CommentLocator` trait objects.
pub type LocatorBox = Box<dyn CommentLocator>;
