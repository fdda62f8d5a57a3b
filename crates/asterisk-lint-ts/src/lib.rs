//! # asterisk-lint-ts
//!
//! Tree-sitter based comment locators.
//!
//! Each locator parses one language and reports the block comments it finds
//! as [`CommentBlock`](asterisk_lint_core::CommentBlock)s, so rules never
//! scan raw text for `/*` themselves.
//!
//! - [`JavaLocator`] for `.java` files
//! - [`KotlinLocator`] for `.kt` and `.kts` files
//!
//! [`default_locators`] returns one of each, ready to hand to an
//! [`AnalyzerBuilder`](asterisk_lint_core::AnalyzerBuilder).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod java;
pub mod kotlin;
mod tree;

pub use java::JavaLocator;
pub use kotlin::KotlinLocator;

use asterisk_lint_core::LocatorBox;

/// Returns every built-in locator.
#[must_use]
pub fn default_locators() -> Vec<LocatorBox> {
    vec![Box::new(JavaLocator::new()), Box::new(KotlinLocator::new())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locators_cover_java_and_kotlin() {
        let locators = default_locators();
        let ids: Vec<_> = locators.iter().map(|l| l.language_id()).collect();
        assert_eq!(ids, vec!["java", "kotlin"]);
        assert!(locators.iter().any(|l| l.handles("kts")));
    }
}
