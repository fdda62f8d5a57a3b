//! Rule trait for defining comment lint rules.

use crate::comment::CommentBlock;
use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A lint rule evaluated once per block comment.
///
/// Rules receive the file context (which implements
/// [`LineSource`](crate::LineSource)) and the boundaries of a single
/// comment. Each invocation is independent of every other, so the analyzer
/// is free to run them in any order or in parallel.
///
/// # Example
///
/// ```ignore
/// use asterisk_lint_core::{CommentBlock, FileContext, Rule, Violation};
///
/// pub struct NoEmptyComments;
///
/// impl Rule for NoEmptyComments {
///     fn name(&self) -> &'static str { "no-empty-comments" }
///     fn code(&self) -> &'static str { "AST100" }
///
///     fn check(&self, ctx: &FileContext, block: &CommentBlock) -> Vec<Violation> {
///         // inspect ctx.line(n) for n in block.start_line..=block.end_line
///         vec![]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "leading-asterisk-align").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "AST001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single comment block and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file containing the comment
    /// * `block` - Boundaries of the comment
    ///
    /// # Returns
    ///
    /// Violations in ascending line order.
    fn check(&self, ctx: &FileContext, block: &CommentBlock) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
