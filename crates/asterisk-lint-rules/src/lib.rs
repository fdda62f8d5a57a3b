//! # asterisk-lint-rules
//!
//! Built-in comment-style rules for asterisk-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | AST001 | `leading-asterisk-align` | Requires continuation asterisks of block comments to line up with the opener |
//!
//! ## Usage
//!
//! ```ignore
//! use asterisk_lint_core::Analyzer;
//! use asterisk_lint_rules::LeadingAsteriskAlign;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(LeadingAsteriskAlign::new().offset(1))
//!     .build()?;
//! ```
//!
//! The alignment check is also available as a plain function, [`validate`],
//! for callers that already have comment boundaries and line text at hand.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod leading_asterisk_align;
mod registry;

pub use leading_asterisk_align::{
    validate, AlignmentPolicy, LeadingAsteriskAlign, Misalignment, MisalignmentKind,
    ValidateError,
};
pub use registry::{all_rules, filter_rules, rules_from_config};

/// Re-export core types for convenience.
pub use asterisk_lint_core::{CommentBlock, CommentKind, LineSource, Rule, Severity, Violation};
