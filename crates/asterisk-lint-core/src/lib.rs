//! # asterisk-lint-core
//!
//! Core framework for comment-style linting.
//!
//! This crate provides the foundational traits and types for building
//! comment-layout lints over C-family source files. It includes:
//!
//! - [`CommentBlock`] describing one multi-line block comment
//! - [`LineSource`] for 1-based, read-only line access
//! - [`Rule`] trait for per-comment rules
//! - [`CommentLocator`] trait for language-specific comment discovery
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use asterisk_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .locator(JavaLocator::new())
//!     .rule(LeadingAsteriskAlign::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod comment;
mod config;
mod context;
mod locator;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use comment::{CommentBlock, CommentKind};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{FileContext, LineSource};
pub use locator::{CommentLocator, LocateError, LocatorBox};
pub use rule::{Rule, RuleBox};
pub use types::{
    LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic,
};
