//! Rule to keep the leading asterisks of a block comment in one column.
//!
//! # Rationale
//!
//! Multi-line block and documentation comments read as a single unit when
//! every continuation line's `*` sits in a fixed column relative to the
//! opener. Drifting asterisks usually come from copy-paste or re-indentation
//! and make the comment look broken in review.
//!
//! # Detected Patterns
//!
//! The opener line fixes the reference column: the column of `/` when the
//! first `*` on that line directly follows it, else the column of the first
//! `*`, even when that asterisk belongs to code before the opener. Every
//! later line of the comment, closer included, must have its first `*` at
//! the reference column plus the configured offset:
//!
//! ```text
//!   /**          <- reference column 2
//!    * ok        <- column 3, accepted with offset = 1
//!     * drifted  <- column 4, flagged
//!   text         <- no asterisk, flagged
//!    */
//! ```
//!
//! Columns are counted in characters, so multi-byte text before the
//! asterisk counts once per character.
//!
//! # Configuration
//!
//! - `offset`: column offset relative to the opener, one of `-1`, `0`, `1`
//!   (default: `0`; anything else falls back to `0`)
//! - `doc_offset`: separate offset for `/** */` comments (default: `offset`)
//! - `check_block_comments`: inspect `/* */` comments (default: true)
//! - `check_doc_comments`: inspect `/** */` comments (default: true)

use asterisk_lint_core::{
    CommentBlock, CommentKind, FileContext, LineSource, Location, Rule, RuleConfig, Severity,
    Suggestion, Violation,
};
use thiserror::Error;
use tracing::{debug, error};

/// Rule code for leading-asterisk-align.
pub const CODE: &str = "AST001";

/// Rule name for leading-asterisk-align.
pub const NAME: &str = "leading-asterisk-align";

/// Message attached to every misaligned line.
pub const MESSAGE: &str = "leading asterisk is misaligned";

/// Column offset that continuation asterisks must keep from the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignmentPolicy {
    delta: i8,
}

impl AlignmentPolicy {
    /// Continuation asterisks in the opener's column.
    pub const ALIGNED: Self = Self { delta: 0 };
    /// Continuation asterisks one column left of the opener.
    pub const LEFT: Self = Self { delta: -1 };
    /// Continuation asterisks one column right of the opener (Javadoc style).
    pub const RIGHT: Self = Self { delta: 1 };

    /// Creates a policy from a requested offset.
    ///
    /// Offsets outside `-1..=1` fall back to [`AlignmentPolicy::ALIGNED`].
    #[must_use]
    pub fn new(requested: i64) -> Self {
        match requested {
            -1 => Self::LEFT,
            1 => Self::RIGHT,
            0 => Self::ALIGNED,
            other => {
                debug!("Unsupported asterisk offset {other}, using 0");
                Self::ALIGNED
            }
        }
    }

    /// The column offset, always `-1`, `0` or `1`.
    #[must_use]
    pub fn delta(self) -> i64 {
        i64::from(self.delta)
    }

    /// Column the continuation asterisks must occupy, or `None` when it
    /// would fall left of the first column.
    #[must_use]
    pub fn expected_column(self, anchor_column: usize) -> Option<usize> {
        let anchor = i64::try_from(anchor_column).ok()?;
        usize::try_from(anchor + self.delta()).ok()
    }
}

/// What is wrong with a continuation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MisalignmentKind {
    /// The first `*` is missing or sits in the wrong column.
    AsteriskMisaligned,
}

/// A continuation line whose leading asterisk is out of place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Misalignment {
    /// Line number (1-indexed).
    pub line: usize,
    /// Kind of finding.
    pub kind: MisalignmentKind,
    /// Column (0-indexed, in characters) where the asterisk belongs.
    /// `None` when the policy points left of the first column.
    pub expected_column: Option<usize>,
    /// Column (0-indexed, in characters) of the first asterisk, if any.
    pub actual_column: Option<usize>,
}

/// Errors from [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The block reaches past the available source lines.
    #[error("comment spans lines {start}..={end} but only {available} line(s) are available")]
    LineOutOfRange {
        /// First line of the block.
        start: usize,
        /// Last line of the block.
        end: usize,
        /// Number of lines the source provides.
        available: usize,
    },
}

/// Column of the first `*` in `line`, counted in characters.
fn asterisk_column(line: &str) -> Option<usize> {
    line.chars().position(|c| c == '*')
}

/// Reference column of an opener line.
///
/// When the first `*` belongs to a `/*` opener, the opener's `/` column is
/// the reference.
fn anchor_column(line: &str) -> Option<usize> {
    let mut previous = None;
    for (column, c) in line.chars().enumerate() {
        if c == '*' {
            return Some(if previous == Some('/') { column - 1 } else { column });
        }
        previous = Some(c);
    }
    None
}

/// Checks the leading asterisks of one comment block.
///
/// Returns one [`Misalignment`] per continuation line whose first `*` is
/// missing or not at the opener's reference column plus `policy`'s offset,
/// in ascending line order. Single-line comments and openers without any `*`
/// produce no findings.
///
/// # Errors
///
/// Returns [`ValidateError::LineOutOfRange`] if `lines` does not cover every
/// line of the block.
pub fn validate<L>(
    block: &CommentBlock,
    lines: &L,
    policy: AlignmentPolicy,
) -> Result<Vec<Misalignment>, ValidateError>
where
    L: LineSource + ?Sized,
{
    let out_of_range = || ValidateError::LineOutOfRange {
        start: block.start_line,
        end: block.end_line,
        available: lines.line_count(),
    };

    if block.start_line == 0 || block.end_line > lines.line_count() {
        return Err(out_of_range());
    }

    if block.is_single_line() {
        return Ok(Vec::new());
    }

    let anchor = lines.line(block.start_line).ok_or_else(out_of_range)?;
    let Some(reference) = anchor_column(anchor) else {
        debug!(
            "Opener on line {} has no asterisk, skipping comment",
            block.start_line
        );
        return Ok(Vec::new());
    };

    let expected_column = policy.expected_column(reference);
    let mut found = Vec::new();

    for number in block.continuation_lines() {
        let content = lines.line(number).ok_or_else(out_of_range)?;
        let actual_column = asterisk_column(content);

        if actual_column.is_none() || actual_column != expected_column {
            found.push(Misalignment {
                line: number,
                kind: MisalignmentKind::AsteriskMisaligned,
                expected_column,
                actual_column,
            });
        }
    }

    Ok(found)
}

/// Requires the leading asterisks of block comments to line up.
#[derive(Debug, Clone)]
pub struct LeadingAsteriskAlign {
    /// Custom severity.
    pub severity: Severity,
    /// Offset applied to plain block comments.
    pub policy: AlignmentPolicy,
    /// Offset applied to documentation comments; `None` uses `policy`.
    pub doc_policy: Option<AlignmentPolicy>,
    /// Inspect `/* */` comments.
    pub check_block_comments: bool,
    /// Inspect `/** */` comments.
    pub check_doc_comments: bool,
}

impl Default for LeadingAsteriskAlign {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadingAsteriskAlign {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            policy: AlignmentPolicy::ALIGNED,
            doc_policy: None,
            check_block_comments: true,
            check_doc_comments: true,
        }
    }

    /// Creates a rule from its `[rules.leading-asterisk-align]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new()
            .offset(config.get_int("offset", 0))
            .check_block_comments(config.get_bool("check_block_comments", true))
            .check_doc_comments(config.get_bool("check_doc_comments", true));
        if let Some(doc_offset) = config.get_int_opt("doc_offset") {
            rule = rule.doc_offset(doc_offset);
        }
        rule
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the offset for all comments (normalized to `-1..=1`).
    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.policy = AlignmentPolicy::new(offset);
        self
    }

    /// Sets a separate offset for documentation comments.
    #[must_use]
    pub fn doc_offset(mut self, offset: i64) -> Self {
        self.doc_policy = Some(AlignmentPolicy::new(offset));
        self
    }

    /// Sets whether plain block comments are inspected.
    #[must_use]
    pub fn check_block_comments(mut self, check: bool) -> Self {
        self.check_block_comments = check;
        self
    }

    /// Sets whether documentation comments are inspected.
    #[must_use]
    pub fn check_doc_comments(mut self, check: bool) -> Self {
        self.check_doc_comments = check;
        self
    }

    /// The policy used for comments of `kind`.
    #[must_use]
    pub fn policy_for(&self, kind: CommentKind) -> AlignmentPolicy {
        match kind {
            CommentKind::Block => self.policy,
            CommentKind::Doc => self.doc_policy.unwrap_or(self.policy),
        }
    }

    fn inspects(&self, kind: CommentKind) -> bool {
        match kind {
            CommentKind::Block => self.check_block_comments,
            CommentKind::Doc => self.check_doc_comments,
        }
    }

    fn to_violation(&self, ctx: &FileContext, finding: &Misalignment) -> Violation {
        let column = finding.actual_column.map_or(1, |c| c + 1);
        let location = Location::new(ctx.relative_path.clone(), finding.line, column)
            .with_span(ctx.offset_for(finding.line, column), 1);

        let help = match finding.expected_column {
            Some(expected) => format!("Move the leading `*` to column {}", expected + 1),
            None => "Shift the comment right so its asterisks can line up".to_string(),
        };

        Violation::new(CODE, NAME, self.severity, location, MESSAGE)
            .with_suggestion(Suggestion::new(help))
    }
}

impl Rule for LeadingAsteriskAlign {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires leading asterisks of block comments to line up with the opener"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, block: &CommentBlock) -> Vec<Violation> {
        if !self.inspects(block.kind) {
            return Vec::new();
        }

        match validate(block, ctx, self.policy_for(block.kind)) {
            Ok(found) => found
                .iter()
                .map(|finding| self.to_violation(ctx, finding))
                .collect(),
            Err(e) => {
                error!("{}: {e}", ctx.relative_path.display());
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn block(start: usize, end: usize) -> CommentBlock {
        CommentBlock::new(start, end, CommentKind::Doc)
    }

    fn lines_of(found: &[Misalignment]) -> Vec<usize> {
        found.iter().map(|m| m.line).collect()
    }

    fn check_code(rule: &LeadingAsteriskAlign, code: &str, blocks: &[CommentBlock]) -> Vec<Violation> {
        let ctx = FileContext::new(Path::new("Test.java"), code, Path::new("."));
        blocks.iter().flat_map(|b| rule.check(&ctx, b)).collect()
    }

    #[test]
    fn policy_normalizes_out_of_range_offsets() {
        assert_eq!(AlignmentPolicy::new(-1).delta(), -1);
        assert_eq!(AlignmentPolicy::new(0).delta(), 0);
        assert_eq!(AlignmentPolicy::new(1).delta(), 1);
        assert_eq!(AlignmentPolicy::new(2), AlignmentPolicy::ALIGNED);
        assert_eq!(AlignmentPolicy::new(-7), AlignmentPolicy::ALIGNED);
        assert_eq!(AlignmentPolicy::new(i64::MAX), AlignmentPolicy::ALIGNED);
        assert_eq!(AlignmentPolicy::default(), AlignmentPolicy::ALIGNED);
    }

    #[test]
    fn anchor_is_the_opener_column() {
        assert_eq!(anchor_column("  /**"), Some(2));
        assert_eq!(anchor_column("/*"), Some(0));
        assert_eq!(anchor_column("int x; /* trailing"), Some(7));
        assert_eq!(anchor_column("   * continued"), Some(3));
        assert_eq!(anchor_column("no comment"), None);
    }

    #[test]
    fn expected_column_never_goes_negative() {
        assert_eq!(AlignmentPolicy::LEFT.expected_column(0), None);
        assert_eq!(AlignmentPolicy::LEFT.expected_column(4), Some(3));
        assert_eq!(AlignmentPolicy::RIGHT.expected_column(4), Some(5));
    }

    #[test]
    fn right_offset_accepts_javadoc_style() {
        let lines = ["  /**", "   * foo", "   * foo"];
        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::RIGHT).unwrap();
        assert!(found.is_empty());

        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(lines_of(&found), vec![2, 3]);
        assert_eq!(found[0].expected_column, Some(2));
        assert_eq!(found[0].actual_column, Some(3));
    }

    #[test]
    fn missing_asterisk_is_flagged() {
        let lines = ["/*", "bar"];
        let found = validate(&block(1, 2), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].kind, MisalignmentKind::AsteriskMisaligned);
        assert_eq!(found[0].actual_column, None);
    }

    #[test]
    fn single_deviation_is_localized() {
        let lines = [
            "    /*",
            "    * one",
            "    * two",
            "     * three",
            "    */",
        ];
        let found = validate(&block(1, 5), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(lines_of(&found), vec![4]);
    }

    #[test]
    fn single_line_comment_never_violates() {
        let lines = ["int x; /* note */"];
        for delta in -1..=1 {
            let found = validate(&block(1, 1), &lines[..], AlignmentPolicy::new(delta)).unwrap();
            assert!(found.is_empty());
        }
    }

    #[test]
    fn opener_without_asterisk_is_skipped() {
        let lines = ["no opener here", "   * a", "  x"];
        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn uniform_shift_matches_only_its_own_policy() {
        let anchor = "    /**";
        for k in -1_i64..=1 {
            let pad = " ".repeat(usize::try_from(4 + k).unwrap());
            let lines = vec![
                anchor.to_string(),
                format!("{pad}* a"),
                format!("{pad}* b"),
                format!("{pad}*/"),
            ];
            for delta in -1_i64..=1 {
                let found = validate(&block(1, 4), &lines, AlignmentPolicy::new(delta)).unwrap();
                if delta == k {
                    assert!(found.is_empty(), "k={k} delta={delta}");
                } else {
                    assert_eq!(lines_of(&found), vec![2, 3, 4], "k={k} delta={delta}");
                }
            }
        }
    }

    #[test]
    fn left_offset_at_first_column_flags_everything() {
        let lines = ["/*", "* a", " */"];
        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::LEFT).unwrap();
        assert_eq!(lines_of(&found), vec![2, 3]);
        assert_eq!(found[0].expected_column, None);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let lines = ["é/**", "é*", "é *"];
        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(lines_of(&found), vec![3]);
        assert_eq!(found[0].expected_column, Some(1));
        assert_eq!(found[0].actual_column, Some(2));
    }

    #[test]
    fn validation_is_idempotent() {
        let lines = ["  /*", "  * a", "   * b", "  x", "  */"];
        let first = validate(&block(1, 5), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        let second = validate(&block(1, 5), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(first, second);
        assert_eq!(lines_of(&first), vec![3, 4]);
    }

    #[test]
    fn block_past_end_of_source_is_an_error() {
        let lines = ["/*", " *"];
        let err = validate(&block(1, 3), &lines[..], AlignmentPolicy::ALIGNED).unwrap_err();
        assert_eq!(
            err,
            ValidateError::LineOutOfRange {
                start: 1,
                end: 3,
                available: 2
            }
        );
        assert!(validate(&block(0, 1), &lines[..], AlignmentPolicy::ALIGNED).is_err());
    }

    #[test]
    fn rule_reports_located_violations() {
        let code = "class A {\n  /**\n  * a\n   * b\n  */\n}\n";
        let violations = check_code(&LeadingAsteriskAlign::new(), code, &[block(2, 5)]);

        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, CODE);
        assert_eq!(v.rule, NAME);
        assert_eq!(v.message, MESSAGE);
        assert_eq!(v.location.line, 4);
        assert_eq!(v.location.column, 4);
        assert_eq!(v.location.offset, code.find("   * b").unwrap() + 3);
        assert_eq!(
            v.suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Move the leading `*` to column 3")
        );
    }

    #[test]
    fn rule_uses_doc_offset_only_for_doc_comments() {
        let code = "/**\n * doc\n */\n/*\n * plain\n */\n";
        let blocks = [
            CommentBlock::new(1, 3, CommentKind::Doc),
            CommentBlock::new(4, 6, CommentKind::Block),
        ];

        let rule = LeadingAsteriskAlign::new().doc_offset(1);
        let violations = check_code(&rule, code, &blocks);
        let lines: Vec<usize> = violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![5, 6]);
    }

    #[test]
    fn rule_skips_disabled_comment_kinds() {
        let code = "/*\n   * a\n */\n";
        let blocks = [CommentBlock::new(1, 3, CommentKind::Block)];

        let strict = check_code(&LeadingAsteriskAlign::new(), code, &blocks);
        assert_eq!(strict.len(), 2);

        let doc_only = LeadingAsteriskAlign::new().check_block_comments(false);
        assert!(check_code(&doc_only, code, &blocks).is_empty());
    }

    #[test]
    fn rule_swallows_out_of_range_blocks() {
        let violations = check_code(&LeadingAsteriskAlign::new(), "/*\n", &[block(1, 4)]);
        assert!(violations.is_empty());
    }

    #[test]
    fn from_config_reads_options() {
        let mut config = RuleConfig::default();
        config.set_option("offset", 1_i64);
        config.set_option("doc_offset", 5_i64);
        config.set_option("check_block_comments", false);
        config.severity = Some(Severity::Warning);

        let rule = LeadingAsteriskAlign::from_config(&config);
        assert_eq!(rule.policy, AlignmentPolicy::RIGHT);
        // Out-of-range doc offset falls back to aligned, not to `offset`.
        assert_eq!(rule.policy_for(CommentKind::Doc), AlignmentPolicy::ALIGNED);
        assert_eq!(rule.policy_for(CommentKind::Block), AlignmentPolicy::RIGHT);
        assert!(!rule.check_block_comments);
        assert!(rule.check_doc_comments);
        // Severity overrides are the analyzer's job.
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn asterisk_in_code_before_opener_is_the_reference() {
        let lines = [
            "  int a = b * c; /* note",
            "                  * more",
            "                  */",
        ];
        let found = validate(&block(1, 3), &lines[..], AlignmentPolicy::ALIGNED).unwrap();
        assert_eq!(lines_of(&found), vec![2, 3]);
        assert_eq!(found[0].expected_column, Some(12));
        assert_eq!(found[0].actual_column, Some(18));
    }

    #[test]
    fn doc_policy_defaults_to_block_policy() {
        let rule = LeadingAsteriskAlign::new().offset(-1);
        assert_eq!(rule.policy_for(CommentKind::Doc), AlignmentPolicy::LEFT);
    }

    #[test]
    fn violations_render_compactly() {
        let code = "/*\n * a\nb\n */\n";
        let blocks = [CommentBlock::new(1, 4, CommentKind::Block)];
        let rendered: Vec<String> = check_code(&LeadingAsteriskAlign::new(), code, &blocks)
            .iter()
            .map(ToString::to_string)
            .collect();

        insta::assert_snapshot!(rendered.join("\n"), @r"
        Test.java:2:2: error [AST001] leading asterisk is misaligned
        Test.java:3:1: error [AST001] leading asterisk is misaligned
        Test.java:4:2: error [AST001] leading asterisk is misaligned
        ");
    }
}
