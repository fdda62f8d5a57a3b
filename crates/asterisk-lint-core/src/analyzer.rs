//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::locator::{CommentLocator, LocateError, LocatorBox};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the source tree.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Comment discovery failed for a file.
    #[error("Failed to locate comments in {path}: {source}")]
    Locate {
        /// Path to the file that failed.
        path: PathBuf,
        /// Underlying locator error.
        source: LocateError,
    },

    /// No registered locator handles this file's extension.
    #[error("No comment locator handles {0}")]
    UnsupportedFile(PathBuf),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    locators: Vec<LocatorBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_locate_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a comment locator to the analyzer.
    #[must_use]
    pub fn locator<L: CommentLocator + 'static>(mut self, locator: L) -> Self {
        self.locators.push(Box::new(locator));
        self
    }

    /// Adds a boxed comment locator to the analyzer.
    #[must_use]
    pub fn locator_box(mut self, locator: LocatorBox) -> Self {
        self.locators.push(locator);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether a file whose comments cannot be located aborts the run (default: false).
    #[must_use]
    pub fn fail_on_locate_error(mut self, fail: bool) -> Self {
        self.fail_on_locate_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let excludes = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            locators: self.locators,
            excludes,
            config,
            fail_on_locate_error: self.fail_on_locate_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    locators: Vec<LocatorBox>,
    excludes: Vec<glob::Pattern>,
    config: Config,
    fail_on_locate_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files under the root and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if comment
    /// discovery fails while `fail_on_locate_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        let outcomes: Vec<Result<LintResult, AnalyzerError>> =
            match self.config.analyzer.parallelism {
                Some(threads) if threads > 1 => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()?;
                    pool.install(|| files.par_iter().map(|f| self.analyze_file(f)).collect())
                }
                _ => files.iter().map(|f| self.analyze_file(f)).collect(),
            };

        let mut result = LintResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(file_result) => result.extend(file_result),
                Err(AnalyzerError::Locate { path, source }) => {
                    warn!("Failed to locate comments in {}: {}", path.display(), source);
                    if self.fail_on_locate_error {
                        return Err(AnalyzerError::Locate { path, source });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} comments across {} files",
            result.violations.len(),
            result.comments_checked,
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes in-memory source as if it were the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if no locator handles the file's extension or the
    /// locator fails.
    pub fn analyze_source(&self, path: &Path, source: &str) -> Result<LintResult, AnalyzerError> {
        let locator = self
            .locator_for(path)
            .ok_or_else(|| AnalyzerError::UnsupportedFile(path.to_path_buf()))?;

        let blocks = locator
            .locate(source)
            .map_err(|e| AnalyzerError::Locate {
                path: path.to_path_buf(),
                source: e,
            })?;

        let ctx = FileContext::new(path, source, &self.root);
        let mut result = LintResult::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let mut rule_violations = Vec::new();
            for block in &blocks {
                rule_violations.extend(rule.check(&ctx, block));
            }
            result
                .violations
                .extend(self.apply_severity_override(rule.name(), rule_violations));
        }

        result.files_checked = 1;
        result.comments_checked = blocks.len();
        Ok(result)
    }

    /// Reads and analyzes a single file.
    fn analyze_file(&self, path: &Path) -> Result<LintResult, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!("Skipping non-UTF-8 file: {}", path.display());
                return Ok(LintResult::new());
            }
            Err(e) => return Err(e.into()),
        };
        self.analyze_source(path, &content)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Finds the locator responsible for a path, by extension.
    fn locator_for(&self, path: &Path) -> Option<&dyn CommentLocator> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        self.locators
            .iter()
            .find(|l| l.handles(ext))
            .map(AsRef::as_ref)
    }

    /// Discovers all source files a registered locator can handle.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || self.locator_for(path).is_none() {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes.iter().any(|pattern| pattern.matches(&path_str))
    }
}
