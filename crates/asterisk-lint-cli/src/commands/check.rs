//! Check command implementation.

use anyhow::{Context, Result};
use asterisk_lint_core::{Analyzer, Config};
use asterisk_lint_rules::{filter_rules, leading_asterisk_align, rules_from_config};
use asterisk_lint_ts::default_locators;
use std::path::Path;

use crate::config_resolver;
use crate::OutputFormat;

/// Flags of the `check` subcommand.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Offset override for `leading-asterisk-align`.
    pub offset: Option<i64>,
}

/// Runs the check command.
pub fn run(path: &Path, config_path: Option<&Path>, options: CheckOptions) -> Result<()> {
    let root = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    };

    let source = config_resolver::resolve(root, config_path);
    let mut config = config_resolver::load(&source)?;
    if let Some(offset) = options.offset {
        apply_offset(&mut config, offset);
    }

    let rules = match &options.rules {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names, &config)
        }
        None => rules_from_config(&config),
    };
    let fail_on = config.fail_on();

    let mut builder = Analyzer::builder()
        .root(root)
        .excludes(options.exclude)
        .config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    for locator in default_locators() {
        builder = builder.locator_box(locator);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let outcome = if path.is_file() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file = std::env::current_dir()?.join(path);
        analyzer.analyze_source(&file, &content)
    } else {
        analyzer.analyze()
    };
    let result = outcome.context("Analysis failed")?;

    super::output::print(&result, options.format, root)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Overrides the configured offset of the alignment rule.
fn apply_offset(config: &mut Config, offset: i64) {
    config
        .rules
        .entry(leading_asterisk_align::NAME.to_string())
        .or_default()
        .set_option("offset", offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_flag_overrides_config_file() {
        let mut config = Config::parse(
            r#"
[rules.leading-asterisk-align]
offset = 0
severity = "warning"
"#,
        )
        .unwrap();

        apply_offset(&mut config, 1);

        let rule = config.rule("leading-asterisk-align").unwrap();
        assert_eq!(rule.get_int("offset", 0), 1);
        assert!(rule.severity.is_some());
    }

    #[test]
    fn offset_flag_creates_missing_rule_table() {
        let mut config = Config::default();
        apply_offset(&mut config, -1);
        assert_eq!(
            config.rule("leading-asterisk-align").unwrap().get_int("offset", 0),
            -1
        );
        assert!(config.is_rule_enabled("leading-asterisk-align"));
    }
}
