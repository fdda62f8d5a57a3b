//! Rule registry: builds rule instances by name, code, or configuration.

use crate::leading_asterisk_align::{self, LeadingAsteriskAlign};
use asterisk_lint_core::{Config, RuleBox, RuleConfig};

type Factory = fn(&RuleConfig) -> RuleBox;

/// Every built-in rule as `(name, code, factory)`.
const REGISTRY: &[(&str, &str, Factory)] = &[(
    leading_asterisk_align::NAME,
    leading_asterisk_align::CODE,
    build_leading_asterisk_align,
)];

fn build_leading_asterisk_align(config: &RuleConfig) -> RuleBox {
    Box::new(LeadingAsteriskAlign::from_config(config))
}

fn build(factory: Factory, name: &str, config: &Config) -> RuleBox {
    match config.rule(name) {
        Some(rule_config) => factory(rule_config),
        None => factory(&RuleConfig::default()),
    }
}

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    rules_from_config(&Config::default())
}

/// Returns all available rules, each built from its `[rules.<name>]` table.
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    REGISTRY
        .iter()
        .map(|(name, _, factory)| build(*factory, name, config))
        .collect()
}

/// Returns the rules matching `names`, which may be rule names or codes.
///
/// Unknown names are logged and skipped.
#[must_use]
pub fn filter_rules(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules = Vec::new();

    for wanted in names {
        match REGISTRY
            .iter()
            .find(|(name, code, _)| name == wanted || code == wanted)
        {
            Some((name, _, factory)) => rules.push(build(*factory, name, config)),
            None => tracing::warn!("Unknown rule: {}", wanted),
        }
    }

    rules
}
