//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# asterisk-lint configuration

# Lowest severity that makes `asterisk-lint check` exit with status 1
# fail_on = "error"

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/build/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads for file analysis (unset: single-threaded)
# parallelism = 4

[rules.leading-asterisk-align]
enabled = true
# severity = "warning"

# Column of each leading `*` relative to the opener's `/`: -1, 0 or 1.
# Javadoc style (`/**` then ` *`) is 1.
offset = 1

# Separate offset for /** comments (defaults to `offset`)
# doc_offset = 1

check_block_comments = true
check_doc_comments = true
"#;

const CONFIG_FILE: &str = "asterisk-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Adjust the offset to your comment style");
    println!("  2. Run: asterisk-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterisk_lint_core::Config;

    #[test]
    fn template_parses_as_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let rule = config.rule("leading-asterisk-align").unwrap();
        assert_eq!(rule.get_int("offset", 0), 1);
        assert!(rule.get_bool("check_doc_comments", false));
        assert!(config.analyzer.respect_gitignore);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
