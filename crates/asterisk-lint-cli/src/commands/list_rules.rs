//! List rules command implementation.

use asterisk_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nOptions for leading-asterisk-align:");
    println!("  offset                -1, 0 or 1 (default 0; Javadoc style is 1)");
    println!("  doc_offset            offset for /** comments (default: offset)");
    println!("  check_block_comments  inspect /* comments (default true)");
    println!("  check_doc_comments    inspect /** comments (default true)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  asterisk-lint check --rules AST001");
}
