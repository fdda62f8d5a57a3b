//! Syntax-tree walking shared by every language locator.

use asterisk_lint_core::{CommentBlock, CommentKind, LocateError};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Parses `source` with `language` and returns its block comments in source order.
///
/// Any node whose kind names a comment and whose text opens with `/*` is a
/// block comment; `//` line comments are skipped.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or parsing yields no tree.
pub fn block_comments(
    language: &Language,
    language_id: &'static str,
    source: &str,
) -> Result<Vec<CommentBlock>, LocateError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| LocateError::Language {
            language: language_id,
            message: e.to_string(),
        })?;

    let src = source.as_bytes();
    let tree = parser.parse(src, None).ok_or(LocateError::Parse {
        language: language_id,
    })?;

    let mut blocks = Vec::new();
    let mut cursor = tree.walk();

    'walk: loop {
        let node = cursor.node();
        if let Some(block) = as_block_comment(&node, src) {
            blocks.push(block);
        } else if cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    debug!(language = language_id, count = blocks.len(), "located block comments");
    Ok(blocks)
}

fn as_block_comment(node: &Node<'_>, src: &[u8]) -> Option<CommentBlock> {
    if !node.kind().contains("comment") {
        return None;
    }

    let text = node.utf8_text(src).ok()?;
    if !text.starts_with("/*") {
        return None;
    }

    Some(CommentBlock::new(
        node.start_position().row + 1,
        node.end_position().row + 1,
        CommentKind::from_opener(text),
    ))
}
