//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Read-only, 1-based access to the physical lines of a source file.
///
/// Rules only see source text through this trait, so they can be driven
/// by in-memory line arrays as easily as by a file on disk.
pub trait LineSource {
    /// Returns the text of line `number` (1-indexed), without its line ending.
    ///
    /// Returns `None` for line 0 or past the last line.
    fn line(&self, number: usize) -> Option<&str>;

    /// Number of lines available.
    fn line_count(&self) -> usize;
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.get(index))
            .map(AsRef::as_ref)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line(&self, number: usize) -> Option<&str> {
        self.as_slice().line(number)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

/// Context provided to per-comment rules.
///
/// Holds the file being analyzed, split into lines once so every comment
/// block in the file shares the same line index.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// File contents split into lines (`\n` and `\r\n` endings stripped).
    ///
    /// A leading byte-order mark is not part of line 1, since it occupies
    /// no visual column.
    pub lines: Vec<&'a str>,
}

const BYTE_ORDER_MARK: char = '\u{feff}';

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            content,
            relative_path,
            lines: content
                .strip_prefix(BYTE_ORDER_MARK)
                .unwrap_or(content)
                .lines()
                .collect(),
        }
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// Columns match [`LineSource::line`], so a leading byte-order mark is
    /// skipped on line 1 but still counted in the returned offset.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number, counted in characters
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or the file length if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let text = self.content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(self.content);
        let mut offset = self.content.len() - text.len();
        for (i, line_content) in text.split_inclusive('\n').enumerate() {
            if i + 1 == line {
                let within = line_content
                    .char_indices()
                    .nth(column.saturating_sub(1))
                    .map_or(line_content.len(), |(byte, _)| byte);
                return offset + within;
            }
            offset += line_content.len();
        }

        offset
    }
}

impl LineSource for FileContext<'_> {
    fn line(&self, number: usize) -> Option<&str> {
        self.lines.line(number)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}
