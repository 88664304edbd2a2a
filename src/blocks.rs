//! Block parser: splits sanitized report text into typed blocks.
//!
//! The input grammar is deliberately small. A line is a heading, a blank line,
//! part of a pipe table, or a paragraph; there is no inline markup.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One to six hashes followed by whitespace
    static ref RE_HEADING: Regex = Regex::new(r"^(#{1,6})\s+(.*)").unwrap();

    /// Header separator row such as `|---|:--:|`
    static ref RE_SEPARATOR: Regex = Regex::new(r"^\s*\|?\s*[:\-]{3,}").unwrap();
}

/// One parsed unit of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `#` to `######` heading
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Heading text without the hashes
        text: String,
    },
    /// Any other non-empty line
    Paragraph {
        /// Line text
        text: String,
    },
    /// Empty or whitespace-only line
    Blank,
    /// Consecutive pipe-delimited lines
    Table {
        /// First row
        header: Vec<String>,
        /// Remaining rows, possibly ragged
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::Blank => "blank",
            Block::Table { .. } => "table",
        }
    }
}

/// Check whether a line belongs to a table.
pub fn is_table_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Check whether a line is a header separator row.
pub fn is_separator_line(line: &str) -> bool {
    RE_SEPARATOR.is_match(line)
}

/// Split a table line into trimmed cells.
///
/// The empty segments produced by the leading and trailing pipe are dropped.
/// Empty cells between two pipes are kept, so `| a || c |` has three cells.
pub fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|cell| cell.trim().to_string()).collect();
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    cells
}

/// Parse sanitized text into blocks.
///
/// Tabs are expanded to two spaces before classification.
///
/// ```
/// use planpdf::blocks::{parse_blocks, Block};
///
/// let blocks = parse_blocks("## Woche 1\n\n| Tag | \u{dc}bung |\n|---|---|\n| Mo | Kniebeuge |");
/// assert_eq!(blocks.len(), 3);
/// assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
/// assert_eq!(blocks[1], Block::Blank);
/// assert!(matches!(&blocks[2], Block::Table { rows, .. } if rows.len() == 1));
/// ```
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<String> = text.split('\n').map(|line| line.replace('\t', "  ")).collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];

        if is_table_line(line) {
            let header = split_row(line);
            i += 1;
            if i < lines.len() && is_separator_line(&lines[i]) {
                i += 1;
            }
            let mut rows = Vec::new();
            while i < lines.len() && is_table_line(&lines[i]) {
                rows.push(split_row(&lines[i]));
                i += 1;
            }
            blocks.push(Block::Table { header, rows });
            continue;
        }

        blocks.push(parse_line(line));
        i += 1;
    }

    // A trailing newline yields one empty last segment, not a blank line
    if text.ends_with('\n') && blocks.last() == Some(&Block::Blank) {
        blocks.pop();
    }

    log::debug!("parsed {} blocks from {} lines", blocks.len(), lines.len());
    blocks
}

fn parse_line(line: &str) -> Block {
    if let Some(caps) = RE_HEADING.captures(line) {
        let level = caps[1].len() as u8;
        let text = caps[2].trim().to_string();
        return Block::Heading { level, text };
    }
    if line.trim().is_empty() {
        return Block::Blank;
    }
    Block::Paragraph {
        text: line.trim_end().to_string(),
    }
}
