//! Types shared by the line tokenizer and the comment extractor.

use serde::Serialize;

/// Kind of marker found by the line tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    SingleLine,
    MultiLineStart,
    MultiLineEnd,
    SingleQuote,
    DoubleQuote,
    Backtick,
}

impl TokenKind {
    pub fn is_quote(self) -> bool {
        matches!(
            self,
            TokenKind::SingleQuote | TokenKind::DoubleQuote | TokenKind::Backtick
        )
    }
}

/// A marker occurrence within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the marker within the line.
    pub position: usize,
    /// Byte length of the matched marker.
    pub len: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.position + self.len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

/// Marker text that delimits a comment. `end` is empty for line comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentFormat {
    pub start: String,
    pub end: String,
}

/// Half-open byte range `[start, end)` within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentContentLine {
    /// 1-based line number.
    pub line: usize,
    pub column: Column,
    pub value: String,
}

/// One comment found in a source file.
///
/// A single-line comment has exactly one content line. A multi-line comment
/// has one or more, with contiguous ascending line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub format: CommentFormat,
    pub content: Vec<CommentContentLine>,
}

impl Comment {
    pub fn start_line(&self) -> usize {
        self.content.first().map_or(0, |line| line.line)
    }

    pub fn end_line(&self) -> usize {
        self.content.last().map_or(0, |line| line.line)
    }

    /// The comment's text with its delimiters removed, one entry per line.
    ///
    /// The start marker is stripped from the first line and the end marker from
    /// the last. Continuation lines of a block comment also lose one leading `*`
    /// decoration, so ` * SPDX-License-Identifier: MIT` reads as a tag line.
    pub fn text_lines(&self) -> Vec<String> {
        let last = self.content.len().saturating_sub(1);

        self.content
            .iter()
            .enumerate()
            .map(|(idx, content_line)| {
                let mut text = content_line.value.as_str();

                if idx == 0 {
                    text = text.strip_prefix(self.format.start.as_str()).unwrap_or(text);
                } else if self.kind == CommentKind::MultiLine {
                    let trimmed = text.trim_start();
                    if !trimmed.starts_with(self.format.end.as_str()) {
                        text = trimmed.strip_prefix('*').unwrap_or(text);
                    }
                }

                if idx == last && !self.format.end.is_empty() {
                    text = text.strip_suffix(self.format.end.as_str()).unwrap_or(text);
                }

                text.to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(line: usize, start: usize, value: &str) -> CommentContentLine {
        CommentContentLine {
            line,
            column: Column {
                start,
                end: start + value.len(),
            },
            value: value.to_string(),
        }
    }

    #[test]
    fn test_text_lines_single_line() {
        let comment = Comment {
            kind: CommentKind::SingleLine,
            format: CommentFormat {
                start: "//".to_string(),
                end: String::new(),
            },
            content: vec![line(3, 4, "// SPDX-License-Identifier: MIT")],
        };

        assert_eq!(comment.text_lines(), vec![" SPDX-License-Identifier: MIT"]);
        assert_eq!(comment.start_line(), 3);
        assert_eq!(comment.end_line(), 3);
    }

    #[test]
    fn test_text_lines_block_comment() {
        let comment = Comment {
            kind: CommentKind::MultiLine,
            format: CommentFormat {
                start: "/*".to_string(),
                end: "*/".to_string(),
            },
            content: vec![
                line(1, 0, "/*"),
                line(2, 0, " * SPDX-FileCopyrightText: 2024 Alice"),
                line(3, 0, " */"),
            ],
        };

        assert_eq!(
            comment.text_lines(),
            vec!["", " SPDX-FileCopyrightText: 2024 Alice", " "]
        );
    }

    #[test]
    fn test_text_lines_block_comment_on_one_line() {
        let comment = Comment {
            kind: CommentKind::MultiLine,
            format: CommentFormat {
                start: "/*".to_string(),
                end: "*/".to_string(),
            },
            content: vec![line(1, 10, "/* SPDX-License-Identifier: MIT */")],
        };

        assert_eq!(comment.text_lines(), vec![" SPDX-License-Identifier: MIT "]);
    }
}
