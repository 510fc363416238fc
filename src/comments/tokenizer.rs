//! Context-free line tokenizer.
//!
//! Finds comment and quote markers in a single line without knowing whether
//! the line starts inside a comment or string. Interpreting the tokens is the
//! job of [`super::extractor`].

use crate::languages::LanguageDefinition;

use super::types::{Token, TokenKind};

/// Markers in the order they are tested at each position.
///
/// The first marker that matches wins, regardless of length: Lua's `--` is
/// tested before `--[[` and therefore always shadows it.
type MarkerTable = [(TokenKind, Option<&'static str>); 6];

fn marker_table(language: &LanguageDefinition) -> MarkerTable {
    let multi_line = language.multi_line;
    [
        (TokenKind::SingleLine, language.single_line),
        (TokenKind::MultiLineStart, multi_line.map(|m| m.start)),
        (TokenKind::MultiLineEnd, multi_line.map(|m| m.end)),
        (
            TokenKind::SingleQuote,
            language.single_quote.then_some("'"),
        ),
        (
            TokenKind::DoubleQuote,
            language.double_quote.then_some("\""),
        ),
        (TokenKind::Backtick, language.backtick.then_some("`")),
    ]
}

/// Lazy sequence of marker tokens in one line. A clone replays the remaining
/// tokens from the same cursor position.
#[derive(Debug, Clone)]
pub struct LineTokens<'a> {
    line: &'a str,
    markers: MarkerTable,
    cursor: usize,
}

/// Scan `line` for the markers of `language`.
pub fn tokenize_line<'a>(line: &'a str, language: &LanguageDefinition) -> LineTokens<'a> {
    LineTokens {
        line,
        markers: marker_table(language),
        cursor: 0,
    }
}

impl Iterator for LineTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.cursor < self.line.len() {
            let rest = &self.line[self.cursor..];

            for (kind, marker) in &self.markers {
                if let Some(marker) = marker
                    && !marker.is_empty()
                    && rest.starts_with(marker)
                {
                    let token = Token {
                        kind: *kind,
                        position: self.cursor,
                        len: marker.len(),
                    };
                    self.cursor += marker.len();
                    return Some(token);
                }
            }

            self.cursor += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}
