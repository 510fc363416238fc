//! Stateful comment extraction over a whole file.
//!
//! [`CommentExtractor`] reads one line at a time and feeds it through the line
//! tokenizer, keeping a single open context (block comment or quote) across
//! lines. Comments are yielded as soon as they are complete.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Error};

use crate::languages::{self, LanguageDefinition};

use super::tokenizer::tokenize_line;
use super::types::{
    Column, Comment, CommentContentLine, CommentFormat, CommentKind, Token, TokenKind,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Stop after reading this many lines.
    pub max_lines: Option<usize>,
}

/// The one thing a line can start "inside of".
#[derive(Debug)]
enum OpenContext {
    Comment(Comment),
    Quote(TokenKind),
}

/// Lazy sequence of the comments in a file.
///
/// Quotes suppress comment markers until the same quote kind appears again.
/// Escapes are not understood, and a different quote kind replaces the open
/// one. A block comment still open when input ends is dropped.
pub struct CommentExtractor<R> {
    reader: R,
    language: &'static LanguageDefinition,
    options: ExtractOptions,
    line_number: usize,
    context: Option<OpenContext>,
    ready: VecDeque<Comment>,
    buffer: Vec<u8>,
    finished: bool,
}

/// Extract comments from `path`, choosing the language from the registry.
pub fn extract_comments(
    path: &Path,
    options: ExtractOptions,
) -> Result<CommentExtractor<BufReader<File>>, Error> {
    let language = languages::lookup(path)?;
    CommentExtractor::open(path, language, options)
        .with_context(|| format!("Failed to open {}", path.display()))
}

impl CommentExtractor<BufReader<File>> {
    pub fn open(
        path: &Path,
        language: &'static LanguageDefinition,
        options: ExtractOptions,
    ) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), language, options))
    }
}

impl<R: BufRead> CommentExtractor<R> {
    pub fn new(reader: R, language: &'static LanguageDefinition, options: ExtractOptions) -> Self {
        CommentExtractor {
            reader,
            language,
            options,
            line_number: 0,
            context: None,
            ready: VecDeque::new(),
            buffer: Vec::new(),
            finished: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self
            .options
            .max_lines
            .is_some_and(|max| self.line_number >= max)
        {
            return Ok(None);
        }

        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        self.line_number += 1;
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }

    fn process_line(&mut self, line: &str) {
        let number = self.line_number;

        for token in tokenize_line(line, self.language) {
            match (self.context.take(), token.kind) {
                (None, TokenKind::SingleLine) => {
                    let comment = self.single_line_comment(line, number, &token);
                    self.ready.push_back(comment);
                    return;
                }
                (None, TokenKind::MultiLineStart) => {
                    self.context = Some(OpenContext::Comment(
                        self.block_comment(line, number, &token),
                    ));
                }
                (Some(OpenContext::Comment(mut comment)), TokenKind::MultiLineEnd) => {
                    close_block_comment(&mut comment, line, number, &token);
                    self.ready.push_back(comment);
                }
                (None, kind) if kind.is_quote() => {
                    self.context = Some(OpenContext::Quote(kind));
                }
                (Some(OpenContext::Quote(open)), kind) if kind.is_quote() => {
                    if open != kind {
                        self.context = Some(OpenContext::Quote(kind));
                    }
                }
                (context, _) => self.context = context,
            }
        }

        if let Some(OpenContext::Comment(comment)) = &mut self.context
            && comment
                .content
                .last()
                .is_some_and(|content_line| content_line.line != number)
        {
            comment.content.push(CommentContentLine {
                line: number,
                column: Column {
                    start: 0,
                    end: line.len(),
                },
                value: line.to_string(),
            });
        }
    }

    fn single_line_comment(&self, line: &str, number: usize, token: &Token) -> Comment {
        Comment {
            kind: CommentKind::SingleLine,
            format: CommentFormat {
                start: self.language.single_line.unwrap_or_default().to_string(),
                end: String::new(),
            },
            content: vec![CommentContentLine {
                line: number,
                column: Column {
                    start: token.position,
                    end: line.len(),
                },
                value: line[token.position..].to_string(),
            }],
        }
    }

    fn block_comment(&self, line: &str, number: usize, token: &Token) -> Comment {
        let (start, end) = self
            .language
            .multi_line
            .map_or(("", ""), |marker| (marker.start, marker.end));

        Comment {
            kind: CommentKind::MultiLine,
            format: CommentFormat {
                start: start.to_string(),
                end: end.to_string(),
            },
            content: vec![CommentContentLine {
                line: number,
                column: Column {
                    start: token.position,
                    end: line.len(),
                },
                value: line[token.position..].to_string(),
            }],
        }
    }
}

fn close_block_comment(comment: &mut Comment, line: &str, number: usize, token: &Token) {
    let marker_end = token.end();

    match comment.content.last_mut() {
        Some(last) if last.line == number => {
            last.column.end = marker_end;
            last.value = line[last.column.start..marker_end].to_string();
        }
        _ => comment.content.push(CommentContentLine {
            line: number,
            column: Column {
                start: 0,
                end: marker_end,
            },
            value: line[..marker_end].to_string(),
        }),
    }
}

impl<R: BufRead> Iterator for CommentExtractor<R> {
    type Item = io::Result<Comment>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(comment) = self.ready.pop_front() {
                return Some(Ok(comment));
            }
            if self.finished {
                return None;
            }

            match self.read_line() {
                Ok(Some(line)) => self.process_line(&line),
                Ok(None) => {
                    self.finished = true;
                    self.context = None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
