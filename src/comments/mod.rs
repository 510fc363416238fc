//! Comment extraction.
//!
//! Two stages:
//! 1. [`tokenizer`]: a context-free scan of one line for comment and quote
//!    markers.
//! 2. [`extractor`]: a state machine that interprets those tokens across the
//!    lines of a file and yields complete [`Comment`]s.

mod extractor;
mod tokenizer;
mod types;


pub use extractor::{CommentExtractor, ExtractOptions, extract_comments};
pub use tokenizer::{LineTokens, tokenize_line};
pub use types::{
    Column, Comment, CommentContentLine, CommentFormat, CommentKind, Token, TokenKind,
};
