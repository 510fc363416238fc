//! Generic `Key: value` tag grammar.
//!
//! A key table declares, for each key name, the tag it produces and how its
//! value is read ([`FieldKind`]). The same extractor serves the REUSE/SPDX
//! vocabulary in [`keys`] and the DEP5 field table in [`crate::dep5`].

mod extractor;
mod keys;


pub use extractor::{KeyMatch, TagExtractor, extract_tags, find_key};
pub use keys::{REUSE_KEYS, ReuseTag};

/// How the value of a key is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The rest of the matching line, nothing more.
    SingleLine,
    /// The rest of the line plus every following line up to the next key,
    /// newline-joined.
    FormattedText,
    /// Each following non-empty line is one element.
    LineList,
    /// Whitespace-separated words from the matching and following lines.
    WhitespaceList,
    /// A bare keyword without a colon or value.
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagKey<T> {
    pub name: &'static str,
    pub tag: T,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagData {
    Text(String),
    List(Vec<String>),
}

impl TagData {
    /// The value as one string; list elements are newline-joined.
    pub fn into_text(self) -> String {
        match self {
            TagData::Text(text) => text,
            TagData::List(items) => items.join("\n"),
        }
    }

    /// The value as a list; text becomes a single element unless empty.
    pub fn into_list(self) -> Vec<String> {
        match self {
            TagData::Text(text) if text.is_empty() => Vec::new(),
            TagData::Text(text) => vec![text],
            TagData::List(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<T> {
    pub tag: T,
    pub data: TagData,
}
