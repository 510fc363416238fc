//! Line-oriented tag extraction.
//!
//! Keys are recognized anywhere in a line, case-insensitively, as
//! `<Key-Name>:`. At most one multi-line field is open at a time; a new key or
//! the end of input closes it.

use std::collections::VecDeque;
use std::iter::Fuse;

use super::{FieldKind, TagData, TagKey, TagToken};

/// Where a key was found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'k, T> {
    pub key: &'k TagKey<T>,
    /// Byte offset of the key name.
    pub start: usize,
    /// Byte offset just past the colon (or past the name for markers).
    pub end: usize,
}

/// Find the earliest key occurrence in `line`; table order breaks ties.
pub fn find_key<'k, T>(line: &str, keys: &'k [TagKey<T>]) -> Option<KeyMatch<'k, T>> {
    let mut best: Option<KeyMatch<'k, T>> = None;

    for key in keys {
        let with_colon = key.kind != FieldKind::Marker;
        let Some(start) = find_ignore_ascii_case(line, key.name, with_colon) else {
            continue;
        };

        if best.as_ref().is_none_or(|b| start < b.start) {
            best = Some(KeyMatch {
                key,
                start,
                end: start + key.name.len() + usize::from(with_colon),
            });
        }
    }

    best
}

/// ASCII case-insensitive search for `needle`, optionally followed by `:`.
///
/// `needle` is ASCII, so any match starts on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str, with_colon: bool) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    let width = needle.len() + usize::from(with_colon);
    if needle.is_empty() || width > haystack.len() {
        return None;
    }

    haystack.windows(width).position(|window| {
        window[..needle.len()].eq_ignore_ascii_case(needle)
            && (!with_colon || window[needle.len()] == b':')
    })
}

#[derive(Debug)]
struct OpenField<T> {
    tag: T,
    kind: FieldKind,
    parts: Vec<String>,
}

/// Lazy sequence of tags found in a sequence of lines.
pub struct TagExtractor<'k, T, I> {
    lines: Fuse<I>,
    keys: &'k [TagKey<T>],
    open: Option<OpenField<T>>,
    ready: VecDeque<TagToken<T>>,
}

/// Extract tags from `lines` using the key table `keys`.
pub fn extract_tags<'k, T, I>(lines: I, keys: &'k [TagKey<T>]) -> TagExtractor<'k, T, I::IntoIter>
where
    T: Copy,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TagExtractor {
        lines: lines.into_iter().fuse(),
        keys,
        open: None,
        ready: VecDeque::new(),
    }
}

impl<T, I> TagExtractor<'_, T, I>
where
    T: Copy,
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn process_line(&mut self, line: &str) {
        let Some(found) = find_key(line, self.keys) else {
            self.continue_open_field(line);
            return;
        };

        self.flush();
        let key = found.key;
        let rest = line[found.end..].trim();

        match key.kind {
            FieldKind::SingleLine => {
                if !rest.is_empty() {
                    self.ready.push_back(TagToken {
                        tag: key.tag,
                        data: TagData::Text(rest.to_string()),
                    });
                }
            }
            FieldKind::Marker => self.ready.push_back(TagToken {
                tag: key.tag,
                data: TagData::Text(String::new()),
            }),
            FieldKind::FormattedText | FieldKind::LineList => {
                let parts = if rest.is_empty() {
                    Vec::new()
                } else {
                    vec![rest.to_string()]
                };
                self.open = Some(OpenField {
                    tag: key.tag,
                    kind: key.kind,
                    parts,
                });
            }
            FieldKind::WhitespaceList => {
                self.open = Some(OpenField {
                    tag: key.tag,
                    kind: key.kind,
                    parts: rest.split_whitespace().map(str::to_string).collect(),
                });
            }
        }
    }

    fn continue_open_field(&mut self, line: &str) {
        let Some(open) = &mut self.open else {
            return;
        };
        let trimmed = line.trim();

        match open.kind {
            FieldKind::FormattedText => open.parts.push(trimmed.to_string()),
            FieldKind::LineList if !trimmed.is_empty() => open.parts.push(trimmed.to_string()),
            FieldKind::WhitespaceList => open
                .parts
                .extend(trimmed.split_whitespace().map(str::to_string)),
            _ => {}
        }
    }

    fn flush(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        let data = match open.kind {
            FieldKind::FormattedText => {
                let joined = open.parts.join("\n");
                let text = strip_text_wrapper(joined.trim());
                if text.is_empty() {
                    return;
                }
                TagData::Text(text.to_string())
            }
            _ if open.parts.is_empty() => return,
            _ => TagData::List(open.parts),
        };

        self.ready.push_back(TagToken {
            tag: open.tag,
            data,
        });
    }
}

/// Remove an SPDX `<text>...</text>` wrapper around a formatted value.
fn strip_text_wrapper(text: &str) -> &str {
    let text = text.strip_prefix("<text>").unwrap_or(text);
    let text = text.strip_suffix("</text>").unwrap_or(text);
    text.trim()
}

impl<T, I> Iterator for TagExtractor<'_, T, I>
where
    T: Copy,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = TagToken<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }

            match self.lines.next() {
                Some(line) => self.process_line(line.as_ref()),
                None => {
                    self.flush();
                    return self.ready.pop_front();
                }
            }
        }
    }
}
