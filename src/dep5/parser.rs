//! Parser for Debian machine-readable copyright files (DEP5).
//!
//! The document is split on blank lines. The first paragraph is the header and
//! must carry `Format:`; every later paragraph is a file stanza. Fields are
//! read with the generic tag extractor and the [`DEP5_KEYS`] table.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::tags::{FieldKind, TagKey, extract_tags};

use super::wildcard::Wildcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dep5Field {
    Format,
    UpstreamName,
    UpstreamContact,
    Source,
    Disclaimer,
    Comment,
    License,
    Copyright,
    Files,
}

pub static DEP5_KEYS: &[TagKey<Dep5Field>] = &[
    TagKey {
        name: "Format",
        tag: Dep5Field::Format,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "Upstream-Name",
        tag: Dep5Field::UpstreamName,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "Upstream-Contact",
        tag: Dep5Field::UpstreamContact,
        kind: FieldKind::LineList,
    },
    TagKey {
        name: "Source",
        tag: Dep5Field::Source,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "Disclaimer",
        tag: Dep5Field::Disclaimer,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "Comment",
        tag: Dep5Field::Comment,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "License",
        tag: Dep5Field::License,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "Copyright",
        tag: Dep5Field::Copyright,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "Files",
        tag: Dep5Field::Files,
        kind: FieldKind::WhitespaceList,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dep5Error {
    /// The document has no paragraphs at all.
    Empty,
    /// The header paragraph has no `Format:` field.
    MissingFormat,
}

impl fmt::Display for Dep5Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "DEP5 document is empty"),
            Self::MissingFormat => write!(f, "DEP5 header is missing the Format field"),
        }
    }
}

impl std::error::Error for Dep5Error {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebianHeader {
    pub format: String,
    pub upstream_name: Option<String>,
    pub upstream_contact: Vec<String>,
    pub source: Option<String>,
    pub disclaimer: Option<String>,
    pub comment: Option<String>,
    /// License identifier: the first line of the `License` field.
    pub license: Option<String>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DebianStanza {
    pub files: Vec<String>,
    pub copyright: Option<String>,
    pub comment: Option<String>,
    /// License identifier: the first line of the `License` field.
    pub license: Option<String>,
    /// Remaining lines of the `License` field, if any.
    pub license_text: Option<String>,
    #[serde(skip)]
    patterns: Vec<Wildcard>,
}

impl DebianStanza {
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DebianManifest {
    pub header: DebianHeader,
    pub stanzas: Vec<DebianStanza>,
}

impl DebianManifest {
    /// First stanza, in document order, with a `Files` pattern matching `path`.
    pub fn get_stanza(&self, path: &str) -> Option<&DebianStanza> {
        self.stanzas.iter().find(|stanza| stanza.matches(path))
    }
}

pub fn parse_dep5(content: &str) -> Result<DebianManifest, Dep5Error> {
    let normalized = content.replace("\r\n", "\n");
    let mut paragraphs = normalized
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty());

    let header = parse_header(paragraphs.next().ok_or(Dep5Error::Empty)?)?;
    let stanzas = paragraphs.map(parse_stanza).collect();

    Ok(DebianManifest { header, stanzas })
}

fn parse_header(paragraph: &str) -> Result<DebianHeader, Dep5Error> {
    let mut header = DebianHeader::default();
    let mut format = None;

    for token in extract_tags(paragraph.lines(), DEP5_KEYS) {
        match token.tag {
            Dep5Field::Format => format = Some(token.data.into_text()),
            Dep5Field::UpstreamName => header.upstream_name = Some(token.data.into_text()),
            Dep5Field::UpstreamContact => header.upstream_contact = token.data.into_list(),
            Dep5Field::Source => header.source = Some(debian_text(&token.data.into_text())),
            Dep5Field::Disclaimer => {
                header.disclaimer = Some(debian_text(&token.data.into_text()))
            }
            Dep5Field::Comment => header.comment = Some(debian_text(&token.data.into_text())),
            Dep5Field::License => {
                let (identifier, _) = split_license(&token.data.into_text());
                header.license = Some(identifier);
            }
            Dep5Field::Copyright => {
                header.copyright = Some(debian_text(&token.data.into_text()))
            }
            Dep5Field::Files => warn!("Ignoring Files field in DEP5 header"),
        }
    }

    header.format = format.ok_or(Dep5Error::MissingFormat)?;
    Ok(header)
}

fn parse_stanza(paragraph: &str) -> DebianStanza {
    let mut stanza = DebianStanza {
        files: Vec::new(),
        copyright: None,
        comment: None,
        license: None,
        license_text: None,
        patterns: Vec::new(),
    };

    for token in extract_tags(paragraph.lines(), DEP5_KEYS) {
        match token.tag {
            Dep5Field::Files => stanza.files.extend(token.data.into_list()),
            Dep5Field::Copyright => {
                stanza.copyright = Some(debian_text(&token.data.into_text()))
            }
            Dep5Field::Comment => stanza.comment = Some(debian_text(&token.data.into_text())),
            Dep5Field::License => {
                let (identifier, text) = split_license(&token.data.into_text());
                stanza.license = Some(identifier);
                stanza.license_text = text;
            }
            other => warn!("Ignoring {:?} field in DEP5 file stanza", other),
        }
    }

    if stanza.files.is_empty() {
        warn!("DEP5 stanza without Files field never matches");
    }
    stanza.patterns = stanza
        .files
        .iter()
        .map(String::as_str)
        .map(Wildcard::new)
        .collect();
    stanza
}

/// Split a `License` field into its identifier line and optional text.
fn split_license(value: &str) -> (String, Option<String>) {
    match value.split_once('\n') {
        Some((identifier, text)) => {
            let text = debian_text(text);
            (
                identifier.trim().to_string(),
                (!text.is_empty()).then_some(text),
            )
        }
        None => (value.trim().to_string(), None),
    }
}

/// Debian continuation lines use a lone `.` for an empty line.
fn debian_text(value: &str) -> String {
    value
        .lines()
        .map(|line| if line.trim() == "." { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
