//! Language registry.
//!
//! Maps a file to the comment and quote markers of its language. The table in
//! [`definitions`] is an immutable process-wide `static`; lookups never mutate
//! it and are safe to share across resolver threads.
//!
//! A lookup succeeds only when exactly one definition claims the file. Files
//! with an unknown extension, or with an extension two languages share (`.m`,
//! `.pl`), produce a [`LanguageError`] that the resolver turns into a plain-text
//! fallback.

mod definitions;

use std::fmt;
use std::path::Path;

pub use definitions::LANGUAGES;

/// A `{start, end}` marker pair for block comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiLineMarker {
    pub start: &'static str,
    pub end: &'static str,
}

/// Comment and quote syntax of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub name: &'static str,
    /// Lowercase extensions without the leading dot.
    pub extensions: &'static [&'static str],
    /// Exact file names, for files without a telling extension.
    pub filenames: &'static [&'static str],
    pub single_line: Option<&'static str>,
    pub multi_line: Option<MultiLineMarker>,
    pub single_quote: bool,
    pub double_quote: bool,
    pub backtick: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// No definition claims the file.
    NotFound { path: String },
    /// More than one definition claims the file.
    Ambiguous {
        path: String,
        candidates: Vec<&'static str>,
    },
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "No language definition found for {}", path),
            Self::Ambiguous { path, candidates } => write!(
                f,
                "Ambiguous language definitions for {}: {}",
                path,
                candidates.join(", ")
            ),
        }
    }
}

impl std::error::Error for LanguageError {}

/// Look up the language definition for `path`.
///
/// Extensions are tried first (case-insensitive, final extension only), then
/// exact file names.
pub fn lookup(path: &Path) -> Result<&'static LanguageDefinition, LanguageError> {
    let display = path.to_string_lossy().to_string();

    if let Some(extension) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
    {
        let by_extension: Vec<&'static LanguageDefinition> = LANGUAGES
            .iter()
            .filter(|lang| lang.extensions.contains(&extension.as_str()))
            .collect();
        if !by_extension.is_empty() {
            return single_candidate(by_extension, display);
        }
    }

    let file_name = path.file_name().and_then(|name| name.to_str());
    let by_filename: Vec<&'static LanguageDefinition> = match file_name {
        Some(name) => LANGUAGES
            .iter()
            .filter(|lang| lang.filenames.contains(&name))
            .collect(),
        None => Vec::new(),
    };

    if by_filename.is_empty() {
        return Err(LanguageError::NotFound { path: display });
    }
    single_candidate(by_filename, display)
}

/// Whether exactly one definition matches `path`.
pub fn is_supported(path: &Path) -> bool {
    lookup(path).is_ok()
}

fn single_candidate(
    candidates: Vec<&'static LanguageDefinition>,
    path: String,
) -> Result<&'static LanguageDefinition, LanguageError> {
    match candidates.as_slice() {
        [only] => Ok(*only),
        _ => Err(LanguageError::Ambiguous {
            path,
            candidates: candidates.iter().map(|lang| lang.name).collect(),
        }),
    }
}
