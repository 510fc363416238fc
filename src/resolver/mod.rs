//! Per-file licensing metadata.
//!
//! A record starts from defaults and is overwritten by each source in turn:
//! the DEP5 manifest, then a `<file>.license` sidecar, then the file's own
//! comments (or its whole text when the language is unknown). Later sources
//! win.

mod apply;
mod process;


use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use content_inspector::inspect;
use derive_builder::Builder;
use log::{debug, info};

use crate::comments::{CommentExtractor, ExtractOptions};
use crate::dep5::{DebianManifest, parse_dep5};
use crate::languages::{self, LanguageDefinition};
use crate::models::FileMetadata;
use crate::tags::{REUSE_KEYS, extract_tags};
use crate::utils::file::{relative_to_root, sidecar_path, to_slash_path};

use self::apply::{TagApplier, apply_stanza};

pub use self::process::{FileError, ResolveResult, resolve_all};

pub const DEFAULT_DEP5_PATH: &str = ".reuse/dep5";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct ResolveOptions {
    /// Stop scanning a file for tags after this many lines.
    #[builder(setter(strip_option))]
    pub max_lines: Option<usize>,
    /// Manifest location, relative to the repository root.
    #[builder(setter(into))]
    pub dep5_path: PathBuf,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            max_lines: None,
            dep5_path: PathBuf::from(DEFAULT_DEP5_PATH),
        }
    }
}

/// Resolves files of one repository. Shareable across threads.
#[derive(Debug)]
pub struct Resolver {
    root: PathBuf,
    options: ResolveOptions,
    manifest: Option<DebianManifest>,
}

impl Resolver {
    /// Fails if a manifest exists but cannot be read or parsed.
    pub fn new(root: impl Into<PathBuf>, options: ResolveOptions) -> Result<Self, Error> {
        let root = root.into();
        let manifest = load_manifest(&root.join(&options.dep5_path))?;

        Ok(Resolver {
            root,
            options,
            manifest,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> Option<&DebianManifest> {
        self.manifest.as_ref()
    }

    /// Resolve one file, given relative to the root or absolute beneath it.
    pub fn resolve(&self, path: &Path) -> Result<FileMetadata, Error> {
        let relative = relative_to_root(&self.root, path)?;
        let absolute = self.root.join(&relative);
        let relative_path = to_slash_path(&relative);

        let content = fs::read(&absolute)
            .with_context(|| format!("Failed to read {}", absolute.display()))?;
        let mut metadata = FileMetadata::new(format!("./{relative_path}"), &content);

        if let Some(manifest) = &self.manifest
            && let Some(stanza) = manifest.get_stanza(&relative_path)
        {
            apply_stanza(&mut metadata, stanza, &manifest.header);
        }

        let sidecar = sidecar_path(&absolute);
        if sidecar.is_file() {
            let text = fs::read(&sidecar)
                .with_context(|| format!("Failed to read {}", sidecar.display()))?;
            let text = String::from_utf8_lossy(&text);
            TagApplier::new(&mut metadata).apply_all(extract_tags(text.lines(), REUSE_KEYS));
        }

        if inspect(&content).is_binary() {
            debug!("{}: binary content, not scanning for tags", metadata.path);
            return Ok(metadata);
        }

        match languages::lookup(&relative) {
            Ok(language) => self.apply_comments(&mut metadata, &absolute, language)?,
            Err(err) => {
                debug!("{err}; reading it as plain text");
                let text = String::from_utf8_lossy(&content);
                let limit = self.options.max_lines.unwrap_or(usize::MAX);
                TagApplier::new(&mut metadata)
                    .apply_all(extract_tags(text.lines().take(limit), REUSE_KEYS));
            }
        }

        Ok(metadata)
    }

    fn apply_comments(
        &self,
        metadata: &mut FileMetadata,
        path: &Path,
        language: &'static LanguageDefinition,
    ) -> Result<(), Error> {
        let options = ExtractOptions {
            max_lines: self.options.max_lines,
        };
        let comments = CommentExtractor::open(path, language, options)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let mut applier = TagApplier::new(metadata);
        for comment in comments {
            let comment = comment.with_context(|| format!("Failed to read {}", path.display()))?;
            debug!(
                "{}: comment on lines {}-{}",
                path.display(),
                comment.start_line(),
                comment.end_line()
            );
            applier.apply_all(extract_tags(comment.text_lines(), REUSE_KEYS));
        }
        Ok(())
    }
}

fn load_manifest(path: &Path) -> Result<Option<DebianManifest>, Error> {
    if !path.is_file() {
        debug!("No DEP5 manifest at {}", path.display());
        return Ok(None);
    }

    let content =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest = parse_dep5(&String::from_utf8_lossy(&content))
        .with_context(|| format!("Invalid DEP5 manifest {}", path.display()))?;

    info!(
        "Loaded DEP5 manifest {} with {} stanzas",
        path.display(),
        manifest.stanzas.len()
    );
    Ok(Some(manifest))
}
