use std::path::Path;

use indicatif::ProgressBar;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;

use crate::models::FileMetadata;
use crate::utils::spdx::collect_license_identifiers;

use super::Resolver;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ResolveResult {
    /// Records of the files that resolved, in input order.
    pub files: Vec<FileMetadata>,
    pub errors: Vec<FileError>,
    /// Sorted identifiers referenced by any file, without `NOASSERTION`.
    pub license_identifiers: Vec<String>,
}

/// Resolve every path in parallel. A failing file is reported in
/// [`ResolveResult::errors`] and does not stop the others.
pub fn resolve_all<P>(resolver: &Resolver, paths: &[P], progress_bar: &ProgressBar) -> ResolveResult
where
    P: AsRef<Path> + Sync,
{
    let outcomes: Vec<Result<FileMetadata, FileError>> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let outcome = resolver.resolve(path).map_err(|err| {
                warn!("Failed to resolve {}: {:#}", path.display(), err);
                FileError {
                    path: path.display().to_string(),
                    message: format!("{:#}", err),
                }
            });
            progress_bar.inc(1);
            outcome
        })
        .collect();

    let mut result = ResolveResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(metadata) => result.files.push(metadata),
            Err(error) => result.errors.push(error),
        }
    }

    result.license_identifiers = collect_license_identifiers(
        result
            .files
            .iter()
            .flat_map(|metadata| &metadata.license_info_in_file),
    );
    result
}
