use indicatif::ProgressBar;
use reusescan::models::FileMetadata;
use reusescan::{ResolveOptions, ResolveOptionsBuilder, Resolver, resolve_all};
use std::path::Path;

const PROJECT: &str = "testdata/reuse-project";

const CANDIDATES: [&str; 9] = [
    "src/main.c",
    "src/lib.rs",
    "src/override.py",
    "src/ignored.sh",
    "assets/icon.svg",
    "vendor/lib/helper.js",
    "docs/NOTES.unknownext",
    "docs/untagged.md",
    "./src/main.c",
];

fn project_resolver() -> Resolver {
    Resolver::new(PROJECT, ResolveOptions::default()).expect("Fixture manifest should parse")
}

fn find<'a>(files: &'a [FileMetadata], path: &str) -> &'a FileMetadata {
    files
        .iter()
        .find(|file| file.path == path)
        .unwrap_or_else(|| panic!("{} should have been resolved", path))
}

#[test]
fn test_resolves_every_candidate_in_order() {
    let resolver = project_resolver();
    let result = resolve_all(&resolver, &CANDIDATES, &ProgressBar::hidden());

    assert!(result.errors.is_empty(), "Unexpected errors: {:?}", result.errors);
    let paths: Vec<&str> = result.files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "./src/main.c",
            "./src/lib.rs",
            "./src/override.py",
            "./src/ignored.sh",
            "./assets/icon.svg",
            "./vendor/lib/helper.js",
            "./docs/NOTES.unknownext",
            "./docs/untagged.md",
            "./src/main.c",
        ]
    );
    // The same file named two ways resolves identically.
    assert_eq!(result.files[0], result.files[8]);
}

#[test]
fn test_inline_line_comments() {
    let metadata = project_resolver()
        .resolve(Path::new("src/main.c"))
        .unwrap();

    assert_eq!(metadata.license_info_in_file, vec!["MIT"]);
    assert_eq!(metadata.copyright.as_deref(), Some("2024 Alice"));
}

#[test]
fn test_block_comment_fields() {
    let metadata = project_resolver().resolve(Path::new("src/lib.rs")).unwrap();

    assert_eq!(metadata.license_info_in_file, vec!["Apache-2.0 OR MIT"]);
    assert_eq!(
        metadata.copyright.as_deref(),
        Some("2023 Bob <bob@example.com>")
    );
    assert_eq!(metadata.contributors, vec!["Carol"]);
    assert_eq!(
        metadata.comment.as_deref(),
        Some("Shared helpers for the widget.")
    );
}

#[test]
fn test_inline_beats_sidecar_beats_manifest() {
    let metadata = project_resolver()
        .resolve(Path::new("src/override.py"))
        .unwrap();

    assert_eq!(metadata.license_info_in_file, vec!["Z-Inline"]);
    assert_ne!(metadata.license_info_in_file, vec!["NOASSERTION"]);
    // Only the sidecar sets a copyright above the manifest.
    assert_eq!(metadata.copyright.as_deref(), Some("2010 Sidecar Author"));
    assert_eq!(metadata.file_types, vec!["SOURCE"]);
}

#[test]
fn test_ignore_block_is_skipped() {
    let metadata = project_resolver()
        .resolve(Path::new("src/ignored.sh"))
        .unwrap();

    assert_eq!(metadata.license_info_in_file, vec!["GPL-2.0-or-later"]);
    assert_eq!(metadata.copyright.as_deref(), Some("2022 Dana"));
}

#[test]
fn test_manifest_only_files() {
    let resolver = project_resolver();

    let icon = resolver.resolve(Path::new("assets/icon.svg")).unwrap();
    assert_eq!(icon.license_info_in_file, vec!["CC-BY-4.0"]);
    assert_eq!(icon.copyright.as_deref(), Some("2021 Widget Design Team"));

    // The tag inside a template literal is not a comment.
    let helper = resolver.resolve(Path::new("vendor/lib/helper.js")).unwrap();
    assert_eq!(helper.license_info_in_file, vec!["BSD-3-Clause"]);
    assert_eq!(helper.copyright.as_deref(), Some("2018 Upstream Vendor"));
}

#[test]
fn test_unknown_extension_reads_plain_text() {
    let metadata = project_resolver()
        .resolve(Path::new("docs/NOTES.unknownext"))
        .unwrap();

    assert_eq!(metadata.license_info_in_file, vec!["CC0-1.0"]);
    assert_eq!(metadata.copyright.as_deref(), Some("2025 Erin"));
}

#[test]
fn test_untagged_file_has_no_assertion() {
    let metadata = project_resolver()
        .resolve(Path::new("docs/untagged.md"))
        .unwrap();

    assert!(!metadata.has_license());
    assert_eq!(metadata.license_concluded, "NOASSERTION");
    assert_eq!(metadata.copyright, None);
}

#[test]
fn test_license_identifiers_across_files() {
    let resolver = project_resolver();
    let result = resolve_all(&resolver, &CANDIDATES, &ProgressBar::hidden());

    assert_eq!(
        result.license_identifiers,
        vec![
            "Apache-2.0",
            "BSD-3-Clause",
            "CC-BY-4.0",
            "CC0-1.0",
            "GPL-2.0-or-later",
            "MIT",
            "Z-Inline",
        ]
    );
}

#[test]
fn test_missing_manifest_is_not_an_error() {
    let options = ResolveOptionsBuilder::default()
        .dep5_path("does/not/exist")
        .build()
        .unwrap();
    let resolver = Resolver::new(PROJECT, options).unwrap();

    assert!(resolver.manifest().is_none());
    let icon = resolver.resolve(Path::new("assets/icon.svg")).unwrap();
    assert_eq!(icon.license_info_in_file, vec!["NOASSERTION"]);
}

#[test]
fn test_output_json_shape() {
    let resolver = project_resolver();
    let result = resolve_all(&resolver, &["src/main.c"], &ProgressBar::hidden());
    let json = serde_json::to_value(&result.files[0]).unwrap();

    assert_eq!(json["path"], "./src/main.c");
    assert_eq!(json["license_info_in_file"][0], "MIT");
    assert_eq!(json["checksum"]["algorithm"], "SHA1");
    assert!(
        json["spdx_id"]
            .as_str()
            .is_some_and(|id| id.starts_with("SPDXRef-"))
    );
}
