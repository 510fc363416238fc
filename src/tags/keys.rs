use strum::AsRefStr;

use super::{FieldKind, TagKey};

/// Per-file tags understood in comments, sidecars and plain-text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ReuseTag {
    License,
    LicenseInFile,
    LicenseConcluded,
    Copyright,
    Comment,
    Notice,
    Contributor,
    Attribution,
    FileType,
    IgnoreStart,
    IgnoreEnd,
}

pub static REUSE_KEYS: &[TagKey<ReuseTag>] = &[
    TagKey {
        name: "SPDX-License-Identifier",
        tag: ReuseTag::License,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "SPDX-LicenseInfoInFile",
        tag: ReuseTag::LicenseInFile,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "SPDX-LicenseConcluded",
        tag: ReuseTag::LicenseConcluded,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "SPDX-FileCopyrightText",
        tag: ReuseTag::Copyright,
        kind: FieldKind::SingleLine,
    },
    TagKey {
        name: "SPDX-FileComment",
        tag: ReuseTag::Comment,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "SPDX-FileNotice",
        tag: ReuseTag::Notice,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "SPDX-FileContributor",
        tag: ReuseTag::Contributor,
        kind: FieldKind::LineList,
    },
    TagKey {
        name: "SPDX-FileAttributionText",
        tag: ReuseTag::Attribution,
        kind: FieldKind::FormattedText,
    },
    TagKey {
        name: "SPDX-FileType",
        tag: ReuseTag::FileType,
        kind: FieldKind::WhitespaceList,
    },
    TagKey {
        name: "REUSE-IgnoreStart",
        tag: ReuseTag::IgnoreStart,
        kind: FieldKind::Marker,
    },
    TagKey {
        name: "REUSE-IgnoreEnd",
        tag: ReuseTag::IgnoreEnd,
        kind: FieldKind::Marker,
    },
];
