use serde::Serialize;

use crate::utils::hash::{calculate_md5, calculate_sha1};

/// SPDX placeholder for "no claim has been made".
pub const NOASSERTION: &str = "NOASSERTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChecksumAlgorithm {
    #[serde(rename = "SHA1")]
    Sha1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

impl Checksum {
    pub fn sha1(content: &[u8]) -> Self {
        Checksum {
            algorithm: ChecksumAlgorithm::Sha1,
            value: calculate_sha1(content),
        }
    }
}

/// Licensing and copyright metadata resolved for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    /// Repository-relative path with a leading `./`.
    pub path: String,
    pub spdx_id: String,
    pub checksum: Checksum,
    /// License expressions found for the file, in the order they were applied.
    pub license_info_in_file: Vec<String>,
    pub copyright: Option<String>,
    pub license_concluded: String,
    pub comment: Option<String>,
    pub notice: Option<String>,
    pub contributors: Vec<String>,
    pub attributions: Vec<String>,
    pub file_types: Vec<String>,
}

impl FileMetadata {
    /// Skeleton record with every metadata field at its default.
    pub fn new(path: String, content: &[u8]) -> Self {
        let spdx_id = format!("SPDXRef-{}", calculate_md5(path.as_bytes()));

        FileMetadata {
            path,
            spdx_id,
            checksum: Checksum::sha1(content),
            license_info_in_file: vec![NOASSERTION.to_string()],
            copyright: None,
            license_concluded: NOASSERTION.to_string(),
            comment: None,
            notice: None,
            contributors: Vec::new(),
            attributions: Vec::new(),
            file_types: Vec::new(),
        }
    }

    /// Whether any source asserted a license for this file.
    pub fn has_license(&self) -> bool {
        self.license_info_in_file
            .iter()
            .any(|expression| expression != NOASSERTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_defaults() {
        let metadata = FileMetadata::new("./src/main.rs".to_string(), b"fn main() {}\n");

        assert_eq!(metadata.license_info_in_file, vec!["NOASSERTION"]);
        assert_eq!(metadata.license_concluded, "NOASSERTION");
        assert_eq!(metadata.copyright, None);
        assert!(metadata.spdx_id.starts_with("SPDXRef-"));
        assert_eq!(metadata.spdx_id.len(), "SPDXRef-".len() + 32);
        assert_eq!(metadata.checksum.algorithm, ChecksumAlgorithm::Sha1);
        assert_eq!(metadata.checksum.value.len(), 40);
        assert!(!metadata.has_license());
    }

    #[test]
    fn test_identifier_depends_on_path_not_content() {
        let a = FileMetadata::new("./a.txt".to_string(), b"same");
        let b = FileMetadata::new("./b.txt".to_string(), b"same");
        let a_changed = FileMetadata::new("./a.txt".to_string(), b"other");

        assert_ne!(a.spdx_id, b.spdx_id);
        assert_eq!(a.checksum, b.checksum);
        assert_eq!(a.spdx_id, a_changed.spdx_id);
        assert_ne!(a.checksum, a_changed.checksum);
    }

    #[test]
    fn test_serializes_checksum_algorithm_name() {
        let metadata = FileMetadata::new("./x".to_string(), b"");
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["checksum"]["algorithm"], "SHA1");
        assert_eq!(
            json["checksum"]["value"],
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(json["license_info_in_file"][0], "NOASSERTION");
    }
}
