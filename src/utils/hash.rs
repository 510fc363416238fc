use md5::{Digest as Md5Digest, Md5};
use sha1::Sha1;

/// Lowercase hex SHA1 of `content`.
pub fn calculate_sha1(content: &[u8]) -> String {
    format!("{:x}", Sha1::digest(content))
}

/// Lowercase hex MD5 of `content`.
pub fn calculate_md5(content: &[u8]) -> String {
    format!("{:x}", Md5::digest(content))
}
