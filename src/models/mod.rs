mod file_metadata;
mod output;

pub use file_metadata::{Checksum, ChecksumAlgorithm, FileMetadata, NOASSERTION};
pub use output::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment};
