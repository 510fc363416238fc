use log::debug;

use crate::dep5::{DebianHeader, DebianStanza};
use crate::models::FileMetadata;
use crate::tags::{ReuseTag, TagToken};

/// Applies the tags of one metadata source to a record.
///
/// The ignore flag and the "license already seen" flag both start fresh for
/// every source.
pub(crate) struct TagApplier<'m> {
    metadata: &'m mut FileMetadata,
    ignoring: bool,
    license_seen: bool,
}

impl<'m> TagApplier<'m> {
    pub(crate) fn new(metadata: &'m mut FileMetadata) -> Self {
        TagApplier {
            metadata,
            ignoring: false,
            license_seen: false,
        }
    }

    pub(crate) fn apply_all(&mut self, tokens: impl IntoIterator<Item = TagToken<ReuseTag>>) {
        for token in tokens {
            self.apply(token);
        }
    }

    pub(crate) fn apply(&mut self, token: TagToken<ReuseTag>) {
        match token.tag {
            ReuseTag::IgnoreStart => {
                self.ignoring = true;
                return;
            }
            ReuseTag::IgnoreEnd => {
                self.ignoring = false;
                return;
            }
            _ if self.ignoring => {
                debug!(
                    "{}: skipping ignored {} tag",
                    self.metadata.path,
                    token.tag.as_ref()
                );
                return;
            }
            _ => {}
        }

        let metadata = &mut *self.metadata;
        match token.tag {
            ReuseTag::License | ReuseTag::LicenseInFile => {
                let expression = token.data.into_text();
                if self.license_seen {
                    metadata.license_info_in_file.push(expression);
                } else {
                    metadata.license_info_in_file = vec![expression];
                    self.license_seen = true;
                }
            }
            ReuseTag::LicenseConcluded => metadata.license_concluded = token.data.into_text(),
            ReuseTag::Copyright => metadata.copyright = Some(token.data.into_text()),
            ReuseTag::Comment => metadata.comment = Some(token.data.into_text()),
            ReuseTag::Notice => metadata.notice = Some(token.data.into_text()),
            ReuseTag::Contributor => metadata.contributors.extend(token.data.into_list()),
            ReuseTag::Attribution => metadata.attributions.push(token.data.into_text()),
            ReuseTag::FileType => metadata.file_types.extend(token.data.into_list()),
            ReuseTag::IgnoreStart | ReuseTag::IgnoreEnd => {}
        }
    }
}

/// Copyright and license from a DEP5 stanza, falling back to the header.
pub(crate) fn apply_stanza(metadata: &mut FileMetadata, stanza: &DebianStanza, header: &DebianHeader) {
    if let Some(copyright) = stanza.copyright.as_ref().or(header.copyright.as_ref()) {
        metadata.copyright = Some(copyright.clone());
    }
    if let Some(license) = stanza.license.as_ref().or(header.license.as_ref()) {
        metadata.license_info_in_file = vec![license.clone()];
    }
}
