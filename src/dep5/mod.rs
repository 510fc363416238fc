//! Centralized copyright manifest in the Debian `copyright-format/1.0` style.

mod parser;
mod wildcard;


pub use parser::{
    DEP5_KEYS, DebianHeader, DebianManifest, DebianStanza, Dep5Error, Dep5Field, parse_dep5,
};
pub use wildcard::{Wildcard, is_match};
