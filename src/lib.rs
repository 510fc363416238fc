pub mod cli;
pub mod comments;
pub mod dep5;
pub mod languages;
pub mod models;
pub mod resolver;
pub mod tags;
pub mod utils;

pub use models::{ExtraData, FileMetadata, Header, Output, SystemEnvironment};
pub use resolver::{
    FileError, ResolveOptions, ResolveOptionsBuilder, ResolveResult, Resolver, resolve_all,
};
