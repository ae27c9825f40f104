// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod manifest;
pub mod metadata;
pub mod release;
pub mod render;
pub mod semver;
pub mod verify;
pub mod writer;

pub use error::{Result, StampError};
pub use manifest::Manifest;
pub use metadata::{VersionMetadata, VersionMetadataBuilder};
pub use release::ReleaseDate;
pub use render::Target;
pub use semver::SemVer;
