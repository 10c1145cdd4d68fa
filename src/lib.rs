// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Derive a human-readable version string from repository metadata.
//!
//! The version string is composed of the latest tag, an optional
//! prerelease suffix with the abbreviated head commit id, and an optional
//! UTC date of the head commit, e.g. `v1.2.0dev_1a2b3c4 (2023-05-17)`.
//!
//! Refer to [`docs`] for more information.

use std::path::{Path, PathBuf};

pub mod docs;

pub mod conf;

pub mod provider;
pub use provider::{GitRepository, HeadCommit, MetadataProvider, StaticMetadata};

pub mod version;
pub use version::VersionInfo;

/// A resolution error
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// No repository found at or above the given path.
    #[display("no repository found at or above '{}': {source}", path.display())]
    RepositoryAccess {
        /// The path where discovery started
        path: PathBuf,

        /// The cause
        source: git2::Error,
    },

    /// Commit data is required but the repository has no commits.
    #[display("repository has no commits")]
    EmptyRepository,

    /// Unexpected failure of the metadata provider.
    #[display("{_0:#}")]
    Backend(#[error(not(source))] anyhow::Error),
}

/// Resolve the version string from the given provider.
///
/// Commit data is only requested from the provider if one of the
/// switches needs it.
///
/// # Errors
///
/// Returns [`Error::EmptyRepository`] if a switch requires commit data
/// but there is no head commit.
pub fn resolve<P>(
    provider: &P,
    include_prerelease_suffix: bool,
    include_date: bool,
) -> Result<String, Error>
where
    P: MetadataProvider + ?Sized,
{
    let info = VersionInfo::query(provider, include_prerelease_suffix, include_date)?;
    let version = info.encode();
    tracing::debug!(%version, "Resolved version");
    Ok(version)
}

/// Resolve the version string of the repository at or above `path`.
///
/// # Errors
///
/// Returns [`Error::RepositoryAccess`] if no repository could be discovered
/// and otherwise the same errors as [`resolve()`].
pub fn resolve_repository(
    path: impl AsRef<Path>,
    include_prerelease_suffix: bool,
    include_date: bool,
) -> Result<String, Error> {
    let repo = GitRepository::discover(path)?;
    resolve(&repo, include_prerelease_suffix, include_date)
}
