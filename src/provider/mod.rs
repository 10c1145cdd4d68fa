// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

//! Repository metadata providers

use std::{fmt, path::Path};

use git2::{ErrorCode, Repository};
use time::OffsetDateTime;

use crate::Error;

/// Read-only access to the repository metadata needed for versioning.
pub trait MetadataProvider {
    /// List all tag names in the provider's order.
    ///
    /// The last element is considered as the latest tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tags could not be read.
    fn list_tags(&self) -> Result<Vec<String>, Error>;

    /// Return the full identifier of the head commit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRepository`] if there is no head commit.
    fn head_commit_id(&self) -> Result<String, Error>;

    /// Return the timestamp of the head commit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRepository`] if there is no head commit.
    fn head_commit_timestamp(&self) -> Result<OffsetDateTime, Error>;
}

/// A Git repository
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Discover the repository at or above `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryAccess`] if no repository was found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|source| Error::RepositoryAccess {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %repo.path().display(), "Discovered repository");
        Ok(Self { repo })
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>, Error> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(Error::EmptyRepository);
            }
            Err(err) => return Err(backend_error(err)),
        };
        head.peel_to_commit().map_err(backend_error)
    }
}

impl fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitRepository")
            .field("path", &self.repo.path())
            .finish_non_exhaustive()
    }
}

fn backend_error(err: git2::Error) -> Error {
    Error::Backend(err.into())
}

impl MetadataProvider for GitRepository {
    /// Tag names are ordered by name, not by date or version.
    fn list_tags(&self) -> Result<Vec<String>, Error> {
        let names = self.repo.tag_names(None).map_err(backend_error)?;
        // Tag names that are not valid UTF-8 are skipped.
        let mut tags: Vec<_> = names.iter().flatten().map(ToOwned::to_owned).collect();
        tags.sort_unstable();
        tracing::debug!(count = tags.len(), "Listed tags");
        Ok(tags)
    }

    fn head_commit_id(&self) -> Result<String, Error> {
        self.head_commit().map(|commit| commit.id().to_string())
    }

    /// The committer time, not the author time.
    fn head_commit_timestamp(&self) -> Result<OffsetDateTime, Error> {
        let seconds = self.head_commit()?.time().seconds();
        OffsetDateTime::from_unix_timestamp(seconds).map_err(|err| Error::Backend(err.into()))
    }
}

/// A commit with all the data needed for versioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadCommit {
    /// The full identifier
    pub id: String,

    /// The commit time
    pub timestamp: OffsetDateTime,
}

/// In-memory metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMetadata {
    /// The tags, latest last
    pub tags: Vec<String>,

    /// The head commit, if any
    pub head: Option<HeadCommit>,
}

impl StaticMetadata {
    fn head(&self) -> Result<&HeadCommit, Error> {
        self.head.as_ref().ok_or(Error::EmptyRepository)
    }
}

impl MetadataProvider for StaticMetadata {
    fn list_tags(&self) -> Result<Vec<String>, Error> {
        Ok(self.tags.clone())
    }

    fn head_commit_id(&self) -> Result<String, Error> {
        self.head().map(|head| head.id.clone())
    }

    fn head_commit_timestamp(&self) -> Result<OffsetDateTime, Error> {
        self.head().map(|head| head.timestamp)
    }
}
