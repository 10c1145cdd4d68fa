// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

//! Version strings

use std::fmt;

use time::{
    Date, OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description,
};

use crate::{Error, MetadataProvider};

/// The tag used if the repository has no tags.
pub const DEFAULT_TAG: &str = "v0.0.0";

/// Marks a version as a prerelease, followed by the short commit id.
pub const PRERELEASE_MARKER: &str = "dev_";

/// Number of characters of an abbreviated commit id.
pub const SHORT_COMMIT_ID_LEN: usize = 7;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Select the latest tag.
///
/// This is the last tag in the given order or [`DEFAULT_TAG`] if
/// there are no tags. The tags are neither sorted nor compared.
#[must_use]
pub fn latest_tag(tags: Vec<String>) -> String {
    tags.into_iter()
        .next_back()
        .unwrap_or_else(|| DEFAULT_TAG.to_owned())
}

/// Abbreviate a commit id.
///
/// Ids shorter than [`SHORT_COMMIT_ID_LEN`] are returned unmodified.
#[must_use]
pub fn short_commit_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_COMMIT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

/// Format a [`Date`] as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an error if formatting of the given `date` fails.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(DATE_FORMAT)
}

/// Repository metadata of a version
///
/// The commit-related fields are only populated when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// The latest tag
    pub latest_tag: String,

    /// The abbreviated head commit id
    pub head_commit_short_id: Option<String>,

    /// The head commit time in UTC
    pub head_commit_timestamp: Option<OffsetDateTime>,
}

impl VersionInfo {
    /// Query the metadata from a provider.
    ///
    /// The head commit is only looked up if any of the switches require it.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails, i.e. [`Error::EmptyRepository`]
    /// if commit data is requested from a repository without commits.
    pub fn query<P>(
        provider: &P,
        include_prerelease_suffix: bool,
        include_date: bool,
    ) -> Result<Self, Error>
    where
        P: MetadataProvider + ?Sized,
    {
        let latest_tag = latest_tag(provider.list_tags()?);
        let head_commit_short_id = if include_prerelease_suffix {
            let id = provider.head_commit_id()?;
            Some(short_commit_id(&id).to_owned())
        } else {
            None
        };
        let head_commit_timestamp = if include_date {
            Some(provider.head_commit_timestamp()?.to_offset(UtcOffset::UTC))
        } else {
            None
        };
        tracing::debug!(
            latest_tag = %latest_tag,
            ?head_commit_short_id,
            ?head_commit_timestamp,
            "Queried version info"
        );
        Ok(Self {
            latest_tag,
            head_commit_short_id,
            head_commit_timestamp,
        })
    }

    /// The UTC calendar date of the head commit.
    #[must_use]
    pub fn head_commit_date(&self) -> Option<Date> {
        self.head_commit_timestamp
            .map(|timestamp| timestamp.to_offset(UtcOffset::UTC).date())
    }

    /// Encode as a version string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.latest_tag)?;
        if let Some(short_id) = &self.head_commit_short_id {
            write!(f, "{PRERELEASE_MARKER}{short_id}")?;
        }
        if let Some(date) = self.head_commit_date() {
            let date = format_date(date).map_err(|_| fmt::Error)?;
            write!(f, " ({date})")?;
        }
        Ok(())
    }
}
