//! Catalog data model
//!
//! Entries and categories are owned by a single parse invocation. Nothing here
//! is retained by the engine between calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Group label assigned to entries whose metadata line has no `group-title`
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Content classification assigned by the type classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Live,
    OnDemand,
    Series,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Live => write!(f, "live"),
            EntryKind::OnDemand => write!(f, "on_demand"),
            EntryKind::Series => write!(f, "series"),
        }
    }
}

/// Caller-selected content scope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Live,
    Movies,
    Series,
    /// Management view; handled outside the catalog engine and never matches an entry
    Admin,
}

impl Profile {
    /// The entry kind retained for this profile, `None` for profiles that retain nothing
    pub fn target_kind(&self) -> Option<EntryKind> {
        match self {
            Profile::Live => Some(EntryKind::Live),
            Profile::Movies => Some(EntryKind::OnDemand),
            Profile::Series => Some(EntryKind::Series),
            Profile::Admin => None,
        }
    }

    pub fn all() -> &'static [Profile] {
        &[Profile::Live, Profile::Movies, Profile::Series, Profile::Admin]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Live => write!(f, "live"),
            Profile::Movies => write!(f, "movies"),
            Profile::Series => write!(f, "series"),
            Profile::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Profile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" | "live_tv" | "livetv" | "tv" => Ok(Profile::Live),
            "movies" | "movie" | "vod" => Ok(Profile::Movies),
            "series" | "shows" => Ok(Profile::Series),
            "admin" => Ok(Profile::Admin),
            other => Err(AppError::validation(format!("Unknown profile '{other}'"))),
        }
    }
}

/// A classified playlist entry
///
/// `identifier` is an opaque per-entry token for UI keying. It is excluded
/// from equality so two parses of the same text compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub identifier: Uuid,
    pub name: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
    pub locator: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(
        name: String,
        group: String,
        artwork: Option<String>,
        locator: String,
        kind: EntryKind,
    ) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            name,
            group,
            artwork,
            locator,
            kind,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.group == other.group
            && self.artwork == other.artwork
            && self.locator == other.locator
            && self.kind == other.kind
    }
}

impl Eq for Entry {}

/// Entries sharing one group label, in scan order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub members: Vec<Entry>,
}

impl Category {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
