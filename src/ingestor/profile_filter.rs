//! Profile gate between classification and aggregation

use crate::models::{EntryKind, Profile};

/// Whether an entry of `kind` belongs to `profile`
///
/// Profiles without a target kind (admin) retain nothing.
pub fn accepts(profile: Profile, kind: EntryKind) -> bool {
    profile.target_kind() == Some(kind)
}
