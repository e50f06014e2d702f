//! Registry revision counters.
//!
//! Revisions are 48-bit: registry entries pack them into six wire bytes.

use crate::error::CidError;

/// Highest revision a registry entry can reach.
pub const MAX_REVISION: u64 = (1 << 48) - 1;

/// The next revision after `current`, or 0 for a fresh entry.
///
/// Exceeding [`MAX_REVISION`] is an explicit error, never a sentinel value.
pub fn increment_revision(current: Option<u64>) -> Result<u64, CidError> {
    let next = match current {
        Some(revision) => revision.saturating_add(1),
        None => 0,
    };
    if next > MAX_REVISION {
        tracing::warn!(revision = next, "revision exceeds the maximum allowed value");
        return Err(CidError::RevisionOverflow(next));
    }
    Ok(next)
}
