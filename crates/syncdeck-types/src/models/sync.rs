//! Synchronization status and operation summary types.

use serde::{Deserialize, Serialize};

/// Process-wide synchronization status.
///
/// Mutated only by the sync tracker around a sync pass; read by any
/// collaborator for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SyncStatus {
    /// Whether a synchronization pass is currently running
    #[serde(default)]
    pub in_progress: bool,
    /// Unix timestamp of the last completed pass, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<i64>,
}

/// Result of a self-healing synchronization pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of dangling associations that were unassigned
    pub healed_count: usize,
    /// Completion timestamp of this pass
    pub last_synced: i64,
}

/// Result of deleting a profile with device reassignment, for UI messaging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReassignmentSummary {
    /// Number of devices moved (or unassigned) off the deleted profile
    pub reassigned_count: usize,
    /// Profile the devices were moved to; `None` if they were unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_profile_id: Option<String>,
}

/// Result of a best-effort bulk device deletion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkDeleteSummary {
    /// Number of IDs the caller asked to delete
    pub requested: usize,
    /// Number of devices actually deleted (unknown IDs are skipped)
    pub processed: usize,
}
