//! The device↔profile association and synchronization state engine.
//!
//! [`SyncEngine`] is the single writer surface over the canonical in-memory
//! model: the device collection, the profile collection, and the
//! process-wide sync status. Every mutating operation takes the state write
//! lock for its whole read-modify-write sequence, so concurrent invocations
//! are serialized and cascades (profile deletion with reassignment, bulk
//! device deletion) are atomic to readers.
//!
//! Invariants held at every commit:
//! - exactly one profile has `is_default = true` once any profile exists
//! - every non-None `device.profile_id` references an existing profile

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use syncdeck_types::{Device, Profile, SyncStatus};
use tokio::sync::watch;

mod association;
mod devices;
mod limits;
mod profiles;
mod sync;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use limits::{can_add_device, StaticSubscription, SubscriptionProvider};

/// Canonical mutable state, private to the engine.
#[derive(Default)]
struct EngineState {
    devices: HashMap<String, Device>,
    profiles: HashMap<String, Profile>,
    sync_status: SyncStatus,
}

impl EngineState {
    /// The account's default profile, if any profile exists.
    fn default_profile(&self) -> Option<&Profile> {
        self.profiles.values().find(|p| p.is_default)
    }

    /// IDs of devices currently associated with the given profile.
    fn device_ids_for_profile(&self, profile_id: &str) -> Vec<String> {
        self.devices
            .values()
            .filter(|d| d.profile_id.as_deref() == Some(profile_id))
            .map(|d| d.id.clone())
            .collect()
    }
}

/// Consistent point-in-time copy of the engine state for render passes.
///
/// Collections are sorted by creation time (ID as tiebreaker) so list
/// screens are stable across re-reads.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub devices: Vec<Device>,
    pub profiles: Vec<Profile>,
    pub sync_status: SyncStatus,
}

/// The association & synchronization engine.
///
/// Key responsibilities:
/// - Device registry: add/update/remove/reset with plan-limit preconditions
/// - Profile registry: CRUD, duplication, default-uniqueness enforcement
/// - Association engine: sole writer of `device.profile_id`, cascading
///   deletion with reassignment
/// - Sync status tracking and the self-healing sync pass
pub struct SyncEngine {
    state: RwLock<EngineState>,
    subscription: Arc<dyn SubscriptionProvider>,
    revision_tx: watch::Sender<u64>,
}

impl SyncEngine {
    /// Create an empty engine backed by the given subscription collaborator.
    pub fn new(subscription: Arc<dyn SubscriptionProvider>) -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self { state: RwLock::new(EngineState::default()), subscription, revision_tx }
    }

    /// Subscribe to state changes.
    ///
    /// The channel carries a monotonically increasing revision; observers
    /// await a change and re-read whichever views they render. The counter
    /// only moves on successful mutations.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// Current state revision.
    pub fn revision(&self) -> u64 {
        *self.revision_tx.borrow()
    }

    /// Consistent point-in-time copy of devices, profiles, and sync status.
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.state.read();
        let mut devices: Vec<Device> = state.devices.values().cloned().collect();
        devices.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        let mut profiles: Vec<Profile> = state.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        EngineSnapshot { devices, profiles, sync_status: state.sync_status.clone() }
    }

    /// Bump the revision after a successful mutation.
    ///
    /// Called with the state lock already released so observers that re-read
    /// synchronously never block on the writer.
    fn notify(&self) {
        self.revision_tx.send_modify(|rev| *rev += 1);
    }
}
