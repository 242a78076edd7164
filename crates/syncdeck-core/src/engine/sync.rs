//! Sync status tracking and the self-healing synchronization pass.

use super::{EngineState, SyncEngine};
use syncdeck_types::{PlanInfo, SyncReport, SyncStatus};

impl SyncEngine {
    /// Run a synchronization pass over the device↔profile associations.
    ///
    /// Re-validates that every device's `profile_id` still references an
    /// existing profile and unassigns any that does not. The registries
    /// cannot produce such a reference themselves; this guards against
    /// inconsistencies introduced through the external import boundary.
    /// Idempotent, and commits as one atomic transition: readers see either
    /// the pre- or the post-sync state.
    pub fn sync_device_profiles(&self) -> SyncReport {
        let mut state = self.state.write();
        state.sync_status.in_progress = true;

        let EngineState { devices, profiles, sync_status } = &mut *state;
        let mut healed = 0;
        for device in devices.values_mut() {
            let dangling = device
                .profile_id
                .as_deref()
                .is_some_and(|profile_id| !profiles.contains_key(profile_id));
            if dangling {
                tracing::warn!(
                    device_id = %device.id,
                    profile_id = device.profile_id.as_deref().unwrap_or_default(),
                    "sync pass: dangling profile reference unassigned"
                );
                device.profile_id = None;
                healed += 1;
            }
        }

        let now = chrono::Utc::now().timestamp();
        sync_status.in_progress = false;
        sync_status.last_synced = Some(now);
        drop(state);

        tracing::info!(healed, "sync pass completed");
        self.notify();
        SyncReport { healed_count: healed, last_synced: now }
    }

    /// Current synchronization status.
    pub fn sync_status(&self) -> SyncStatus {
        self.state.read().sync_status.clone()
    }

    /// Current device count together with the active plan, for the
    /// dashboard's "N of M devices" header.
    pub fn device_capacity(&self) -> (usize, PlanInfo) {
        let count = self.state.read().devices.len();
        (count, self.subscription.plan_info())
    }
}
