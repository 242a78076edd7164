//! Association engine: assignment, cascading deletion, bulk deletion.
//!
//! The only component allowed to mutate the device→profile edge. Every
//! routine here completes as one synchronous unit of work under the state
//! write lock, so the no-dangling-reference invariant is never observable
//! as broken, even transiently, by concurrent readers.

use super::SyncEngine;
use syncdeck_types::{
    BulkDeleteSummary, Device, EngineError, ReassignmentSummary, Result,
};

impl SyncEngine {
    /// Point a device at a profile.
    ///
    /// Both IDs are validated before the edge is written. This is the
    /// legitimate external write path for `profile_id`; the profile-swap
    /// dialog first nulls the edge via the device registry and then calls
    /// this, so derived views never see a device under two profiles.
    pub fn assign_device_to_profile(&self, device_id: &str, profile_id: &str) -> Result<Device> {
        let mut state = self.state.write();

        if !state.profiles.contains_key(profile_id) {
            return Err(EngineError::ProfileNotFound { id: profile_id.to_string() });
        }
        let device = state
            .devices
            .get_mut(device_id)
            .ok_or_else(|| EngineError::DeviceNotFound { id: device_id.to_string() })?;

        device.profile_id = Some(profile_id.to_string());
        let updated = device.clone();
        drop(state);

        tracing::info!(device_id = %device_id, profile_id = %profile_id, "device assigned");
        self.notify();
        Ok(updated)
    }

    /// Clear a device's profile association.
    pub fn unassign_device_from_profile(&self, device_id: &str) -> Result<Device> {
        let mut state = self.state.write();
        let device = state
            .devices
            .get_mut(device_id)
            .ok_or_else(|| EngineError::DeviceNotFound { id: device_id.to_string() })?;

        device.profile_id = None;
        let updated = device.clone();
        drop(state);

        tracing::info!(device_id = %device_id, "device unassigned");
        self.notify();
        Ok(updated)
    }

    /// Delete a profile, moving its devices off it first.
    ///
    /// Reassignment target precedence:
    /// 1. a supplied target (must exist and differ from the deleted profile)
    /// 2. the account's default profile
    /// 3. defensively, no other profile available: unassign the devices
    ///
    /// The reassignment and the deletion commit as one state transition;
    /// the profile is only removed after every edge has been moved.
    pub fn delete_profile_with_reassignment(
        &self,
        profile_id: &str,
        target_profile_id: Option<&str>,
    ) -> Result<ReassignmentSummary> {
        let mut state = self.state.write();

        let profile = state
            .profiles
            .get(profile_id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: profile_id.to_string() })?;
        if profile.is_default {
            return Err(EngineError::CannotDeleteDefault { id: profile_id.to_string() });
        }

        if let Some(target) = target_profile_id {
            if target == profile_id {
                return Err(EngineError::InvariantViolation {
                    message: format!("cannot reassign devices of profile {profile_id} to itself"),
                });
            }
            if !state.profiles.contains_key(target) {
                return Err(EngineError::ProfileNotFound { id: target.to_string() });
            }
        }

        let associated = state.device_ids_for_profile(profile_id);
        let summary = if associated.is_empty() {
            ReassignmentSummary { reassigned_count: 0, target_profile_id: None }
        } else {
            let resolved: Option<String> = target_profile_id
                .map(str::to_string)
                .or_else(|| {
                    state
                        .default_profile()
                        .filter(|p| p.id != profile_id)
                        .map(|p| p.id.clone())
                });

            for device_id in &associated {
                if let Some(device) = state.devices.get_mut(device_id) {
                    device.profile_id = resolved.clone();
                }
            }
            ReassignmentSummary {
                reassigned_count: associated.len(),
                target_profile_id: resolved,
            }
        };

        state.profiles.remove(profile_id);
        drop(state);

        tracing::info!(
            profile_id = %profile_id,
            reassigned = summary.reassigned_count,
            target = summary.target_profile_id.as_deref().unwrap_or("<unassigned>"),
            "profile deleted with reassignment"
        );
        self.notify();
        Ok(summary)
    }

    /// Delete a batch of devices, best-effort.
    ///
    /// Per device, the optional settings reset and the removal are one
    /// logical step; an unknown ID is skipped with a warning and never
    /// aborts the rest of the batch. The summary reports the count actually
    /// processed, not the count requested.
    pub fn bulk_delete_devices(
        &self,
        device_ids: &[String],
        reset_settings_first: bool,
    ) -> BulkDeleteSummary {
        let mut state = self.state.write();
        let mut processed = 0;

        for device_id in device_ids {
            let Some(device) = state.devices.get_mut(device_id) else {
                tracing::warn!(device_id = %device_id, "bulk delete: unknown device skipped");
                continue;
            };
            if reset_settings_first {
                device.settings = Device::default_settings();
            }
            state.devices.remove(device_id);
            processed += 1;
        }
        drop(state);

        if processed > 0 {
            self.notify();
        }
        tracing::info!(requested = device_ids.len(), processed, "bulk device delete completed");
        BulkDeleteSummary { requested: device_ids.len(), processed }
    }
}
