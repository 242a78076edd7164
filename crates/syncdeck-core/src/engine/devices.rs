//! Device registry operations.

use super::{can_add_device, SyncEngine};
use syncdeck_types::{Device, DeviceDraft, DeviceUpdate, EngineError, Result};
use uuid::Uuid;

impl SyncEngine {
    /// Add a new device.
    ///
    /// The plan limit is checked before any mutation: on rejection the
    /// registry is untouched and the caller drives the upgrade-prompt flow.
    /// An initial profile association in the draft must reference an
    /// existing profile.
    pub fn add_device(&self, draft: DeviceDraft) -> Result<Device> {
        let plan = self.subscription.plan_info();
        let mut state = self.state.write();

        let current = state.devices.len();
        if !can_add_device(current, plan.device_limit) {
            return Err(EngineError::LimitExceeded {
                current,
                limit: plan.device_limit,
                plan: plan.plan,
            });
        }

        if let Some(profile_id) = &draft.profile_id {
            if !state.profiles.contains_key(profile_id) {
                return Err(EngineError::ProfileNotFound { id: profile_id.clone() });
            }
        }

        let id = Uuid::new_v4().to_string();
        let device = Device::new(id.clone(), draft);
        state.devices.insert(id, device.clone());
        drop(state);

        tracing::info!(device_id = %device.id, name = %device.name, "device added");
        self.notify();
        Ok(device)
    }

    /// Merge a patch into an existing device.
    ///
    /// This is the low-level escape hatch: prefer
    /// [`SyncEngine::assign_device_to_profile`] for association changes. A
    /// patch that sets a non-null `profile_id` is still validated against
    /// the profile registry, so no write path can create a dangling
    /// reference.
    pub fn update_device(&self, id: &str, patch: DeviceUpdate) -> Result<Device> {
        let mut state = self.state.write();

        if let Some(Some(profile_id)) = &patch.profile_id {
            if !state.profiles.contains_key(profile_id) {
                return Err(EngineError::ProfileNotFound { id: profile_id.clone() });
            }
        }

        let device = state
            .devices
            .get_mut(id)
            .ok_or_else(|| EngineError::DeviceNotFound { id: id.to_string() })?;

        if let Some(name) = patch.name {
            device.name = name;
        }
        if let Some(device_type) = patch.device_type {
            device.device_type = device_type;
        }
        if let Some(status) = patch.status {
            device.status = status;
        }
        if let Some(profile_id) = patch.profile_id {
            device.profile_id = profile_id;
        }
        if let Some(ip_address) = patch.ip_address {
            device.ip_address = Some(ip_address);
        }
        if let Some(last_connected) = patch.last_connected {
            device.last_connected = Some(last_connected);
        }
        if let Some(settings) = patch.settings {
            device.settings = settings;
        }

        let updated = device.clone();
        drop(state);

        tracing::debug!(device_id = %id, "device updated");
        self.notify();
        Ok(updated)
    }

    /// Remove a device unconditionally.
    ///
    /// Profiles reference devices by scanning only, so no cascade is needed
    /// on this side.
    pub fn remove_device(&self, id: &str) -> Result<Device> {
        let mut state = self.state.write();
        let removed = state
            .devices
            .remove(id)
            .ok_or_else(|| EngineError::DeviceNotFound { id: id.to_string() })?;
        drop(state);

        tracing::info!(device_id = %id, "device removed");
        self.notify();
        Ok(removed)
    }

    /// Restore a device's configuration payload to the pristine state.
    ///
    /// Identity, association, and existence are untouched. Idempotent:
    /// resetting twice yields the same state as once.
    pub fn reset_device_settings(&self, id: &str) -> Result<Device> {
        let mut state = self.state.write();
        let device = state
            .devices
            .get_mut(id)
            .ok_or_else(|| EngineError::DeviceNotFound { id: id.to_string() })?;

        device.settings = Device::default_settings();
        let reset = device.clone();
        drop(state);

        tracing::info!(device_id = %id, "device settings reset");
        self.notify();
        Ok(reset)
    }

    /// Look up a device by ID.
    pub fn device(&self, id: &str) -> Option<Device> {
        self.state.read().devices.get(id).cloned()
    }

    /// All devices, sorted by creation time.
    pub fn devices(&self) -> Vec<Device> {
        self.snapshot().devices
    }

    /// Devices currently associated with the given profile.
    pub fn devices_by_profile(&self, profile_id: &str) -> Vec<Device> {
        let mut devices: Vec<Device> = self
            .state
            .read()
            .devices
            .values()
            .filter(|d| d.profile_id.as_deref() == Some(profile_id))
            .cloned()
            .collect();
        devices.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        devices
    }

    /// Devices with no profile association.
    pub fn unassigned_devices(&self) -> Vec<Device> {
        let mut devices: Vec<Device> = self
            .state
            .read()
            .devices
            .values()
            .filter(|d| d.profile_id.is_none())
            .cloned()
            .collect();
        devices.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        devices
    }

    /// Number of registered devices.
    pub fn device_count(&self) -> usize {
        self.state.read().devices.len()
    }
}
