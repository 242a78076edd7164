//! Profile registry operations.

use super::SyncEngine;
use serde_json::Value;
use syncdeck_types::{
    EngineError, Profile, ProfileActivity, ProfileOverview, ProfileUpdate, Result,
};
use uuid::Uuid;

impl SyncEngine {
    /// Add a new profile.
    ///
    /// The very first profile of a fresh account becomes the default; every
    /// later profile is created with `is_default = false` regardless of
    /// caller intent (promotion goes through [`SyncEngine::update_profile`]).
    pub fn add_profile(&self, name: impl Into<String>, settings: Value) -> Profile {
        let mut state = self.state.write();
        let is_default = state.profiles.is_empty();
        let id = Uuid::new_v4().to_string();
        let profile = Profile::new(id.clone(), name.into(), is_default, settings);
        state.profiles.insert(id, profile.clone());
        drop(state);

        tracing::info!(profile_id = %profile.id, name = %profile.name, is_default, "profile added");
        self.notify();
        profile
    }

    /// Merge a patch into an existing profile.
    ///
    /// Default handling keeps the exactly-one invariant total:
    /// - `is_default: Some(true)` on a non-default profile promotes it and
    ///   demotes the previous default in the same commit
    /// - `is_default: Some(false)` on the current default is rejected —
    ///   the account would be left without a default
    pub fn update_profile(&self, id: &str, patch: ProfileUpdate) -> Result<Profile> {
        let mut state = self.state.write();

        let profile = state
            .profiles
            .get(id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })?;

        if patch.is_default == Some(false) && profile.is_default {
            return Err(EngineError::InvariantViolation {
                message: format!(
                    "cannot unset default on profile {id} without promoting another profile"
                ),
            });
        }

        if patch.is_default == Some(true) && !profile.is_default {
            if let Some(previous) = state.profiles.values_mut().find(|p| p.is_default) {
                previous.is_default = false;
                previous.touch();
            }
        }

        // Re-borrow mutably after the demotion pass above.
        let profile = state
            .profiles
            .get_mut(id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })?;

        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(is_default) = patch.is_default {
            profile.is_default = is_default;
        }
        if let Some(settings) = patch.settings {
            profile.settings = settings;
        }
        profile.touch();

        let updated = profile.clone();
        drop(state);

        tracing::debug!(profile_id = %id, "profile updated");
        self.notify();
        Ok(updated)
    }

    /// Deep-copy a profile's configuration into a new profile.
    ///
    /// The duplicate gets a fresh ID, `is_default = false`, a
    /// disambiguated name, and zero device associations.
    pub fn duplicate_profile(&self, id: &str) -> Result<Profile> {
        let mut state = self.state.write();

        let source = state
            .profiles
            .get(id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })?;

        let copy_id = Uuid::new_v4().to_string();
        let copy =
            Profile::new(copy_id.clone(), source.copy_name(), false, source.settings.clone());
        state.profiles.insert(copy_id, copy.clone());
        drop(state);

        tracing::info!(source_id = %id, copy_id = %copy.id, "profile duplicated");
        self.notify();
        Ok(copy)
    }

    /// Low-level profile deletion.
    ///
    /// Rejects the default profile and any profile that still has devices
    /// attached; the supported deletion path is
    /// [`SyncEngine::delete_profile_with_reassignment`], which moves the
    /// devices first.
    pub fn remove_profile(&self, id: &str) -> Result<Profile> {
        let mut state = self.state.write();

        let profile = state
            .profiles
            .get(id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })?;

        if profile.is_default {
            return Err(EngineError::CannotDeleteDefault { id: id.to_string() });
        }

        let attached = state.device_ids_for_profile(id);
        if !attached.is_empty() {
            return Err(EngineError::InvariantViolation {
                message: format!(
                    "profile {id} still has {} associated device(s); reassign them first",
                    attached.len()
                ),
            });
        }

        let removed = match state.profiles.remove(id) {
            Some(profile) => profile,
            None => return Err(EngineError::ProfileNotFound { id: id.to_string() }),
        };
        drop(state);

        tracing::info!(profile_id = %id, "profile removed");
        self.notify();
        Ok(removed)
    }

    /// Merge an imported settings object into a profile.
    ///
    /// The import boundary hands the engine an arbitrary JSON object from a
    /// settings file; keys are shallow-merged over the existing bundle. The
    /// self-healing sync pass stays safe to run afterwards.
    pub fn import_profile_settings(&self, id: &str, patch: Value) -> Result<Profile> {
        let Value::Object(patch) = patch else {
            return Err(EngineError::InvariantViolation {
                message: "settings import must be a JSON object".to_string(),
            });
        };

        let mut state = self.state.write();
        let profile = state
            .profiles
            .get_mut(id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })?;

        match &mut profile.settings {
            Value::Object(settings) => {
                for (key, value) in patch {
                    settings.insert(key, value);
                }
            }
            other => *other = Value::Object(patch),
        }
        profile.touch();

        let updated = profile.clone();
        drop(state);

        tracing::info!(profile_id = %id, "profile settings imported");
        self.notify();
        Ok(updated)
    }

    /// Look up a profile by ID.
    pub fn profile(&self, id: &str) -> Option<Profile> {
        self.state.read().profiles.get(id).cloned()
    }

    /// All profiles, sorted by creation time.
    pub fn profiles(&self) -> Vec<Profile> {
        self.snapshot().profiles
    }

    /// The account's default profile, if any profile exists.
    pub fn default_profile(&self) -> Option<Profile> {
        self.state.read().default_profile().cloned()
    }

    /// Derived activity of a profile, recomputed from current device state.
    pub fn profile_activity(&self, id: &str) -> Option<ProfileActivity> {
        let state = self.state.read();
        if !state.profiles.contains_key(id) {
            return None;
        }
        let mut any_device = false;
        let mut any_online = false;
        for device in state.devices.values() {
            if device.profile_id.as_deref() == Some(id) {
                any_device = true;
                if !device.status.is_offline() {
                    any_online = true;
                    break;
                }
            }
        }
        Some(if any_device && any_online {
            ProfileActivity::Active
        } else {
            ProfileActivity::Inactive
        })
    }

    /// All profiles with their derived device counts and activity, for list
    /// screens. Recomputed on every call.
    pub fn profile_overviews(&self) -> Vec<ProfileOverview> {
        let state = self.state.read();
        let mut overviews: Vec<ProfileOverview> = state
            .profiles
            .values()
            .map(|profile| {
                let mut device_count = 0;
                let mut any_online = false;
                for device in state.devices.values() {
                    if device.profile_id.as_deref() == Some(profile.id.as_str()) {
                        device_count += 1;
                        if !device.status.is_offline() {
                            any_online = true;
                        }
                    }
                }
                let activity = if device_count > 0 && any_online {
                    ProfileActivity::Active
                } else {
                    ProfileActivity::Inactive
                };
                ProfileOverview { profile: profile.clone(), device_count, activity }
            })
            .collect();
        overviews.sort_by(|a, b| {
            (a.profile.created_at, &a.profile.id).cmp(&(b.profile.created_at, &b.profile.id))
        });
        overviews
    }
}
