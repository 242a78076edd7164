//! Device model and related types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of hardware a device entry represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Laptop,
    Smartphone,
    Tablet,
    Desktop,
    Server,
    Other,
}

/// Last reported connectivity state of a device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Active,
    Inactive,
    Syncing,
    Error,
    /// Status never reported (e.g. a pending secondary device)
    #[default]
    Unknown,
}

impl DeviceStatus {
    /// Check if the device counts as offline for derived profile activity.
    pub const fn is_offline(self) -> bool {
        matches!(self, Self::Inactive)
    }
}

/// A managed device registered with the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// User-facing label
    pub name: String,
    /// Hardware kind
    pub device_type: DeviceType,
    /// Last reported connectivity state
    #[serde(default)]
    pub status: DeviceStatus,
    /// Profile currently applied to this device, if any.
    /// Written only through the association engine (or its documented
    /// escape hatches); a non-None value always references a live profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// Last known IP address (descriptive metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Unix timestamp of the last connection (descriptive metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_connected: Option<i64>,
    /// Device-local configuration payload; reset restores this to
    /// [`Device::default_settings`]
    #[serde(default = "Device::default_settings")]
    pub settings: Value,
    /// Unix timestamp of creation
    pub created_at: i64,
}

impl Device {
    /// Create a new device from a draft with the given ID.
    pub fn new(id: String, draft: DeviceDraft) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            name: draft.name,
            device_type: draft.device_type,
            status: draft.status,
            profile_id: draft.profile_id,
            ip_address: draft.ip_address,
            last_connected: None,
            settings: draft.settings.unwrap_or_else(Self::default_settings),
            created_at: now,
        }
    }

    /// The pristine configuration payload a reset restores.
    pub fn default_settings() -> Value {
        Value::Object(serde_json::Map::new())
    }

    /// Check if the device currently holds the pristine payload.
    pub fn has_default_settings(&self) -> bool {
        self.settings == Self::default_settings()
    }

    /// Mark the device as seen now.
    pub fn touch_connected(&mut self) {
        self.last_connected = Some(chrono::Utc::now().timestamp());
    }
}

/// Input for creating a new device. The registry assigns the ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeviceDraft {
    pub name: String,
    pub device_type: DeviceType,
    #[serde(default)]
    pub status: DeviceStatus,
    /// Initial profile association, validated by the registry
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Initial configuration payload; defaults to the pristine payload
    #[serde(default)]
    pub settings: Option<Value>,
}

impl DeviceDraft {
    /// Minimal draft with just a name and type.
    pub fn new(name: impl Into<String>, device_type: DeviceType) -> Self {
        Self { name: name.into(), device_type, ..Self::default() }
    }

    /// Draft pre-associated with a profile.
    pub fn with_profile(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }
}

impl Default for DeviceType {
    fn default() -> Self {
        Self::Other
    }
}

/// Field-merge patch for an existing device.
///
/// `None` fields are left untouched. `profile_id` is doubly optional so a
/// patch can distinguish "leave the association alone" (`None`) from
/// "explicitly unassign" (`Some(None)`); setting `Some(Some(id))` is the
/// low-level escape hatch used by the profile-swap flow and is still
/// validated against the profile registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeviceUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub device_type: Option<DeviceType>,
    #[serde(default)]
    pub status: Option<DeviceStatus>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Option<String>>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub last_connected: Option<i64>,
    #[serde(default)]
    pub settings: Option<Value>,
}

/// Serde helper: `Option<Option<T>>` where a present-but-null field means
/// `Some(None)`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
