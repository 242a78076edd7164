//! Settings profile model and related types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, reusable settings bundle that can be applied to devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique identifier
    pub id: String,
    /// User-facing label
    pub name: String,
    /// Whether this is the account's default profile.
    /// Exactly one profile is default at all times once any profile exists;
    /// the registry enforces this on every write.
    #[serde(default)]
    pub is_default: bool,
    /// The configuration bundle applied to associated devices
    #[serde(default = "Profile::default_settings")]
    pub settings: Value,
    /// Unix timestamp of creation
    pub created_at: i64,
    /// Unix timestamp of the last settings/name change
    pub updated_at: i64,
}

impl Profile {
    /// Create a new profile with the given ID.
    pub fn new(id: String, name: String, is_default: bool, settings: Value) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self { id, name, is_default, settings, created_at: now, updated_at: now }
    }

    /// Empty settings bundle.
    pub fn default_settings() -> Value {
        Value::Object(serde_json::Map::new())
    }

    /// Stamp the profile as modified now.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }

    /// Name used for a duplicate of this profile.
    pub fn copy_name(&self) -> String {
        format!("{} (copy)", self.name)
    }
}

/// Derived activity of a profile, recomputed on every read.
///
/// A profile is inactive iff it has zero associated devices or every
/// associated device is offline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileActivity {
    Active,
    Inactive,
}

/// Field-merge patch for an existing profile.
///
/// `is_default: Some(true)` promotes the profile and demotes the previous
/// default in the same commit; `is_default: Some(false)` on the current
/// default is rejected (it would leave no default).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub settings: Option<Value>,
}

/// Profile plus its derived per-read statistics, for list screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileOverview {
    /// The profile record
    pub profile: Profile,
    /// Number of devices currently associated
    pub device_count: usize,
    /// Derived activity over the associated devices
    pub activity: ProfileActivity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_roundtrip() {
        let profile = Profile::new(
            "prof-1".to_string(),
            "Work".to_string(),
            false,
            json!({"homepage": "https://example.com"}),
        );

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }

    #[test]
    fn test_copy_name() {
        let profile =
            Profile::new("p".to_string(), "Work".to_string(), false, Profile::default_settings());
        assert_eq!(profile.copy_name(), "Work (copy)");
    }

    #[test]
    fn test_activity_serialization() {
        assert_eq!(serde_json::to_string(&ProfileActivity::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&ProfileActivity::Inactive).unwrap(), "\"inactive\"");
    }
}
