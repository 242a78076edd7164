//! Engine operation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// Every variant is a rejected precondition: the engine guarantees that
/// state is unchanged when any of these is returned. There is no fatal
/// class in this core.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// Device with given ID not found
    #[error("Device not found: {id}")]
    DeviceNotFound {
        /// Unique identifier of the missing device
        id: String,
    },

    /// Profile with given ID not found
    #[error("Profile not found: {id}")]
    ProfileNotFound {
        /// Unique identifier of the missing profile
        id: String,
    },

    /// Operation would break a registry invariant (sole default profile,
    /// dangling association, direct delete of a referenced profile)
    #[error("Invariant violation: {message}")]
    InvariantViolation {
        /// Description of the invariant that would be broken
        message: String,
    },

    /// The default profile cannot be deleted
    #[error("Cannot delete the default profile: {id}")]
    CannotDeleteDefault {
        /// Unique identifier of the default profile
        id: String,
    },

    /// Device creation blocked by the plan's device limit
    #[error("Device limit reached: {current} of {limit} ({plan} plan)")]
    LimitExceeded {
        /// Current device count
        current: usize,
        /// Device limit of the active plan
        limit: i64,
        /// Name of the active plan, for the upgrade prompt
        plan: String,
    },
}

impl EngineError {
    /// Check if this error is recoverable by the caller (toast + retry).
    ///
    /// Always true: this core has no fatal error class. Kept as an explicit
    /// classification point for IPC layers.
    pub const fn is_recoverable(&self) -> bool {
        true
    }

    /// Check if the caller should surface an upgrade prompt instead of an
    /// error toast.
    pub const fn should_prompt_upgrade(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. })
    }

    /// Check if this error names a missing entity.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DeviceNotFound { .. } | Self::ProfileNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = EngineError::DeviceNotFound { id: "dev-123".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("DeviceNotFound"));
        assert!(json.contains("dev-123"));

        let deserialized: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_limit_exceeded_display() {
        let err = EngineError::LimitExceeded { current: 3, limit: 3, plan: "free".to_string() };

        let msg = format!("{}", err);
        assert!(msg.contains("3 of 3"));
        assert!(msg.contains("free"));
    }

    #[test]
    fn test_classification() {
        let limit = EngineError::LimitExceeded { current: 1, limit: 1, plan: "free".to_string() };
        let missing = EngineError::ProfileNotFound { id: "p".to_string() };

        assert!(limit.should_prompt_upgrade());
        assert!(!missing.should_prompt_upgrade());
        assert!(missing.is_not_found());
        assert!(limit.is_recoverable());
    }
}
