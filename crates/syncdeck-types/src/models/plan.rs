//! Subscription plan data.

use serde::{Deserialize, Serialize};

/// Plan information exposed by the external subscription collaborator.
///
/// Read-only to the engine: the device limit is an injected constraint,
/// not something the engine owns or mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanInfo {
    /// Name of the active plan (e.g. "free", "pro")
    pub plan: String,
    /// Maximum number of devices the plan allows.
    /// Zero or negative means no devices allowed; never unlimited.
    pub device_limit: i64,
}

impl PlanInfo {
    pub fn new(plan: impl Into<String>, device_limit: i64) -> Self {
        Self { plan: plan.into(), device_limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_info_roundtrip() {
        let plan = PlanInfo::new("pro", 10);

        let json = serde_json::to_string(&plan).unwrap();
        let parsed: PlanInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, parsed);
        assert_eq!(parsed.device_limit, 10);
    }
}
