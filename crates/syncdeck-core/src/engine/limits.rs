//! Device limit guard and the subscription seam.

use parking_lot::RwLock;
use syncdeck_types::PlanInfo;

/// Check whether another device may be added under the given plan limit.
///
/// Pure predicate: `current_count < device_limit`. A limit of zero or below
/// means "no devices allowed" — a negative limit is never unlimited.
pub fn can_add_device(current_count: usize, device_limit: i64) -> bool {
    device_limit > 0 && (current_count as i64) < device_limit
}

/// External subscription/plan collaborator, read-only to the engine.
pub trait SubscriptionProvider: Send + Sync {
    /// Current plan name and device limit.
    fn plan_info(&self) -> PlanInfo;
}

/// Fixed-plan provider for tests and embedding hosts without a billing
/// backend. The plan can be swapped at runtime to model an upgrade.
pub struct StaticSubscription {
    plan: RwLock<PlanInfo>,
}

impl StaticSubscription {
    pub fn new(plan: impl Into<String>, device_limit: i64) -> Self {
        Self { plan: RwLock::new(PlanInfo::new(plan, device_limit)) }
    }

    /// Replace the plan, e.g. after an upgrade completed.
    pub fn set_plan(&self, plan: PlanInfo) {
        *self.plan.write() = plan;
    }
}

impl SubscriptionProvider for StaticSubscription {
    fn plan_info(&self) -> PlanInfo {
        self.plan.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_add_device_basic() {
        assert!(can_add_device(0, 3));
        assert!(can_add_device(2, 3));
        assert!(!can_add_device(3, 3));
        assert!(!can_add_device(4, 3));
    }

    #[test]
    fn test_zero_and_negative_limits_block() {
        assert!(!can_add_device(0, 0));
        assert!(!can_add_device(0, -1));
        assert!(!can_add_device(5, -100));
    }

    #[test]
    fn test_static_subscription_swap() {
        let sub = StaticSubscription::new("free", 3);
        assert_eq!(sub.plan_info().device_limit, 3);

        sub.set_plan(PlanInfo::new("pro", 10));
        assert_eq!(sub.plan_info().plan, "pro");
        assert_eq!(sub.plan_info().device_limit, 10);
    }
}
