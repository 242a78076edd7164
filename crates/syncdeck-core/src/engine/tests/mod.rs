use super::{StaticSubscription, SyncEngine};
use std::sync::Arc;
use syncdeck_types::{DeviceDraft, DeviceType, Profile};


/// Engine backed by a fixed plan with the given device limit.
fn test_engine(device_limit: i64) -> SyncEngine {
    SyncEngine::new(Arc::new(StaticSubscription::new("free", device_limit)))
}

/// Engine with a default profile plus one secondary profile.
fn engine_with_profiles(device_limit: i64) -> (SyncEngine, Profile, Profile) {
    let engine = test_engine(device_limit);
    let default = engine.add_profile("Default", Profile::default_settings());
    let work = engine.add_profile("Work", Profile::default_settings());
    (engine, default, work)
}

fn laptop(name: &str) -> DeviceDraft {
    DeviceDraft::new(name, DeviceType::Laptop)
}
