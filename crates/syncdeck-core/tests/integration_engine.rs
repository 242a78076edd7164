//! End-to-end scenarios over the public engine surface.

use std::sync::Arc;
use syncdeck_core::{StaticSubscription, SyncEngine};
use syncdeck_types::{
    DeviceDraft, DeviceType, DeviceUpdate, EngineError, Profile, ProfileUpdate,
};

fn engine_with_limit(device_limit: i64) -> SyncEngine {
    SyncEngine::new(Arc::new(StaticSubscription::new("free", device_limit)))
}

/// Create profiles Default and Work, one device on Work, delete Work with an
/// explicit target: the device lands on Default and the summary reports it.
#[test]
fn delete_profile_with_explicit_target() {
    let engine = engine_with_limit(10);
    let default = engine.add_profile("Default", Profile::default_settings());
    let work = engine.add_profile("Work", Profile::default_settings());
    let d1 = engine
        .add_device(DeviceDraft::new("D1", DeviceType::Laptop).with_profile(&work.id))
        .unwrap();

    let summary = engine.delete_profile_with_reassignment(&work.id, Some(&default.id)).unwrap();

    assert_eq!(summary.reassigned_count, 1);
    assert_eq!(summary.target_profile_id, Some(default.id.clone()));
    assert!(engine.profile(&work.id).is_none());
    assert_eq!(engine.device(&d1.id).unwrap().profile_id, Some(default.id));
}

/// Same setup without a target: the engine falls back to the default
/// profile.
#[test]
fn delete_profile_falls_back_to_default() {
    let engine = engine_with_limit(10);
    let default = engine.add_profile("Default", Profile::default_settings());
    let work = engine.add_profile("Work", Profile::default_settings());
    let d1 = engine
        .add_device(DeviceDraft::new("D1", DeviceType::Laptop).with_profile(&work.id))
        .unwrap();

    let summary = engine.delete_profile_with_reassignment(&work.id, None).unwrap();

    assert_eq!(summary.reassigned_count, 1);
    assert_eq!(summary.target_profile_id, Some(default.id.clone()));
    assert_eq!(engine.device(&d1.id).unwrap().profile_id, Some(default.id));
}

/// Device limit of 3: the fourth add is rejected with the upgrade-prompt
/// error; removing one device frees the slot.
#[test]
fn device_limit_enforced_before_insert() {
    let engine = engine_with_limit(3);
    let first = engine.add_device(DeviceDraft::new("a", DeviceType::Laptop)).unwrap();
    engine.add_device(DeviceDraft::new("b", DeviceType::Tablet)).unwrap();
    engine.add_device(DeviceDraft::new("c", DeviceType::Desktop)).unwrap();

    let err = engine.add_device(DeviceDraft::new("d", DeviceType::Smartphone)).unwrap_err();
    assert!(matches!(err, EngineError::LimitExceeded { current: 3, limit: 3, .. }));
    assert!(err.should_prompt_upgrade());
    assert_eq!(engine.device_count(), 3);

    engine.remove_device(&first.id).unwrap();
    assert!(engine.add_device(DeviceDraft::new("d", DeviceType::Smartphone)).is_ok());
}

/// Bulk delete with reset: known devices are reset-then-removed as one
/// step each, the unknown ID is skipped, and the processed count is
/// reported.
#[test]
fn bulk_delete_is_best_effort() {
    let engine = engine_with_limit(10);
    let d1 = engine.add_device(DeviceDraft::new("D1", DeviceType::Laptop)).unwrap();
    let d2 = engine.add_device(DeviceDraft::new("D2", DeviceType::Tablet)).unwrap();

    let summary =
        engine.bulk_delete_devices(&[d1.id.clone(), d2.id.clone(), "missing-id".to_string()], true);

    assert_eq!(summary.requested, 3);
    assert_eq!(summary.processed, 2);
    assert!(engine.device(&d1.id).is_none());
    assert!(engine.device(&d2.id).is_none());
}

/// Direct removal of a profile that still has devices is rejected; no
/// dangling reference can be introduced by bypassing the reassignment flow.
#[test]
fn direct_remove_profile_with_devices_rejected() {
    let engine = engine_with_limit(10);
    engine.add_profile("Default", Profile::default_settings());
    let work = engine.add_profile("Work", Profile::default_settings());
    let device = engine
        .add_device(DeviceDraft::new("D1", DeviceType::Laptop).with_profile(&work.id))
        .unwrap();

    let err = engine.remove_profile(&work.id).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation { .. }));
    assert!(engine.profile(&work.id).is_some());
    assert_eq!(engine.device(&device.id).unwrap().profile_id, Some(work.id));
}

/// Unsetting `is_default` on the sole default profile is rejected and the
/// state is unchanged.
#[test]
fn unset_sole_default_rejected() {
    let engine = engine_with_limit(10);
    let default = engine.add_profile("Default", Profile::default_settings());
    engine.add_profile("Work", Profile::default_settings());

    let err = engine
        .update_profile(
            &default.id,
            ProfileUpdate { is_default: Some(false), ..ProfileUpdate::default() },
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::InvariantViolation { .. }));
    assert!(engine.profile(&default.id).unwrap().is_default);
    let defaults = engine.profiles().into_iter().filter(|p| p.is_default).count();
    assert_eq!(defaults, 1);
}

/// A full dashboard session: mutations interleaved with sync passes never
/// break default uniqueness or leave a dangling reference.
#[test]
fn invariants_hold_across_session() {
    let engine = engine_with_limit(10);
    let default = engine.add_profile("Default", Profile::default_settings());
    let work = engine.add_profile("Work", Profile::default_settings());
    let travel = engine.duplicate_profile(&work.id).unwrap();

    let d1 = engine
        .add_device(DeviceDraft::new("D1", DeviceType::Laptop).with_profile(&work.id))
        .unwrap();
    let d2 = engine.add_device(DeviceDraft::new("D2", DeviceType::Smartphone)).unwrap();
    engine.assign_device_to_profile(&d2.id, &travel.id).unwrap();
    engine
        .update_device(
            &d1.id,
            DeviceUpdate { profile_id: Some(None), ..DeviceUpdate::default() },
        )
        .unwrap();
    engine.assign_device_to_profile(&d1.id, &travel.id).unwrap();
    engine.delete_profile_with_reassignment(&travel.id, None).unwrap();
    let report = engine.sync_device_profiles();
    assert_eq!(report.healed_count, 0);

    let snapshot = engine.snapshot();
    let default_count = snapshot.profiles.iter().filter(|p| p.is_default).count();
    assert_eq!(default_count, 1);
    for device in &snapshot.devices {
        if let Some(profile_id) = &device.profile_id {
            assert!(snapshot.profiles.iter().any(|p| &p.id == profile_id));
            assert_eq!(profile_id, &default.id);
        }
    }
    assert!(snapshot.sync_status.last_synced.is_some());
}
