//! Core domain models for SyncDeck.
//!
//! This module contains all shared data structures used across the SyncDeck
//! ecosystem.

mod device;
mod plan;
mod profile;
mod sync;

// Re-export all models
pub use device::{Device, DeviceDraft, DeviceStatus, DeviceType, DeviceUpdate};
pub use plan::PlanInfo;
pub use profile::{Profile, ProfileActivity, ProfileOverview, ProfileUpdate};
pub use sync::{BulkDeleteSummary, ReassignmentSummary, SyncReport, SyncStatus};
