//! # SyncDeck Types
//!
//! Core types, models, and error definitions for SyncDeck.
//!
//! This crate provides the foundational type system for the SyncDeck ecosystem:
//!
//! - **`error`** - Typed error hierarchy for engine operations
//! - **`models`** - Domain models (Device, Profile, SyncStatus, PlanInfo)
//!
//! ## Architecture Role
//!
//! `syncdeck-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!         syncdeck-types (this crate)
//!                 │
//!                 ▼
//!          syncdeck-core
//!                 │
//!                 ▼
//!        dashboard UI / IPC hosts
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API/IPC
//! - **Clone** for cheap sharing across read boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{EngineError, Result};

// Re-export core model types
pub use models::{
    BulkDeleteSummary, Device, DeviceDraft, DeviceStatus, DeviceType, DeviceUpdate, PlanInfo,
    Profile, ProfileActivity, ProfileOverview, ProfileUpdate, ReassignmentSummary, SyncReport,
    SyncStatus,
};
