//! # SyncDeck Core
//!
//! Device/profile association and synchronization engine for SyncDeck.
//!
//! ## Architecture
//!
//! ```text
//! syncdeck-core/src/
//! ├── engine/
//! │   ├── mod.rs         # SyncEngine state container + snapshot/observer surface
//! │   ├── devices.rs     # Device registry operations
//! │   ├── profiles.rs    # Profile registry operations
//! │   ├── association.rs # Assignment, cascading deletion, bulk delete
//! │   ├── limits.rs      # Device limit guard + subscription seam
//! │   └── sync.rs        # Self-healing sync pass + status tracker
//! └── logging.rs         # tracing setup for embedding hosts
//! ```
//!
//! The engine owns the canonical in-memory model of devices, profiles, and
//! the many-to-one association between them. All mutation goes through the
//! operation surface of [`SyncEngine`]; UI collaborators observe changes via
//! [`SyncEngine::subscribe`] and re-read derived views, which are recomputed
//! from current state on every call.

pub mod engine;
pub mod logging;

// Re-export commonly used types
pub use engine::{
    can_add_device, EngineSnapshot, StaticSubscription, SubscriptionProvider, SyncEngine,
};
pub use syncdeck_types::{EngineError, Result};
