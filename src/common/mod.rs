//! Common types shared across the crate.
//!
//! - Configuration (frame capacity, eviction policy)
//! - Error types
//! - Identifiers (FrameId)

pub mod config;
pub mod error;
mod frame_id;

pub use config::{SimulatorConfig, FRAME_CAPACITY};
pub use error::{Error, Result};
pub use frame_id::FrameId;
