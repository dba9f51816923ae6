//! optimal-paging - a simulator for the optimal (Belady MIN) page-replacement
//! policy.
//!
//! Given a reference string and a frame capacity, the simulator produces the
//! contents of every frame after every reference, assuming the replacement
//! policy knows the whole future: on a fault with full frames it evicts the
//! resident page whose next use is farthest away, or that is never used
//! again.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Simulator (memory/)                   │
//! │   reference string ──▶ FrameSet ──▶ snapshots + steps     │
//! │                           │                               │
//! │                           ▼                               │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │   Replacers: Optimal | Literal (EvictionPolicy)  │   │
//! │   └──────────────────────────────────────────────────┘   │
//! │                     SimulationStats                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameId, Error, config)
//! - [`memory`] - Frame sets, replacers and the simulator
//!
//! # Quick Start
//! ```
//! use optimal_paging::simulate;
//!
//! let history = simulate(&[7, 0, 1, 2, 0, 3, 0, 4], None);
//! assert_eq!(history.len(), 8);
//! assert_eq!(history[7], vec![4, 0, 1, 2]);
//! ```

pub mod common;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulatorConfig, FRAME_CAPACITY};
pub use common::{Error, FrameId, Result};

pub use memory::replacer::{
    next_use, EvictionPolicy, LiteralReplacer, NextUse, OptimalReplacer, Replacer,
};
pub use memory::{simulate, Access, FrameSet, Simulation, SimulationStats, Simulator, Step};
