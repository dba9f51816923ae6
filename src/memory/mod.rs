//! Simulated physical memory.
//!
//! A fixed number of frames, filled on demand from a reference string and
//! refilled by an eviction policy once full.
//!
//! # Components
//! - [`Simulator`] / [`simulate`] - Replays a reference string
//! - [`FrameSet`] - The resident pages at one point in time
//! - [`SimulationStats`] - Hit/fault counters
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
pub mod replacer;
mod simulator;
mod stats;

pub use frame_set::{Access, FrameSet};
pub use simulator::{simulate, Simulation, Simulator, Step};
pub use stats::SimulationStats;
