//! Configuration for the simulator.

use crate::common::{Error, Result};
use crate::memory::replacer::EvictionPolicy;

/// Number of physical frames in the simulated memory.
///
/// Four frames is the classic textbook setup: small enough to trace by
/// hand, large enough that the reference strings used in exercises produce
/// several evictions.
pub const FRAME_CAPACITY: usize = 4;

/// Settings for a [`Simulator`](crate::Simulator).
///
/// Fields are private so that a config can only be built through the
/// validating constructors.
///
/// # Example
/// ```
/// use optimal_paging::{EvictionPolicy, SimulatorConfig};
///
/// let config = SimulatorConfig::with_capacity(3)
///     .unwrap()
///     .policy(EvictionPolicy::Literal);
/// assert_eq!(config.capacity(), 3);
/// assert_eq!(config.eviction_policy(), EvictionPolicy::Literal);
///
/// assert!(SimulatorConfig::with_capacity(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    capacity: usize,
    policy: EvictionPolicy,
}

impl SimulatorConfig {
    /// Config with a custom frame capacity and the optimal policy.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            policy: EvictionPolicy::default(),
        })
    }

    /// Replace the eviction policy.
    pub fn policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected eviction policy.
    #[inline]
    pub fn eviction_policy(&self) -> EvictionPolicy {
        self.policy
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            capacity: FRAME_CAPACITY,
            policy: EvictionPolicy::Optimal,
        }
    }
}
