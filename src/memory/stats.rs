//! Simulation statistics.

use std::fmt;

use crate::memory::Access;

/// Counters collected over one simulation run.
///
/// A run is single-threaded, so these are plain integers; the struct is
/// `Copy` and can be compared or printed directly.
///
/// # Example
/// ```
/// use optimal_paging::Simulator;
///
/// let run = Simulator::new().run(&[1, 2, 1, 3], None);
/// let stats = run.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hit_rate(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References to a resident page.
    pub hits: u64,

    /// References to a non-resident page.
    pub faults: u64,

    /// Faults that had to evict a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one reference.
    pub fn record<P>(&mut self, access: &Access<P>) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Loaded { .. } => self.faults += 1,
            Access::Replaced { .. } => {
                self.faults += 1;
                self.evictions += 1;
            }
        }
    }

    /// Number of references counted.
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
