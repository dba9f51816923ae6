//! Simulator - replays a reference string against a frame set.
//!
//! The [`Simulator`] provides:
//! - One frame-set snapshot per reference
//! - A per-reference trace of hits, loads and evictions
//! - Hit/fault statistics
//! - Pluggable eviction policies

use log::{debug, trace};

use crate::common::{Error, Result, SimulatorConfig};
use crate::memory::replacer::{EvictionPolicy, Replacer};
use crate::memory::{Access, FrameSet, SimulationStats};

/// Simulate optimal replacement with four frames.
///
/// Returns one snapshot per reference. When `seed` is given it becomes
/// snapshot 0 and every reference is still processed, so the history is one
/// entry longer than `sequence`.
///
/// # Example
/// ```
/// use optimal_paging::simulate;
///
/// let history = simulate(&[1, 2, 3, 1, 4], None);
/// assert_eq!(history.len(), 5);
/// assert_eq!(history[4], vec![1, 2, 3, 4]);
///
/// let seeded = simulate(&[4], Some(&[0, 1, 2, 3][..]));
/// assert_eq!(seeded, vec![vec![0, 1, 2, 3], vec![4, 1, 2, 3]]);
/// ```
pub fn simulate<P: PartialEq + Clone>(sequence: &[P], seed: Option<&[P]>) -> Vec<Vec<P>> {
    Simulator::new().run(sequence, seed).into_snapshots()
}

/// One processed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<P> {
    /// Index of the reference in the input sequence.
    pub position: usize,

    /// The referenced page.
    pub page: P,

    /// What the reference did to the frame set.
    pub access: Access<P>,
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation<P> {
    snapshots: Vec<Vec<P>>,
    steps: Vec<Step<P>>,
    stats: SimulationStats,
    seeded: bool,
}

impl<P> Simulation<P> {
    /// Frame-set history, seed first if one was given.
    pub fn snapshots(&self) -> &[Vec<P>] {
        &self.snapshots
    }

    /// Consume the run, keeping only the history.
    pub fn into_snapshots(self) -> Vec<Vec<P>> {
        self.snapshots
    }

    /// One entry per reference, in input order.
    pub fn steps(&self) -> &[Step<P>] {
        &self.steps
    }

    /// Counters for the run.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Frames after the last reference (or the seed for an empty input).
    pub fn final_frames(&self) -> Option<&[P]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Whether snapshot 0 is a caller-supplied seed.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Replays reference strings against a fixed number of frames.
///
/// The replacer is any [`Replacer`]; by default it is an
/// [`EvictionPolicy`] so the policy can be chosen at runtime.
///
/// # Usage
/// ```
/// use optimal_paging::{EvictionPolicy, Simulator, SimulatorConfig};
///
/// let config = SimulatorConfig::default().policy(EvictionPolicy::Literal);
/// let simulator = Simulator::from_config(config);
///
/// let run = simulator.run(&[7, 0, 1, 2, 0, 3, 0, 4], None);
/// assert_eq!(run.snapshots()[5], vec![7, 3, 1, 2]);
/// assert_eq!(run.stats().evictions, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator<R: Replacer = EvictionPolicy> {
    /// Number of frames (never 0).
    capacity: usize,

    /// Eviction policy for full frame sets.
    replacer: R,
}

impl Simulator {
    /// Four frames, optimal policy.
    pub fn new() -> Self {
        Self::from_config(SimulatorConfig::default())
    }

    /// Build a simulator from a validated config.
    pub fn from_config(config: SimulatorConfig) -> Self {
        Self {
            capacity: config.capacity(),
            replacer: config.eviction_policy(),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Replacer> Simulator<R> {
    /// Build a simulator around a custom replacer.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn with_replacer(capacity: usize, replacer: R) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self { capacity, replacer })
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The eviction policy in use.
    #[inline]
    pub fn replacer(&self) -> &R {
        &self.replacer
    }

    /// Replay `sequence`, optionally starting from `seed`.
    ///
    /// Each reference sees only the references after it as lookahead.
    pub fn run<P: PartialEq + Clone>(&self, sequence: &[P], seed: Option<&[P]>) -> Simulation<P> {
        debug!(
            "simulating {} references on {} frames ({}, seeded: {})",
            sequence.len(),
            self.capacity,
            self.replacer.name(),
            seed.is_some()
        );

        let mut snapshots = Vec::with_capacity(sequence.len() + usize::from(seed.is_some()));
        let mut steps = Vec::with_capacity(sequence.len());
        let mut stats = SimulationStats::new();

        let mut frames = match seed {
            Some(pages) => {
                snapshots.push(pages.to_vec());
                FrameSet::with_pages(pages.to_vec(), self.capacity)
            }
            None => FrameSet::new(self.capacity),
        };

        for (position, page) in sequence.iter().enumerate() {
            let lookahead = &sequence[position + 1..];
            let access = frames.access(page.clone(), lookahead, &self.replacer);

            match &access {
                Access::Hit => {}
                Access::Loaded { frame } => {
                    trace!("ref #{}: fault, loaded into {}", position, frame);
                }
                Access::Replaced { frame, .. } => {
                    trace!(
                        "ref #{}: fault, evicted {} ({} pages of lookahead)",
                        position,
                        frame,
                        lookahead.len()
                    );
                }
            }

            stats.record(&access);
            snapshots.push(frames.to_vec());
            steps.push(Step {
                position,
                page: page.clone(),
                access,
            });
        }

        debug!("simulation done: {}", stats);

        Simulation {
            snapshots,
            steps,
            stats,
            seeded: seed.is_some(),
        }
    }
}
