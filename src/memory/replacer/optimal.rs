//! Optimal (Belady MIN) replacement policy.
//!
//! Evicts the resident page whose next use lies farthest in the future.
//! A page that is never referenced again is always preferred over one
//! that is, and among several such pages the lowest slot goes first.

use crate::common::FrameId;

use super::{first_max, next_use, Replacer};

/// The textbook optimal eviction policy.
///
/// # Example
/// ```
/// use optimal_paging::{FrameId, OptimalReplacer, Replacer};
///
/// // 1 is never used again, so it goes even though 0 is used later.
/// let victim = OptimalReplacer.pick_victim(&[0, 1, 2, 3], &[2, 3, 0]);
/// assert_eq!(victim, Some(FrameId::new(1)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalReplacer;

impl Replacer for OptimalReplacer {
    fn pick_victim<P: PartialEq>(&self, frames: &[P], lookahead: &[P]) -> Option<FrameId> {
        first_max(frames.iter().map(|page| next_use(page, lookahead)))
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}
