//! Bug-compatible lookahead policy.
//!
//! Scores every resident page by the position of its next use and evicts
//! the first page with the highest score, where "never used again" scores
//! -1. Because -1 is below every real position, a page that is never
//! referenced again is only evicted when no resident page is referenced
//! again at all. This inverts MIN whenever both kinds of page are resident
//! and is kept for reproducing traces produced with that rule.

use crate::common::FrameId;

use super::{first_max, next_use, NextUse, Replacer};

/// Numeric-max lookahead policy with -1 for "never used again".
///
/// # Example
/// ```
/// use optimal_paging::{FrameId, LiteralReplacer, Replacer};
///
/// // Scores are [0, -1, -1, -1]: page 1 is evicted although it is the
/// // only one still needed.
/// let victim = LiteralReplacer.pick_victim(&[1, 2, 3, 4], &[1]);
/// assert_eq!(victim, Some(FrameId::new(0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralReplacer;

impl LiteralReplacer {
    /// Score of a next use: its position, or -1 when there is none.
    pub fn score(next: NextUse) -> isize {
        match next {
            NextUse::At(pos) => isize::try_from(pos).unwrap_or(isize::MAX),
            NextUse::Never => -1,
        }
    }
}

impl Replacer for LiteralReplacer {
    fn pick_victim<P: PartialEq>(&self, frames: &[P], lookahead: &[P]) -> Option<FrameId> {
        first_max(
            frames
                .iter()
                .map(|page| Self::score(next_use(page, lookahead))),
        )
    }

    fn name(&self) -> &'static str {
        "literal"
    }
}
