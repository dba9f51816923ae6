//! Eviction policy implementations (replacers).
//!
//! Both policies look ahead into the unprocessed part of the reference
//! string and pick the resident page whose next use is farthest away.
//! They differ only in how "never used again" is ranked:
//! - [`OptimalReplacer`] - textbook MIN, "never again" is the farthest
//! - [`LiteralReplacer`] - "never again" encoded as -1, so it loses to any
//!   page that is used again
//!
//! [`EvictionPolicy`] selects one of them at runtime.

mod literal;
mod optimal;

use std::fmt;

use crate::common::FrameId;

pub use literal::LiteralReplacer;
pub use optimal::OptimalReplacer;

/// Where a resident page is next referenced in the lookahead.
///
/// Variant order matters: the derived `Ord` places `Never` above every
/// `At(_)`, which is exactly the eviction priority of the optimal policy.
///
/// # Example
/// ```
/// use optimal_paging::NextUse;
///
/// assert!(NextUse::Never > NextUse::At(usize::MAX));
/// assert!(NextUse::At(3) > NextUse::At(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NextUse {
    /// Referenced again at this offset into the lookahead.
    At(usize),
    /// Not referenced again.
    Never,
}

impl fmt::Display for NextUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextUse::At(pos) => write!(f, "+{}", pos),
            NextUse::Never => write!(f, "never"),
        }
    }
}

/// Find the next use of `page` in `lookahead`.
pub fn next_use<P: PartialEq>(page: &P, lookahead: &[P]) -> NextUse {
    lookahead
        .iter()
        .position(|p| p == page)
        .map_or(NextUse::Never, NextUse::At)
}

/// A policy choosing which resident page to overwrite on a fault.
pub trait Replacer {
    /// Pick the slot to evict from a full frame set.
    ///
    /// `lookahead` is the part of the reference string after the page being
    /// loaded. Returns `None` only when `frames` is empty.
    fn pick_victim<P: PartialEq>(&self, frames: &[P], lookahead: &[P]) -> Option<FrameId>;

    /// Short policy name used in logs.
    fn name(&self) -> &'static str;
}

/// Index of the first maximum key.
///
/// `Iterator::max_by_key` returns the last maximum; eviction ties must go
/// to the lowest slot.
pub(crate) fn first_max<K: Ord>(keys: impl IntoIterator<Item = K>) -> Option<FrameId> {
    let mut best: Option<(usize, K)> = None;
    for (idx, key) in keys.into_iter().enumerate() {
        let better = match &best {
            Some((_, best_key)) => key > *best_key,
            None => true,
        };
        if better {
            best = Some((idx, key));
        }
    }
    best.map(|(idx, _)| FrameId::new(idx))
}

/// Runtime-selectable eviction policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Farthest next use wins, pages never used again first.
    #[default]
    Optimal,
    /// Largest next-use position wins, never-used-again counts as -1.
    Literal,
}

impl Replacer for EvictionPolicy {
    fn pick_victim<P: PartialEq>(&self, frames: &[P], lookahead: &[P]) -> Option<FrameId> {
        match self {
            EvictionPolicy::Optimal => OptimalReplacer.pick_victim(frames, lookahead),
            EvictionPolicy::Literal => LiteralReplacer.pick_victim(frames, lookahead),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            EvictionPolicy::Optimal => OptimalReplacer.name(),
            EvictionPolicy::Literal => LiteralReplacer.name(),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
