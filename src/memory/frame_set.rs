//! FrameSet - the resident pages of the simulated memory.
//!
//! A [`FrameSet`] holds up to `capacity` pages in slot order. Slot order is
//! load/replace history, not priority, but it decides which slot a tied
//! eviction overwrites.

use crate::common::FrameId;
use crate::memory::replacer::Replacer;

/// What happened when a page was referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,
    /// Page fault served by a free slot.
    Loaded { frame: FrameId },
    /// Page fault served by evicting `victim` from `frame`.
    Replaced { frame: FrameId, victim: P },
}

impl<P> Access<P> {
    /// Whether the reference caused a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !matches!(self, Access::Hit)
    }

    /// Slot the referenced page was loaded into, if it was loaded.
    pub fn frame(&self) -> Option<FrameId> {
        match self {
            Access::Hit => None,
            Access::Loaded { frame } | Access::Replaced { frame, .. } => Some(*frame),
        }
    }
}

/// Fixed-capacity set of resident pages.
///
/// # Example
/// ```
/// use optimal_paging::{Access, FrameId, FrameSet, OptimalReplacer};
///
/// let mut frames = FrameSet::new(2);
/// frames.access(1, &[2, 3], &OptimalReplacer);
/// frames.access(2, &[3], &OptimalReplacer);
///
/// let access = frames.access(3, &[], &OptimalReplacer);
/// assert_eq!(access, Access::Replaced { frame: FrameId::new(0), victim: 1 });
/// assert_eq!(frames.as_slice(), &[3, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet<P> {
    /// Resident pages, indexed by slot.
    pages: Vec<P>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl<P: PartialEq + Clone> FrameSet<P> {
    /// Create an empty frame set.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a frame set that already holds `pages`.
    ///
    /// The pages are taken verbatim. A set seeded beyond its capacity is
    /// simply full and keeps its size, since faults only ever replace.
    pub fn with_pages(pages: Vec<P>, capacity: usize) -> Self {
        Self { pages, capacity }
    }

    /// Reference `page`, loading it if it is not resident.
    ///
    /// `lookahead` is the rest of the reference string after this reference;
    /// the replacer consults it only when the set is full.
    pub fn access<R: Replacer>(&mut self, page: P, lookahead: &[P], replacer: &R) -> Access<P> {
        if self.contains(&page) {
            return Access::Hit;
        }

        if !self.is_full() {
            self.pages.push(page);
            return Access::Loaded {
                frame: FrameId::new(self.pages.len() - 1),
            };
        }

        match replacer.pick_victim(&self.pages, lookahead) {
            Some(frame) => {
                let victim = std::mem::replace(&mut self.pages[frame.0], page);
                Access::Replaced { frame, victim }
            }
            // Only reachable with zero capacity and no pages.
            None => {
                self.pages.push(page);
                Access::Loaded {
                    frame: FrameId::new(self.pages.len() - 1),
                }
            }
        }
    }

    /// Check if `page` is resident.
    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.pages.contains(page)
    }

    /// Copy the current contents into a snapshot.
    pub fn to_vec(&self) -> Vec<P> {
        self.pages.clone()
    }
}

impl<P> FrameSet<P> {
    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether a fault has to evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[P] {
        &self.pages
    }
}
