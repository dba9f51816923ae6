//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a frame set.
///
/// Slots keep their position for the whole simulation: a page loaded into
/// slot 2 stays there until it is replaced, so the id doubles as the index
/// into a snapshot.
///
/// # Example
/// ```
/// use optimal_paging::FrameId;
///
/// let frame_id = FrameId::new(1);
/// let frames = [7, 0, 1, 2];
/// assert_eq!(frames[frame_id.0], 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
