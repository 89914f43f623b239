//! Bump-allocation arena that owns an entire parse result.
//!
//! Every allocation a parse makes lands here: string bytes, map entries,
//! array backing storage, and the parser's growable scratch buffers. Nothing
//! is freed individually; the whole region is released by [`Arena::reset`]
//! or by dropping the arena. That makes error recovery trivial: a failed
//! parse is discarded by discarding the arena, with no recursive teardown of
//! a half-built tree.

use bstr::BStr;
use bumpalo::Bump;

/// Default initial capacity in bytes.
///
/// Enough for small documents without growing the region.
const DEFAULT_CAPACITY: usize = 16 * 1024;

/// An append-only allocation region with a single high-water mark.
///
/// Growing the most recently issued allocation happens in place while it is
/// still at the mark; the scratch buffers handed out by [`Arena::vec`] rely
/// on this to grow without a copy in the common case. Allocation failure
/// aborts the process rather than returning an error.
///
/// The arena is not synchronized; parallel parses must each use their own
/// instance.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Creates an arena with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an arena with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Moves `value` into the arena and returns a reference with the
    /// arena's lifetime.
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Copies `bytes` into the arena as a byte string.
    #[inline]
    pub fn alloc_bytes(&self, bytes: &[u8]) -> &BStr {
        BStr::new(self.bump.alloc_slice_copy(bytes))
    }

    /// Creates an empty growable buffer backed by this arena.
    ///
    /// While the buffer is the most recent allocation it grows in place;
    /// once something else has been allocated past it, the next growth
    /// copies it to the new high-water mark. Data written before a growth
    /// survives either way.
    #[inline]
    pub fn vec<T>(&self) -> bumpalo::collections::Vec<'_, T> {
        bumpalo::collections::Vec::new_in(&self.bump)
    }

    /// Releases every allocation at once.
    ///
    /// All references previously handed out are invalidated, which the
    /// borrow checker enforces via the `&mut self` receiver.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Total bytes currently allocated from the region.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
