//! # Double-Buffered Frame State
//!
//! Two copies of a per-frame value behind an atomic front/back index.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │       DoubleBuffered<T>     │
//!                    │                             │
//!                    │  ┌─────────┐  ┌─────────┐  │
//!                    │  │ Slot A  │  │ Slot B  │  │
//!                    │  └────┬────┘  └────┬────┘  │
//!                    │       │            │       │
//!                    │  ┌────┴────────────┴────┐  │
//!                    │  │   Atomic Index (0/1) │  │
//!                    │  └──────────────────────┘  │
//!                    └─────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!      ┌──────────────┐ ┌────────────┐ ┌────────────┐
//!      │ WriteHandle  │ │ ReadHandle │ │   swap     │
//!      │ (back slot)  │ │(front slot)│ │ (publish)  │
//!      └──────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - `WriteHandle`: Exclusive access to the back slot (one at a time)
//! - `ReadHandle` / `snapshot`: Shared access to the front slot (many allowed)
//! - `swap_buffers`: Publishes the back slot; call it from the thread that writes

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Double-buffered value for frame-scoped publication.
///
/// The writer prepares the next frame's value in the back slot while any
/// number of readers keep seeing the last published value. `swap_buffers`
/// flips the slots and copies the freshly published value into the new back
/// slot, so the next write starts from current state instead of state from
/// two frames ago.
///
/// ## Usage
///
/// ```rust
/// use voxatlas_core::DoubleBuffered;
///
/// let buffer = DoubleBuffered::new(0u32);
///
/// {
///     let mut write = buffer.write_handle();
///     *write = 7;
/// }
/// // Not visible until published
/// assert_eq!(buffer.snapshot(), 0);
///
/// buffer.swap_buffers();
/// assert_eq!(buffer.snapshot(), 7);
/// ```
pub struct DoubleBuffered<T> {
    /// The two slots.
    slots: [RwLock<T>; 2],

    /// Index of the current back (write) slot. Front is `write_index ^ 1`.
    write_index: AtomicUsize,

    /// Whether a write handle (or a swap) currently owns the back slot.
    write_locked: AtomicBool,

    /// Number of completed swaps.
    frame_count: AtomicU64,
}

impl<T: Clone> DoubleBuffered<T> {
    /// Creates a double buffer with both slots holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            slots: [RwLock::new(initial.clone()), RwLock::new(initial)],
            write_index: AtomicUsize::new(0),
            write_locked: AtomicBool::new(false),
            frame_count: AtomicU64::new(0),
        }
    }

    /// Returns the number of published frames.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count.load(Ordering::Relaxed)
    }

    /// Returns whether a write handle is currently active.
    #[inline]
    #[must_use]
    pub fn is_write_locked(&self) -> bool {
        self.write_locked.load(Ordering::Acquire)
    }

    /// Gets exclusive access to the back slot.
    ///
    /// # Panics
    ///
    /// Panics if a write handle is already held (only one allowed).
    #[must_use]
    pub fn write_handle(&self) -> WriteHandle<'_, T> {
        let was_locked = self.write_locked.swap(true, Ordering::AcqRel);
        assert!(!was_locked, "Double write handle! Only one write handle allowed at a time.");

        let buffer_index = self.write_index.load(Ordering::Acquire);

        WriteHandle {
            owner: self,
            guard: self.slots[buffer_index].write(),
            buffer_index,
        }
    }

    /// Gets shared access to the last published value.
    ///
    /// Holding a read handle across `swap_buffers` delays the swap's
    /// re-sync until the handle is dropped.
    #[must_use]
    pub fn read_handle(&self) -> ReadHandle<'_, T> {
        loop {
            let buffer_index = self.write_index.load(Ordering::Acquire) ^ 1;
            let guard = self.slots[buffer_index].read();

            // The slot may have turned into the back slot between the index
            // load and the lock; only a slot that is still front is published.
            if self.write_index.load(Ordering::Acquire) ^ 1 == buffer_index {
                return ReadHandle { guard, buffer_index };
            }
        }
    }

    /// Copies out the last published value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.read_handle().clone()
    }

    /// Publishes the back slot.
    ///
    /// After the index flips, the new back slot is overwritten with the value
    /// just published.
    ///
    /// # Panics
    ///
    /// Panics if a write handle is still active.
    pub fn swap_buffers(&self) {
        let claimed = self
            .write_locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        assert!(claimed, "Cannot swap buffers while write handle is active!");

        let published = self.write_index.fetch_xor(1, Ordering::AcqRel);
        let new_back = published ^ 1;

        let fresh = self.slots[published].read().clone();
        *self.slots[new_back].write() = fresh;

        self.frame_count.fetch_add(1, Ordering::Relaxed);
        self.write_locked.store(false, Ordering::Release);
    }

    /// Replaces the back slot with `value` and publishes it.
    ///
    /// # Panics
    ///
    /// Panics if a write handle is already held.
    pub fn publish(&self, value: T) {
        {
            let mut write = self.write_handle();
            *write = value;
        }
        self.swap_buffers();
    }
}

impl<T: Clone + Default> Default for DoubleBuffered<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> std::fmt::Debug for DoubleBuffered<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleBuffered")
            .field("write_index", &self.write_index.load(Ordering::Relaxed))
            .field("write_locked", &self.write_locked.load(Ordering::Relaxed))
            .field("frame_count", &self.frame_count.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Exclusive access to the back slot.
///
/// Dropping the handle releases the writer token.
pub struct WriteHandle<'a, T> {
    owner: &'a DoubleBuffered<T>,
    guard: RwLockWriteGuard<'a, T>,
    buffer_index: usize,
}

impl<T> WriteHandle<'_, T> {
    /// Returns the slot index this handle writes to (for debugging).
    #[inline]
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.buffer_index
    }
}

impl<T> Deref for WriteHandle<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<T> DerefMut for WriteHandle<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

impl<T> Drop for WriteHandle<'_, T> {
    fn drop(&mut self) {
        self.owner.write_locked.store(false, Ordering::Release);
    }
}

/// Shared access to the front slot.
pub struct ReadHandle<'a, T> {
    guard: RwLockReadGuard<'a, T>,
    buffer_index: usize,
}

impl<T> ReadHandle<'_, T> {
    /// Returns the slot index this handle reads from (for debugging).
    #[inline]
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.buffer_index
    }
}

impl<T> Deref for ReadHandle<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}
