//! Scoped, window-level pointer tracking for drags.
//!
//! A drag must keep receiving pointer-move and pointer-up after the pointer
//! leaves the knob's small hit region, so tracking is acquired at window
//! scope for exactly the duration of one drag. [`PointerCapture`] is the
//! guard for that acquisition: dropping it releases the tracking and the
//! cursor hint, whichever way the drag ends.
//!
//! ```text
//! pointer-down ──► tracker.acquire() ──► PointerCapture (held by Knob)
//!                                              │
//!   pointer-up / cancel / dispose / drop ──────┘──► tracker.release()
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Handle identifying one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureId(pub u64);

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cursor shown while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// Vertical resize (`ns-resize`).
    VerticalResize,
}

impl CursorHint {
    /// CSS cursor keyword.
    pub fn css(self) -> &'static str {
        match self {
            CursorHint::VerticalResize => "ns-resize",
        }
    }
}

/// Source of window-scoped pointer tracking.
///
/// Implementations route move/up events to the acquiring knob and show the
/// drag cursor while at least one acquisition is live. Calls happen on the
/// UI thread only.
pub trait PointerTracker {
    /// Start window-level tracking and set the drag cursor.
    fn acquire(&self) -> CaptureId;

    /// Stop tracking for `id`. Releasing an unknown id is a no-op.
    fn release(&self, id: CaptureId);
}

/// Guard for one window-level acquisition. Releases on drop.
pub struct PointerCapture {
    tracker: Rc<dyn PointerTracker>,
    id: CaptureId,
}

impl PointerCapture {
    /// Acquire tracking from `tracker`.
    pub fn acquire(tracker: &Rc<dyn PointerTracker>) -> Self {
        let id = tracker.acquire();
        tracing::debug!(capture = %id, "pointer capture acquired");
        Self {
            tracker: Rc::clone(tracker),
            id,
        }
    }

    /// Identifier of this acquisition.
    pub fn id(&self) -> CaptureId {
        self.id
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture").field("id", &self.id).finish()
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.tracker.release(self.id);
        tracing::debug!(capture = %self.id, "pointer capture released");
    }
}

#[derive(Debug, Default)]
struct WindowState {
    next_id: u64,
    active: BTreeSet<CaptureId>,
}

/// In-process window tracker.
///
/// Keeps the set of live acquisitions and derives the cursor hint from it.
/// Front ends poll [`cursor`](Self::cursor) to apply the hint, and
/// [`active_count`](Self::active_count) lets tests check for leaks.
#[derive(Debug, Default)]
pub struct WindowTracker {
    state: RefCell<WindowState>,
}

impl WindowTracker {
    /// Create a tracker with no live acquisitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker already wrapped for sharing between knobs.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Number of live acquisitions.
    pub fn active_count(&self) -> usize {
        self.state.borrow().active.len()
    }

    /// Whether `id` is still live.
    pub fn is_active(&self, id: CaptureId) -> bool {
        self.state.borrow().active.contains(&id)
    }

    /// Cursor hint to display, if any drag is live.
    pub fn cursor(&self) -> Option<CursorHint> {
        (self.active_count() > 0).then_some(CursorHint::VerticalResize)
    }
}

impl PointerTracker for WindowTracker {
    fn acquire(&self) -> CaptureId {
        let mut state = self.state.borrow_mut();
        let id = CaptureId(state.next_id);
        state.next_id += 1;
        state.active.insert(id);
        id
    }

    fn release(&self, id: CaptureId) {
        self.state.borrow_mut().active.remove(&id);
    }
}
