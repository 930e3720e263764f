//! Drag-to-resize: reallocates width between one adjacent column pair.

use crate::column::Column;
use crate::state::TableWidthState;

/// Pixel dead zone: a released drag at or below this magnitude is discarded,
/// so pointer jitter on a plain click never commits an adjustment.
pub const DRAG_DEAD_ZONE: u32 = 5;

/// An in-progress drag between two adjacent columns.
///
/// Positive deltas grow the left column and shrink the right one; negative
/// deltas do the opposite. The limits are fixed on entry from the pair's
/// current widths and bounds, so no movement can push either column outside
/// its min/max.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    /// Key of the column left of the dragged border.
    pub left: String,
    /// Key of the column whose grip was grabbed.
    pub right: String,
    origin_x: i32,
    delta: i32,
    min_delta: i32,
    max_delta: i32,
}

impl ResizeSession {
    /// Live clamped delta, for drag preview.
    pub fn delta(&self) -> i32 {
        self.delta
    }

    /// The clamp range for this pair.
    pub fn limits(&self) -> (i32, i32) {
        (self.min_delta, self.max_delta)
    }

    fn clamp(&self, pointer_x: i32) -> i32 {
        (pointer_x.saturating_sub(self.origin_x)).clamp(self.min_delta, self.max_delta)
    }
}

/// Interactive resize state machine: Idle until a grip on a valid pair is
/// grabbed, Dragging until the pointer is released or leaves the header.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Start a drag on the border left of `grip`.
    ///
    /// `grip` becomes the right column of the pair; the left one is the
    /// nearest preceding column that is resizable and currently visible
    /// (collapsed columns are skipped). Returns false and stays Idle when no
    /// valid pair exists. An unknown key is a no-op: logged, never raised.
    pub fn begin(
        &mut self,
        grip: &str,
        pointer_x: i32,
        columns: &[&Column],
        state: &TableWidthState,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }

        let Some(grip_index) = columns.iter().position(|c| c.key == grip) else {
            log::warn!("[resize] unknown column key {:?}; drag has no effect", grip);
            return false;
        };
        if !columns[grip_index].kind.resizable() {
            return false;
        }
        let Some(right) = state.entry(grip) else {
            log::warn!("[resize] no width entry for {:?}; drag has no effect", grip);
            return false;
        };
        if right.is_collapsed() {
            return false;
        }

        // Nearest preceding visible, resizable neighbor.
        let left_key = columns[..grip_index].iter().rev().find_map(|c| {
            let entry = state.entry(&c.key)?;
            (c.kind.resizable() && !entry.is_collapsed()).then_some(c.key.as_str())
        });
        let Some(left_key) = left_key else {
            return false;
        };
        let Some(left) = state.entry(left_key) else {
            return false;
        };

        // Limits from the adjustment-inclusive widths, so stacked drags keep
        // respecting the original bounds.
        let (lw, lmin, lmax) = (
            i64::from(left.resolved()),
            i64::from(left.min_width),
            i64::from(left.max_width),
        );
        let (rw, rmin, rmax) = (
            i64::from(right.resolved()),
            i64::from(right.min_width),
            i64::from(right.max_width),
        );
        let max_delta = (rw - rmin).min(lmax - lw);
        let min_delta = -((lw - lmin).min(rmax - rw));

        self.session = Some(ResizeSession {
            left: left_key.to_string(),
            right: grip.to_string(),
            origin_x: pointer_x,
            delta: 0,
            min_delta: clamp_i32(min_delta),
            max_delta: clamp_i32(max_delta),
        });
        true
    }

    /// Track pointer movement while Dragging.
    ///
    /// Returns the clamped delta for live preview; the width state itself is
    /// not touched until [`finish`](Self::finish).
    pub fn update(&mut self, pointer_x: i32) -> Option<i32> {
        let session = self.session.as_mut()?;
        session.delta = session.clamp(pointer_x);
        Some(session.delta)
    }

    /// End the drag on pointer-up, or on the pointer leaving the header.
    ///
    /// Deltas past the dead zone are committed as a zero-sum transfer into
    /// the pair's adjustments; anything smaller is discarded. Either way the
    /// controller returns to Idle.
    pub fn finish(&mut self, pointer_x: i32, state: &mut TableWidthState) -> Option<i32> {
        let session = self.session.take()?;
        let delta = session.clamp(pointer_x);
        if delta.unsigned_abs() <= DRAG_DEAD_ZONE {
            return None;
        }
        state
            .apply_adjustment(&session.left, &session.right, delta)
            .then_some(delta)
    }

    /// Drop any active session without committing.
    pub fn abort(&mut self) {
        self.session = None;
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
