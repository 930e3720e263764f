//! Width state: the single source of truth for column layout.

use std::collections::HashMap;

/// Allocated widths for one visible column.
///
/// `min_width <= width <= max_width` holds after every reconciliation, except
/// for the fully-collapsed `(0, 0, 0)` form a starved column takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthEntry {
    /// Current allocated width in pixels.
    pub width: u32,
    /// Resolved lower bound.
    pub min_width: u32,
    /// Resolved upper bound.
    pub max_width: u32,
    /// Signed offset applied by manual resize drags.
    pub adjustment: i32,
}

impl WidthEntry {
    /// The form a column takes when its minimum no longer fits.
    pub const fn collapsed() -> Self {
        Self {
            width: 0,
            min_width: 0,
            max_width: 0,
            adjustment: 0,
        }
    }

    /// Whether this column has been starved out of the layout.
    pub fn is_collapsed(&self) -> bool {
        self.width == 0 && self.min_width == 0 && self.max_width == 0
    }

    /// The width the presentation layer should render: the allocated width
    /// offset by any manual adjustment.
    pub fn resolved(&self) -> u32 {
        self.width.saturating_add_signed(self.adjustment)
    }
}

/// Per-table width assignment.
///
/// Owned by exactly one table instance and replaced wholesale whenever the
/// container width or the visible column set changes; manual-resize commits
/// mutate only the `adjustment` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableWidthState {
    entries: HashMap<String, WidthEntry>,
    order: Vec<String>,
    fixed_layout: bool,
}

impl TableWidthState {
    /// A freshly measured assignment covering every visible column.
    pub(crate) fn measured(order: Vec<String>, entries: HashMap<String, WidthEntry>) -> Self {
        Self {
            entries,
            order,
            fixed_layout: true,
        }
    }

    /// Whether every visible column has a settled, measured width.
    ///
    /// False only before the first measurement; once true the presentation
    /// layer can switch to fixed-pixel layout.
    pub fn fixed_layout(&self) -> bool {
        self.fixed_layout
    }

    /// Number of columns covered by this assignment.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Column keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entry for the given column key.
    pub fn entry(&self, key: &str) -> Option<&WidthEntry> {
        self.entries.get(key)
    }

    /// Rendered width for the given column key.
    pub fn width_of(&self, key: &str) -> Option<u32> {
        self.entries.get(key).map(WidthEntry::resolved)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WidthEntry)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|e| (key.as_str(), e)))
    }

    /// Sum of rendered widths.
    pub fn total_width(&self) -> u64 {
        self.iter().map(|(_, e)| e.resolved() as u64).sum()
    }

    /// Transfer `delta` pixels from the right column to the left one.
    ///
    /// The two adjustments move by exactly opposite amounts, so the total
    /// table width is conserved. Returns false (and logs) when either key is
    /// missing, in which case nothing is mutated.
    pub(crate) fn apply_adjustment(&mut self, left: &str, right: &str, delta: i32) -> bool {
        if !self.entries.contains_key(left) || !self.entries.contains_key(right) {
            log::warn!(
                "[state] adjustment for unknown column pair {:?}/{:?} dropped",
                left,
                right
            );
            return false;
        }
        if let Some(entry) = self.entries.get_mut(left) {
            entry.adjustment += delta;
        }
        if let Some(entry) = self.entries.get_mut(right) {
            entry.adjustment -= delta;
        }
        true
    }
}
