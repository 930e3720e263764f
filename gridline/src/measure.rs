//! Width measurement: turns declared column specs into a settled
//! [`TableWidthState`] for a given container width.

use std::collections::{HashMap, HashSet};

use crate::column::{Column, WidthSpec};
use crate::state::{TableWidthState, WidthEntry};

/// Resolves a concrete width declaration against the container.
///
/// The UI layer backs this with whatever its rendering engine considers
/// authoritative for unit resolution; tests and headless embedders use
/// [`ArithmeticMeasure`]. Auto and unset declarations resolve to `None` and
/// are handled by the allocation passes instead.
pub trait Measure {
    fn resolve(&self, spec: WidthSpec, container_width: u32) -> Option<u32>;
}

/// Pure arithmetic resolution: pixels pass through, percentages are taken of
/// the container width and floored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticMeasure;

impl Measure for ArithmeticMeasure {
    fn resolve(&self, spec: WidthSpec, container_width: u32) -> Option<u32> {
        match spec {
            WidthSpec::Px(px) => Some(px),
            WidthSpec::Percent(pct) => {
                let pct = f64::from(pct).clamp(0.0, 100.0);
                Some((f64::from(container_width) * pct / 100.0).floor() as u32)
            }
            WidthSpec::Auto | WidthSpec::Unset => None,
        }
    }
}

/// Computes the width assignment for the currently visible columns.
///
/// Runs three category passes (min, width, max) followed by a reconciliation
/// sweep, and memoizes on the (container width, visible key set) pair so a
/// repeat invocation with identical inputs leaves the previous state, and any
/// manual adjustments recorded in it, untouched.
#[derive(Debug)]
pub struct WidthMeasurer<M: Measure> {
    measure: M,
    min_col_width: u32,
    scrollbar_reserve: u32,
    last_container: Option<u32>,
    last_keys: Vec<String>,
}

impl<M: Measure> WidthMeasurer<M> {
    pub fn new(measure: M, min_col_width: u32, scrollbar_reserve: u32) -> Self {
        Self {
            measure,
            min_col_width,
            scrollbar_reserve,
            last_container: None,
            last_keys: Vec::new(),
        }
    }

    /// Produce a fresh assignment, or `None` when the previous one is still
    /// valid for these inputs.
    ///
    /// Container widths at or below zero are valid degenerate input: every
    /// column collapses to zero width.
    pub fn run(&mut self, container_width: i64, columns: &[&Column]) -> Option<TableWidthState> {
        let container = container_width.max(0).min(i64::from(u32::MAX)) as u32;

        let keys = dedup_keys(columns);
        if self.last_container == Some(container) && self.last_keys == keys {
            return None;
        }

        let state = self.allocate(container, columns, &keys);
        self.last_container = Some(container);
        self.last_keys = keys;
        Some(state)
    }

    /// Forget the memoized inputs so the next [`run`](Self::run) recomputes.
    pub fn invalidate(&mut self) {
        self.last_container = None;
        self.last_keys.clear();
    }

    fn allocate(&self, container: u32, columns: &[&Column], keys: &[String]) -> TableWidthState {
        // First occurrence wins on duplicate keys; dedup_keys already warned.
        let mut seen = HashSet::new();
        let picked: Vec<&Column> = columns
            .iter()
            .copied()
            .filter(|c| seen.insert(c.key.as_str()))
            .collect();

        // Width category: explicit declarations resolve individually, autos
        // split the space left after explicit columns and the scrollbar
        // allowance, floor division.
        let explicit: Vec<Option<u32>> = picked
            .iter()
            .map(|c| self.measure.resolve(c.width, container))
            .collect();
        let explicit_total: u64 = explicit.iter().flatten().map(|&w| u64::from(w)).sum();
        let auto_count = explicit.iter().filter(|w| w.is_none()).count() as u64;
        let auto_share = if auto_count > 0 {
            let distributable = u64::from(container)
                .saturating_sub(u64::from(self.scrollbar_reserve))
                .saturating_sub(explicit_total);
            (distributable / auto_count).min(u64::from(u32::MAX)) as u32
        } else {
            0
        };

        // Bound categories do not distribute leftover space: unresolved mins
        // fall back to the global default, unresolved maxes are unbounded.
        let mut entries = HashMap::with_capacity(picked.len());
        let mut remaining = container;

        for (col, width) in picked.iter().zip(explicit.iter().copied()) {
            let min_width = self
                .measure
                .resolve(col.min_width, container)
                .unwrap_or(self.min_col_width);
            // Min wins over max when the declarations disagree.
            let max_width = self
                .measure
                .resolve(col.max_width, container)
                .unwrap_or(u32::MAX)
                .max(min_width);

            let entry = if min_width > remaining {
                // Starvation: the minimum no longer fits, so the column drops
                // out of the layout entirely.
                WidthEntry::collapsed()
            } else {
                let width = width
                    .unwrap_or(auto_share)
                    .max(min_width)
                    .min(max_width)
                    .min(remaining);
                remaining -= width;
                WidthEntry {
                    width,
                    min_width,
                    max_width,
                    adjustment: 0,
                }
            };

            entries.insert(col.key.clone(), entry);
        }

        TableWidthState::measured(keys.to_vec(), entries)
    }
}

/// Unique keys in declaration order; warns once per duplicate.
fn dedup_keys(columns: &[&Column]) -> Vec<String> {
    let mut keys = Vec::with_capacity(columns.len());
    let mut seen = HashSet::new();
    for col in columns {
        if seen.insert(col.key.as_str()) {
            keys.push(col.key.clone());
        } else {
            log::warn!(
                "[measure] duplicate column key {:?}; later declaration ignored",
                col.key
            );
        }
    }
    keys
}
