//! Per-table orchestration of measurement, resize and visibility.

use std::collections::HashMap;
use std::time::Duration;

use crate::column::{Column, TableConfig};
use crate::measure::{Measure, WidthMeasurer};
use crate::resize::ResizeController;
use crate::state::TableWidthState;
use crate::trigger::{Clock, CoalescingTrigger};
use crate::visibility::{KeyValueStore, VisibilityController};

/// Quiet period for coalescing container-resize bursts before re-measuring.
pub const REMEASURE_DELAY: Duration = Duration::from_millis(10);

/// One table instance's layout brain.
///
/// Owns the width state and every collaborator that reads or replaces it:
/// container-resize notifications invalidate the fast trigger, pointer events
/// feed the resize controller, and `poll` runs whatever deferred work has
/// settled. All mutation happens here, on one thread, as whole-state
/// replacement; nothing is shared between instances.
pub struct TableLayout<M: Measure, S: KeyValueStore, C: Clock + Clone> {
    config: TableConfig,
    container_width: i64,
    measurer: WidthMeasurer<M>,
    state: TableWidthState,
    resize: ResizeController,
    visibility: VisibilityController<S, C>,
    remeasure: CoalescingTrigger<C>,
    /// Max observed content width per column key, for overflow decisions.
    content_widths: HashMap<String, u32>,
}

impl<M: Measure, S: KeyValueStore, C: Clock + Clone> TableLayout<M, S, C> {
    pub fn new(config: TableConfig, measure: M, store: S, clock: C) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("[table] {err}");
        }
        let measurer = WidthMeasurer::new(measure, config.min_col_width, config.scrollbar_reserve);
        let visibility = VisibilityController::new(store, clock.clone(), config.storage_key.clone());
        Self {
            config,
            container_width: 0,
            measurer,
            state: TableWidthState::default(),
            resize: ResizeController::new(),
            visibility,
            remeasure: CoalescingTrigger::new(clock, REMEASURE_DELAY),
            content_widths: HashMap::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The current width assignment.
    pub fn widths(&self) -> &TableWidthState {
        &self.state
    }

    pub fn visibility(&self) -> &VisibilityController<S, C> {
        &self.visibility
    }

    /// Columns that should currently render, in declaration order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.config
            .columns
            .iter()
            .filter(|c| self.visibility.visible(c))
            .collect()
    }

    /// React to a container-resize notification.
    ///
    /// Re-measurement is deferred through the fast trigger so event bursts
    /// coalesce; the visibility cut is re-evaluated right away (its own
    /// settle delay applies before anything is hidden).
    pub fn set_container_width(&mut self, width: i64) {
        if width == self.container_width {
            return;
        }
        self.container_width = width;
        self.remeasure.invalidate();
        self.visibility
            .evaluate(width, &self.config, &self.content_widths);
    }

    pub fn container_width(&self) -> i64 {
        self.container_width
    }

    /// Record a measured content width for a column (widest cell or header
    /// seen so far); drives the overflow decision.
    pub fn record_content_width(&mut self, key: &str, width: u32) {
        let entry = self.content_widths.entry(key.to_string()).or_insert(0);
        if width > *entry {
            *entry = width;
            self.visibility
                .evaluate(self.container_width, &self.config, &self.content_widths);
        }
    }

    /// Change the active sort column; it becomes exempt from hiding.
    pub fn set_sort_key(&mut self, key: Option<&str>) {
        self.visibility.set_sort_key(key);
        self.visibility
            .evaluate(self.container_width, &self.config, &self.content_widths);
    }

    /// Toggle a configurable column from the configuration UI.
    ///
    /// Returns false when the toggle is rejected (unknown key, non-hideable
    /// column, or enabling a column that would not fit).
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> bool {
        if !self.visibility.set_enabled(&self.config, key, enabled) {
            return false;
        }
        self.visibility
            .evaluate(self.container_width, &self.config, &self.content_widths);
        self.remeasure.invalidate();
        true
    }

    /// Run any deferred work that has settled. Returns true when the width
    /// assignment or the visible set changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        if self.visibility.poll() {
            // Visible key set changed; measurement must follow.
            self.remeasure.invalidate();
            changed = true;
        }
        if self.remeasure.fire() {
            changed |= self.remeasure_now();
        }
        changed
    }

    /// Force measurement to settle immediately, ignoring the quiet period.
    pub fn refresh(&mut self) -> bool {
        self.remeasure.flush();
        self.remeasure_now()
    }

    fn remeasure_now(&mut self) -> bool {
        let visible: Vec<&Column> = self
            .config
            .columns
            .iter()
            .filter(|c| self.visibility.visible(c))
            .collect();
        match self.measurer.run(self.container_width, &visible) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Resize entry points
    // -------------------------------------------------------------------------

    /// Pointer-down on the grip left of `grip`.
    ///
    /// Any pending re-measure is flushed first, so the drag always reads a
    /// settled width state, never a transient one.
    pub fn begin_resize(&mut self, grip: &str, pointer_x: i32) -> bool {
        if self.remeasure.pending() {
            self.refresh();
        }
        let visible: Vec<&Column> = self
            .config
            .columns
            .iter()
            .filter(|c| self.visibility.visible(c))
            .collect();
        self.resize.begin(grip, pointer_x, &visible, &self.state)
    }

    /// Pointer movement while dragging; returns the clamped preview delta.
    pub fn update_resize(&mut self, pointer_x: i32) -> Option<i32> {
        self.resize.update(pointer_x)
    }

    /// Pointer-up, or pointer leaving the header. Returns the committed
    /// delta, if any.
    pub fn finish_resize(&mut self, pointer_x: i32) -> Option<i32> {
        self.resize.finish(pointer_x, &mut self.state)
    }

    /// Whether a drag is in progress.
    pub fn resizing(&self) -> bool {
        self.resize.dragging()
    }

    /// The active resize session, for drag preview.
    pub fn resize_session(&self) -> Option<&crate::resize::ResizeSession> {
        self.resize.session()
    }
}
