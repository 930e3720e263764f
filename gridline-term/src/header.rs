//! Header bar: renders resolved column widths and routes pointer events to
//! the resize controller.

use gridline::{Clock, KeyValueStore, Measure, TableLayout};

use crate::event::PointerEvent;
use crate::text::fit_cell;

/// Vertical bar drawn between adjacent header cells; doubles as the drag
/// grip.
pub const GRIP: char = '│';

/// Presents one table's header row on screen.
///
/// The bar knows where the table sits (origin column, header row) and maps
/// pointer coordinates to the grips between columns; everything else is
/// delegated to the layout.
#[derive(Debug, Clone, Copy)]
pub struct HeaderBar {
    origin_x: u16,
    row: u16,
}

impl HeaderBar {
    pub fn new(origin_x: u16, row: u16) -> Self {
        Self { origin_x, row }
    }

    /// Screen row occupied by the header.
    pub fn row(&self) -> u16 {
        self.row
    }

    /// Keys and on-screen widths of the columns that currently render,
    /// with any live drag preview applied.
    pub fn cell_widths<M, S, C>(&self, layout: &TableLayout<M, S, C>) -> Vec<(String, u32)>
    where
        M: Measure,
        S: KeyValueStore,
        C: Clock + Clone,
    {
        let preview = layout
            .resize_session()
            .map(|s| (s.left.clone(), s.right.clone(), s.delta()));
        layout
            .widths()
            .iter()
            .filter(|(_, entry)| !entry.is_collapsed())
            .map(|(key, entry)| {
                let mut width = entry.resolved();
                if let Some((left, right, delta)) = &preview {
                    if key == left.as_str() {
                        width = width.saturating_add_signed(*delta);
                    } else if key == right.as_str() {
                        width = width.saturating_add_signed(-*delta);
                    }
                }
                (key.to_string(), width)
            })
            .collect()
    }

    /// Key of the column whose left grip sits at screen column `x`.
    pub fn grip_at<M, S, C>(&self, layout: &TableLayout<M, S, C>, x: u16) -> Option<String>
    where
        M: Measure,
        S: KeyValueStore,
        C: Clock + Clone,
    {
        let cells = self.cell_widths(layout);
        let mut cursor = u32::from(self.origin_x);
        for (i, (_, width)) in cells.iter().enumerate() {
            cursor += width;
            if i + 1 < cells.len() {
                if u32::from(x) == cursor {
                    return Some(cells[i + 1].0.clone());
                }
                cursor += 1;
            }
        }
        None
    }

    /// Render the header row: column keys fitted to their widths, grips
    /// between adjacent cells.
    pub fn line<M, S, C>(&self, layout: &TableLayout<M, S, C>) -> String
    where
        M: Measure,
        S: KeyValueStore,
        C: Clock + Clone,
    {
        let mut out = String::new();
        for (i, (key, width)) in self.cell_widths(layout).iter().enumerate() {
            if i > 0 {
                out.push(GRIP);
            }
            out.push_str(&fit_cell(key, *width as usize));
        }
        out
    }

    /// Render one data row with the same cell geometry as the header.
    pub fn data_line<M, S, C>(
        &self,
        layout: &TableLayout<M, S, C>,
        mut cell: impl FnMut(&str) -> String,
    ) -> String
    where
        M: Measure,
        S: KeyValueStore,
        C: Clock + Clone,
    {
        let mut out = String::new();
        for (i, (key, width)) in self.cell_widths(layout).iter().enumerate() {
            if i > 0 {
                out.push(GRIP);
            }
            out.push_str(&fit_cell(&cell(key.as_str()), *width as usize));
        }
        out
    }

    /// Route a pointer event to the layout's resize state machine.
    ///
    /// Returns true when the rendered widths may have changed (drag started,
    /// moved, or finished). A move off the header row finishes the drag,
    /// matching the pointer-leave rule.
    pub fn handle<M, S, C>(&self, layout: &mut TableLayout<M, S, C>, event: PointerEvent) -> bool
    where
        M: Measure,
        S: KeyValueStore,
        C: Clock + Clone,
    {
        match event {
            PointerEvent::Down { x, y } if y == self.row => match self.grip_at(layout, x) {
                Some(key) => layout.begin_resize(&key, i32::from(x)),
                None => false,
            },
            PointerEvent::Down { .. } => false,
            PointerEvent::Move { x, y } => {
                if !layout.resizing() {
                    return false;
                }
                if y != self.row {
                    return layout.finish_resize(i32::from(x)).is_some();
                }
                layout.update_resize(i32::from(x)).is_some()
            }
            PointerEvent::Up { x, .. } => {
                if !layout.resizing() {
                    return false;
                }
                layout.finish_resize(i32::from(x));
                // Idle again either way; the preview goes away.
                true
            }
        }
    }
}
