//! Pointer events, converted from crossterm's mouse events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A pointer event scoped to a table header, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed.
    Down { x: u16, y: u16 },
    /// Pointer moved, with or without the button held.
    Move { x: u16, y: u16 },
    /// Button released.
    Up { x: u16, y: u16 },
}

impl PointerEvent {
    /// Map a crossterm mouse event. Only the left button participates in
    /// column resizing; everything else is ignored.
    pub fn from_mouse(event: MouseEvent) -> Option<Self> {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Down { x, y }),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                Some(Self::Move { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => Some(Self::Up { x, y }),
            _ => None,
        }
    }

    /// Screen position of the event.
    pub fn position(&self) -> (u16, u16) {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => (x, y),
        }
    }
}
