//! Pointer input primitives.
//!
//! Widgets consume pointer events already translated into widget-relative
//! coordinates; routing, origin subtraction and capture bookkeeping are the
//! host window's job. The event set mirrors what a slider-like control
//! reacts to: enter, motion, leave, and button press/release.

use crate::px::PxPosition;

/// Identifies which pointer button a press or release refers to.
///
/// `Left` doubles as the primary touch contact on touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left-click) or primary touch.
    Left,
    /// The secondary button (usually right-click).
    Right,
    /// The middle button (usually the scroll wheel click).
    Middle,
}

/// A pointer event delivered to a widget, in widget-relative coordinates.
///
/// # Examples
///
/// ```
/// use glider_ui::cursor::{PointerButton, PointerEvent};
/// use glider_ui::px::{Px, PxPosition};
///
/// let event = PointerEvent::Press {
///     button: PointerButton::Left,
///     position: PxPosition::new(Px::new(12), Px::new(4)),
/// };
/// assert!(event.position().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the widget bounds.
    Enter {
        /// Entering coordinate, widget-relative.
        position: PxPosition,
    },
    /// The pointer moved inside the widget, or anywhere while the widget
    /// holds pointer capture.
    Move {
        /// Current coordinate, widget-relative.
        position: PxPosition,
    },
    /// The pointer left the widget bounds.
    Leave,
    /// A pointer button was pressed.
    Press {
        /// The button that went down.
        button: PointerButton,
        /// Coordinate at press time, widget-relative.
        position: PxPosition,
    },
    /// A pointer button was released.
    Release {
        /// The button that went up.
        button: PointerButton,
        /// Coordinate at release time, widget-relative.
        position: PxPosition,
    },
}

impl PointerEvent {
    /// The coordinate carried by this event, if any.
    pub fn position(&self) -> Option<PxPosition> {
        match *self {
            Self::Enter { position }
            | Self::Move { position }
            | Self::Press { position, .. }
            | Self::Release { position, .. } => Some(position),
            Self::Leave => None,
        }
    }
}
