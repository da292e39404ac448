//! The positional core shared by slider-like widgets.
//!
//! A [`Slider`] owns the item range, the track geometry and the pointer
//! interaction state of a one-dimensional slider or scrollbar. It knows
//! nothing about rendering or windows: layout feeds it a size through
//! [`Slider::place`], input feeds it [`PointerEvent`]s through
//! [`Slider::handle_event`], and every call answers with a [`Response`]
//! describing what the host should do (repaint, change pointer capture,
//! notify listeners of a committed position).
//!
//! ## Usage
//!
//! ```
//! use glider_components::slider::{
//!     Horizontal, PositionerPolicy, ScrollMode, Slider, SliderArgs,
//! };
//! use glider_ui::{Px, PxSize};
//!
//! let mut slider = Slider::new(
//!     Horizontal,
//!     SliderArgs::default()
//!         .item_count(10)
//!         .positioner(PositionerPolicy::Fixed(Px::new(20))),
//! );
//! let _ = slider.place(PxSize::new(Px::new(120), Px::new(14)));
//! let response = slider.scroll(ScrollMode::End);
//! assert_eq!(response.modified, Some(9));
//! ```

use derive_setters::Setters;
use glider_ui::{Px, PxSize};

mod geometry;
mod interaction;
mod orientation;

pub use geometry::{PositionerPolicy, RenderBindings, TrackGeometry};
pub use interaction::{Capture, Response, SliderState};
pub use orientation::{BarSide, Horizontal, Orientation, Vertical};

use interaction::DragSession;

/// Symbolic step requests for [`Slider::scroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// The first item.
    Begin,
    /// The last item.
    End,
    /// One item back.
    ItemBackwards,
    /// One item forward.
    ItemForward,
    /// Half a jump back.
    HalfJumpBackwards,
    /// Half a jump forward.
    HalfJumpForward,
    /// A full jump back.
    JumpBackwards,
    /// A full jump forward.
    JumpForward,
}

/// How drag motion maps onto the positioner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    /// Snap to the nearest discrete item position.
    #[default]
    Snap,
    /// Track the pointer pixel-exactly; the item position follows the
    /// offset by truncation.
    Continuous,
}

/// Construction-time configuration for a [`Slider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct SliderArgs {
    /// Number of discrete item positions.
    pub item_count: usize,
    /// Track inset before the travel region, e.g. a decrement button.
    pub offset_before: Px,
    /// Track inset after the travel region.
    pub offset_after: Px,
    /// Positioner sizing policy.
    pub positioner: PositionerPolicy,
    /// Items moved by a full jump scroll; scrollbar-style users set this to
    /// the visible item count. Defaults to 1.
    pub jump_size: usize,
    /// Drag tracking behavior. Defaults to [`DragMode::Snap`].
    pub drag_mode: DragMode,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            item_count: 0,
            offset_before: Px::ZERO,
            offset_after: Px::ZERO,
            positioner: PositionerPolicy::Fixed(Px(24)),
            jump_size: 1,
            drag_mode: DragMode::Snap,
        }
    }
}

/// The positional/interaction core of a slider or scrollbar.
///
/// Generic over its [`Orientation`] so horizontal and vertical widgets
/// share one implementation of the geometry and the state machine.
#[derive(Debug, Clone)]
pub struct Slider<O: Orientation> {
    orientation: O,
    geometry: TrackGeometry,
    state: SliderState,
    drag: Option<DragSession>,
    drag_mode: DragMode,
    jump_size: usize,
}

impl<O: Orientation> Slider<O> {
    /// Creates a slider core from its configuration.
    ///
    /// The geometry stays inert until [`place`](Self::place) supplies the
    /// widget's laid-out size.
    pub fn new(orientation: O, args: SliderArgs) -> Self {
        Self {
            orientation,
            geometry: TrackGeometry::new(
                args.positioner,
                args.offset_before,
                args.offset_after,
                args.item_count,
            ),
            state: SliderState::Enabled,
            drag: None,
            drag_mode: args.drag_mode,
            jump_size: args.jump_size,
        }
    }

    /// Records the widget's laid-out size and recomputes the track mapping.
    ///
    /// Call after every placement or resize. A zero-length size defers the
    /// recompute; a placed size whose insets leave no usable track length
    /// panics, because such a layout is a bug in the caller.
    pub fn place(&mut self, size: PxSize) -> Response {
        self.geometry.place(
            self.orientation.track_length(size),
            self.orientation.track_breadth(size),
        );
        Response {
            redraw: true,
            ..Response::default()
        }
    }

    /// Replaces the item count; the position collapses toward the new range.
    pub fn set_item_count(&mut self, count: usize) -> Response {
        self.geometry.set_item_count(count);
        Response {
            redraw: true,
            ..Response::default()
        }
    }

    /// Moves to `position`, clamped into the valid range.
    ///
    /// Always executes, even when the clamped value equals the current
    /// position: the pixel offset may still need realignment after a
    /// resize. Does not notify listeners; [`scroll`](Self::scroll) and
    /// drags do.
    pub fn set_position(&mut self, position: isize) -> Response {
        self.geometry.set_position(position);
        Response {
            redraw: true,
            ..Response::default()
        }
    }

    /// Scrolls to the absolute position named by `mode`.
    ///
    /// Always reports a `modified` notification, even when the clamped
    /// target equals the current position; coupled widgets rely on it to
    /// resynchronize.
    pub fn scroll(&mut self, mode: ScrollMode) -> Response {
        let current = self.geometry.item_position() as isize;
        let jump = self.jump_size as isize;
        let target = match mode {
            ScrollMode::Begin => 0,
            ScrollMode::End => self.geometry.item_count() as isize - 1,
            ScrollMode::ItemBackwards => current - 1,
            ScrollMode::ItemForward => current + 1,
            ScrollMode::HalfJumpBackwards => current - jump / 2,
            ScrollMode::HalfJumpForward => current + jump / 2,
            ScrollMode::JumpBackwards => current - jump,
            ScrollMode::JumpForward => current + jump,
        };
        let mut response = self.set_position(target);
        response.modified = Some(self.geometry.item_position());
        response
    }

    /// Current item position.
    pub fn position(&self) -> usize {
        self.geometry.item_position()
    }

    /// Total number of discrete item positions.
    pub fn item_count(&self) -> usize {
        self.geometry.item_count()
    }

    /// Items moved by a full jump scroll.
    pub fn jump_size(&self) -> usize {
        self.jump_size
    }

    /// The track geometry, for hit-testing and rendering queries.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Snapshot of the values the rendering collaborator binds.
    pub fn bindings(&self) -> RenderBindings {
        self.geometry.bindings()
    }
}
