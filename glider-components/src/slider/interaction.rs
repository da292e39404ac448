//! The pointer interaction state machine.
//!
//! Events flow through [`Slider::handle_event`] and come back out as a
//! [`Response`]: what to repaint, what to tell the host window about
//! pointer capture, and whether a position change was committed. Nothing in
//! here touches a window or a renderer, so the whole machine is exercised
//! by plain unit tests.

use glider_ui::{PointerButton, PointerEvent, Px, PxPosition};
use tracing::{debug, trace};

use super::orientation::{BarSide, Orientation};
use super::{DragMode, ScrollMode, Slider};

/// Interaction states of the slider core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SliderState {
    /// Active; pointer not over the positioner.
    #[default]
    Enabled,
    /// Inactive; pointer input is swallowed.
    Disabled,
    /// Pointer hovering over the positioner.
    Focused,
    /// Positioner is being dragged.
    Pressed,
}

/// Pointer-capture change requested from the host window.
///
/// Capture is acquired on entering [`SliderState::Pressed`] and released on
/// every path out of it, so the two always balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Route all pointer input to this widget.
    Acquire,
    /// Restore normal pointer routing.
    Release,
}

/// Outcome of one event or mutating call on a [`Slider`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// The visual state changed and the widget needs a repaint.
    pub redraw: bool,
    /// Pointer-capture change to forward to the host window.
    pub capture: Option<Capture>,
    /// Committed item position; present exactly once per discrete change
    /// (stepped scrolls report it even when the clamped target is
    /// unchanged).
    pub modified: Option<usize>,
    /// The event must not propagate further.
    pub halted: bool,
}

impl Response {
    fn repaint() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    /// Combines two responses; later capture/notification values win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            capture: other.capture.or(self.capture),
            modified: other.modified.or(self.modified),
            halted: self.halted || other.halted,
        }
    }
}

/// Pointer state captured at press time. Exists only while the slider is
/// in [`SliderState::Pressed`]; dropping it is what ends a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DragSession {
    /// Pointer coordinate at press time.
    pub origin: PxPosition,
    /// Item position at press time.
    pub initial_position: usize,
    /// Positioner offset at press time; anchors continuous tracking.
    pub initial_offset: Px,
}

impl<O: Orientation> Slider<O> {
    /// Feeds one pointer event through the interaction state machine.
    ///
    /// Coordinates are widget-relative. Only the left button starts drags
    /// and bar jumps; other buttons pass through untouched.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Response {
        trace!(state = ?self.state, ?event, "pointer event");
        match *event {
            // An enter is handled as motion under the entering coordinate.
            PointerEvent::Enter { position } | PointerEvent::Move { position } => {
                self.motion(position)
            }
            PointerEvent::Leave => self.pointer_left(),
            PointerEvent::Press {
                button: PointerButton::Left,
                position,
            } => self.left_button_down(position),
            PointerEvent::Release {
                button: PointerButton::Left,
                position,
            } => self.left_button_up(position),
            PointerEvent::Press { .. } | PointerEvent::Release { .. } => Response::default(),
        }
    }

    /// Activates or deactivates the widget.
    ///
    /// Deactivating mid-drag clears the drag session and releases pointer
    /// capture; a disabled widget must never leave the window believing the
    /// pointer is still captured.
    pub fn set_active(&mut self, active: bool) -> Response {
        if active == self.is_active() {
            return Response::default();
        }
        let was_pressed = self.state == SliderState::Pressed;
        self.drag = None;
        let mut response = self.transition(if active {
            SliderState::Enabled
        } else {
            SliderState::Disabled
        });
        if was_pressed {
            response.capture = Some(Capture::Release);
        }
        response
    }

    /// True unless the widget is disabled.
    pub fn is_active(&self) -> bool {
        self.state != SliderState::Disabled
    }

    /// Current interaction state.
    pub fn state(&self) -> SliderState {
        self.state
    }

    fn motion(&mut self, position: PxPosition) -> Response {
        match self.state {
            SliderState::Enabled => {
                if self.orientation.on_positioner(&self.geometry, position) {
                    self.transition(SliderState::Focused)
                } else {
                    Response::default()
                }
            }
            SliderState::Focused => {
                if self.orientation.on_positioner(&self.geometry, position) {
                    Response::default()
                } else {
                    self.transition(SliderState::Enabled)
                }
            }
            SliderState::Pressed => {
                if !self.orientation.in_orthogonal_range(&self.geometry, position) {
                    return Response::default();
                }
                let Some(drag) = self.drag else {
                    debug_assert!(false, "pressed state without a drag session");
                    return Response::default();
                };
                let delta = self.orientation.length_difference(drag.origin, position);
                self.move_positioner(delta, drag)
            }
            SliderState::Disabled => {
                // Shouldn't be reachable, but a resize layout can retarget
                // motion at a disabled slider mid-drag; swallow it.
                Response {
                    halted: true,
                    ..Response::default()
                }
            }
        }
    }

    fn pointer_left(&mut self) -> Response {
        if self.state == SliderState::Focused {
            self.transition(SliderState::Enabled)
        } else {
            Response::default()
        }
    }

    fn left_button_down(&mut self, position: PxPosition) -> Response {
        let mut response = Response::default();

        if matches!(self.state, SliderState::Enabled | SliderState::Focused)
            && self.orientation.on_positioner(&self.geometry, position)
        {
            self.drag = Some(DragSession {
                origin: position,
                initial_position: self.geometry.item_position(),
                initial_offset: self.geometry.positioner_offset(),
            });
            response = self.transition(SliderState::Pressed);
            response.capture = Some(Capture::Acquire);
            debug!(position = self.geometry.item_position(), "drag started");
        }

        // The bar excludes the positioner, so at most one of the two paths
        // fires for any coordinate.
        match self.orientation.on_bar(&self.geometry, position) {
            Some(BarSide::Before) => response.merge(self.scroll(ScrollMode::HalfJumpBackwards)),
            Some(BarSide::After) => response.merge(self.scroll(ScrollMode::HalfJumpForward)),
            None => response,
        }
    }

    fn left_button_up(&mut self, position: PxPosition) -> Response {
        if self.state != SliderState::Pressed {
            return Response::default();
        }

        self.drag = None;
        let next = if self.orientation.on_positioner(&self.geometry, position) {
            SliderState::Focused
        } else {
            SliderState::Enabled
        };
        let mut response = self.transition(next);
        response.capture = Some(Capture::Release);
        debug!(position = self.geometry.item_position(), "drag ended");
        response
    }

    fn move_positioner(&mut self, delta: Px, drag: DragSession) -> Response {
        match self.drag_mode {
            DragMode::Snap => {
                let target = self.geometry.drag_target(delta, drag.initial_position);
                if target == self.geometry.item_position() {
                    return Response::default();
                }
                self.geometry.set_position(target as isize);
                debug!(position = target, "drag committed");
                Response {
                    modified: Some(target),
                    ..Response::repaint()
                }
            }
            DragMode::Continuous => {
                let previous_position = self.geometry.item_position();
                let previous_offset = self.geometry.positioner_offset();
                let position = self
                    .geometry
                    .follow_offset(drag.initial_offset + delta);
                Response {
                    redraw: self.geometry.positioner_offset() != previous_offset,
                    modified: (position != previous_position).then_some(position),
                    ..Response::default()
                }
            }
        }
    }

    fn transition(&mut self, next: SliderState) -> Response {
        if next == self.state {
            return Response::default();
        }
        debug!(from = ?self.state, to = ?next, "state change");
        self.state = next;
        Response::repaint()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{PositionerPolicy, SliderArgs};
    use super::*;
    use crate::slider::Horizontal;
    use glider_ui::PxSize;

    /// Horizontal 120x14 track, 5px insets, 20px handle, 10 items,
    /// pixels_per_step = 10. Position 5 puts the positioner at x = 55..75.
    fn pressed_slider() -> Slider<Horizontal> {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);
        let response = slider.handle_event(&press(65, 7));
        assert_eq!(response.capture, Some(Capture::Acquire));
        assert_eq!(slider.state(), SliderState::Pressed);
        slider
    }

    fn placed_slider() -> Slider<Horizontal> {
        let mut slider = Slider::new(
            Horizontal,
            SliderArgs::default()
                .item_count(10)
                .offset_before(Px(5))
                .offset_after(Px(5))
                .positioner(PositionerPolicy::Fixed(Px(20)))
                .jump_size(4),
        );
        let _ = slider.place(PxSize::new(Px(120), Px(14)));
        slider
    }

    fn motion(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Move {
            position: [x, y].into(),
        }
    }

    fn press(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Press {
            button: PointerButton::Left,
            position: [x, y].into(),
        }
    }

    fn release(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Release {
            button: PointerButton::Left,
            position: [x, y].into(),
        }
    }

    #[test]
    fn hover_focuses_and_unfocuses() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);

        let response = slider.handle_event(&motion(60, 7));
        assert_eq!(slider.state(), SliderState::Focused);
        assert!(response.redraw);

        // Still on the positioner: same state, no gratuitous repaint.
        let response = slider.handle_event(&motion(61, 7));
        assert_eq!(response, Response::default());

        let response = slider.handle_event(&motion(20, 7));
        assert_eq!(slider.state(), SliderState::Enabled);
        assert!(response.redraw);
    }

    #[test]
    fn enter_is_treated_as_motion() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);
        let _ = slider.handle_event(&PointerEvent::Enter {
            position: [60, 7].into(),
        });
        assert_eq!(slider.state(), SliderState::Focused);
    }

    #[test]
    fn leave_drops_focus_only() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);
        let _ = slider.handle_event(&motion(60, 7));
        let _ = slider.handle_event(&PointerEvent::Leave);
        assert_eq!(slider.state(), SliderState::Enabled);

        // Leaving while merely enabled changes nothing.
        let response = slider.handle_event(&PointerEvent::Leave);
        assert_eq!(response, Response::default());
    }

    #[test]
    fn press_and_release_off_positioner_round_trip() {
        let mut slider = pressed_slider();

        // Drag far enough right that the release lands off the positioner.
        let moved = slider.handle_event(&motion(105, 7));
        assert_eq!(moved.modified, Some(9));

        // Release over the bar, well away from the positioner (now 95..115).
        let response = slider.handle_event(&release(30, 7));
        assert_eq!(response.capture, Some(Capture::Release));
        assert_eq!(slider.state(), SliderState::Enabled);
        assert_eq!(response.modified, None);
    }

    #[test]
    fn release_on_positioner_keeps_focus() {
        let mut slider = pressed_slider();
        let response = slider.handle_event(&release(66, 7));
        assert_eq!(response.capture, Some(Capture::Release));
        assert_eq!(slider.state(), SliderState::Focused);
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut slider = placed_slider();
        let response = slider.handle_event(&release(60, 7));
        assert_eq!(response, Response::default());
    }

    #[test]
    fn drag_notifies_once_per_discrete_change() {
        let mut slider = pressed_slider();

        // +4px: snaps back to the same position, nothing to report.
        let response = slider.handle_event(&motion(69, 7));
        assert_eq!(response, Response::default());

        // +24px from the origin: round(2.4) = 2 steps forward.
        let response = slider.handle_event(&motion(89, 7));
        assert_eq!(response.modified, Some(7));
        assert!(response.redraw);

        // Wiggling within the same snapped step stays silent.
        let response = slider.handle_event(&motion(88, 7));
        assert_eq!(response.modified, None);

        // -15px from the origin: round(-1.5) = 2 steps back from 5.
        let response = slider.handle_event(&motion(50, 7));
        assert_eq!(response.modified, Some(3));
    }

    #[test]
    fn drag_ignores_motion_outside_orthogonal_range() {
        let mut slider = pressed_slider();
        let response = slider.handle_event(&motion(89, 40));
        assert_eq!(response, Response::default());
        assert_eq!(slider.position(), 5);

        // Back inside the band the same delta applies.
        let response = slider.handle_event(&motion(89, 7));
        assert_eq!(response.modified, Some(7));
    }

    #[test]
    fn bar_press_jumps_half_a_page() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);

        // jump_size = 4, so a bar press moves by 2.
        let response = slider.handle_event(&press(30, 7));
        assert_eq!(response.modified, Some(3));
        assert_eq!(slider.state(), SliderState::Enabled);

        let response = slider.handle_event(&press(100, 7));
        assert_eq!(response.modified, Some(5));
    }

    #[test]
    fn bar_press_clamps_at_the_ends() {
        let mut slider = placed_slider();
        let _ = slider.set_position(1);
        // Positioner spans 15..35; x = 10 is the bar before it, and the
        // half jump of 2 clamps at the first item.
        let response = slider.handle_event(&press(10, 7));
        assert_eq!(response.modified, Some(0));

        let _ = slider.set_position(0);
        // x = 4 is inside the leading inset: not on the bar at all.
        let response = slider.handle_event(&press(4, 7));
        assert_eq!(response.modified, None);
    }

    #[test]
    fn non_left_buttons_pass_through() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);
        let response = slider.handle_event(&PointerEvent::Press {
            button: PointerButton::Right,
            position: [60, 7].into(),
        });
        assert_eq!(response, Response::default());
        assert_eq!(slider.state(), SliderState::Enabled);
    }

    #[test]
    fn disabled_swallows_motion() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);
        let _ = slider.set_active(false);

        let response = slider.handle_event(&motion(60, 7));
        assert!(response.halted);
        assert!(!response.redraw);
        assert_eq!(response.modified, None);
        assert_eq!(slider.state(), SliderState::Disabled);

        let _ = slider.set_active(true);
        let response = slider.handle_event(&motion(60, 7));
        assert_eq!(slider.state(), SliderState::Focused);
        assert!(response.redraw);
    }

    #[test]
    fn deactivation_mid_drag_releases_capture() {
        let mut slider = pressed_slider();
        let response = slider.set_active(false);
        assert_eq!(response.capture, Some(Capture::Release));
        assert_eq!(slider.state(), SliderState::Disabled);

        // A fresh drag after reactivation starts from a clean session.
        let _ = slider.set_active(true);
        let response = slider.handle_event(&press(65, 7));
        assert_eq!(response.capture, Some(Capture::Acquire));
        let response = slider.handle_event(&motion(89, 7));
        assert_eq!(response.modified, Some(7));
    }

    #[test]
    fn continuous_mode_tracks_the_pointer() {
        let mut slider = Slider::new(
            Horizontal,
            SliderArgs::default()
                .item_count(10)
                .offset_before(Px(5))
                .offset_after(Px(5))
                .positioner(PositionerPolicy::Fixed(Px(20)))
                .drag_mode(super::super::DragMode::Continuous),
        );
        let _ = slider.place(PxSize::new(Px(120), Px(14)));
        let _ = slider.set_position(5);

        let _ = slider.handle_event(&press(65, 7));
        // +17px: offset follows exactly, position truncates 67/10 -> 6.
        let response = slider.handle_event(&motion(82, 7));
        assert_eq!(slider.geometry().positioner_offset(), Px(55 + 17));
        assert_eq!(response.modified, Some(6));
        assert!(response.redraw);

        // +2px more: offset still moves, position unchanged.
        let response = slider.handle_event(&motion(84, 7));
        assert_eq!(slider.geometry().positioner_offset(), Px(74));
        assert!(response.redraw);
        assert_eq!(response.modified, None);

        // Way past the end: clamped to the last position and max offset.
        let response = slider.handle_event(&motion(400, 7));
        assert_eq!(slider.geometry().positioner_offset(), Px(95));
        assert_eq!(response.modified, Some(9));
    }

    #[test]
    fn capture_acquire_and_release_balance() {
        let mut slider = placed_slider();
        let _ = slider.set_position(5);

        let mut acquires = 0;
        let mut releases = 0;
        let mut notifications = 0;
        for event in [press(65, 7), motion(89, 7), motion(88, 7), release(89, 7)] {
            let response = slider.handle_event(&event);
            match response.capture {
                Some(Capture::Acquire) => acquires += 1,
                Some(Capture::Release) => releases += 1,
                None => {}
            }
            if response.modified.is_some() {
                notifications += 1;
            }
        }
        assert_eq!(acquires, 1);
        assert_eq!(releases, 1);
        assert_eq!(notifications, 1);
        assert_eq!(slider.position(), 7);
    }
}
