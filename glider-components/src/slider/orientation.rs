//! Axis capability for slider-like widgets.
//!
//! An [`Orientation`] supplies the coordinate projections for one travel
//! axis; hit-testing is written once on top of those projections as
//! provided methods, so horizontal and vertical widgets share a single
//! implementation of the actual logic.

use glider_ui::{Px, PxPosition, PxSize};

use super::geometry::TrackGeometry;

/// Which side of the positioner a bar hit landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSide {
    /// Between the leading inset and the positioner.
    Before,
    /// Between the positioner and the trailing inset.
    After,
}

/// Projects 2D pointer coordinates and widget sizes onto a travel axis.
///
/// The geometry engine and the interaction state machine depend only on
/// this trait, never on a concrete orientation.
pub trait Orientation {
    /// Component of `point` along the travel axis.
    fn along(&self, point: PxPosition) -> Px;

    /// Component of `point` across the travel axis.
    fn across(&self, point: PxPosition) -> Px;

    /// Widget extent along the travel axis.
    fn track_length(&self, size: PxSize) -> Px;

    /// Widget extent across the travel axis.
    fn track_breadth(&self, size: PxSize) -> Px;

    /// True when `point` is over the positioner.
    fn on_positioner(&self, track: &TrackGeometry, point: PxPosition) -> bool {
        if !self.in_orthogonal_range(track, point) {
            return false;
        }
        let along = self.along(point);
        along >= track.positioner_offset()
            && along < track.positioner_offset() + track.positioner_length()
    }

    /// The bar region `point` falls in, if any.
    ///
    /// The bar excludes the insets and the positioner itself, so a point on
    /// the positioner never reports a side.
    fn on_bar(&self, track: &TrackGeometry, point: PxPosition) -> Option<BarSide> {
        if !self.in_orthogonal_range(track, point) {
            return None;
        }
        let along = self.along(point);
        if along >= track.offset_before() && along < track.positioner_offset() {
            Some(BarSide::Before)
        } else if along >= track.positioner_offset() + track.positioner_length()
            && along < track.track_length() - track.offset_after()
        {
            Some(BarSide::After)
        } else {
            None
        }
    }

    /// True while `point` stays within the cross-axis band of the track.
    ///
    /// During a drag the pointer may wander along the travel axis freely;
    /// this is the perpendicular tolerance that keeps the drag live.
    fn in_orthogonal_range(&self, track: &TrackGeometry, point: PxPosition) -> bool {
        let across = self.across(point);
        across >= Px::ZERO && across < track.breadth()
    }

    /// Signed travel-axis displacement from `from` to `to`.
    fn length_difference(&self, from: PxPosition, to: PxPosition) -> Px {
        self.along(to) - self.along(from)
    }
}

/// Travel along the x axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Horizontal;

impl Orientation for Horizontal {
    fn along(&self, point: PxPosition) -> Px {
        point.x
    }

    fn across(&self, point: PxPosition) -> Px {
        point.y
    }

    fn track_length(&self, size: PxSize) -> Px {
        size.width
    }

    fn track_breadth(&self, size: PxSize) -> Px {
        size.height
    }
}

/// Travel along the y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertical;

impl Orientation for Vertical {
    fn along(&self, point: PxPosition) -> Px {
        point.y
    }

    fn across(&self, point: PxPosition) -> Px {
        point.x
    }

    fn track_length(&self, size: PxSize) -> Px {
        size.height
    }

    fn track_breadth(&self, size: PxSize) -> Px {
        size.width
    }
}
