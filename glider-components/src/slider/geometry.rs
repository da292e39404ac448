//! Track geometry: the mapping between discrete item positions and pixel
//! offsets along the travel axis.
//!
//! All quantities live along a single axis; orientation only matters when a
//! 2D pointer coordinate is projected onto the track, which happens in
//! [`super::orientation`].

use glider_ui::Px;
use tracing::debug;

/// Smallest extent a proportionally sized positioner may shrink to.
///
/// A thumb thinner than this becomes impossible to grab on long ranges.
const MIN_PROPORTIONAL_LENGTH: Px = Px(16);

/// How the positioner's extent along the track is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionerPolicy {
    /// A handle with a fixed extent, slider style. Clamped to the usable
    /// track length.
    Fixed(Px),
    /// A thumb sized by the visible share of the content, scrollbar style:
    /// `visible` is the number of items shown at once.
    Proportional {
        /// Items visible at once.
        visible: usize,
    },
}

impl PositionerPolicy {
    /// Positioner extent for the given usable track length and item count.
    ///
    /// With one item or none there is nothing to travel past, so a
    /// proportional positioner covers the whole usable length.
    pub fn length(&self, available: Px, item_count: usize) -> Px {
        match *self {
            Self::Fixed(len) => len.max(Px::ZERO).min(available),
            Self::Proportional { visible } => {
                if item_count <= 1 {
                    return available;
                }
                let visible = visible.max(1);
                let total = item_count - 1 + visible;
                let raw = available.to_f32() * visible as f32 / total as f32;
                Px::from_f32(raw)
                    .max(MIN_PROPORTIONAL_LENGTH)
                    .min(available)
            }
        }
    }
}

/// Values a renderer binds when drawing the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBindings {
    /// Pixel offset of the positioner's leading edge.
    pub positioner_offset: Px,
    /// Pixel extent of the positioner along the track.
    pub positioner_length: Px,
    /// Track inset before the travel region.
    pub offset_before: Px,
    /// Track inset after the travel region.
    pub offset_after: Px,
}

/// Discrete item range of the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Range {
    count: usize,
    position: usize,
}

/// The mapping between item positions and pixel offsets for one track.
///
/// Holds the item range, the placed track extents and the derived step
/// geometry. `positioner_offset` is re-derived from the item position on
/// every assignment, so the two cannot drift apart; the one exception is
/// [`follow_offset`](Self::follow_offset), which exists for continuous drag
/// tracking and derives the position from the offset instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    range: Range,
    policy: PositionerPolicy,
    track_length: Px,
    breadth: Px,
    offset_before: Px,
    offset_after: Px,
    positioner_offset: Px,
    positioner_length: Px,
    pixels_per_step: f32,
}

impl TrackGeometry {
    pub(crate) fn new(
        policy: PositionerPolicy,
        offset_before: Px,
        offset_after: Px,
        item_count: usize,
    ) -> Self {
        Self {
            range: Range {
                count: item_count,
                position: 0,
            },
            policy,
            track_length: Px::ZERO,
            breadth: Px::ZERO,
            offset_before,
            offset_after,
            positioner_offset: offset_before,
            positioner_length: Px::ZERO,
            pixels_per_step: 0.0,
        }
    }

    /// Total number of discrete item positions.
    pub fn item_count(&self) -> usize {
        self.range.count
    }

    /// Current item position, always within `0..item_count` (0 when empty).
    pub fn item_position(&self) -> usize {
        self.range.position
    }

    /// Placed track extent along the travel axis; zero before placement.
    pub fn track_length(&self) -> Px {
        self.track_length
    }

    /// Placed track extent across the travel axis; zero before placement.
    pub fn breadth(&self) -> Px {
        self.breadth
    }

    /// Track inset before the travel region.
    pub fn offset_before(&self) -> Px {
        self.offset_before
    }

    /// Track inset after the travel region.
    pub fn offset_after(&self) -> Px {
        self.offset_after
    }

    /// Pixel offset of the positioner's leading edge.
    pub fn positioner_offset(&self) -> Px {
        self.positioner_offset
    }

    /// Pixel extent of the positioner along the track.
    pub fn positioner_length(&self) -> Px {
        self.positioner_length
    }

    /// Pixels of travel per unit item-position change; zero while the range
    /// is degenerate or the track is unplaced.
    pub fn pixels_per_step(&self) -> f32 {
        self.pixels_per_step
    }

    /// Usable pixel length for positioner travel; zero before placement.
    pub fn available_length(&self) -> Px {
        if self.track_length == Px::ZERO {
            return Px::ZERO;
        }
        self.track_length - self.offset_before - self.offset_after
    }

    /// Snapshot of the values the rendering collaborator binds.
    pub fn bindings(&self) -> RenderBindings {
        RenderBindings {
            positioner_offset: self.positioner_offset,
            positioner_length: self.positioner_length,
            offset_before: self.offset_before,
            offset_after: self.offset_after,
        }
    }

    /// Records the placed track extents and recomputes the mapping.
    pub(crate) fn place(&mut self, track_length: Px, breadth: Px) {
        self.track_length = track_length;
        self.breadth = breadth;
        self.recompute();
    }

    /// Replaces the item count and recomputes the mapping.
    pub(crate) fn set_item_count(&mut self, count: usize) {
        self.range.count = count;
        if self.range.position >= count.max(1) {
            self.range.position = count.saturating_sub(1);
        }
        self.recompute();
    }

    /// Clamps `request` into the valid range and re-derives the positioner
    /// offset from it.
    ///
    /// Runs unconditionally even when the clamped value equals the current
    /// position: after a resize the pixel offset has to be realigned to the
    /// new step size regardless of the logical value.
    pub(crate) fn set_position(&mut self, request: isize) {
        let max = self.range.count.saturating_sub(1) as isize;
        self.range.position = request.clamp(0, max) as usize;
        self.positioner_offset = self.offset_before
            + Px::from_f32(self.range.position as f32 * self.pixels_per_step);
    }

    /// Recomputes the step mapping from the current range and track extents.
    ///
    /// A zero track length means layout has not happened yet; the recompute
    /// is deferred until [`place`](Self::place) supplies real extents.
    fn recompute(&mut self) {
        if self.track_length == Px::ZERO {
            return;
        }

        let available = self.track_length - self.offset_before - self.offset_after;
        assert!(
            available > Px::ZERO,
            "slider placed with no usable track length ({} - {} - {})",
            self.track_length,
            self.offset_before,
            self.offset_after,
        );

        self.positioner_length = self.policy.length(available, self.range.count);

        // All visible: pin the positioner at the track start.
        if self.range.count <= 1 {
            self.range.position = 0;
            self.pixels_per_step = 0.0;
            self.positioner_offset = self.offset_before;
            return;
        }

        let steps = self.range.count - 2;

        // One more step than interior boundaries so the last position is
        // reachable with a non-zero-length positioner.
        self.pixels_per_step =
            (available - self.positioner_length).to_f32() / (steps + 1) as f32;

        debug!(
            item_count = self.range.count,
            pixels_per_step = self.pixels_per_step,
            positioner_length = self.positioner_length.raw(),
            "track geometry recomputed"
        );

        self.set_position(self.range.position as isize);
    }

    /// Snapped item position for a drag displacement measured from the drag
    /// origin.
    ///
    /// Rounds half away from zero, so a drag reads as snapping to the
    /// nearest step in either direction.
    pub(crate) fn drag_target(&self, delta: Px, initial_position: usize) -> usize {
        if self.pixels_per_step <= 0.0 {
            return self.range.position;
        }
        let steps = (delta.to_f32() / self.pixels_per_step).round() as isize;
        let max = self.range.count.saturating_sub(1) as isize;
        (initial_position as isize + steps).clamp(0, max) as usize
    }

    /// Moves the positioner to `offset` (clamped to the usable track) and
    /// derives the item position from it by truncation.
    ///
    /// Continuous-drag entry point; the offset leads and the position
    /// follows, inverting the usual derivation direction.
    pub(crate) fn follow_offset(&mut self, offset: Px) -> usize {
        if self.pixels_per_step <= 0.0 {
            self.positioner_offset = self.offset_before;
            self.range.position = 0;
            return 0;
        }

        let max_offset = self.offset_before + (self.available_length() - self.positioner_length);
        self.positioner_offset = offset.clamp(self.offset_before, max_offset);

        let travelled = (self.positioner_offset - self.offset_before).to_f32();
        let derived = (travelled / self.pixels_per_step) as isize;
        // Floating point can land one past the last position; clamp it back.
        let max = self.range.count.saturating_sub(1) as isize;
        self.range.position = derived.clamp(0, max) as usize;
        self.range.position
    }
}
