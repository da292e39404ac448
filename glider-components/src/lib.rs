//! Slider and scrollbar building blocks for the glider widget toolkit.
//!
//! The crate currently ships one component core: [`slider`], the shared
//! positional/interaction engine behind sliders and scrollbars. Orientation
//! widgets wrap a [`slider::Slider`] with their rendering and layout; the
//! core itself stays renderer-free and is driven entirely by values.

pub mod slider;

pub use slider::{
    BarSide, Capture, DragMode, Horizontal, Orientation, PositionerPolicy, RenderBindings,
    Response, ScrollMode, Slider, SliderArgs, SliderState, TrackGeometry, Vertical,
};
