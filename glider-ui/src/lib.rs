//! Foundation primitives for the glider widget toolkit.
//!
//! This crate holds the small, dependency-free vocabulary the widget crates
//! are written against:
//!
//! - [`px`] - physical pixel coordinate types ([`Px`], [`PxPosition`],
//!   [`PxSize`])
//! - [`cursor`] - pointer event types ([`PointerButton`], [`PointerEvent`])
//!
//! Everything here is plain data. Window integration, rendering and widget
//! behavior live in the crates built on top.

pub mod cursor;
pub mod px;

pub use cursor::{PointerButton, PointerEvent};
pub use px::{Px, PxPosition, PxSize};
