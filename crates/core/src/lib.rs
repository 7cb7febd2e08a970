//! Core traits and types for Slate exercises.
//!
//! This crate defines the shared abstractions that exercises and charts
//! build on:
//!
//! - [`Point`] — an immutable 2D sample coordinate
//! - [`Curve`] — a pure real-to-real function rendered by a chart
//! - [`Chart`] — the rendering collaborator that receives curves and points
//! - [`Step`] — the context an exercise resolves its chart from
//! - [`Store`] — observable parameter state that notifies watchers on change
//! - [`Observer`] — receives the current parameters and optionally returns a
//!   [`Writeback`]

mod chart;
mod curve;
mod observer;
mod params;
mod point;
mod step;
mod store;

pub use chart::Chart;
pub use curve::Curve;
pub use observer::Observer;
pub use params::{Field, Params};
pub use point::Point;
pub use step::{COORDINATE_SYSTEM, Step, StepError};
pub use store::{Store, StoreError, Writeback};
