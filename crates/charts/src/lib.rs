//! Chart implementations for Slate exercises.
//!
//! This crate provides concrete [`Chart`] and [`Step`] implementations that
//! exercises draw into.
//!
//! # Modules
//!
//! - [`RecordingChart`] — a headless chart that keeps the latest frame and
//!   samples its curves over a configured range
//! - [`Page`] — a [`Step`] that hands out shared chart handles by selector
//! - [`ChartConfig`] — validated sampling range and resolution
//!
//! # Features
//!
//! - `plot` — Enables [`Explorer`], an egui window with one slider per
//!   parameter that redraws the chart live. This feature adds dependencies on
//!   `eframe` and `egui_plot`.
//!
//! [`Chart`]: slate_core::Chart
//! [`Step`]: slate_core::Step

mod config;
mod page;
mod recording;

pub use config::{ChartConfig, ConfigError};
pub use page::Page;
pub use recording::{ChartHandle, RecordingChart};

#[cfg(feature = "plot")]
mod explorer;

#[cfg(feature = "plot")]
pub use explorer::{Explorer, ShowConfig};
