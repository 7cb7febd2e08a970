//! Shared fixtures for Slate's integration tests.

use serde::de::DeserializeOwned;
use slate_charts::{ChartConfig, ChartHandle, Page};
use slate_core::{COORDINATE_SYSTEM, Params, Step, StepError, Store};

/// An exercise wired to a fresh page.
pub struct Wired<P> {
    pub store: Store<P>,
    pub chart: ChartHandle,
}

/// Wires `exercise` to a page with a default coordinate system.
///
/// # Errors
///
/// Returns an error if the exercise cannot resolve its chart.
pub fn wire<P, F>(params: P, exercise: F) -> Result<Wired<P>, StepError>
where
    P: Params,
    F: FnOnce(&Page, &mut Store<P>) -> Result<(), StepError>,
{
    let page = Page::with_coordinate_system(ChartConfig::default());
    let mut store = Store::new(params);
    exercise(&page, &mut store)?;

    let chart = page.chart(COORDINATE_SYSTEM)?;
    Ok(Wired { store, chart })
}

/// Parses exercise parameters from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not describe `P`.
pub fn from_json<P: DeserializeOwned>(text: &str) -> serde_json::Result<P> {
    serde_json::from_str(text)
}

/// Parses exercise parameters from TOML.
///
/// # Errors
///
/// Returns an error if the TOML does not describe `P`.
pub fn from_toml<P: DeserializeOwned>(text: &str) -> Result<P, toml::de::Error> {
    toml::from_str(text)
}
