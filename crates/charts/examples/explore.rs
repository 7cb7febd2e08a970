//! Interactive versions of the Slate exercises.
//!
//! Each mode wires one exercise to a headless chart and opens a window with a
//! slider per parameter. Moving a slider reruns the exercise watcher and
//! redraws the plot.
//!
//! # Usage
//!
//! ```text
//! cargo run --example explore --features plot -- linear
//! cargo run --example explore --features plot -- svm
//! RUST_LOG=debug cargo run --example explore --features plot -- logistic
//! ```
//!
//! # Modes
//!
//! - **linear** — Fit a quadratic to six points; the sidebar shows the
//!   squared error.
//! - **qda** — Drag a quadratic boundary through an unlabeled cloud.
//! - **logistic** — Fit a sigmoid to binary labels; shows the negative
//!   log-likelihood.
//! - **svm** — Move a decision line and its margins between two groups;
//!   shows the hinge loss plus L2 penalty.
//! - **roc** — Sweep the likelihood-ratio threshold and watch the operating
//!   points trace out an ROC curve.
//! - **neighbors** — Change the kernel bandwidth and watch the neighbor
//!   probability of the closest point.

use std::error::Error;

use slate_charts::{ChartConfig, Explorer, Page, ShowConfig};
use slate_core::{COORDINATE_SYSTEM, Params, Step, StepError, Store};
use slate_exercises::{
    dimension_reduction_exercise, likelihood_ratio_exercise, linear_exercise, logistic_exercise,
    qda_exercise, svm_exercise,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "linear".into());
    match mode.as_str() {
        "linear" => explore(
            "Polynomial regression",
            ChartConfig::new([0.0, 6.0], 200)?,
            linear_exercise::<Page>,
        ),
        "qda" => explore(
            "Quadratic discriminant",
            ChartConfig::new([-1.0, 4.0], 200)?,
            qda_exercise::<Page>,
        ),
        "logistic" => explore(
            "Logistic regression",
            ChartConfig::new([-3.0, 3.0], 200)?,
            logistic_exercise::<Page>,
        ),
        "svm" => explore(
            "Support vector machine",
            ChartConfig::new([0.0, 8.0], 200)?,
            svm_exercise::<Page>,
        ),
        "roc" => explore(
            "Likelihood ratio test",
            ChartConfig::new([0.0, 1.0], 2)?,
            likelihood_ratio_exercise::<Page>,
        ),
        "neighbors" => explore(
            "Neighbor similarity",
            ChartConfig::new([-1.0, 5.0], 2)?,
            dimension_reduction_exercise::<Page>,
        ),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: explore [linear|qda|logistic|svm|roc|neighbors]");
            std::process::exit(1);
        }
    }
}

/// Wires an exercise to a fresh page and opens the explorer window.
fn explore<P, F>(title: &str, config: ChartConfig, wire: F) -> Result<(), Box<dyn Error>>
where
    P: Params + Default + 'static,
    F: FnOnce(&Page, &mut Store<P>) -> Result<(), StepError>,
{
    let page = Page::with_coordinate_system(config);
    let mut store = Store::<P>::default();
    wire(&page, &mut store)?;

    let chart = page.chart(COORDINATE_SYSTEM)?;
    Explorer::new(store, chart).show(ShowConfig::new().title(title).legend())?;

    Ok(())
}
