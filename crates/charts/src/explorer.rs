//! Interactive slider explorer for an exercise.
//!
//! See [`Explorer`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use log::warn;
use slate_core::{Params, Store};

use crate::ChartHandle;

/// Configuration for rendering an [`Explorer`] window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// explorer.show(ShowConfig::new().title("SVM").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    point_radius: f32,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, 4px points.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            point_radius: 4.0,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each curve and point set.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the radius used to draw sample points.
    #[must_use]
    pub fn point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A window with one slider per parameter and a live plot of the chart.
///
/// Moving a slider calls [`Store::set`], which runs the exercise watcher and
/// redraws the shared [`RecordingChart`](crate::RecordingChart). Outputs the
/// watcher writes back (such as `loss`) are listed under the sliders.
///
/// # Example
///
/// ```ignore
/// let page = Page::with_coordinate_system(ChartConfig::default());
/// let mut store = Store::<SvmParams>::default();
/// svm_exercise(&page, &mut store)?;
///
/// let chart = page.chart(COORDINATE_SYSTEM)?;
/// Explorer::new(store, chart).show(ShowConfig::new().title("SVM").legend())?;
/// ```
pub struct Explorer<P> {
    store: Store<P>,
    chart: ChartHandle,
}

impl<P: Params + 'static> Explorer<P> {
    /// Creates an explorer over a wired store and the chart its watcher draws into.
    #[must_use]
    pub fn new(store: Store<P>, chart: ChartHandle) -> Self {
        Self { store, chart }
    }

    /// Opens a blocking egui window.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(ExplorerApp {
                    store: self.store,
                    chart: self.chart,
                    config,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders sliders and the current frame.
struct ExplorerApp<P> {
    store: Store<P>,
    chart: ChartHandle,
    config: ShowConfig,
}

impl<P: Params> ExplorerApp<P> {
    fn sliders(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        for field in P::fields() {
            let Some(mut value) = self.store.params().get(field.name) else {
                continue;
            };
            let slider = egui::Slider::new(&mut value, field.range()).text(field.name);
            if ui.add(slider).changed() {
                if let Err(err) = self.store.set(field.name, value) {
                    warn!("slider update rejected: {err}");
                }
            }
        }

        ui.separator();
        for (name, value) in self.store.outputs() {
            ui.label(format!("{name} = {value:.4}"));
        }
    }

    fn plot(&self, ui: &mut egui::Ui) {
        let chart = self.chart.borrow();
        let curves = chart.sampled_curves();
        let radius = self.config.point_radius;

        let mut plot = Plot::new("slate_explorer");
        if self.config.legend {
            plot = plot.legend(Legend::default());
        }
        plot.show(ui, |plot_ui| {
            for (i, samples) in curves.iter().enumerate() {
                let points: PlotPoints = samples.iter().map(|&p| <[f64; 2]>::from(p)).collect();
                plot_ui.line(Line::new(points).name(format!("curve {}", i + 1)));
            }
            for (i, set) in chart.point_sets().iter().enumerate() {
                let points: PlotPoints = set.iter().map(|&p| <[f64; 2]>::from(p)).collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(radius)
                        .name(format!("points {}", i + 1)),
                );
            }
        });
    }
}

impl<P: Params> eframe::App for ExplorerApp<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("parameters").show(ctx, |ui| self.sliders(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.plot(ui));
    }
}
