//! Plotting observer for visualizing trajectories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use ivp_core::Observer;
use ivp_solvers::{scalar::GridPoint, transient::euler};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(
///     ShowConfig::new()
///         .title("Euler vs. exact")
///         .axes("t", "y")
///         .mark_points("Euler method")
///         .legend(),
/// )?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
    marked: Vec<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no axis
    /// labels, lines only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            x_label: None,
            y_label: None,
            marked: Vec::new(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x and y axes.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Draws a marker at every recorded point of the named trace, on top of
    /// its line.
    #[must_use]
    pub fn mark_points(mut self, trace: impl Into<String>) -> Self {
        self.marked.push(trace.into());
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to use [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
///
/// Scalar Euler events implement it for any `N`: `x` is `t` and the
/// approximate value fills trace 0, leaving the other slots free for curves
/// recorded by hand (such as a reference solution).
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<const N: usize> Plottable<N> for euler::Event<GridPoint, f64> {
    fn x(&self) -> Option<f64> {
        Some(self.snapshot.input.t)
    }

    fn traces(&self) -> [Option<f64>; N] {
        std::array::from_fn(|i| (i == 0).then_some(self.snapshot.input.y))
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either
/// passing `&mut PlotObserver` as the solver observer (for [`Plottable`]
/// events) or calling [`record`][PlotObserver::record] directly, which is how
/// curves that do not come from a solver are added.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Euler method", "exact solution"]);
/// scalar::solve(&LinearDecay, &params, &mut obs)?;
/// for [t, y] in exact.sample(&dense_grid) {
///     obs.record(t, [None, Some(y)]);
/// }
/// obs.show(ShowConfig::new().legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<Trace> = self
            .names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Trace {
                marked: config.marked.contains(&name),
                name,
                points,
            })
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    x_label: config.x_label,
                    y_label: config.y_label,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
    marked: bool,
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<Trace>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
            }
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let line: PlotPoints = trace.points.iter().copied().collect();
                    plot_ui.line(Line::new(line).name(&trace.name));
                    if trace.marked {
                        let markers: PlotPoints = trace.points.iter().copied().collect();
                        plot_ui.points(Points::new(markers).radius(3.0).name(&trace.name));
                    }
                }
            });
        });
    }
}
