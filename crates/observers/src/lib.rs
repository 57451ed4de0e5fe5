//! Reusable observers for the explicit Euler IVP solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solver event types.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events and actions
//!   ([`HasAbscissa`], [`HasValue`], [`CanStopEarly`])
//! - [`NonFiniteGuard`] — stops integration at the first NaN or infinite value
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: ivp_core::Observer
//! [`HasAbscissa`]: traits::HasAbscissa
//! [`HasValue`]: traits::HasValue
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;

#[cfg(feature = "plot")]
mod plot;

pub use guard::{NonFiniteGuard, Trip};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
