//! Building blocks of the `euler-ivp` command-line tool.
//!
//! - [`prompt`] — the interactive parameter acquisition loop
//! - [`report`] — the tabular comparison of the trajectory and exact solution
//! - `plot` — the chart window (cargo feature `plot`)

pub mod prompt;
pub mod report;

#[cfg(feature = "plot")]
pub mod plot;
