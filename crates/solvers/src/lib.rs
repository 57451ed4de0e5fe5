//! Fixed-step explicit Euler solvers.
//!
//! - [`transient::euler`] — a generic forward Euler solver for any
//!   [`OdeProblem`](ivp_core::OdeProblem) over a [`Model`](ivp_core::Model)
//! - [`scalar`] — the scalar initial value problem integrator built on it,
//!   producing index-aligned `t`/`w` trajectories

pub mod scalar;
pub mod transient;
