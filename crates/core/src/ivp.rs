//! Scalar initial value problems.
//!
//! A scalar IVP is `y'(t) = f(t, y)` with `y(a) = y0`, integrated over the
//! closed interval `[a, b]` in `n` equal steps.
//!
//! - [`IvpParams`] — the validated `{a, b, y0, n}` tuple
//! - [`Grid`] — the `n + 1` equally spaced points from `a` to `b`
//! - [`Rhs`] — the right-hand side `f(t, y)`, implemented for plain closures
//! - [`LinearDecay`] — the built-in right-hand side `f(t, y) = -y + t` and its
//!   closed-form [`ExactSolution`]

mod grid;
mod linear_decay;
mod params;
mod rhs;

pub use grid::Grid;
pub use linear_decay::{ExactSolution, LinearDecay};
pub use params::{IvpParams, ParamsError};
pub use rhs::Rhs;
