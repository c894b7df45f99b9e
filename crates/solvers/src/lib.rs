//! Root-finding solvers that record a step trace.
//!
//! Three algorithms share the [`Solver`] trait:
//!
//! - [`Bisection`]: guaranteed convergence on a sign-changing bracket
//! - [`Newton`]: Newton-Raphson with a central-difference derivative
//! - [`SimpleIteration`]: fixed-point iteration of a map `phi(x)`
//!
//! Every solve returns an [`Outcome`] holding the ordered steps and either a
//! [`Solution`] or the [`Error`] that ended it. The trace is kept on failure.
//!
//! The [`bisection()`], [`newton()`], and [`simple_iteration()`] functions take a
//! formula string and run the full pipeline: normalize, compile, solve.

mod bisection;
mod config;
mod error;
mod evaluate;
mod formula;
mod newton;
mod outcome;
mod simple_iteration;
mod solver;
mod step;

pub mod derivative;

pub use bisection::Bisection;
pub use config::{Config, ConfigError, DEFAULT_DERIVATIVE_TOL, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use formula::{bisection, newton, simple_iteration};
pub use newton::Newton;
pub use outcome::{Outcome, Solution, Status};
pub use simple_iteration::SimpleIteration;
pub use solver::{Action, Event, Solver};
pub use step::{BracketStep, IterationStep};
