//! Core traits and types for Rootline.
//!
//! This crate defines the shared abstractions that the expression compiler,
//! the solvers, and their callers build on:
//!
//! - [`Function`]: a callable that maps a real `x` to a real value
//! - [`Evaluation`]: the classified result of calling a function at a point
//! - [`Observer`]: receives solver events and optionally returns control actions

mod evaluation;
mod function;
mod observer;

pub use evaluation::{Evaluation, NonFinite, evaluate};
pub use function::{FromFn, Function, from_fn};
pub use observer::Observer;
