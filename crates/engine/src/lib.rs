//! Request handling for Rootline.
//!
//! An [`Engine`] takes a [`Request`] (usually decoded from JSON), checks its
//! parameters, runs the matching solver, and returns a serializable
//! [`Reply`]. The `rootline` binary wraps it in a command-line front end.

mod config;
mod engine;
mod request;
mod response;

pub use config::{ConfigLoadError, EngineConfig};
pub use engine::Engine;
pub use request::{Request, RequestError};
pub use response::{
    BisectionStepDto, ErrorResponse, IterationStepDto, Reply, Response, Steps, TraceStep,
};
