#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod guard;
pub mod procenv;
pub mod runner;
pub mod snapshot;
pub mod venv;

pub use error::{Error, Result};
pub use guard::{run_with_env, Activation, ActivationState};
pub use procenv::{ProcessEnv, SystemEnv};
pub use venv::Venv;
