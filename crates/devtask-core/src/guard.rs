//! Scoped virtualenv activation.
//!
//! Every task entry point runs its external tool through [`run_with_env`]:
//! if no environment is active in this process, the named one is activated
//! for the duration of the task and deactivated on every exit path; an
//! environment that was already active on entry is left exactly as found.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::procenv::{ProcessEnv, SystemEnv};
use crate::venv::Venv;

/// Marker variable set by virtualenv activation, used to detect whether an
/// environment is already in effect.
pub const ACTIVE_MARKER: &str = "VIRTUAL_ENV";

const PATH_VAR: &str = "PATH";
const PYTHONHOME_VAR: &str = "PYTHONHOME";

/// Observed on entry, never mutated afterward.
#[derive(Debug, Clone, Copy)]
pub struct ActivationState {
    pub was_already_active: bool,
}

impl ActivationState {
    pub fn activated_by_self(self) -> bool {
        !self.was_already_active
    }
}

#[derive(Debug)]
struct SavedVars {
    path: Option<OsString>,
    pythonhome: Option<OsString>,
}

/// An acquired activation. Dropping it deactivates the environment iff this
/// instance performed the activation; a foreign activation is untouched.
pub struct Activation<'e, E: ProcessEnv> {
    env: &'e E,
    state: ActivationState,
    saved: Option<SavedVars>,
}

impl<'e, E: ProcessEnv> Activation<'e, E> {
    pub fn acquire(venv: &Venv, env: &'e E) -> Result<Self> {
        venv.ensure_usable()?;

        if env.get(ACTIVE_MARKER).is_some() {
            debug!("environment already active, leaving as-is");
            return Ok(Self {
                env,
                state: ActivationState {
                    was_already_active: true,
                },
                saved: None,
            });
        }

        let saved = SavedVars {
            path: env.get(PATH_VAR),
            pythonhome: env.get(PYTHONHOME_VAR),
        };
        let new_path = prepend_path(&venv.bin_dir(), saved.path.as_deref())?;

        env.set(ACTIVE_MARKER, venv.root().as_os_str());
        env.set(PATH_VAR, &new_path);
        env.remove(PYTHONHOME_VAR);
        debug!(venv = %venv.root().display(), "activated environment");

        Ok(Self {
            env,
            state: ActivationState {
                was_already_active: false,
            },
            saved: Some(saved),
        })
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    fn restore(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        match saved.path {
            Some(path) => self.env.set(PATH_VAR, &path),
            None => self.env.remove(PATH_VAR),
        }
        if let Some(home) = saved.pythonhome {
            self.env.set(PYTHONHOME_VAR, &home);
        }
        self.env.remove(ACTIVE_MARKER);
        debug!("deactivated environment");
    }
}

impl<E: ProcessEnv> Drop for Activation<'_, E> {
    fn drop(&mut self) {
        self.restore();
    }
}

fn prepend_path(bin_dir: &Path, current: Option<&OsStr>) -> Result<OsString> {
    let mut parts = vec![bin_dir.to_path_buf()];
    if let Some(current) = current {
        parts.extend(std::env::split_paths(current));
    }
    std::env::join_paths(parts).map_err(|e| Error::Activation(e.to_string()))
}

/// Run `task` with `venv` active in the real process environment.
pub fn run_with_env<T>(venv: &Venv, task: impl FnOnce() -> Result<T>) -> Result<T> {
    run_in(venv, &SystemEnv, task)
}

/// Same as [`run_with_env`] but against an injected environment.
pub fn run_in<T, E: ProcessEnv>(venv: &Venv, env: &E, task: impl FnOnce() -> Result<T>) -> Result<T> {
    let activation = Activation::acquire(venv, env)?;
    let result = task();
    // Deactivation happens before the task's outcome is surfaced.
    drop(activation);
    result
}
