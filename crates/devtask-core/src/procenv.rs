//! Process-environment access behind a trait, so the activation guard can be
//! exercised against an in-memory environment in tests.

use std::ffi::{OsStr, OsString};

pub trait ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString>;
    fn set(&self, key: &str, value: &OsStr);
    fn remove(&self, key: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn set(&self, key: &str, value: &OsStr) {
        std::env::set_var(key, value);
    }

    fn remove(&self, key: &str) {
        std::env::remove_var(key);
    }
}
