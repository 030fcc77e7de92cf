//! Scoped `PREHOOK_HOME` overrides for cache path tests.

use std::env;
use std::sync::{Mutex, PoisonError};

use crate::settings::ENV_HOME;

static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `PREHOOK_HOME` set to `value` (or unset for `None`).
///
/// Calls are serialized so parallel tests never observe each other's value,
/// and the previous value is put back afterwards.
#[allow(unsafe_code)]
pub fn with_prehook_home<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let _lock = HOME_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let saved = env::var_os(ENV_HOME);

    // SAFETY: HOME_LOCK is held for the whole override.
    unsafe {
        match value {
            Some(v) => env::set_var(ENV_HOME, v),
            None => env::remove_var(ENV_HOME),
        }
    }
    let result = f();
    unsafe {
        match saved {
            Some(v) => env::set_var(ENV_HOME, v),
            None => env::remove_var(ENV_HOME),
        }
    }
    result
}
