//! Test-only helpers shared across unit tests in this crate.

use std::sync::{Mutex, MutexGuard};

/// Serialize tests that mutate process environment variables.
pub fn lock_env() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    // A panicking test poisons the mutex; the guard is still usable.
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
