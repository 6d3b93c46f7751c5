//! RAII guard for environment variables in tests.
//!
//! Tests that point `TICKETDESK_ROOT` somewhere else must restore it even if
//! they panic. Tests using the guard should still be marked `#[serial]`.

use std::env;
use std::ffi::{OsStr, OsString};

/// Restores an environment variable (or its absence) on drop.
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvGuard {
    /// Snapshot `key`, then set it to `value`.
    ///
    /// # Safety
    /// Calls `std::env::set_var`, which races with other threads reading the
    /// environment. Callers must be `#[serial]`.
    pub unsafe fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        let guard = Self {
            key: key.to_string(),
            original: env::var_os(key),
        };
        unsafe { env::set_var(key, value) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: tests holding an EnvGuard are #[serial].
        match &self.original {
            Some(val) => unsafe { env::set_var(&self.key, val) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_env_guard_restores_existing_var() {
        let key = "TICKETDESK_TEST_GUARD_EXISTING";
        unsafe { env::set_var(key, "original") };
        {
            let _guard = unsafe { EnvGuard::set(key, "modified") };
            assert_eq!(env::var(key).unwrap(), "modified");
        }
        assert_eq!(env::var(key).unwrap(), "original");
        unsafe { env::remove_var(key) };
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_absent_var() {
        let key = "TICKETDESK_TEST_GUARD_ABSENT";
        unsafe { env::remove_var(key) };
        {
            let _guard = unsafe { EnvGuard::set(key, "temporary") };
            assert!(env::var(key).is_ok());
        }
        assert!(env::var(key).is_err());
    }
}
