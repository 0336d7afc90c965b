// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions shared by the stores

use std::sync::{Mutex, MutexGuard};

use crate::error::SessionError;

/// Lock a mutex, recovering the guard if a previous holder panicked.
pub(crate) fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("{} lock was poisoned, recovering", what);
            poisoned.into_inner()
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &SessionError) -> String {
    match error {
        SessionError::RootFolder(_) => format!(
            "Error: {}\nRun as a normal user or set TSTOOL_HOME to a writable folder.",
            error
        ),
        _ => format!("Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn test_lock_or_recover_poisoned() {
        let mutex = Arc::new(Mutex::new(5));
        let clone = mutex.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(mutex.is_poisoned());
        let guard = lock_or_recover(&mutex, "test");
        assert_eq!(*guard, 5);
    }

    #[test]
    fn test_format_error_root_hint() {
        let msg = format_error(&SessionError::RootFolder(PathBuf::from("/")));
        assert!(msg.starts_with("Error:"));
        assert!(msg.contains("TSTOOL_HOME"));
    }

    #[test]
    fn test_format_error_generic() {
        let msg = format_error(&SessionError::Config("bad".to_string()));
        assert_eq!(msg, "Error: Configuration error: bad");
    }
}
