//! Navigation seam.
//!
//! The host's routing subsystem is injected behind [`Navigator`]. This
//! crate only triggers navigation; how an app identifier maps to a route
//! is the host's business.

use std::sync::Mutex;

use crate::error::Result;

/// Options forwarded to the host's navigation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Path within the destination app, if any.
    pub path: Option<String>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: Option<bool>,
}

/// Capability interface for navigating to another app.
pub trait Navigator {
    /// Navigate to the app identified by `app_id`.
    fn navigate(&self, app_id: &str, options: &NavigateOptions) -> Result<()>;
}

/// A [`Navigator`] that records calls instead of navigating.
///
/// Intended for tests and dry runs; the recorded calls can be inspected
/// with [`RecordingNavigator::calls`].
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(String, NavigateOptions)>>,
}

impl RecordingNavigator {
    /// Create a recorder with no calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(app_id, options)` pairs navigated so far, in order.
    pub fn calls(&self) -> Vec<(String, NavigateOptions)> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, app_id: &str, options: &NavigateOptions) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((app_id.to_string(), options.clone()));
        Ok(())
    }
}
