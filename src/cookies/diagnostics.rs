//! Where cookie warnings go.

use crate::base::cookieerror::CookieWarning;
use std::sync::Mutex;

/// Receives warnings raised while building cookies.
pub trait CookieDiagnostics: Send + Sync {
    fn warn(&self, warning: &CookieWarning);
}

/// Default sink: logs through `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl CookieDiagnostics for TracingDiagnostics {
    fn warn(&self, warning: &CookieWarning) {
        tracing::warn!(cookie = %warning.cookie_name(), "{}", warning);
    }
}

/// Keeps every warning in memory. Handy for assertions and for surfacing
/// warnings in a rendered page.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<CookieWarning>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<CookieWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl CookieDiagnostics for RecordingDiagnostics {
    fn warn(&self, warning: &CookieWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(warning.clone());
    }
}
