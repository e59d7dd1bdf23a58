//! Whether or not [crate::debug_log_error] should panic after logging.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether panicking on errors is enabled. On by default, but it only has an
/// effect while [super::enabled] is true.
pub fn enabled() -> bool {
    cfg!(debug_assertions) && ENABLED.load(Ordering::Relaxed)
}

/// Stop [crate::debug_log_error] from panicking.
pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Make [crate::debug_log_error] panic after logging.
pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

static ENABLED: AtomicBool = AtomicBool::new(true);
