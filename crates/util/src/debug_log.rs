//! Debug-build logging through [debug_log_info], [debug_log_warning] and
//! [debug_log_error].
//!
//! Nothing is ever printed unless `cfg!(debug_assertions)` is true. In debug
//! builds logging starts out enabled and can be switched off with [disable].

pub mod panic_on_errors;

use std::fmt::{self, Display, Formatter};
use std::io::{self, IsTerminal};
use std::panic::Location;
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Log some info to stdout if both `cfg!(debug_assertions)` and [enabled] are
/// true.
#[macro_export]
macro_rules! debug_log_info {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::write(
                $crate::debug_log::Level::Info,
                ::std::format_args!($($arg)*),
            );
        }
    }};
}

/// Log a warning to stderr if both `cfg!(debug_assertions)` and [enabled] are
/// true.
#[macro_export]
macro_rules! debug_log_warning {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::write(
                $crate::debug_log::Level::Warning,
                ::std::format_args!($($arg)*),
            );
        }
    }};
}

/// Log an error to stderr if both `cfg!(debug_assertions)` and [enabled] are
/// true. Panics afterwards when [panic_on_errors::enabled] is true.
#[macro_export]
macro_rules! debug_log_error {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        if $crate::debug_log::enabled() {
            $crate::debug_log::write(
                $crate::debug_log::Level::Error,
                ::std::format_args!($($arg)*),
            );
        }
    }};
}

/// How serious a log message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    /// Info goes to stdout, everything else to stderr.
    fn uses_stderr(self) -> bool {
        self != Level::Info
    }

    fn ansi_color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[35m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Whether logging is enabled or not. Always `false` without
/// `cfg!(debug_assertions)`.
#[inline(always)]
pub fn enabled() -> bool {
    #[cfg(debug_assertions)]
    return ENABLED.load(Ordering::Relaxed);

    #[cfg(not(debug_assertions))]
    return false;
}

/// Disable logging.
#[inline(always)]
pub fn disable() {
    #[cfg(debug_assertions)]
    ENABLED.store(false, Ordering::Relaxed);
}

/// Enable logging. Panics when `cfg!(debug_assertions)` is false since logging
/// is compiled out in that case.
#[inline(always)]
pub fn enable() {
    #[cfg(not(debug_assertions))]
    panic!("Debug logging cannot be enabled.");

    #[cfg(debug_assertions)]
    ENABLED.store(true, Ordering::Relaxed);
}

/// Print one formatted log entry with the caller's location and the current
/// time.
///
/// This is what the logging macros expand to and generally shouldn't be called
/// directly.
#[track_caller]
pub fn write(level: Level, msg: fmt::Arguments<'_>) {
    let colored = if level.uses_stderr() {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };
    let (blue, color, reset) = if colored {
        ("\x1b[34m", level.ansi_color(), "\x1b[0m")
    } else {
        ("", "", "")
    };

    let entry = format!(
        "{blue}DEBUG LOG{reset} [{color}{level}{reset}]: {msg}\n{}",
        location_and_time(Location::caller(), blue, reset)
    );

    if level.uses_stderr() {
        eprintln!("{entry}");
    } else {
        println!("{entry}");
    }

    if level == Level::Error && panic_on_errors::enabled() {
        panic!("Panicking on error logging enabled.");
    }
}

fn location_and_time(loc: &Location<'_>, color: &str, reset: &str) -> String {
    let when = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|e| format!("Unknown time: {e}"));

    format!(
        "\tWhere: {color}{}:{}:{}{reset}\n\tTime:  {color}{when}{reset}",
        loc.file(),
        loc.line(),
        loc.column()
    )
}

#[cfg(debug_assertions)]
static ENABLED: AtomicBool = AtomicBool::new(true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_info_goes_to_stdout() {
        assert!(!Level::Info.uses_stderr());
        assert!(Level::Warning.uses_stderr());
        assert!(Level::Error.uses_stderr());
    }

    #[test]
    fn location_is_reported() {
        let loc = Location::caller();
        let text = location_and_time(loc, "", "");
        assert!(text.contains(&format!("{}:{}", loc.file(), loc.line())));
        assert!(text.contains("Time:"));
    }
}
