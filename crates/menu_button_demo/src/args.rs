//! Contains [Args], which are parsed command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Parsed command line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Hash)]
#[command(about = "A window showing off a few menu buttons.")]
pub struct Args {
    /// A JSON file with menu and window settings. Missing fields fall back to
    /// their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Close menus as soon as one of their entries is clicked (overrides the
    /// config file).
    #[arg(long)]
    pub close_on_select: bool,

    #[cfg(debug_assertions)]
    /// Disable debug logging. This option only exists if `debug_assertions` are
    /// enabled.
    #[arg(long)]
    pub no_debug_logging: bool,

    #[cfg(debug_assertions)]
    /// Enable debug error log panics. This option only exists if
    /// `debug_assertions` are enabled.
    #[arg(long, conflicts_with = "no_debug_logging")]
    pub debug_error_log_panics: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse()
    }
}
