#![cfg_attr(feature = "no-console", windows_subsystem = "windows")]

mod app;
mod args;
mod config;

use std::process::ExitCode;

use eframe::NativeOptions;
use egui::ViewportBuilder;

use menu_button::SelectBehavior;

use app::DemoApp;
use args::Args;
use config::DemoConfig;

const WINDOW_TITLE: &str = "Menu Button Demo";

fn main() -> ExitCode {
    let args = Args::default();

    #[cfg(debug_assertions)]
    {
        use util::debug_log;
        if args.no_debug_logging {
            debug_log::disable();
        } else if args.debug_error_log_panics {
            debug_log::panic_on_errors::enable();
        } else {
            debug_log::panic_on_errors::disable();
        }
    }

    let mut demo_config = match &args.config {
        Some(path) => DemoConfig::load(path).unwrap_or_else(|e| {
            util::debug_log_warning!("Using the default config: {e}");
            eprintln!("{e}");
            DemoConfig::default()
        }),
        None => DemoConfig::default(),
    };
    if args.close_on_select {
        demo_config.menu.select_behavior = SelectBehavior::CloseOnSelect;
    }

    let app = DemoApp::new(demo_config.menu);

    eframe::run_native(
        WINDOW_TITLE,
        NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_min_inner_size(config::MIN_WINDOW_SIZE)
                .with_inner_size(config::MIN_WINDOW_SIZE.max(demo_config.window_size)),
            centered: true,
            ..Default::default()
        },
        Box::new(|cc| {
            cc.egui_ctx.set_style(util::ui::compact_dark_style());
            Ok(Box::new(app))
        }),
    )
    .map_or_else(
        |e| {
            util::debug_log_error!("UI (run native) failed: {e}");
            ExitCode::FAILURE
        },
        |_| ExitCode::SUCCESS,
    )
}
