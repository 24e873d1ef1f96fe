mod assets;
mod config;
mod dates;
mod export;
mod grid;
mod menu;
mod state;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use flexi_logger::{FileSpec, Logger};
use gpui::*;

use assets::Assets;
use grid::*;
use theme::Theme;

#[derive(Parser)]
#[command(name = "zgraph")]
#[command(about = "Paint a yearly contribution grid and export it as date-keyed JSON")]
struct Cli {
    /// Year to lay the grid out for (defaults to the current year)
    #[arg(short, long)]
    year: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;
    if let Some(log_file) = cli.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }
    logger.start()?;

    let year = config::resolve_year(cli.year.as_deref());
    log::info!("laying out contribution grid for {year}");

    Application::new().with_assets(Assets).run(move |cx| {
        // Initialize theme
        Theme::init(cx);

        // Set up menu bar
        menu::setup_menu(cx);

        // Register keybindings
        cx.bind_keys([
            KeyBinding::new("cmd-e", ExportJson, Some("GraphEditor")),
            KeyBinding::new("cmd-shift-c", CopyJson, Some("GraphEditor")),
            KeyBinding::new("cmd-n", ClearGrid, Some("GraphEditor")),

            // Global
            KeyBinding::new("cmd-q", Quit, None),
        ]);

        // Register quit action
        cx.on_action::<Quit>(|_, cx| {
            cx.quit();
        });

        // Create the main window
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(format!("{year} Contribution Grid").into()),
                appears_transparent: false,
                ..Default::default()
            }),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| GraphApp::new(year, cx))
        })
        .unwrap();
    });

    Ok(())
}
