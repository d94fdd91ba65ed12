use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, sync::atomic::Ordering, time::Duration};

use galtui::{handlers, log_debug, ui, App, Config, DEBUG_MODE};

/// Terminal image gallery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/galtui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: ~/.config/galtui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Gallery API base url; overrides the config file entry
    #[arg(short, long)]
    url: Option<String>,
}

fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/galtui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let galtui_dir = config_dir.join("galtui");
        let config_path = galtui_dir.join("config.yaml");

        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config file anywhere; the caller may still carry --url
    Ok(None)
}

fn missing_config_error() -> anyhow::Error {
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("galtui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/galtui/config.yaml".to_string()
    };

    anyhow::anyhow!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location,\n\
         or --url <api-url> to run without a config file.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(config_path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", config_path));
            }

            let config_str = fs::read_to_string(&config_path)?;
            serde_yaml::from_str::<Config>(&config_str)?
        }
        None => match args.url.as_ref() {
            Some(url) => Config::with_url(url.clone()),
            None => return Err(missing_config_error()),
        },
    };

    // Override config with CLI flags
    if let Some(url) = args.url {
        config.api_url = url;
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Clear terminal to remove sixel graphics if needed (brief flash but necessary)
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Process decoded images from background tasks (non-blocking)
        while let Ok(update) = app.image_update_rx.try_recv() {
            app.apply_image_update(update);
        }

        // Walk the viewer display sequence forward on every frame
        app.advance_viewer();

        // Poll at 100ms so the fade swap lands close to its 200ms mark
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
