// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};

mod app;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use source::{FileSource, HttpSource, StatsSource};

#[derive(Parser, Debug)]
#[command(name = "botwatch")]
#[command(about = "Live operations TUI for a delivery bot's stats endpoint")]
struct Args {
    /// Stats endpoint URL to poll
    #[arg(short = 'u', long)]
    endpoint: Option<String>,

    /// Watch a dumped stats payload file instead of polling an endpoint
    #[arg(short, long, conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Polling interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Currency suffix appended to the earnings counter
    #[arg(short, long)]
    currency: Option<String>,

    /// Optional TOML config file (overridden by CLI flags, overrides
    /// built-in defaults; BOTWATCH_* environment variables also apply)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file (stderr would corrupt the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export the rendered dashboard to a JSON file and exit (file mode only)
    #[arg(short, long, conflicts_with = "endpoint", requires = "file")]
    export: Option<PathBuf>,
}

/// Effective settings after merging CLI flags, the config file, and
/// environment variables.
#[derive(Debug, Clone)]
struct Settings {
    endpoint: String,
    refresh: Duration,
    currency: String,
}

impl Settings {
    const DEFAULT_ENDPOINT: &'static str = "http://localhost:5000/api/stats";
    const DEFAULT_REFRESH_SECS: u64 = 5;
    const DEFAULT_CURRENCY: &'static str = "₽";

    /// Resolve settings: CLI flag, then config file / environment, then
    /// the built-in default.
    fn resolve(args: &Args) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(ref path) = args.config {
            builder = builder.add_source(config::File::from(path.as_path()));
        }
        let file = builder
            .add_source(config::Environment::with_prefix("BOTWATCH"))
            .build()?;

        let endpoint = args
            .endpoint
            .clone()
            .or_else(|| file.get_string("endpoint").ok())
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_string());

        let refresh = args
            .refresh
            .or_else(|| {
                file.get_int("refresh")
                    .ok()
                    .and_then(|v| u64::try_from(v).ok())
            })
            .unwrap_or(Self::DEFAULT_REFRESH_SECS);

        let currency = args
            .currency
            .clone()
            .or_else(|| file.get_string("currency").ok())
            .unwrap_or_else(|| Self::DEFAULT_CURRENCY.to_string());

        Ok(Self {
            endpoint,
            refresh: Duration::from_secs(refresh.max(1)),
            currency,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::resolve(&args)?;

    if let Some(ref path) = args.log_file {
        init_tracing(path)?;
    }

    // Handle export mode (non-interactive); clap guarantees --file is set
    if let (Some(export_path), Some(file)) = (&args.export, &args.file) {
        return export_to_file(file, export_path, &settings.currency);
    }

    // File-based mode
    if let Some(ref path) = args.file {
        let source = Box::new(FileSource::new(path));
        return run_tui(source, &settings.currency, settings.refresh);
    }

    // Default: HTTP endpoint polling
    run_with_http(&settings)
}

/// Set up tracing output to a file.
fn init_tracing(path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("botwatch=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run with an HTTP polling source.
fn run_with_http(settings: &Settings) -> Result<()> {
    // Build a tokio runtime for the polling task
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt.block_on(async {
        HttpSource::builder()
            .endpoint(&settings.endpoint)
            .interval(settings.refresh)
            .start()
    });

    // The source paces itself; the TUI only drains at frame rate
    run_tui(
        Box::new(source),
        &settings.currency,
        Duration::from_millis(100),
    )
}

/// Run the TUI with the given data source
fn run_tui(
    source: Box<dyn StatsSource>,
    currency: &str,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, currency);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, resize_notice_area(area));
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(10),   // Dashboard
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::overview::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Drain the source periodically; the fetch schedule itself is
        // independent of this loop
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Centered band for the too-small notice. Never extends past the frame,
/// whatever the terminal height.
fn resize_notice_area(area: Rect) -> Rect {
    Rect::new(
        area.x,
        area.y + area.height.saturating_sub(5) / 2,
        area.width,
        area.height.min(5),
    )
}

/// Render a dumped payload file into dashboard JSON, non-interactively.
fn export_to_file(
    stats_path: &std::path::Path,
    export_path: &std::path::Path,
    currency: &str,
) -> Result<()> {
    let mut source = FileSource::new(stats_path);
    let snapshot = source.poll().ok_or_else(|| {
        anyhow::anyhow!(
            "failed to load {}: {}",
            stats_path.display(),
            source.error().unwrap_or_else(|| "no data".to_string())
        )
    })?;

    let mut dashboard = data::Dashboard::new();
    dashboard.apply(&snapshot, currency);

    let json = serde_json::to_string_pretty(&dashboard)?;
    std::fs::write(export_path, json)?;

    println!("Exported dashboard to: {}", export_path.display());
    Ok(())
}
