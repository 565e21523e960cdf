use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override the first player's name
    #[arg(long)]
    player1: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    player2: Option<String>,

    /// Override the first player's piece color (name or #rrggbb)
    #[arg(long)]
    color1: Option<String>,

    /// Override the second player's piece color (name or #rrggbb)
    #[arg(long)]
    color2: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    apply_overrides(&mut config, cli);
    config.validate().context("invalid command-line overrides")?;

    init_logging(&config.logging)?;
    log::info!("starting with {:?}", config.board);

    let app = App::new(config).context("starting game")?;
    run(app).context("running terminal UI")
}

fn apply_overrides(config: &mut AppConfig, cli: Cli) {
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(name) = cli.player1 {
        config.players.first.name = name;
    }
    if let Some(name) = cli.player2 {
        config.players.second.name = name;
    }
    if let Some(color) = cli.color1 {
        config.players.first.color = color;
    }
    if let Some(color) = cli.color2 {
        config.players.second.color = color;
    }
}

/// Route `log` records to the configured file. Without one, logging stays off
/// unless `RUST_LOG` asks for it, since the UI owns the terminal.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let default_filter = if config.file.is_some() {
        config.level.as_str()
    } else {
        "off"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen);
    or_restore(entered, || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend), || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

/// Run `restore` when a terminal setup step failed, then pass the result on.
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
