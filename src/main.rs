//! Tideline - a terminal chart of monthly sea level and storm events.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tideline::app::App;
use tideline::chart::{NavAction, TextRenderer};
use tideline::ui;
use tideline::util::ChartConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "tideline")]
#[command(about = "Monthly sea level with storm events, one year at a time", long_about = None)]
struct Args {
    /// Sea level trend CSV (Year, Month, Monthly_MSL, Linear_Trend, High_Conf., Low_Conf.)
    sea_level: PathBuf,

    /// Storm events CSV (EVENT_ID, BEGIN_DATE, EVENT_TYPE, EVENT_NARRATIVE, EPISODE_NARRATIVE)
    storms: PathBuf,

    /// Year to open on instead of the default
    #[arg(long)]
    year: Option<i32>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the opening year as text and exit
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting Tideline");
    }

    let mut config = ChartConfig::default();
    if let Some(year) = args.year {
        config = config.with_initial_year(year);
    }

    let app = App::new(args.sea_level, args.storms, config);

    if args.print {
        print_scene(&app);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Tideline exited");

    Ok(())
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_scene(app: &App) {
    // A failed load has already been logged; print nothing.
    let Some(scene) = app.scene() else {
        return;
    };
    let mut renderer = TextRenderer::new();
    scene.render(&mut renderer);
    print!("{}", renderer.output());
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Pagination
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.navigate(NavAction::Prev);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.navigate(NavAction::Next);
            },
            (KeyModifiers::NONE, KeyCode::Home) => {
                app.navigate(NavAction::First);
            },
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                app.navigate(NavAction::Last);
            },
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.navigate(NavAction::First);
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },

            // Event markers
            (KeyModifiers::NONE, KeyCode::Tab) => app.focus_next_marker(),
            (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::BackTab) => {
                app.focus_prev_marker();
            },
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                app.activate_focused_marker();
            },
            (KeyModifiers::NONE, KeyCode::Esc) => app.close_annotation(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_annotation(),

            // Features
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.status =
                    "Help: h/l=year, gg/G=first/last, Tab=select event, Enter=annotate, y=copy, T=theme, q=quit"
                        .to_string();
            },

            _ => {},
        }
        pending_g = false;
    }
}
