use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tock::{
    app::{App, AppAction, Moment, Tab},
    config::{Config, ConfigStore, FileConfigStore},
    countdown::MAX_MINUTES,
    logging::{init_logging, LoggingConfig},
    runtime::{ClockEvent, CrosstermEventSource, FixedTicker, Runner, STOPWATCH_PERIOD},
};

/// a terminal clock suite: clock, stopwatch and countdown timer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal clock suite with a wall clock (local or UTC, 12/24-hour), a stopwatch with hundredths, and a whole-minute countdown timer."
)]
pub struct Cli {
    /// show the clock in 12-hour AM/PM format
    #[clap(long)]
    twelve_hour: bool,

    /// hide seconds on the clock face
    #[clap(long)]
    hide_seconds: bool,

    /// show UTC instead of local time
    #[clap(long)]
    utc: bool,

    /// start in light mode
    #[clap(long)]
    light: bool,

    /// mark the window as pinned on top
    #[clap(long)]
    on_top: bool,

    /// countdown timer length in whole minutes
    #[clap(
        short = 'm',
        long,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_MINUTES))
    )]
    minutes: Option<u32>,

    /// tab to open on launch
    #[clap(short = 't', long, value_enum, default_value_t = Tab::Clock)]
    tab: Tab,

    /// read startup defaults from this JSON file instead of the user config dir
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layer command line flags over the loaded config. Flags only ever turn a
    /// setting away from its default, so an absent flag keeps the file's value.
    fn apply(&self, mut config: Config) -> Config {
        if self.twelve_hour {
            config.use_24_hour = false;
        }
        if self.hide_seconds {
            config.show_seconds = false;
        }
        if self.utc {
            config.use_utc = true;
        }
        if self.light {
            config.dark_mode = false;
        }
        if self.on_top {
            config.always_on_top = true;
        }
        if let Some(minutes) = self.minutes {
            config.timer_minutes = minutes;
        }
        config
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    init_logging(LoggingConfig::default());

    let config = cli.apply(cli.config_store().load());
    log::info!("starting on {} tab with {:?}", cli.tab, config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Tock"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, cli.tab, Moment::now());
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(STOPWATCH_PERIOD),
    );
    // Created on first copy; X11 drops the selection when the owner goes away
    let mut clipboard: Option<arboard::Clipboard> = None;

    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step();
        let at = Moment::now();

        // schedules decide for themselves whether a period has passed
        let mut redraw = app.on_tick(at);

        match event {
            ClockEvent::Tick => {}
            ClockEvent::Closed => {
                log::warn!("terminal input closed, exiting");
                break;
            }
            ClockEvent::Resize => redraw = true,
            ClockEvent::Key(key) => match app.on_key(key, at) {
                AppAction::Quit => break,
                AppAction::None => {}
                AppAction::Redraw => redraw = true,
                AppAction::Copy(text) => {
                    let result = copy_to_clipboard(&mut clipboard, &text).map(|()| text);
                    app.on_copied(result, at.instant);
                    redraw = true;
                }
            },
        }

        if redraw {
            terminal.draw(|f| ui(app, f))?;
        }
    }

    log::info!("exiting");
    Ok(())
}

fn copy_to_clipboard(clipboard: &mut Option<arboard::Clipboard>, text: &str) -> Result<(), String> {
    if clipboard.is_none() {
        *clipboard = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
    }
    match clipboard {
        Some(cb) => cb.set_text(text.to_owned()).map_err(|e| e.to_string()),
        None => Err("clipboard unavailable".to_string()),
    }
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
