pub mod config;
pub mod game;
pub mod runtime;
pub mod ui;
pub mod verdict;
pub mod words;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    game::{GameSession, GameStatus, KeyToken},
    runtime::{game_events, GameEvent, TickerHandle},
    words::{ConfigError, WordList},
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::{Path, PathBuf},
    sync::mpsc::Receiver,
    time::Duration,
};

/// The countdown runs in whole seconds, so so does the tick driver.
const TICK_RATE_MS: u64 = 1000;

/// timed wordle-style guessing game for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden Spanish word before the attempts run out. Every row has its own countdown; when it expires, whatever you typed is submitted for you."
)]
pub struct Cli {
    /// embedded word list to play with
    #[clap(short = 'l', long, value_enum)]
    word_list: Option<SupportedWordList>,

    /// number of rows before the game is lost
    #[clap(short = 'a', long)]
    max_attempts: Option<usize>,

    /// seconds before an unfinished row is submitted for you
    #[clap(short = 's', long)]
    seconds_per_row: Option<u32>,

    /// custom word list file (same JSON shape as the embedded lists)
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum SupportedWordList {
    Castellano,
    Breve,
}

impl Cli {
    /// Layer the flags that were actually given over the persisted settings.
    fn apply(&self, config: &mut Config) {
        if let Some(list) = self.word_list {
            config.word_list = list.to_string().to_lowercase();
        }
        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }
        if let Some(secs) = self.seconds_per_row {
            config.seconds_per_row = secs;
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub word_list: WordList,
    pub session: GameSession,
}

impl App {
    pub fn new(config: Config, custom_words: Option<&Path>) -> Result<Self, ConfigError> {
        if config.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if config.seconds_per_row == 0 {
            return Err(ConfigError::ZeroTimer);
        }

        let word_list = match custom_words {
            Some(path) => WordList::load_file(path)?,
            None => WordList::load(&config.word_list)?,
        };
        let session = GameSession::new(
            word_list.pick().to_string(),
            config.max_attempts,
            config.seconds_per_row,
        );

        Ok(Self {
            config,
            word_list,
            session,
        })
    }

    /// Replace the session wholesale: fresh draw, fresh rows, fresh countdown.
    pub fn new_session(&mut self) {
        self.session = GameSession::new(
            self.word_list.pick().to_string(),
            self.config.max_attempts,
            self.config.seconds_per_row,
        );
    }
}

/// Normalize a terminal key event into a session token. Case-folds letters
/// (including ñ); the session itself rejects anything outside the alphabet.
fn key_token(key: &KeyEvent) -> Option<KeyToken> {
    match key.code {
        KeyCode::Enter => Some(KeyToken::Enter),
        KeyCode::Backspace => Some(KeyToken::Backspace),
        KeyCode::Char(c) => Some(KeyToken::Char(c.to_uppercase().next().unwrap_or(c))),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    cli.apply(&mut config);
    let _ = store.save(&config);

    // Configuration problems are fatal: report and refuse to start a game.
    let mut app = match App::new(config, cli.words.as_deref()) {
        Ok(app) => app,
        Err(err) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, err.to_string()).exit();
        }
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (events, ticker) = game_events(Duration::from_millis(TICK_RATE_MS));
    let res = run_loop(&mut terminal, &mut app, &events, &ticker);
    ticker.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &Receiver<GameEvent>,
    ticker: &TickerHandle,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match events.recv()? {
            GameEvent::Tick => {
                // A terminal session absorbs stray ticks on its own, but the
                // driver is suspended as soon as the game ends.
                if app.session.tick().is_some() {
                    ticker.suspend();
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            GameEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            GameEvent::Key(key) => {
                if key.code == KeyCode::Esc {
                    break;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break;
                }

                match app.session.status() {
                    GameStatus::InProgress => {
                        if let Some(token) = key_token(&key) {
                            if app.session.press_key(token).is_some() {
                                ticker.suspend();
                            }
                        }
                    }
                    GameStatus::Won | GameStatus::Lost => match key.code {
                        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                            app.new_session();
                            ticker.resume();
                        }
                        _ => {}
                    },
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
