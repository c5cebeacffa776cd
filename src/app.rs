use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::features::checkout::{CheckoutPage, Order};
use crate::features::locale::LocaleSwitcher;
use crate::features::{startup, theme_toggle};
use crate::shared::{
    Catalog, I18n, KeyValueStore, Language, ModernTheme, Preferences, SessionStore,
};
use crate::ui;

/// Terminal input forwarded to the event loop
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Idle poll interval elapsed
    Tick,
}

/// Status message for user feedback
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub timestamp: Instant,
    pub message_type: StatusType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
}

/// Main application state
pub struct App<S = SessionStore> {
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// The checkout page being displayed
    pub page: CheckoutPage,
    /// Persisted language and theme
    pub preferences: Preferences<S>,
    /// Translation catalog
    pub catalog: &'static Catalog,
    /// Palette for the current theme mode
    pub theme: ModernTheme,
    /// Chrome text in the active language
    pub i18n: I18n,
    /// Show help overlay
    pub show_help: bool,
    /// Current status message
    pub status_message: Option<StatusMessage>,
    /// Flag to indicate if UI needs redraw
    needs_redraw: bool,
}

impl App<SessionStore> {
    /// Create the app backed by the on-disk preferences, or by memory when
    /// they cannot be located
    pub fn new() -> Self {
        Self::with_store(SessionStore::open_default(), Order::demo())
    }
}

impl<S: KeyValueStore> App<S> {
    /// Build the page and run the startup restore against `store`
    pub fn with_store(store: S, order: Order) -> Self {
        let catalog = Catalog::global();
        let mut preferences = Preferences::new(store);
        let mut page = CheckoutPage::new(order);
        let (language, theme_mode) = startup::startup(&mut page, &mut preferences, catalog);

        Self {
            should_quit: false,
            page,
            preferences,
            catalog,
            theme: ModernTheme::for_mode(theme_mode),
            i18n: I18n::new(language),
            show_help: false,
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        if !IsTty::is_tty(&io::stdout()) {
            eprintln!("This application requires a TTY terminal to run.");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let reader = spawn_input_reader(event_tx);

        let result = self.event_loop(&mut terminal, &mut event_rx).await;

        // Closing the receiver stops the reader on its next poll
        drop(event_rx);
        if let Err(e) = reader.await {
            tracing::warn!(error = %e, "input reader ended abnormally");
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        while !self.should_quit {
            // Update status message (auto-clear after 2 seconds)
            self.update_status_message(Duration::from_secs(2));

            // Only redraw if something changed
            if self.needs_redraw {
                terminal.draw(|f| ui::draw(f, self))?;
                self.needs_redraw = false;
            }

            match events.recv().await {
                Some(AppEvent::Key(key)) => {
                    self.handle_key_event(key.code, key.modifiers);
                    self.needs_redraw = true; // Redraw after user input
                }
                Some(AppEvent::Resize) => self.needs_redraw = true,
                Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        tracing::info!("event loop finished");
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Help overlay swallows everything but its own close keys
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Char('/') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('й') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(language) = Language::from_shortcut(c) {
                    self.change_language(language);
                }
            }
            KeyCode::Char('l') | KeyCode::Char('д') => {
                self.change_language(self.i18n.language().next());
            }
            KeyCode::Char('t') | KeyCode::Char('е') => self.toggle_theme(),
            KeyCode::Tab => self.page.next_screen(),
            KeyCode::BackTab => self.page.prev_screen(),
            KeyCode::Char('?') | KeyCode::Char('/') => self.show_help = true,
            _ => {}
        }
    }

    /// Apply `language` to the page and remember it
    fn change_language(&mut self, language: Language) {
        LocaleSwitcher::new(self.catalog).apply_language(
            &mut self.page,
            &mut self.preferences,
            language,
        );
        self.i18n.set_language(language);

        if self.preferences.get_language() == Some(language) {
            let text = self.i18n.t("status.language_changed");
            self.show_status(text, StatusType::Success);
        } else {
            let text = self.i18n.t("status.not_saved");
            self.show_status(text, StatusType::Warning);
        }
    }

    /// Flip dark/light mode
    fn toggle_theme(&mut self) {
        let mode = theme_toggle::toggle_theme(&mut self.page, &mut self.preferences);
        self.theme = ModernTheme::for_mode(mode);

        let key = if mode.is_dark() {
            "status.theme_dark"
        } else {
            "status.theme_light"
        };
        let text = self.i18n.t(key);
        if self.preferences.get_theme() == Some(mode) {
            self.show_status(text, StatusType::Info);
        } else {
            let text = format!("{text}: {}", self.i18n.t("status.not_saved"));
            self.show_status(&text, StatusType::Warning);
        }
    }

    /// Show a status message to the user
    pub fn show_status(&mut self, text: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: text.to_string(),
            timestamp: Instant::now(),
            message_type: status_type,
        });
        self.needs_redraw = true;
    }

    /// Clear status message if it's older than the specified duration
    pub fn update_status_message(&mut self, max_age: Duration) {
        if let Some(ref msg) = self.status_message {
            if msg.timestamp.elapsed() > max_age {
                self.status_message = None;
                self.needs_redraw = true;
            }
        }
    }
}

/// Forward terminal events from a blocking thread until the receiver closes
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            let event = match event::poll(Duration::from_millis(250)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(..)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => AppEvent::Tick,
                Err(e) => {
                    tracing::error!(error = %e, "failed to poll terminal");
                    break;
                }
            };

            if tx.send(event).is_err() {
                break;
            }
        }
    })
}
