//! TUI Renderer for the interactive browser
//!
//! Runs the terminal event loop on its own thread. It receives
//! `BrowseScreenViewModel` snapshots from the handler and turns user input
//! into `RendererSignal`s for the handler.
//!
//! ## Design:
//! - Renderer owns UI state (focus, cursors, scroll, search buffer)
//! - Renderer does NOT own catalog data (receives ViewModels via channel)
//! - Input is routed to the focused component; components return actions
//!   which are translated into signals here

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::banner::BANNER_HEIGHT;
use crate::presentation::views::tui::components::{
    DetailAction, DetailComponent, FilterAction, FilterBarComponent, Focus, GridAction,
    GridComponent,
};
use crate::presentation::views::tui::filter_bar::FILTER_BAR_HEIGHT;
use crate::presentation::views::tui::hero::HERO_HEIGHT;
use crate::presentation::views::tui::status_bar::STATUS_BAR_HEIGHT;
use crate::presentation::views::tui::{BannerView, CARD_HEIGHT, HeroView, StatusBarView};

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    /// Update screen with new ViewModel
    Update(Box<BrowseScreenViewModel>),
    /// Fatal error occurred
    Error(String),
}

/// Signals sent from renderer to handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererSignal {
    QueryChanged(String),
    GenreSelected(String),
    /// Open the detail for the comic with this id
    OpenComic(String),
    CloseDetail,
    Refresh,
    Quit,
}

/// Screen regions for one frame
struct ScreenLayout {
    hero: Rect,
    filter_bar: Rect,
    banner: Rect,
    grid: Rect,
    status_bar: Rect,
}

impl ScreenLayout {
    fn split(area: Rect, has_banner: bool) -> Self {
        let banner_height = if has_banner { BANNER_HEIGHT } else { 0 };
        let [hero, filter_bar, banner, grid, status_bar] = Layout::vertical([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        Self {
            hero,
            filter_bar,
            banner,
            grid,
            status_bar,
        }
    }
}

pub struct TuiRenderer {
    /// Current screen data (received from handler)
    current_screen: Option<BrowseScreenViewModel>,

    focus: Focus,
    filter_bar: FilterBarComponent,
    grid: GridComponent,
    detail: DetailComponent,

    should_quit: bool,

    /// Fatal error from the handler; replaces the whole screen
    error_message: Option<String>,

    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            current_screen: None,
            focus: Focus::default(),
            filter_bar: FilterBarComponent::new(),
            grid: GridComponent::new(),
            detail: DetailComponent::new(),
            should_quit: false,
            error_message: None,
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    /// Set up the terminal, run the event loop, and always restore the
    /// terminal afterwards
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        // Make sure the handler stops even if the loop ended on an error
        self.emit(RendererSignal::Quit);

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                let signal = match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => None,
                };
                if let Some(signal) = signal {
                    self.emit(signal);
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(tui_event) => self.apply_event(tui_event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        // Keep a fatal error on screen until the user quits
                        if self.error_message.is_none() {
                            self.should_quit = true;
                        }
                        break;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply_event(&mut self, tui_event: TuiEvent) {
        match tui_event {
            TuiEvent::Update(screen_vm) => {
                self.current_screen = Some(*screen_vm);
            }
            TuiEvent::Error(msg) => {
                self.error_message = Some(msg);
            }
        }
    }

    fn emit(&mut self, signal: RendererSignal) {
        if signal == RendererSignal::Quit {
            self.should_quit = true;
        }
        if let Some(tx) = &self.signal_tx {
            // Ignore send errors: the handler may already be gone
            let _ = tx.send(signal);
        }
    }

    /// Route a key press to the focused component
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<RendererSignal> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(RendererSignal::Quit),
            KeyCode::Char('r') if ctrl => return Some(RendererSignal::Refresh),
            _ => {}
        }

        let quit_key = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
        if self.error_message.is_some() {
            return quit_key.then_some(RendererSignal::Quit);
        }
        let Some(screen) = &self.current_screen else {
            return quit_key.then_some(RendererSignal::Quit);
        };

        if screen.detail.is_some() {
            return self
                .detail
                .handle_input(key)
                .map(|DetailAction::Close| RendererSignal::CloseDetail);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return None;
            }
            KeyCode::Esc => return Some(RendererSignal::Quit),
            _ => {}
        }

        match self.focus {
            Focus::Search => match self.filter_bar.handle_search_input(key)? {
                FilterAction::QueryChanged(query) => Some(RendererSignal::QueryChanged(query)),
                FilterAction::Submit => {
                    self.focus = Focus::Grid;
                    None
                }
                FilterAction::SelectGenre(_) | FilterAction::FocusSearch => None,
            },
            Focus::Genres => match key.code {
                KeyCode::Char('q') => Some(RendererSignal::Quit),
                KeyCode::Char('/') => {
                    self.focus = Focus::Search;
                    None
                }
                _ => match self
                    .filter_bar
                    .handle_genre_input(key, &screen.filter_bar.genres)?
                {
                    FilterAction::SelectGenre(label) => Some(RendererSignal::GenreSelected(label)),
                    _ => None,
                },
            },
            Focus::Grid => match key.code {
                KeyCode::Char('q') => Some(RendererSignal::Quit),
                KeyCode::Char('/') => {
                    self.focus = Focus::Search;
                    None
                }
                _ => match self.grid.handle_input(key, screen.grid.card_count())? {
                    GridAction::Open(index) => screen
                        .grid
                        .card_id(index)
                        .map(|id| RendererSignal::OpenComic(id.to_string())),
                },
            },
        }
    }

    /// Resolve a left click against the rectangles of the last frame
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<RendererSignal> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let screen = self.current_screen.as_ref()?;
        let (column, row) = (mouse.column, mouse.row);

        if screen.detail.is_some() {
            return self
                .detail
                .handle_click(column, row)
                .map(|DetailAction::Close| RendererSignal::CloseDetail);
        }

        if let Some(action) = self
            .filter_bar
            .handle_click(column, row, &screen.filter_bar.genres)
        {
            return match action {
                FilterAction::FocusSearch => {
                    self.focus = Focus::Search;
                    None
                }
                FilterAction::SelectGenre(label) => {
                    self.focus = Focus::Genres;
                    Some(RendererSignal::GenreSelected(label))
                }
                FilterAction::QueryChanged(_) | FilterAction::Submit => None,
            };
        }

        let GridAction::Open(index) = self.grid.handle_click(column, row)?;
        self.focus = Focus::Grid;
        let id = screen.grid.card_id(index)?;
        Some(RendererSignal::OpenComic(id.to_string()))
    }

    /// Record hit-test rectangles for `area` without drawing
    #[cfg(test)]
    fn layout(&mut self, area: Rect) {
        let Some(screen) = &self.current_screen else {
            return;
        };
        let regions = ScreenLayout::split(area, screen.banner.is_some());
        self.filter_bar.layout(regions.filter_bar, &screen.filter_bar);
        self.grid.layout(regions.grid, &screen.grid);
        if screen.detail.is_some() {
            self.detail.layout(area);
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        if let Some(error_msg) = &self.error_message {
            let lines: Vec<Line> = vec![
                Span::styled(error_msg.as_str(), Style::default().fg(Color::Red)).into(),
                Line::default(),
                "Press q to quit".into(),
            ];
            let error = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Error").borders(Borders::ALL));

            f.render_widget(error, size);
            return;
        }

        let Some(screen) = &self.current_screen else {
            let loading = Paragraph::new("Connecting to the catalog...")
                .block(Block::default().title("Loading").borders(Borders::ALL));

            f.render_widget(loading, size);
            return;
        };

        let regions = ScreenLayout::split(size, screen.banner.is_some());

        f.render_widget(HeroView::new(&screen.hero), regions.hero);
        self.filter_bar
            .render(f, regions.filter_bar, &screen.filter_bar, self.focus);
        if let Some(banner) = &screen.banner {
            f.render_widget(BannerView::new(banner), regions.banner);
        }
        self.grid
            .render(f, regions.grid, &screen.grid, self.focus == Focus::Grid);
        f.render_widget(
            StatusBarView::new(&screen.status_bar).focus_label(self.focus.label()),
            regions.status_bar,
        );

        if let Some(detail) = &screen.detail {
            self.detail.render(f, size, detail);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
