//! Interactive terminal surface.

use super::{PlotLayoutConfig, Renderer};
use crate::data::PointSet;
use crate::error::Result;
use crate::ui::{self, PlotView, ThemeColors};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Renderer that draws into the terminal and waits for the user to close it.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    title: String,
    layout: PlotLayoutConfig,
    colors: ThemeColors,
}

impl TerminalRenderer {
    /// Create a renderer whose chart carries `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: PlotLayoutConfig::default(),
            colors: ThemeColors::default(),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, class_zero: &PointSet, class_other: &PointSet) -> Result<()> {
        let view = PlotView::new(&self.title, class_zero, class_other, &self.layout);

        let guard = ScreenGuard::enter(CrosstermScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        tracing::info!("Display opened");

        let res = wait_for_dismissal(&mut terminal, &view, &self.colors);

        terminal.show_cursor()?;
        guard.leave()?;
        tracing::info!("Display closed");

        res
    }
}

/// Terminal mode switches the guard toggles.
trait Screen {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
    fn enter_alternate_screen(&mut self) -> io::Result<()>;
    fn leave_alternate_screen(&mut self) -> io::Result<()>;
}

struct CrosstermScreen;

impl Screen for CrosstermScreen {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen)
    }
}

/// Raw mode plus alternate screen, undone on drop unless left successfully.
struct ScreenGuard<S: Screen> {
    screen: S,
    active: bool,
}

impl<S: Screen> ScreenGuard<S> {
    fn enter(mut screen: S) -> Result<Self> {
        screen.enable_raw_mode()?;
        let mut guard = Self {
            screen,
            active: true,
        };
        // On failure the guard is dropped armed and turns raw mode back off.
        guard.screen.enter_alternate_screen()?;
        Ok(guard)
    }

    /// Restore the terminal. On failure the guard stays armed so `Drop`
    /// retries both steps.
    fn leave(mut self) -> Result<()> {
        self.screen.disable_raw_mode()?;
        self.screen.leave_alternate_screen()?;
        self.active = false;
        Ok(())
    }
}

impl<S: Screen> Drop for ScreenGuard<S> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.screen.disable_raw_mode();
            let _ = self.screen.leave_alternate_screen();
        }
    }
}

fn wait_for_dismissal<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    view: &PlotView,
    colors: &ThemeColors,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, view, colors))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_dismiss_key(&key) {
                    return Ok(());
                }
            }
        }
    }
}

fn is_dismiss_key(key: &KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c'))
    )
}
