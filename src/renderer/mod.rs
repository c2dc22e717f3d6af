use std::io::{Stdout, stdout};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::runtime::View;

mod widgets;

use widgets::{
    render_flex, render_layers, render_modal, render_panel, render_text, render_viewport,
};

/// Draws lowered frames. The headless variant skips the terminal entirely
/// but keeps the same draw contract, so the runtime loop is identical in
/// tests and CI.
pub struct Renderer {
    backend: Backend,
}

enum Backend {
    Interactive(Terminal<CrosstermBackend<Stdout>>),
    Headless,
}

impl Renderer {
    pub fn new(title: &str) -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            SetTitle(title)
        )
        .context("prepare terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("build terminal")?;
        Ok(Self {
            backend: Backend::Interactive(terminal),
        })
    }

    pub fn headless() -> Self {
        Self {
            backend: Backend::Headless,
        }
    }

    pub fn draw(&mut self, view: &View) -> anyhow::Result<()> {
        match &mut self.backend {
            Backend::Interactive(terminal) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    render_view(frame, area, view);
                })?;
                Ok(())
            }
            Backend::Headless => Ok(()),
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if let Backend::Interactive(_) = self.backend {
            let _ = disable_raw_mode();
            let mut stdout = stdout();
            let _ = execute!(
                stdout,
                Show,
                DisableMouseCapture,
                LeaveAlternateScreen,
                SetTitle("Terminal")
            );
        }
    }
}

fn render_view(frame: &mut Frame<'_>, area: Rect, view: &View) {
    match view {
        View::Empty => {}
        View::Text(text) => render_text(frame, area, text),
        View::Flex(flex) => render_flex(frame, area, flex, render_view),
        View::Panel(panel) => render_panel(frame, area, panel, render_view),
        View::Viewport(viewport) => render_viewport(frame, area, viewport),
        View::Layered(layers) => render_layers(frame, area, layers, render_view),
        View::Modal(modal) => render_modal(frame, area, modal, render_view),
    }
}
