use ratatui::Frame;
use ratatui::layout::Rect;

use crate::runtime::View;

pub type RenderFn = fn(&mut Frame<'_>, Rect, &View);

pub mod flex;
pub mod layers;
pub mod modal;
pub mod panel;
pub mod text;
pub mod viewport;

pub use flex::render_flex;
pub use layers::render_layers;
pub use modal::render_modal;
pub use panel::render_panel;
pub use text::render_text;
pub use viewport::render_viewport;
