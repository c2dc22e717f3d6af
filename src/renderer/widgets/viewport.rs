use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::runtime::ViewportView;
use crate::surface::Hitbox;

/// Draws the visible slice of the surface's content and records the area it
/// occupied, so wheel input can be routed back to this surface by position.
pub fn render_viewport(frame: &mut Frame<'_>, area: Rect, view: &ViewportView) {
    view.surface.record_measurements(
        Hitbox {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
        },
        area.height,
        view.lines.len(),
    );

    if area.height == 0 || area.width == 0 {
        return;
    }

    let top = view
        .scroll_top
        .min(view.lines.len().saturating_sub(area.height as usize));
    let visible = view
        .lines
        .iter()
        .skip(top)
        .take(area.height as usize)
        .map(|line| Line::from(clip_line(line, area.width)))
        .collect::<Vec<_>>();

    let style = Style::default().fg(view.color.unwrap_or(Color::White));
    let widget = Paragraph::new(Text::from(visible)).style(style);
    frame.render_widget(widget, area);
}

fn clip_line(line: &str, width: u16) -> String {
    let mut taken = 0usize;
    let mut clipped = String::new();
    for ch in line.chars() {
        let char_width = ch.width().unwrap_or(0);
        if taken + char_width > width as usize {
            break;
        }
        taken += char_width;
        clipped.push(ch);
    }
    clipped
}
