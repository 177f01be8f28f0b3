use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::COLOR_HUD;
use crate::game::{GameStatus, Snapshot};

/// Draws the one-line score bar above the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    if snapshot.status == GameStatus::NotStarted {
        return;
    }

    let line = hud_line(
        snapshot.score,
        snapshot.best,
        snapshot.status == GameStatus::Paused,
        usize::from(area.width),
    );
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(COLOR_HUD)),
        area,
    );
}

/// Score on the left, best on the right, a pause marker in between.
fn hud_line(score: u32, best: u32, paused: bool, available_width: usize) -> Line<'static> {
    let left = format!(" SCORE: {score:02}");
    let middle = if paused { "Paused" } else { "" };
    let right = format!("BEST: {best:02} ");

    let used = left.width() + middle.width() + right.width();
    let gap = available_width.saturating_sub(used);
    let left_gap = gap / 2;
    let right_gap = gap - left_gap;

    Line::from(vec![
        Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(left_gap)),
        Span::styled(middle, Style::default().add_modifier(Modifier::ITALIC)),
        Span::raw(" ".repeat(right_gap)),
        Span::raw(right),
    ])
}
