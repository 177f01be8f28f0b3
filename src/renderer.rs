use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_WIDTH, COLOR_BORDER, COLOR_ROCK, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, GLYPH_CELL,
    GLYPH_FOOD, GLYPH_ROCK, food_color,
};
use crate::game::{GameStatus, Snapshot};
use crate::grid::{Arena, Position};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from a state snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, arena: Arena) {
    let board = board_area(frame.area(), arena);
    let hud_row = Rect {
        y: board.y.saturating_sub(1),
        height: 1,
        ..board
    };
    render_hud(frame, hud_row, snapshot);

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    if snapshot.status == GameStatus::NotStarted {
        render_start_menu(frame, board, snapshot.best);
        return;
    }

    for rock in &snapshot.rocks {
        draw_cell(frame, inner, arena, *rock, GLYPH_ROCK, Style::new().fg(COLOR_ROCK));
    }
    for food in &snapshot.foods {
        let style = Style::new().fg(food_color(food.category));
        draw_cell(frame, inner, arena, food.position, GLYPH_FOOD, style);
    }
    for segment in &snapshot.body {
        let style = Style::new().fg(COLOR_SNAKE_BODY);
        draw_cell(frame, inner, arena, *segment, GLYPH_CELL, style);
    }
    draw_cell(
        frame,
        inner,
        arena,
        snapshot.head,
        GLYPH_CELL,
        Style::new()
            .fg(COLOR_SNAKE_HEAD)
            .add_modifier(Modifier::BOLD),
    );

    match snapshot.status {
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board,
            snapshot.score,
            snapshot.best,
            snapshot.death_reason,
        ),
        _ => {}
    }
}

/// Bordered board rectangle centred in `area`, one row below the HUD.
fn board_area(area: Rect, arena: Arena) -> Rect {
    let width = arena.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = arena.height.saturating_add(2);

    let [_, board] = Layout::vertical([Constraint::Length(1), Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(board);

    board
}

fn draw_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    arena: Arena,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = cell_to_terminal(inner, arena, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Converts a cell to the terminal column/row of its left half.
fn cell_to_terminal(inner: Rect, arena: Arena, position: Position) -> Option<(u16, u16)> {
    if !arena.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::grid::{Arena, Position};

    use super::cell_to_terminal;

    const ARENA: Arena = Arena {
        width: 10,
        height: 5,
        spawn_margin: 1,
    };

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(3, 2, 20, 5);

        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(0, 0)), Some((3, 2)));
        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(9, 4)), Some((21, 6)));
    }

    #[test]
    fn cells_outside_arena_or_clipped_area_are_skipped() {
        let inner = Rect::new(0, 0, 10, 3);

        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(-1, 0)), None);
        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(10, 0)), None);
        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(5, 0)), None);
        assert_eq!(cell_to_terminal(inner, ARENA, Position::new(0, 3)), None);
    }
}
