use crate::config::PlayerConfig;
use crate::game::{Board, Cell, GameEngine, GameState, Phase, Players, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine<PlayerConfig>,
    selected_column: usize,
    message: Option<&str>,
) {
    let area = frame.area();
    // Grid rows plus column numbers, two borders and the selection marker,
    // capped so the fixed panes keep their rows on boards taller than the screen
    let board_lines = engine
        .state()
        .map_or(0, |state| {
            u16::try_from(state.board().height())
                .unwrap_or(u16::MAX)
                .saturating_add(4)
        })
        .min(area.height.saturating_sub(9));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Min(board_lines),    // Board
            Constraint::Length(3),           // Message
            Constraint::Length(3),           // Controls
        ])
        .split(area);

    render_header(frame, engine, chunks[0]);
    if let Some(state) = engine.state() {
        render_board(frame, state, selected_column, chunks[1]);
    }
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine<PlayerConfig>, area: Rect) {
    let (status, color) = match (engine.phase(), engine.current_player()) {
        (Phase::InProgress, Some(player)) => {
            (format!("Current Player: {}", player.name), player.color())
        }
        (Phase::Ended(_), _) => match engine.winner() {
            Some(winner) => (format!("Game Over  |  {} won", winner.name), winner.color()),
            None => ("Game Over  |  Tie".to_string(), Color::White),
        },
        _ => ("Press 'r' to start".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    state: &GameState<PlayerConfig>,
    selected_column: usize,
    area: Rect,
) {
    let board = state.board();
    let lines = board_lines(board, state.players(), state.last_move(), selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Column numbers, the framed grid, and a selection marker underneath.
fn board_lines(
    board: &Board,
    players: &Players<PlayerConfig>,
    last_move: Option<Position>,
    selected_column: usize,
) -> Vec<Line<'static>> {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(seat) => {
                    let mut style = Style::default().fg(players.get(seat).color());
                    if last_move == Some(Position { row, col }) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
