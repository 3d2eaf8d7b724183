use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{game::GameStatus, verdict::LetterVerdict, App};

// Mirrors the physical layout the game expects: qwerty plus ñ.
const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

fn cell_style(verdict: LetterVerdict) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        LetterVerdict::Correct => bold.bg(Color::Green).fg(Color::Black),
        LetterVerdict::WrongPosition => bold.bg(Color::Yellow).fg(Color::Black),
        LetterVerdict::Absent => bold.bg(Color::DarkGray).fg(Color::White),
        LetterVerdict::Empty => bold.add_modifier(Modifier::DIM),
    }
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let snapshot = app.session.snapshot();
    let length = app.session.word_length();

    (0..app.session.max_attempts())
        .map(|row| {
            let verdicts = app.session.row_verdicts(row);
            let mut spans = Vec::with_capacity(length * 2);
            for col in 0..length {
                let letter = snapshot
                    .rows
                    .get(row)
                    .and_then(|r| r.chars().nth(col))
                    .unwrap_or(' ');
                spans.push(Span::styled(
                    format!(" {letter} "),
                    cell_style(verdicts[col]),
                ));
                if col + 1 < length {
                    spans.push(Span::raw(" "));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn keyboard_lines() -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    KEY_ROWS
        .iter()
        .map(|row| {
            let keys = row
                .chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            Line::from(Span::styled(keys, dim))
        })
        .collect()
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;
        let max_attempts = session.max_attempts();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let help_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC);

        // title, info, board, keyboard and banner, each padded by a blank line
        let content_height = 2 + 2 + max_attempts as u16 + 1 + 3 + 1 + 2;
        let top_filler = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints(
                [
                    Constraint::Length(top_filler),
                    Constraint::Length(2), // title
                    Constraint::Length(2), // countdown + row indicator
                    Constraint::Length(max_attempts as u16),
                    Constraint::Length(1),
                    Constraint::Length(3), // keyboard
                    Constraint::Length(1),
                    Constraint::Length(2), // banner + key help
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new(Span::styled("TECDLE", bold_style)).alignment(Alignment::Center);
        title.render(chunks[1], buf);

        let shown_row = (session.snapshot().current_row + 1).min(max_attempts);
        let info = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Tiempo restante: {}s", session.time_remaining()),
                bold_style,
            ),
            Span::raw("   "),
            Span::styled(format!("Fila: {shown_row}/{max_attempts}"), bold_style),
        ]))
        .alignment(Alignment::Center);
        info.render(chunks[2], buf);

        Paragraph::new(board_lines(self))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(keyboard_lines())
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        let banner = match session.status() {
            GameStatus::InProgress => Line::from(Span::styled("", dim_style)),
            GameStatus::Won => Line::from(Span::styled(
                "¡Felicitaciones!",
                Style::default().patch(bold_style).fg(Color::Green),
            )),
            GameStatus::Lost => Line::from(Span::styled(
                format!(
                    "La palabra era: {}",
                    session.revealed_target().unwrap_or_default()
                ),
                Style::default().patch(bold_style).fg(Color::Red),
            )),
        };
        let help = match session.status() {
            GameStatus::InProgress => "(esc) salir",
            GameStatus::Won | GameStatus::Lost => "(r) jugar de nuevo   (esc) salir",
        };
        Paragraph::new(vec![banner, Line::from(Span::styled(help, help_style))])
            .alignment(Alignment::Center)
            .render(chunks[7], buf);
    }
}
