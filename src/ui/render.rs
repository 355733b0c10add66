use crate::store::HistoryEntry;
use crate::ui::app::{App, PopupKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.error().is_some()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(counter_widget(app, body), body);
    frame.render_widget(
        Footer::new(app.in_flight(), app.error().is_some()).widget(footer),
        footer,
    );

    if let Some(PopupKind::History) = app.popup_kind() {
        draw_history(frame, body, &app.history());
    }
}

fn counter_widget(app: &App, body: Rect) -> Paragraph<'static> {
    // Counter and error line, vertically centered inside the borders.
    let content_height = 3u16;
    let top_padding = body.height.saturating_sub(2 + content_height) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        app.counter().to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(match app.error() {
        Some(error) => Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    });

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled(" Counter ", Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_history(frame: &mut Frame<'_>, body: Rect, history: &[HistoryEntry]) {
    let mut lines = Vec::new();
    if history.is_empty() {
        lines.push(Line::from("No actions dispatched yet."));
    } else {
        let label_width = history
            .iter()
            .map(|entry| entry.action.label().chars().count())
            .max()
            .unwrap_or(0);
        for entry in history {
            let mut spans = vec![
                Span::styled(
                    format!("{:>4}  ", entry.seq),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    format!("{:<width$}", entry.action.label(), width = label_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::raw(format!("  → {}", entry.counter_after)),
            ];
            if let Some(error) = entry.action.error_message() {
                spans.push(Span::styled(
                    format!("  ({error})"),
                    Style::default().fg(STATUS_ERROR),
                ));
            }
            lines.push(Line::from(spans));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Esc/H: Close"));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(40);
    let popup_height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" History ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
