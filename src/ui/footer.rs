use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " +/↑ Inc │ -/↓ Dec │ R Reset │ H History │ Q Quit";

/// Key hints on the left; request status and version on the right.
pub struct Footer {
    in_flight: usize,
    failed: bool,
}

impl Footer {
    pub fn new(in_flight: usize, failed: bool) -> Self {
        Self { in_flight, failed }
    }

    fn status(&self) -> Span<'static> {
        match (self.in_flight, self.failed) {
            (0, false) => Span::styled("idle", Style::default().fg(HEADER_TEXT)),
            (0, true) => Span::styled("error", Style::default().fg(STATUS_ERROR)),
            (n, _) => Span::styled(
                format!("{n} pending"),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let status = self.status();
        let version = format!(" │ v{VERSION} ");

        // Hints contain multi-byte arrows, so pad by char count.
        let used = HINTS.chars().count() + status.content.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(HINTS, dim),
            Span::raw(" ".repeat(padding)),
            status,
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(footer: &Footer) -> String {
        footer.status().content.into_owned()
    }

    #[test]
    fn pending_count_wins_over_failure() {
        assert_eq!(text(&Footer::new(3, true)), "3 pending");
        assert_eq!(text(&Footer::new(1, false)), "1 pending");
    }

    #[test]
    fn settled_status_reflects_error() {
        assert_eq!(text(&Footer::new(0, false)), "idle");
        assert_eq!(text(&Footer::new(0, true)), "error");
    }
}
