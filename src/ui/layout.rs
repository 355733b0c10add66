use ratatui::layout::{Constraint, Layout, Rect};

const BAR_HEIGHT: u16 = 3;

/// Header bar, counter body and footer bar. The body takes whatever the
/// two bars leave over.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(BAR_HEIGHT),
    ])
    .areas(area);
    (header, body, footer)
}

/// Rect of at most `width` x `height`, centered inside `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
