use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Shrink an area by the given margins
pub fn pad_rect(area: Rect, left: u16, right: u16, top: u16, bottom: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(left),
        y: area.y.saturating_add(top),
        width: area.width.saturating_sub(left + right),
        height: area.height.saturating_sub(top + bottom),
    }
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Scroll needed so the last `len` units fit in `visible`, keeping one
/// spare cell for the cursor
pub fn tail_offset(len: u16, visible: u16) -> u16 {
    len.saturating_sub(visible.saturating_sub(1))
}
