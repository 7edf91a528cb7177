//! Panel layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the frame into header, segment list, now playing, status and footer.
///
/// Returns `[header, list, now_playing, status, footer]`.
pub fn build_panel_layout(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header block
            Constraint::Min(3),    // Segment list
            Constraint::Length(1), // Now playing
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Footer
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}
