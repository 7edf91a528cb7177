//! Segment list rows
//!
//! Each row reads `▶  2. Title ......  0:10 - 0:25`, with the play marker
//! only on the segment currently selected by the navigator.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::segment::format_time;
use crate::session::PanelItem;
use crate::theme::Theme;
use crate::tui::ui::{pad_to_width, truncate_to_width};

/// Columns used by the marker, the number and the time range.
const FIXED_COLUMNS: usize = 2 + 5 + 2 + 15;

/// Plain text of one row, fitted to `width` columns.
pub fn segment_row_text(index: usize, item: &PanelItem, width: usize) -> String {
    let marker = if item.active { "▶ " } else { "  " };
    let number = format!("{:>3}. ", index + 1);
    let range = format!("{} - {}", format_time(item.start_time), format_time(item.end_time));

    let title_width = width.saturating_sub(FIXED_COLUMNS).max(8);
    let title = pad_to_width(&truncate_to_width(&item.title, title_width), title_width);

    format!("{}{}{}  {}", marker, number, title, range)
}

/// Styled list items; the active row uses the theme's highlight.
pub fn build_segment_items(
    items: &[PanelItem],
    width: usize,
    theme: &Theme,
) -> Vec<ListItem<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if item.active {
                theme.active_row_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::from(Span::styled(segment_row_text(i, item, width), style)))
        })
        .collect()
}
