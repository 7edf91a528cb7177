//! List command handler

use std::path::Path;

use anyhow::Result;

use segshuf::segment::{video_id_from_input, Segment};
use segshuf::tui::current_theme;
use segshuf::Config;

use super::{build_source, load_segments};

/// Print the segments of a video as a table or as JSON.
pub fn handle(video: &str, segments_file: Option<&Path>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let video_id = video_id_from_input(video)?;
    let source = build_source(&config, segments_file)?;
    let segments = load_segments(&source, &video_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    let theme = current_theme();
    if segments.is_empty() {
        println!("{}", theme.secondary_text(&format!("No segments for {}", video_id)));
        return Ok(());
    }

    println!("{}", theme.accent_text(&format!("{} ({})", video_id, count_label(segments.len()))));
    for line in format_table(&segments) {
        println!("{}", theme.primary_text(&line));
    }
    Ok(())
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 segment".to_string(),
        n => format!("{} segments", n),
    }
}

/// One line per segment: number, time range, title.
fn format_table(segments: &[Segment]) -> Vec<String> {
    let range_width = segments
        .iter()
        .map(|s| s.time_range_label().len())
        .max()
        .unwrap_or(0);
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{:>3}. {:<width$}  {}",
                i + 1,
                s.time_range_label(),
                s.title,
                width = range_width
            )
        })
        .collect()
}
