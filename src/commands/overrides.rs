//! Override subcommands handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use segshuf::segment::{video_id_from_input, OverrideStore, Segment};
use segshuf::tui::current_theme;
use segshuf::Config;

fn store() -> Result<OverrideStore> {
    Ok(OverrideStore::new(Config::load()?.overrides_dir()?))
}

/// Store the segments in `file` as the override for `video`.
///
/// Unlike dataset loading, an invalid segment rejects the whole file.
pub fn handle_set(video: &str, file: &Path) -> Result<()> {
    let video_id = video_id_from_input(video)?;
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let segments: Vec<Segment> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    for segment in &segments {
        segment.validate()?;
    }

    let path = store()?.put(&video_id, &segments)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.success_text(&format!(
            "Stored {} segment(s) for {} in {}",
            segments.len(),
            video_id,
            path.display()
        ))
    );
    Ok(())
}

/// Remove the override for `video`.
pub fn handle_remove(video: &str) -> Result<()> {
    let video_id = video_id_from_input(video)?;
    let theme = current_theme();
    if store()?.remove(&video_id)? {
        println!("{}", theme.success_text(&format!("Removed override for {}", video_id)));
    } else {
        println!("{}", theme.secondary_text(&format!("No override for {}", video_id)));
    }
    Ok(())
}

/// List videos that have an override.
pub fn handle_list() -> Result<()> {
    let ids = store()?.list()?;
    let theme = current_theme();
    if ids.is_empty() {
        println!("{}", theme.secondary_text("No overrides"));
    }
    for id in ids {
        println!("{}", theme.primary_text(&id));
    }
    Ok(())
}
