//! Videos command handler

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use segshuf::segment::{JsonFileSource, OverrideStore, SourceError};
use segshuf::tui::current_theme;
use segshuf::Config;

/// List every video id known to the dataset or the override store.
pub fn handle(segments_file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let dataset = match segments_file {
        Some(path) => JsonFileSource::new(path),
        None => JsonFileSource::new(config.segments_file()?),
    };
    let overrides = OverrideStore::new(config.overrides_dir()?);

    let dataset_ids = match dataset.video_ids() {
        Ok(ids) => ids,
        Err(SourceError::NotFound { .. }) => Vec::new(),
        Err(e) => return Err(e.into()),
    };
    let override_ids = overrides.list()?;

    let theme = current_theme();
    let rows = merge_ids(dataset_ids, override_ids);
    if rows.is_empty() {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "No videos found in {} or {}",
                dataset.path().display(),
                overrides.dir().display()
            ))
        );
        return Ok(());
    }
    for (id, overridden) in rows {
        if overridden {
            println!("{} {}", theme.primary_text(&id), theme.secondary_text("(override)"));
        } else {
            println!("{}", theme.primary_text(&id));
        }
    }
    Ok(())
}

/// Sorted union of both id lists, flagging ids that have an override.
fn merge_ids(dataset: Vec<String>, overrides: Vec<String>) -> Vec<(String, bool)> {
    let mut merged: BTreeMap<String, bool> = dataset.into_iter().map(|id| (id, false)).collect();
    for id in overrides {
        merged.insert(id, true);
    }
    merged.into_iter().collect()
}
