//! Play command handler

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use segshuf::navigator::{RandomPicker, SegmentNavigator};
use segshuf::player::{ClockPlayer, SystemClock};
use segshuf::segment::video_id_from_input;
use segshuf::session::{Intent, Session, Shuffler};
use segshuf::tui::{App, PanelApp};
use segshuf::Config;

use super::build_source;

/// Input poll interval of the panel
const TICK_RATE: Duration = Duration::from_millis(100);

/// Open the panel for `video` and run it until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    video: &str,
    segments_file: Option<&Path>,
    seed: Option<u64>,
    shuffle: bool,
) -> Result<()> {
    let config = Config::load()?;
    let video_id = video_id_from_input(video)?;
    let source = build_source(&config, segments_file)?;

    let picker = match seed.or(config.playback.seed) {
        Some(seed) => {
            tracing::info!(seed, "using fixed shuffle seed");
            RandomPicker::seeded(seed)
        }
        None => RandomPicker::from_entropy(),
    };
    let session = Session::new(
        SegmentNavigator::with_picker(picker),
        ClockPlayer::new(SystemClock::new()),
        config.session_options(),
    );
    let shuffler = Shuffler::new(
        session,
        Box::new(source),
        config.poll_interval(),
        config.ready_policy(),
    );

    let mut panel = PanelApp::new(shuffler);
    panel.open_video(&video_id);
    if shuffle {
        panel.apply(Intent::Shuffle);
    }

    let mut app = App::mount(TICK_RATE)?;
    let result = panel.run(&mut app);
    app.unmount()?;
    result
}
