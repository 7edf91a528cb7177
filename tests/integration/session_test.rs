//! Session driving a simulated player from the fixture dataset

use std::time::Duration;

use segshuf::navigator::{Mode, RandomPicker};
use segshuf::player::{ClockPlayer, ManualClock, PlayerHandle, ReadyPolicy};
use segshuf::segment::{load_or_empty, JsonFileSource};
use segshuf::session::{Intent, Session, SessionOptions, Shuffler};
use segshuf::{NavError, SegmentNavigator};

use crate::helpers::fixture_path;

fn session(options: SessionOptions) -> (ManualClock, Session<ClockPlayer<ManualClock>>) {
    let clock = ManualClock::new();
    let mut session = Session::new(
        SegmentNavigator::with_picker(RandomPicker::seeded(3)),
        ClockPlayer::new(clock.clone()),
        options,
    );
    let source = JsonFileSource::new(fixture_path("segments.json"));
    session.navigate("dQw4w9WgXcQ", load_or_empty(&source, "dQw4w9WgXcQ"));
    (clock, session)
}

#[test]
fn next_seeks_and_plays() {
    let (_clock, mut session) = session(SessionOptions::default());

    assert_eq!(session.dispatch(Intent::Next), Ok(0));
    assert_eq!(session.dispatch(Intent::Next), Ok(1));

    let view = session.view();
    assert_eq!(view.now_playing_label(), "Now playing: Verse");
    assert_eq!(view.position, Some(18.0));
    assert!(view.playing);
    assert!(view.items[1].active);
}

#[test]
fn sequential_mode_plays_through_by_default() {
    let (clock, mut session) = session(SessionOptions::default());
    session.dispatch(Intent::Next).unwrap();

    clock.advance(Duration::from_secs(20));
    assert_eq!(session.tick(), None);
    assert_eq!(session.navigator().current_index(), Some(0));
}

#[test]
fn sequential_auto_advance_when_enabled() {
    let (clock, mut session) = session(SessionOptions {
        auto_advance_sequential: true,
    });
    session.dispatch(Intent::Next).unwrap();

    clock.advance(Duration::from_secs(20));
    assert_eq!(session.tick(), Some(1));
    assert_eq!(session.player().current_time(), Some(18.0));
}

#[test]
fn shuffle_auto_advances_to_a_different_segment() {
    let (clock, mut session) = session(SessionOptions::default());
    let first = session.dispatch(Intent::Shuffle).unwrap();

    // Still inside the segment
    assert_eq!(session.tick(), None);

    clock.advance(Duration::from_secs(90));
    let next = session.tick().unwrap();
    assert_ne!(next, first);
    assert_eq!(session.view().mode, Mode::Shuffled);
}

#[test]
fn paused_player_does_not_advance() {
    let (clock, mut session) = session(SessionOptions::default());
    session.dispatch(Intent::Shuffle).unwrap();
    session.toggle_pause();

    clock.advance(Duration::from_secs(90));
    assert_eq!(session.tick(), None);
}

#[test]
fn empty_video_sets_notice() {
    let (_clock, mut session) = session(SessionOptions::default());
    let source = JsonFileSource::new(fixture_path("segments.json"));
    session.navigate("no-songs", load_or_empty(&source, "no-songs"));

    assert_eq!(session.dispatch(Intent::Shuffle), Err(NavError::NoSegments));
    let view = session.view();
    assert_eq!(view.notice.as_deref(), Some("No segments loaded for this video"));
    assert_eq!(view.count_label(), "0 segments loaded");
    assert_eq!(view.now_playing_label(), "Nothing playing");
}

#[test]
fn select_out_of_range_is_rejected() {
    let (_clock, mut session) = session(SessionOptions::default());
    assert_eq!(
        session.dispatch(Intent::Select(7)),
        Err(NavError::IndexOutOfRange { index: 7, len: 3 })
    );
    assert_eq!(session.navigator().current_index(), None);
}

#[test]
fn shuffler_over_json_dataset() {
    let clock = ManualClock::new();
    let session = Session::new(
        SegmentNavigator::with_picker(RandomPicker::seeded(11)),
        ClockPlayer::new(clock),
        SessionOptions::default(),
    );
    let policy = ReadyPolicy {
        interval: Duration::from_millis(1),
        max_attempts: 1,
    };
    let mut shuffler = Shuffler::new(
        session,
        Box::new(JsonFileSource::new(fixture_path("segments.json"))),
        Duration::from_millis(10),
        policy,
    );

    shuffler.navigate("live-set-2023");
    let view = shuffler.view();
    assert_eq!(view.segment_count(), 2);
    assert_eq!(view.items[1].title, "Encore");

    shuffler.stop();
    assert!(!shuffler.is_polling());
}
