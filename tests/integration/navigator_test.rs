//! Navigator scenarios through the public API

use std::collections::VecDeque;

use segshuf::navigator::{IndexPicker, Mode, NavState};
use segshuf::{NavError, Segment, SegmentNavigator};

/// Replays fixed draws so shuffle scenarios are exact.
struct Draws(VecDeque<usize>);

impl Draws {
    fn new(draws: &[usize]) -> Self {
        Self(draws.iter().copied().collect())
    }
}

impl IndexPicker for Draws {
    fn pick(&mut self, len: usize) -> usize {
        self.0.pop_front().expect("ran out of scripted draws") % len
    }
}

fn abc() -> Vec<Segment> {
    vec![
        Segment::new("A", 0.0, 10.0).unwrap(),
        Segment::new("B", 10.0, 25.0).unwrap(),
        Segment::new("C", 25.0, 40.0).unwrap(),
    ]
}

fn titles(nav: &SegmentNavigator) -> &str {
    nav.current_segment().map(|s| s.title.as_str()).unwrap_or("-")
}

#[test]
fn sequential_walk_wraps_both_ways() {
    let mut nav = SegmentNavigator::new();
    nav.load(abc());

    let mut seen = Vec::new();
    for _ in 0..4 {
        nav.advance().unwrap();
        seen.push(titles(&nav).to_string());
    }
    assert_eq!(seen, ["A", "B", "C", "A"]);

    nav.retreat().unwrap();
    assert_eq!(titles(&nav), "C");
    nav.retreat().unwrap();
    assert_eq!(titles(&nav), "B");
}

#[test]
fn shuffle_session_never_repeats_back_to_back() {
    // Draws 1, then 1 (rejected), 1 (rejected), 2, then 2 (rejected), 0
    let mut nav = SegmentNavigator::with_picker(Draws::new(&[1, 1, 1, 2, 2, 0]));
    nav.load(abc());

    assert_eq!(nav.start_shuffle(), Ok(1));
    assert_eq!(nav.state(), NavState::PositionedShuffled);
    assert_eq!(nav.advance(), Ok(2));
    assert_eq!(nav.advance(), Ok(0));
    assert_eq!(nav.mode(), Mode::Shuffled);
}

#[test]
fn retreat_in_shuffle_is_list_order() {
    let mut nav = SegmentNavigator::with_picker(Draws::new(&[0]));
    nav.load(abc());

    nav.start_shuffle().unwrap();
    assert_eq!(nav.retreat(), Ok(2));
    assert_eq!(nav.mode(), Mode::Shuffled);
}

#[test]
fn retreat_from_idle_treats_idle_as_minus_one() {
    let mut nav = SegmentNavigator::new();
    nav.load(abc());
    // (-1 - 1 + 3) mod 3
    assert_eq!(nav.retreat(), Ok(1));
    assert_eq!(titles(&nav), "B");

    nav.load(vec![Segment::new("Solo", 0.0, 5.0).unwrap()]);
    assert_eq!(nav.retreat(), Ok(0));
}

#[test]
fn explicit_selection_ends_shuffle() {
    let mut nav = SegmentNavigator::with_picker(Draws::new(&[2]));
    nav.load(abc());

    nav.start_shuffle().unwrap();
    assert_eq!(nav.select_explicit(0), Ok(0));
    assert_eq!(nav.state(), NavState::Positioned);
    assert_eq!(nav.advance(), Ok(1));
}

#[test]
fn reload_returns_to_idle() {
    let mut nav = SegmentNavigator::with_picker(Draws::new(&[1]));
    nav.load(abc());
    nav.start_shuffle().unwrap();

    nav.load(vec![Segment::new("Solo", 0.0, 5.0).unwrap()]);
    assert_eq!(nav.state(), NavState::Idle);
    assert_eq!(nav.mode(), Mode::Sequential);
    assert_eq!(nav.current_segment(), None);
}

#[test]
fn empty_list_rejects_everything() {
    let mut nav = SegmentNavigator::new();
    nav.load(Vec::new());

    assert_eq!(nav.start_shuffle(), Err(NavError::NoSegments));
    assert_eq!(nav.advance(), Err(NavError::NoSegments));
    assert_eq!(nav.retreat(), Err(NavError::NoSegments));
    assert_eq!(
        nav.select_explicit(0),
        Err(NavError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(nav.state(), NavState::Idle);
    assert_eq!(nav.mode(), Mode::Sequential);
}

#[test]
fn boundary_follows_current_segment() {
    let mut nav = SegmentNavigator::new();
    nav.load(abc());
    assert!(!nav.boundary_crossed(100.0));

    nav.select_explicit(1).unwrap();
    assert!(!nav.boundary_crossed(24.9));
    assert!(nav.boundary_crossed(25.0));
}
