//! Segment shuffler panel
//!
//! Renders the session's [`PanelView`] and forwards key presses to the
//! [`Shuffler`]: shuffle, next, previous and explicit selection, plus
//! pause/resume, help and switching to another video.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::layout::build_panel_layout;
use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::ui::modal_rect;
use super::widgets::build_segment_items;
use crate::navigator::Mode as NavMode;
use crate::player::PlayerHandle;
use crate::segment::{format_time, video_id_from_input};
use crate::session::{Intent, PanelView, Shuffler};
use crate::theme::{current_theme, Theme};

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the panel
    Quit,
}

/// UI mode of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Showing keyboard shortcuts
    Help,
    /// Typing a video id or URL to switch to
    GoTo,
}

/// The panel: presenter for one [`Shuffler`].
pub struct PanelApp<P: PlayerHandle + 'static> {
    shuffler: Shuffler<P>,
    mode: Mode,
    /// Highlighted row, independent of the playing segment
    list_state: ListState,
    goto_input: String,
    /// Panel-local message, shown in place of the session notice
    status_message: Option<String>,
}

impl<P: PlayerHandle + 'static> PanelApp<P> {
    pub fn new(shuffler: Shuffler<P>) -> Self {
        Self {
            shuffler,
            mode: Mode::Normal,
            list_state: ListState::default(),
            goto_input: String::new(),
            status_message: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn shuffler(&self) -> &Shuffler<P> {
        &self.shuffler
    }

    /// Navigate to `video_id`, resetting the cursor.
    pub fn open_video(&mut self, video_id: &str) {
        let readiness = self.shuffler.navigate(video_id);
        self.status_message = if readiness.is_ready() {
            None
        } else {
            Some("Player not ready, continuing anyway".to_string())
        };
        let has_segments = self.shuffler.view().segment_count() > 0;
        self.list_state.select(has_segments.then_some(0));
    }

    /// Draw and handle input until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self, app: &mut App) -> Result<()> {
        while !app.should_quit() {
            app.draw(|frame| self.render(frame))?;
            if let Some(Event::Key(key)) = app.next_event()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key) == InputResult::Quit {
                    app.quit();
                }
            }
        }
        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputResult::Quit;
        }

        match self.mode {
            Mode::Help => {
                // Any key closes help
                self.mode = Mode::Normal;
                InputResult::Continue
            }
            Mode::GoTo => {
                self.handle_goto_key(key);
                InputResult::Continue
            }
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,

            // === The four panel intents ===
            KeyCode::Char('s') => self.apply(Intent::Shuffle),
            KeyCode::Char('n') | KeyCode::Right => self.apply(Intent::Next),
            KeyCode::Char('p') | KeyCode::Left => self.apply(Intent::Previous),
            KeyCode::Enter => {
                if let Some(index) = self.list_state.selected() {
                    self.apply(Intent::Select(index));
                } else {
                    self.apply(Intent::Next);
                }
            }

            // === Cursor ===
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),

            // === Other ===
            KeyCode::Char(' ') => self.shuffler.toggle_pause(),
            KeyCode::Char('g') => {
                self.goto_input.clear();
                self.status_message = None;
                self.mode = Mode::GoTo;
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            _ => {}
        }
        InputResult::Continue
    }

    fn handle_goto_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.goto_input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                match video_id_from_input(&self.goto_input) {
                    Ok(video_id) => self.open_video(&video_id),
                    Err(e) => self.status_message = Some(e.to_string()),
                }
                self.goto_input.clear();
            }
            KeyCode::Backspace => {
                self.goto_input.pop();
            }
            KeyCode::Char(c) => self.goto_input.push(c),
            _ => {}
        }
    }

    /// Forward an intent; on success the cursor follows the playing segment.
    pub fn apply(&mut self, intent: Intent) {
        self.status_message = None;
        if let Ok(index) = self.shuffler.dispatch(intent) {
            self.list_state.select(Some(index));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.shuffler.view().segment_count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = current.saturating_add(delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(target as usize));
    }

    /// Render the whole panel into `frame`.
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = current_theme();
        let view = self.shuffler.view();
        let area = frame.area();
        let [header, list, now_playing, status, footer] = build_panel_layout(area);

        render_header(frame, header, &view, &theme);

        let row_width = list.width.saturating_sub(2) as usize;
        let items = build_segment_items(&view.items, row_width, &theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(" Segments ");
        if items.is_empty() {
            let empty = Paragraph::new("No segments for this video")
                .style(theme.text_secondary_style())
                .block(block);
            frame.render_widget(empty, list);
        } else {
            let widget = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(widget, list, &mut self.list_state);
        }

        frame.render_widget(
            Paragraph::new(now_playing_line(&view)).style(theme.accent_bold_style()),
            now_playing,
        );

        let (status_text, is_notice) = self.status_text(&view);
        render_status_line(frame, status, &status_text, is_notice);
        render_footer(frame, footer, footer_keys(self.mode));

        if self.mode == Mode::Help {
            render_help_modal(frame, area, &theme);
        }
    }

    fn status_text(&self, view: &PanelView) -> (String, bool) {
        if self.mode == Mode::GoTo {
            return (format!("Go to video (id or URL): {}_", self.goto_input), false);
        }
        if let Some(msg) = self.status_message.as_ref().or(view.notice.as_ref()) {
            return (msg.clone(), true);
        }
        (view.count_label(), false)
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &PanelView, theme: &Theme) {
    let video = if view.video_id.is_empty() {
        "no video"
    } else {
        view.video_id.as_str()
    };
    let mode_style = match view.mode {
        NavMode::Shuffled => theme.accent_bold_style(),
        NavMode::Sequential => theme.text_style(),
    };
    let line = Line::from(vec![
        Span::styled(video.to_string(), theme.text_style()),
        Span::styled("  ·  ".to_string(), theme.text_secondary_style()),
        Span::styled(view.count_label(), theme.text_style()),
        Span::styled("  ·  ".to_string(), theme.text_secondary_style()),
        Span::styled(view.mode.label().to_string(), mode_style),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Segment Shuffler "),
    );
    frame.render_widget(header, area);
}

/// `Now playing: Title  [1:23]` with a pause marker when stopped.
fn now_playing_line(view: &PanelView) -> String {
    let mut line = view.now_playing_label();
    if view.now_playing.is_some() {
        if let Some(position) = view.position {
            line.push_str(&format!("  [{}]", format_time(position)));
        }
        if !view.playing {
            line.push_str("  (paused)");
        }
    }
    line
}

fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => &[
            ("s", "shuffle"),
            ("n", "next"),
            ("p", "previous"),
            ("Enter", "play"),
            ("g", "go to"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::GoTo => &[("Enter", "open"), ("Esc", "cancel")],
        Mode::Help => &[("any key", "close help")],
    }
}

fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = modal_rect(46, 17, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), theme.accent_style()),
            Span::raw(desc),
        ])
    };
    vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
        key("s", "Shuffle: random segment, random next"),
        key("n / →", "Next segment"),
        key("p / ←", "Previous segment (list order)"),
        key("↑↓ j/k", "Move cursor"),
        key("Enter", "Play segment under cursor"),
        key("Space", "Pause / resume"),
        key("g", "Go to another video"),
        key("?", "This help"),
        key("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Picking a segment ends shuffle mode.",
            theme.text_secondary_style(),
        )),
        Line::from(Span::styled("Press any key to close", theme.text_secondary_style())),
    ]
}
