// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm) hosts one dialogue session: a bottom panel with
//! the avatar pane and the two reveal lines, driven by the engine's events. The terminal supplies
//! the line-fit oracle (character cells against the panel's inner width), and the event loop's
//! poll deadline doubles as the reveal tick timer.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::{Engine, EngineEvent, FitOracle};
use crate::model::{AvatarRef, HighlightMap, Message, Script, StyledLine};

const PANEL_HEIGHT: u16 = 6;
const AVATAR_PANE_WIDTH: u16 = 22;
const TEXT_COLOR: Color = Color::White;
const PANEL_BORDER_COLOR: Color = Color::DarkGray;
const AVATAR_COLOR: Color = Color::LightMagenta;
const WAITING_GLYPH: &str = "▼";
const WAITING_BLINK_MS: u128 = 600;
const IDLE_POLL: Duration = Duration::from_millis(250);
const MIN_TICK: Duration = Duration::from_millis(1);

/// Runs the interactive terminal UI against the built-in demo script.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_script(demo_script())
}

/// Runs the interactive terminal UI until the session closes or the user quits.
pub fn run_with_script(script: Script) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let width = terminal.size()?.width;
    let mut app = App::new(script, width);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        let deadline = app.poll_deadline();
        if event::poll(deadline)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        } else {
            app.handle_tick();
        }
        app.apply_events();
    }

    Ok(())
}

/// What the host has been told to display, folded from drained engine events.
#[derive(Debug, Clone, Default, PartialEq)]
struct ViewState {
    line1: String,
    line2: String,
    waiting: bool,
    total_chunks: usize,
    avatar: AvatarRef,
    closed: bool,
}

struct App {
    engine: Engine,
    view: ViewState,
    should_quit: bool,
    started: Instant,
}

impl App {
    fn new(script: Script, terminal_width: u16) -> Self {
        let avatar = script.default_avatar().clone();
        let mut app = Self {
            engine: Engine::open(script, fit_oracle_for_width(terminal_width)),
            view: ViewState { avatar, ..ViewState::default() },
            should_quit: false,
            started: Instant::now(),
        };
        app.apply_events();
        app
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.engine.close();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.engine.advance();
            }
            _ => {}
        }
    }

    fn handle_resize(&mut self, terminal_width: u16) {
        self.engine.set_fits_one_line(fit_oracle_for_width(terminal_width));
        self.engine.repaginate();
    }

    fn handle_tick(&mut self) {
        self.engine.tick();
    }

    /// Folds pending engine events into the view and latches quit once the session closes.
    fn apply_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                EngineEvent::AvatarChanged(avatar) => self.view.avatar = avatar,
                EngineEvent::TotalChunks(total) => {
                    self.view.total_chunks = total;
                    self.view.waiting = false;
                }
                EngineEvent::VisibleTextChanged { line1, line2 } => {
                    self.view.line1 = line1;
                    self.view.line2 = line2;
                    self.view.waiting = false;
                }
                EngineEvent::ChunkRevealComplete => self.view.waiting = true,
                EngineEvent::SessionClosed => self.view.closed = true,
            }
        }
        if self.view.closed {
            self.should_quit = true;
        }
    }

    /// Poll deadline for the event loop: the reveal interval while a chunk is animating
    /// (floored so a zero speed never busy-spins), an idle cadence otherwise.
    fn poll_deadline(&self) -> Duration {
        match self.engine.reveal_interval() {
            Some(interval) => interval.max(MIN_TICK),
            None => IDLE_POLL,
        }
    }

    fn waiting_glyph_visible(&self) -> bool {
        self.view.waiting
            && (self.started.elapsed().as_millis() / WAITING_BLINK_MS) % 2 == 0
    }
}

/// The width in text cells available for one dialogue line, given the terminal width.
///
/// Accounts for the avatar pane and the panel borders plus one cell of padding per side.
fn dialogue_text_width(terminal_width: u16) -> u16 {
    terminal_width.saturating_sub(AVATAR_PANE_WIDTH + 4)
}

fn fit_oracle_for_width(terminal_width: u16) -> FitOracle {
    let width = dialogue_text_width(terminal_width) as usize;
    Box::new(move |line: &str| line.chars().count() <= width)
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(PANEL_HEIGHT)])
        .split(frame.size());
    let stage = layout[0];
    let panel = layout[1];

    let hint = Paragraph::new("space/enter: advance | q: close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(hint, stage);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(AVATAR_PANE_WIDTH), Constraint::Min(0)])
        .split(panel);
    let avatar_area = panes[0];
    let text_area = panes[1];

    let avatar_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER_COLOR))
        .title("avatar");
    let avatar_label = if app.view.avatar.is_placeholder() {
        Line::from(Span::styled("(none)", Style::default().fg(PANEL_BORDER_COLOR)))
    } else {
        Line::from(Span::styled(
            app.view.avatar.name().to_owned(),
            Style::default().fg(AVATAR_COLOR).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(avatar_label).alignment(Alignment::Center).block(avatar_block),
        avatar_area,
    );

    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER_COLOR))
        .padding(ratatui::widgets::Padding::horizontal(1));
    let inner = text_block.inner(text_area);
    frame.render_widget(text_block, text_area);

    let mut lines = vec![
        dialogue_line(&app.view.line1, app.engine.current_chunk().map(|c| c.line1())),
        dialogue_line(&app.view.line2, app.engine.current_chunk().map(|c| c.line2())),
    ];
    if app.waiting_glyph_visible() {
        lines.push(
            Line::from(Span::styled(WAITING_GLYPH, Style::default().fg(TEXT_COLOR)))
                .alignment(Alignment::Right),
        );
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds one display line from the visible prefix, painting the chunk's highlight spans that
/// fall inside it.
fn dialogue_line<'a>(visible: &'a str, styled: Option<&StyledLine>) -> Line<'a> {
    let visible_chars = visible.chars().count();
    let Some(styled) = styled else {
        return Line::from(Span::styled(visible, Style::default().fg(TEXT_COLOR)));
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for highlight in styled.spans() {
        if highlight.start >= visible_chars {
            break;
        }
        let end = highlight.end.min(visible_chars);
        if highlight.start > cursor {
            spans.push(Span::styled(
                substring_chars(visible, cursor, highlight.start),
                Style::default().fg(TEXT_COLOR),
            ));
        }
        spans.push(Span::styled(
            substring_chars(visible, highlight.start, end),
            Style::default().fg(highlight.color),
        ));
        cursor = end;
    }
    if cursor < visible_chars {
        spans.push(Span::styled(
            substring_chars(visible, cursor, visible_chars),
            Style::default().fg(TEXT_COLOR),
        ));
    }

    Line::from(spans)
}

fn substring_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// The built-in demo script, loaded from the bundled data file with a code fallback.
pub fn demo_script() -> Script {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("demo-script.json");

    match crate::script::load_script(&path) {
        Ok(script) => script,
        Err(err) => {
            if cfg!(test) {
                panic!("failed to load demo script from {}: {err}", path.display());
            }
            eprintln!(
                "warning: failed to load demo script from {}: {err}; using built-in fallback",
                path.display()
            );
            demo_script_fallback()
        }
    }
}

fn demo_script_fallback() -> Script {
    let mut gate_highlights = HighlightMap::new();
    gate_highlights.insert("gate".to_owned(), Color::Yellow);

    Script::new(
        "DEMO",
        AvatarRef::new("guide_calm"),
        vec![
            Message::new(
                "Welcome, traveler. [AVATAR=1] The old gate only opens for the patient.",
                gate_highlights,
                30,
                vec![AvatarRef::new("guide_calm"), AvatarRef::new("guide_stern")],
            ),
            Message::new(
                "Good luck out there.",
                HighlightMap::new(),
                30,
                vec![AvatarRef::new("guide_calm")],
            ),
        ],
    )
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
