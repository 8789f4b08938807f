// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The dialogue navigation state machine.
//!
//! An [`Engine`] owns everything about the running session: the script, the segment list derived
//! from the current message, the chunk list derived from the current text segment, the cursor,
//! and the reveal state. Hosts feed it two inputs (the advance tap and the reveal tick) and drain
//! the events it emits. All transitions happen synchronously on the caller's thread.

use std::collections::VecDeque;
use std::time::Duration;

use crate::layout::paginate;
use crate::model::{AvatarRef, Chunk, Script, Segment};
use crate::segmenter::segment_message;

pub mod reveal;

pub use reveal::RevealState;

/// The line-fit oracle, supplied by the host rendering layer once per session.
///
/// Must be deterministic and side-effect-free for pagination to be stable.
pub type FitOracle = Box<dyn Fn(&str) -> bool>;

/// Events emitted towards the host, in the order they occurred. Drained via
/// [`Engine::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// An avatar-change segment was auto-processed; the host should swap the displayed avatar.
    AvatarChanged(AvatarRef),
    /// A text segment was paginated; reports its chunk count.
    TotalChunks(usize),
    /// The visible prefix of the current chunk changed.
    VisibleTextChanged { line1: String, line2: String },
    /// The current chunk is fully revealed; the next tap advances instead of skipping.
    ChunkRevealComplete,
    /// The script is exhausted (or the host closed the session). Terminal.
    SessionClosed,
}

/// The (message, segment, chunk) triple identifying the currently displayed unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub message: usize,
    pub segment: usize,
    pub chunk: usize,
}

/// One active dialogue session.
pub struct Engine {
    script: Script,
    fits_one_line: FitOracle,
    segments: Vec<Segment>,
    chunks: Vec<Chunk>,
    cursor: Cursor,
    reveal: RevealState,
    current_avatar: AvatarRef,
    open: bool,
    events: VecDeque<EngineEvent>,
}

impl Engine {
    /// Opens a session on `script` and positions it on the first renderable chunk.
    ///
    /// Leading avatar-change segments (and messages that yield no segments) are auto-processed
    /// before this returns, so the session is never observable while idling on an action.
    /// A script with no messages closes immediately.
    pub fn open(script: Script, fits_one_line: FitOracle) -> Self {
        let current_avatar = script.default_avatar().clone();
        let mut engine = Self {
            script,
            fits_one_line,
            segments: Vec::new(),
            chunks: Vec::new(),
            cursor: Cursor::default(),
            reveal: RevealState::for_chunk(&Chunk::default()),
            current_avatar,
            open: true,
            events: VecDeque::new(),
        };
        engine.enter_message(0);
        engine
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_avatar(&self) -> &AvatarRef {
        &self.current_avatar
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn current_chunk(&self) -> Option<&Chunk> {
        if self.open {
            self.chunks.get(self.cursor.chunk)
        } else {
            None
        }
    }

    pub fn total_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Milliseconds between reveal ticks for the current message, while a reveal is running.
    pub fn reveal_interval(&self) -> Option<Duration> {
        if !self.open || self.reveal.is_complete() {
            return None;
        }
        let message = self.script.messages().get(self.cursor.message)?;
        Some(Duration::from_millis(message.reveal_speed_ms()))
    }

    /// Removes and returns all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    /// The single opaque user tap.
    ///
    /// While the current chunk is still revealing this requests skip; once it is complete it
    /// advances chunk, then segment, then message, and closes the session after the last one.
    /// Ignored while closed or while no text is active.
    pub fn advance(&mut self) {
        if !self.open || self.current_chunk().is_none() {
            return;
        }

        if !self.reveal.is_complete() {
            if self.reveal.skip() {
                self.publish_visible_text();
                self.events.push_back(EngineEvent::ChunkRevealComplete);
            }
            return;
        }

        if self.cursor.chunk + 1 < self.chunks.len() {
            self.cursor.chunk += 1;
            self.enter_chunk();
        } else {
            self.cursor.segment += 1;
            self.enter_segment();
        }
    }

    /// One reveal tick for the current chunk. A no-op while closed or already complete; the host
    /// decides the cadence via [`Engine::reveal_interval`].
    pub fn tick(&mut self) {
        if !self.open || self.reveal.is_complete() || self.current_chunk().is_none() {
            return;
        }

        let completed = self.reveal.tick();
        self.publish_visible_text();
        if completed {
            self.events.push_back(EngineEvent::ChunkRevealComplete);
        }
    }

    /// Replaces the line-fit oracle, e.g. after a terminal resize. Takes effect on the next
    /// [`Engine::repaginate`] or segment change.
    pub fn set_fits_one_line(&mut self, fits_one_line: FitOracle) {
        self.fits_one_line = fits_one_line;
    }

    /// Re-runs pagination for the current text segment against the current oracle.
    ///
    /// The chunk cursor is clamped into the new range and the reveal restarts for that chunk;
    /// reveal progress is not preserved.
    pub fn repaginate(&mut self) {
        if !self.open {
            return;
        }
        let Some(Segment::Text { content, highlight_map }) =
            self.segments.get(self.cursor.segment).cloned()
        else {
            return;
        };

        self.chunks = paginate(&content, &highlight_map, &self.fits_one_line);
        self.events.push_back(EngineEvent::TotalChunks(self.chunks.len()));
        if self.chunks.is_empty() {
            self.cursor.segment += 1;
            self.enter_segment();
            return;
        }

        self.cursor.chunk = self.cursor.chunk.min(self.chunks.len() - 1);
        self.enter_chunk();
    }

    /// Closes the session early. Terminal, like running off the end of the script.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.segments.clear();
        self.chunks.clear();
        self.events.push_back(EngineEvent::SessionClosed);
    }

    fn enter_message(&mut self, index: usize) {
        if index >= self.script.messages().len() {
            self.close();
            return;
        }

        self.cursor = Cursor { message: index, segment: 0, chunk: 0 };
        self.segments = segment_message(&self.script.messages()[index]);
        self.enter_segment();
    }

    /// Positions the session on the segment at the cursor, auto-processing every action segment
    /// and empty position on the way, until a renderable chunk is live or the session closes.
    fn enter_segment(&mut self) {
        loop {
            let Some(segment) = self.segments.get(self.cursor.segment).cloned() else {
                // Segment list exhausted (or the message produced none): next message.
                let next = self.cursor.message + 1;
                if next >= self.script.messages().len() {
                    self.close();
                    return;
                }
                self.cursor = Cursor { message: next, segment: 0, chunk: 0 };
                self.segments = segment_message(&self.script.messages()[next]);
                continue;
            };

            match segment {
                Segment::AvatarChange { avatar } => {
                    self.current_avatar = avatar.clone();
                    self.events.push_back(EngineEvent::AvatarChanged(avatar));
                    self.cursor.segment += 1;
                }
                Segment::Text { content, highlight_map } => {
                    self.chunks = paginate(&content, &highlight_map, &self.fits_one_line);
                    self.events.push_back(EngineEvent::TotalChunks(self.chunks.len()));
                    if self.chunks.is_empty() {
                        // Blank text segment; nothing to render here.
                        self.cursor.segment += 1;
                        continue;
                    }
                    self.cursor.chunk = 0;
                    self.enter_chunk();
                    return;
                }
            }
        }
    }

    /// Resets the reveal for the chunk at the cursor. Clears skip mode by construction.
    fn enter_chunk(&mut self) {
        let Some(chunk) = self.chunks.get(self.cursor.chunk) else {
            return;
        };
        self.reveal = RevealState::for_chunk(chunk);
        self.publish_visible_text();
        if self.reveal.is_complete() {
            self.events.push_back(EngineEvent::ChunkRevealComplete);
        }
    }

    fn publish_visible_text(&mut self) {
        let Some(chunk) = self.chunks.get(self.cursor.chunk) else {
            return;
        };
        let (line1, line2) = self.reveal.visible(chunk);
        self.events.push_back(EngineEvent::VisibleTextChanged { line1, line2 });
    }
}
