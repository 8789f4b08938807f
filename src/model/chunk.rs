// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::Color;

/// A colored region of a styled line, in char indices (`start..end`, end exclusive).
///
/// Spans within a [`StyledLine`] are sorted by `start` and never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

/// One rendered line of a chunk: plain text plus its highlight spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledLine {
    text: String,
    spans: Vec<HighlightSpan>,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, spans: Vec<HighlightSpan>) -> Self {
        Self { text: text.into(), spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), spans: Vec::new() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Length in chars, the unit the reveal counter advances by.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A two-line page of styled text derived from a text segment.
///
/// Both lines independently fit the pagination width. Lines fill top-down, so a chunk with a
/// non-empty second line always has a non-empty first line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    line1: StyledLine,
    line2: StyledLine,
}

impl Chunk {
    pub fn new(line1: StyledLine, line2: StyledLine) -> Self {
        Self { line1, line2 }
    }

    pub fn line1(&self) -> &StyledLine {
        &self.line1
    }

    pub fn line2(&self) -> &StyledLine {
        &self.line2
    }

    /// Total char count across both lines; the reveal is complete at exactly this count.
    pub fn char_len(&self) -> usize {
        self.line1.char_len() + self.line2.char_len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Chunk, StyledLine};

    #[test]
    fn char_len_counts_chars_not_bytes() {
        let chunk = Chunk::new(StyledLine::plain("héllo"), StyledLine::plain("wörld"));
        assert_eq!(chunk.char_len(), 10);
    }

    #[test]
    fn empty_chunk_has_zero_len() {
        assert_eq!(Chunk::default().char_len(), 0);
    }
}
