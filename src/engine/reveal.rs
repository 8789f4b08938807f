// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Chunk;

/// Per-chunk typewriter state: how many chars of the chunk are visible.
///
/// The engine resets this on every chunk change. `revealed` is non-decreasing within a chunk and
/// reaches exactly the chunk's char count; completion is reported exactly once, by whichever of
/// [`RevealState::tick`] or [`RevealState::skip`] gets there first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    revealed: usize,
    total: usize,
    skipping: bool,
    complete: bool,
}

impl RevealState {
    /// Fresh state for a new chunk. A zero-length chunk is complete immediately, with no ticks.
    pub fn for_chunk(chunk: &Chunk) -> Self {
        let total = chunk.char_len();
        Self { revealed: 0, total, skipping: false, complete: total == 0 }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_skipping(&self) -> bool {
        self.skipping
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Reveals one more char. Returns true when this tick completed the chunk.
    pub fn tick(&mut self) -> bool {
        if self.complete {
            return false;
        }

        self.revealed += 1;
        if self.revealed >= self.total {
            self.revealed = self.total;
            self.complete = true;
            return true;
        }
        false
    }

    /// Jumps straight to the end. Returns true when this call completed the chunk; skipping an
    /// already-complete chunk changes nothing.
    pub fn skip(&mut self) -> bool {
        self.skipping = true;
        if self.complete {
            return false;
        }

        self.revealed = self.total;
        self.complete = true;
        true
    }

    /// The currently visible prefix of each chunk line.
    ///
    /// Line 1 reveals first; line 2 only starts once line 1 is fully out.
    pub fn visible(&self, chunk: &Chunk) -> (String, String) {
        let len1 = chunk.line1().char_len();
        let count1 = self.revealed.min(len1);
        let count2 = self.revealed.saturating_sub(len1).min(chunk.line2().char_len());

        let line1 = chunk.line1().text().chars().take(count1).collect();
        let line2 = chunk.line2().text().chars().take(count2).collect();
        (line1, line2)
    }
}
