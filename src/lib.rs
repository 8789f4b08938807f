// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vignette, a terminal visual-novel dialogue engine.
//!
//! Scripted messages are revealed character by character, paginated into two-line pages, and
//! advanced by user taps, with mid-message avatar swaps driven by `[AVATAR=N]` meta-tags.

pub mod engine;
pub mod layout;
pub mod model;
pub mod script;
pub mod segmenter;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
