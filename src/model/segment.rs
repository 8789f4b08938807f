// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::avatar::AvatarRef;
use super::message::HighlightMap;

/// A logical unit of a message: either displayable text or an immediate avatar-change action.
///
/// The segmenter produces these in message order; the engine consumes them sequentially and
/// never idles on an [`Segment::AvatarChange`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text content to be paginated into chunks and revealed.
    Text {
        content: String,
        highlight_map: HighlightMap,
    },
    /// An action segment that swaps the displayed avatar and auto-advances.
    AvatarChange { avatar: AvatarRef },
}

impl Segment {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn as_text(&self) -> Option<(&str, &HighlightMap)> {
        match self {
            Self::Text { content, highlight_map } => Some((content, highlight_map)),
            Self::AvatarChange { .. } => None,
        }
    }
}
