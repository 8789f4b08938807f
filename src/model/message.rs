// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use ratatui::style::Color;

use super::avatar::AvatarRef;

/// Keyword highlighting table: keyword to the color its whole-word matches are painted with.
pub type HighlightMap = BTreeMap<String, Color>;

/// A single complete message turn in the dialogue.
///
/// `text` may contain `[AVATAR=N]` meta-tags; `N` indexes into `avatar_variants`. Immutable once
/// loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    text: String,
    highlight_map: HighlightMap,
    reveal_speed_ms: u64,
    avatar_variants: Vec<AvatarRef>,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        highlight_map: HighlightMap,
        reveal_speed_ms: u64,
        avatar_variants: Vec<AvatarRef>,
    ) -> Self {
        Self { text: text.into(), highlight_map, reveal_speed_ms, avatar_variants }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlight_map(&self) -> &HighlightMap {
        &self.highlight_map
    }

    /// Milliseconds per revealed character for the typewriter animation.
    pub fn reveal_speed_ms(&self) -> u64 {
        self.reveal_speed_ms
    }

    pub fn avatar_variants(&self) -> &[AvatarRef] {
        &self.avatar_variants
    }
}

/// The complete dialogue script a session runs against.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    script_id: String,
    default_avatar: AvatarRef,
    messages: Vec<Message>,
}

impl Script {
    pub fn new(
        script_id: impl Into<String>,
        default_avatar: AvatarRef,
        messages: Vec<Message>,
    ) -> Self {
        Self { script_id: script_id.into(), default_avatar, messages }
    }

    pub fn script_id(&self) -> &str {
        &self.script_id
    }

    /// The avatar shown at session start and whenever no tag has overridden it yet.
    pub fn default_avatar(&self) -> &AvatarRef {
        &self.default_avatar
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
