// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Meta-tag segmentation of raw message text.
//!
//! A message's text is scanned left-to-right for `[AVATAR=N]` tags and split into an ordered
//! list of [`Segment`]s: the text runs between tags plus an avatar-change action per tag.
//! Segmentation is a pure function of the message; identical inputs always yield the identical
//! segment list.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{AvatarRef, Message, Segment};

fn avatar_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Digits only; anything else inside the brackets is ordinary text.
    PATTERN.get_or_init(|| Regex::new(r"\[AVATAR=(\d+)\]").expect("valid literal pattern"))
}

/// Splits `message.text()` into displayable text segments and avatar-change actions.
///
/// Rules:
/// - Text before/after/between tags is trimmed and emitted only when non-empty, carrying the
///   message's highlight map unchanged.
/// - A tag index beyond `avatar_variants` falls back to variant 0; with no variants at all the
///   placeholder avatar is used.
/// - A non-blank message that somehow produces no segments falls back to a single text segment
///   with the trimmed original, so every non-blank message renders something.
pub fn segment_message(message: &Message) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut remaining = message.text();

    while !remaining.is_empty() {
        let Some(captures) = avatar_tag_pattern().captures(remaining) else {
            // No more tags; the rest is pure text.
            let content = remaining.trim();
            if !content.is_empty() {
                segments.push(Segment::Text {
                    content: content.to_owned(),
                    highlight_map: message.highlight_map().clone(),
                });
            }
            break;
        };

        let tag = captures.get(0).expect("whole match");
        let before = remaining[..tag.start()].trim();
        if !before.is_empty() {
            segments.push(Segment::Text {
                content: before.to_owned(),
                highlight_map: message.highlight_map().clone(),
            });
        }

        let index = captures[1].parse::<usize>().unwrap_or(0);
        segments.push(Segment::AvatarChange { avatar: resolve_variant(message, index) });

        remaining = remaining[tag.end()..].trim_start();
    }

    // Defensive: guarantee at least one segment for any non-blank message, mirroring the
    // tag-only edge case.
    if segments.is_empty() && !message.text().trim().is_empty() {
        segments.push(Segment::Text {
            content: message.text().trim().to_owned(),
            highlight_map: message.highlight_map().clone(),
        });
    }

    segments
}

fn resolve_variant(message: &Message, index: usize) -> AvatarRef {
    message
        .avatar_variants()
        .get(index)
        .or_else(|| message.avatar_variants().first())
        .cloned()
        .unwrap_or_else(AvatarRef::placeholder)
}
