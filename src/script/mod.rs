// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Script loading: JSON files to domain [`Script`] values.
//!
//! The raw DTOs keep the on-disk shape; mapping converts hex color strings into terminal colors
//! and avatar resource names into [`AvatarRef`]s. Malformed highlight colors are dropped per key;
//! a malformed file or an empty message list fails the whole load, so the engine never opens a
//! half-initialized session.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::model::{AvatarRef, HighlightMap, Message, Script};

const DEFAULT_REVEAL_SPEED_MS: u64 = 30;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScript {
    script_id: String,
    start_avatar: String,
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessage {
    text: String,
    #[serde(default)]
    highlight_map: BTreeMap<String, String>,
    #[serde(default = "default_reveal_speed")]
    speed: u64,
    #[serde(default)]
    avatars: Vec<String>,
}

fn default_reveal_speed() -> u64 {
    DEFAULT_REVEAL_SPEED_MS
}

#[derive(Debug)]
pub enum ScriptError {
    Io { path: String, source: io::Error },
    Parse(serde_json::Error),
    EmptyScript { script_id: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read script '{path}': {source}"),
            Self::Parse(source) => write!(f, "failed to parse script JSON: {source}"),
            Self::EmptyScript { script_id } => {
                write!(f, "script '{script_id}' contains no messages")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(source) => Some(source),
            Self::EmptyScript { .. } => None,
        }
    }
}

/// Reads and parses a script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script, ScriptError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_script(&text)
}

/// Parses script JSON and maps it into the domain model.
pub fn parse_script(text: &str) -> Result<Script, ScriptError> {
    let raw: RawScript = serde_json::from_str(text).map_err(ScriptError::Parse)?;
    if raw.messages.is_empty() {
        return Err(ScriptError::EmptyScript { script_id: raw.script_id });
    }

    let messages = raw
        .messages
        .into_iter()
        .map(|message| {
            let avatars = message.avatars.iter().map(AvatarRef::new).collect();
            Message::new(
                message.text,
                highlight_colors(&message.highlight_map),
                message.speed,
                avatars,
            )
        })
        .collect();

    Ok(Script::new(raw.script_id, AvatarRef::new(raw.start_avatar), messages))
}

/// Maps hex color strings onto terminal colors, dropping keys whose color does not parse.
fn highlight_colors(raw: &BTreeMap<String, String>) -> HighlightMap {
    raw.iter()
        .filter_map(|(keyword, hex)| parse_hex_color(hex).map(|color| (keyword.clone(), color)))
        .collect()
}

/// Accepts `#RRGGBB` and `#AARRGGBB` (alpha ignored), with or without the leading `#`.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let rgb = match digits.len() {
        6 => digits,
        8 => &digits[2..],
        _ => return None,
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&rgb[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
