// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model for dialogue playback.
//!
//! Scripts contain messages; messages are split into segments; text segments are paginated into
//! two-line chunks. Everything here is a plain value type with no I/O and no rendering.

pub mod avatar;
pub mod chunk;
pub mod message;
pub mod segment;

pub use avatar::AvatarRef;
pub use chunk::{Chunk, HighlightSpan, StyledLine};
pub use message::{HighlightMap, Message, Script};
pub use segment::Segment;
