// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Reference to an avatar artwork resource by name.
///
/// The engine never resolves avatar artwork itself; hosts map the name to whatever they can
/// display. The placeholder (empty name) stands in when a script names no usable avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The "no avatar" sentinel used when a tag index cannot be resolved at all.
    pub fn placeholder() -> Self {
        Self(String::new())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.0)
        }
    }
}
