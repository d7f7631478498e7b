// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 The Webappify contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::types::presets::PresetApp;
use thiserror::Error;

/// Everything needed to generate one web app. Transient per invocation,
/// the only durable trace is the generated artifacts.
#[derive(Debug, Clone)]
pub struct WebAppSpec {
    pub name: String,
    pub url: String,
    /// Give the browser its own profile directory instead of the shared one.
    pub isolated: bool,
    pub icon_url: Option<String>,
}

impl From<&PresetApp> for WebAppSpec {
    fn from(value: &PresetApp) -> Self {
        Self {
            name: value.name.clone(),
            url: value.url.clone(),
            isolated: value.isolated,
            icon_url: value.icon_url.clone(),
        }
    }
}

/// Characters that stay active inside a double-quoted sh word. Both
/// generated artifacts embed these values verbatim: the launcher is a
/// shell script, the desktop entry is line-oriented.
fn find_forbidden_char(value: &str) -> Option<char> {
    const FORBIDDEN_CHARS: [char; 4] = ['"', '`', '$', '\\'];

    value
        .chars()
        .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
}

impl WebAppSpec {
    /// Rejects specs that cannot be templated into the artifacts safely.
    /// Presets go through the same gate as CLI arguments.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.name.trim().is_empty() {
            return Err(GenerateError::InvalidInput("display name"));
        }
        if self.url.trim().is_empty() {
            return Err(GenerateError::InvalidInput("url"));
        }

        for (field, value) in [("display name", &self.name), ("url", &self.url)] {
            if let Some(character) = find_forbidden_char(value) {
                return Err(GenerateError::ForbiddenCharacter(field, character));
            }
        }

        Ok(())
    }
}

/// Fatal conditions. Each aborts only the current item, batch iteration
/// moves on to the next preset.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("missing required field: {0}")]
    InvalidInput(&'static str),
    #[error("forbidden character {1:?} in {0}")]
    ForbiddenCharacter(&'static str, char),
    #[error("no app-mode capable browser found on PATH")]
    NoBrowserFound,
    #[error("generated desktop entry failed validation: {0}")]
    BadDesktopEntry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Non-fatal conditions. Icon problems degrade to a lower-fidelity icon or
/// to no icon at all and never stop artifact generation.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to fetch icon: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("icon download returned HTTP status {0}")]
    FetchStatus(reqwest::StatusCode),
    #[error("no image converter (magick or convert) found on PATH")]
    ConverterUnavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
