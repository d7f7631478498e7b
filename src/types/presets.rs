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

use crate::types::local_settings::LocalSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Preset categories shipped with the binary. A user file at
/// `~/.config/webappify/presets.yaml` replaces this wholesale.
pub const BUILTIN_PRESETS: &str = include_str!("../../assets/presets.yaml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetFile {
    #[serde(default)]
    pub categories: Vec<PresetCategory>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetCategory {
    pub name: String,
    pub apps: Vec<PresetApp>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetApp {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub isolated: bool,
}

impl PresetFile {
    pub fn load(settings: &LocalSettings) -> Result<Self> {
        if settings.presets_file.exists() {
            let content = std::fs::read_to_string(&settings.presets_file).context(format!(
                "Failed to read preset file {}",
                settings.presets_file.display()
            ))?;
            serde_yaml::from_str(&content).context(format!(
                "Failed to parse preset file {}",
                settings.presets_file.display()
            ))
        } else {
            serde_yaml::from_str(BUILTIN_PRESETS).context("Invalid built-in preset file")
        }
    }

    pub fn category(&self, name: &str) -> Option<&PresetCategory> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
