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

use std::path::PathBuf;

pub mod local_settings;
pub mod presets;
pub mod web_app;

/// What to do when a launcher or desktop entry already exists on disk.
/// `Ask` prompts per app on the interactive surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverwritePolicy {
    Ask,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    /// Resized into the hicolor size ladder.
    Installed { sizes: Vec<u32> },
    /// No converter on PATH, original file installed at the largest slot only.
    InstalledOriginalOnly,
    /// No icon URL was supplied.
    Skipped,
    /// Download failed, a warning was printed and generation continued.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Created {
        id: String,
        launcher: PathBuf,
        desktop_entry: PathBuf,
        icon: IconStatus,
    },
    Skipped {
        id: String,
    },
}
