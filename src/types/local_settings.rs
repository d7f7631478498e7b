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

/// Filesystem layout and environment snapshot for one invocation.
/// Tests build this rooted in a temp directory, nothing below reads
/// the real environment directly.
#[derive(Debug, Clone)]
pub struct LocalSettings {
    pub bin_dir: PathBuf,
    pub applications_dir: PathBuf,
    /// Root of the hicolor icon theme tree.
    pub icons_dir: PathBuf,
    pub profiles_dir: PathBuf,
    pub data_dir: PathBuf,
    pub presets_file: PathBuf,
    pub path_var: String,
}

impl Default for LocalSettings {
    fn default() -> Self {
        let home = dirs::home_dir().expect("Could not determine home directory");
        let data = dirs::data_dir().unwrap_or_else(|| home.join(".local").join("share"));
        let config = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
        let app_data = data.join("webappify");

        Self {
            bin_dir: home.join(".local").join("bin"),
            applications_dir: data.join("applications"),
            icons_dir: data.join("icons").join("hicolor"),
            profiles_dir: app_data.join("profiles"),
            data_dir: app_data,
            presets_file: config.join("webappify").join("presets.yaml"),
            path_var: std::env::var("PATH").unwrap_or_default(),
        }
    }
}

impl LocalSettings {
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.bin_dir)?;
        std::fs::create_dir_all(&self.applications_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    pub fn launcher_path(&self, id: &str) -> PathBuf {
        self.bin_dir.join(id)
    }

    pub fn desktop_entry_path(&self, id: &str) -> PathBuf {
        self.applications_dir.join(format!("{id}.desktop"))
    }

    pub fn profile_dir(&self, id: &str) -> PathBuf {
        self.profiles_dir.join(id)
    }

    pub fn sized_icon_path(&self, size: u32, id: &str) -> PathBuf {
        self.icons_dir
            .join(format!("{size}x{size}"))
            .join("apps")
            .join(format!("{id}.png"))
    }

    pub fn scalable_icon_path(&self, id: &str) -> PathBuf {
        self.icons_dir
            .join("scalable")
            .join("apps")
            .join(format!("{id}.svg"))
    }

    #[cfg(test)]
    pub fn rooted_at(root: &std::path::Path, path_var: &str) -> Self {
        let app_data = root.join("share").join("webappify");
        Self {
            bin_dir: root.join("bin"),
            applications_dir: root.join("share").join("applications"),
            icons_dir: root.join("share").join("icons").join("hicolor"),
            profiles_dir: app_data.join("profiles"),
            data_dir: app_data,
            presets_file: root.join("config").join("presets.yaml"),
            path_var: path_var.to_string(),
        }
    }
}
