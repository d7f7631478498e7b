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

use crate::types::web_app::{GenerateError, WebAppSpec};
use std::path::Path;

/// Renders the `.desktop` descriptor. StartupWMClass must match the
/// `--class` value the launcher sets so the window manager groups the
/// app window under its own icon.
pub fn render_desktop_entry(spec: &WebAppSpec, id: &str, launcher_path: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={name}\n\
         Comment=Web app for {url}\n\
         Exec={exec}\n\
         Terminal=false\n\
         Icon={id}\n\
         Categories=Network;WebApps;\n\
         StartupWMClass={id}\n",
        name = spec.name,
        url = spec.url,
        exec = launcher_path.display(),
    )
}

/// Audits the rendered entry before it hits disk: exactly one Exec line,
/// and it must point at the launcher we just wrote.
pub fn validate_desktop_entry(contents: &str, expected_exec: &str) -> Result<(), GenerateError> {
    let exec_lines: Vec<_> = contents
        .lines()
        .filter(|line| line.starts_with("Exec="))
        .collect();

    if exec_lines.len() != 1 {
        return Err(GenerateError::BadDesktopEntry(format!(
            "expected exactly one Exec entry, found {}",
            exec_lines.len()
        )));
    }

    let exec_value = exec_lines[0].splitn(2, '=').nth(1).unwrap_or_default();
    if exec_value != expected_exec {
        return Err(GenerateError::BadDesktopEntry(format!(
            "Exec value '{exec_value}' does not match launcher path '{expected_exec}'"
        )));
    }

    Ok(())
}
