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

use crate::internal::browser::BROWSER_CANDIDATES;
use crate::types::local_settings::LocalSettings;
use crate::types::web_app::WebAppSpec;
use std::path::Path;

/// The two browser invocation variants the generated script can take.
/// The script picks one branch per launch from `WAYLAND_DISPLAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlavor {
    Wayland,
    Default,
}

impl SessionFlavor {
    pub fn extra_flags(&self) -> &'static [&'static str] {
        match self {
            SessionFlavor::Wayland => &[
                "--ozone-platform-hint=auto",
                "--enable-features=UseOzonePlatform",
            ],
            SessionFlavor::Default => &[],
        }
    }
}

fn exec_line(flavor: SessionFlavor) -> String {
    let mut line = String::from(r#"exec "$BROWSER" --app="$APP_URL" --class="$APP_ID""#);
    for flag in flavor.extra_flags() {
        line.push(' ');
        line.push_str(flag);
    }
    // ${VAR:+word} keeps the inner quoting, so a profile path with
    // spaces stays one argument and an empty one vanishes entirely
    line.push_str(r#" ${PROFILE_DIR:+--user-data-dir="$PROFILE_DIR"}"#);
    line
}

/// Renders the launcher script. Deterministic for a given spec and
/// settings, so regeneration with the same inputs is byte-identical.
pub fn render_launcher(spec: &WebAppSpec, id: &str, settings: &LocalSettings) -> String {
    let candidates = BROWSER_CANDIDATES.join(" ");
    let profile_dir = if spec.isolated {
        settings.profile_dir(id).display().to_string()
    } else {
        String::new()
    };

    format!(
        r#"#!/bin/sh
# Generated by webappify. Manual edits are lost on the next regeneration.

APP_ID="{id}"
APP_URL="{url}"
PROFILE_DIR="{profile_dir}"

BROWSER=""
for candidate in {candidates}; do
    if command -v "$candidate" >/dev/null 2>&1; then
        BROWSER="$candidate"
        break
    fi
done

if [ -z "$BROWSER" ]; then
    exec xdg-open "$APP_URL"
fi

if [ -n "$WAYLAND_DISPLAY" ]; then
    {wayland_exec}
else
    {default_exec}
fi
"#,
        url = spec.url,
        wayland_exec = exec_line(SessionFlavor::Wayland),
        default_exec = exec_line(SessionFlavor::Default),
    )
}

/// Writes the script and marks it executable.
pub fn write_launcher(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents)?;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
}
