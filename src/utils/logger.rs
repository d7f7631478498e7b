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

use std::fmt::Debug;
use std::path::Path;

/// Appends to `webappify.log` under `log_dir`, normally
/// `LocalSettings::data_dir`. Callers pass the directory so test runs
/// stay inside their temp root.
#[cfg(debug_assertions)]
pub fn log_debug<T: Debug>(message: T, log_dir: &Path) {
    use std::fs::OpenOptions;
    use std::io::Write;

    const LOG_FILE_NAME: &str = "webappify.log";

    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&log_path);

    match file {
        Ok(mut file) => {
            let formatted_message = format!("{:?}\n", message);
            if let Err(e) = file.write_all(formatted_message.as_bytes()) {
                eprintln!("Error writing to log file: {}", e);
            }
        }
        Err(e) => eprintln!("Couldn't open log file: {}", e),
    }
}

#[cfg(not(debug_assertions))]
pub fn log_debug<T: Debug>(_message: T, _log_dir: &Path) {
    // No logs in prod
}
