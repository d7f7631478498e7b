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

use crate::internal::browser::{BROWSER_CANDIDATES, find_in_path};
use crate::internal::desktop_entry::{render_desktop_entry, validate_desktop_entry};
use crate::internal::helpers::prompt_yes_no;
use crate::internal::icon::install_icon;
use crate::internal::identifier::derive_identifier;
use crate::internal::launcher::{render_launcher, write_launcher};
use crate::types::local_settings::LocalSettings;
use crate::types::web_app::{GenerateError, WebAppSpec};
use crate::types::{GenerateOutcome, IconStatus, OverwritePolicy};
use crate::utils::logger::log_debug;

/// Generates one web app: launcher script, desktop entry and (best-effort)
/// icons. Overwrite-safe and idempotent, running it twice with `Always`
/// produces byte-identical artifacts.
pub fn generate(
    spec: &WebAppSpec,
    policy: OverwritePolicy,
    settings: &LocalSettings,
) -> Result<GenerateOutcome, GenerateError> {
    spec.validate()?;

    let id = derive_identifier(&spec.name);
    let launcher_path = settings.launcher_path(&id);
    let entry_path = settings.desktop_entry_path(&id);

    // Early failure check. The launcher re-probes with the same candidate
    // list at run time, so no absolute browser path is baked into it.
    if find_in_path(BROWSER_CANDIDATES, &settings.path_var).is_none() {
        return Err(GenerateError::NoBrowserFound);
    }

    if launcher_path.exists() || entry_path.exists() {
        match policy {
            OverwritePolicy::Always => {}
            OverwritePolicy::Never => return Ok(GenerateOutcome::Skipped { id }),
            OverwritePolicy::Ask => {
                let overwrite =
                    prompt_yes_no(&format!("Web app '{id}' already exists. Overwrite?"))?;
                if !overwrite {
                    return Ok(GenerateOutcome::Skipped { id });
                }
            }
        }
    }

    settings.ensure_dirs()?;

    let icon = match &spec.icon_url {
        None => IconStatus::Skipped,
        Some(url) => match install_icon(url, &id, settings) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("Warning: icon installation failed for '{id}': {e}");
                IconStatus::Failed
            }
        },
    };

    let script = render_launcher(spec, &id, settings);
    write_launcher(&launcher_path, &script)?;

    let entry = render_desktop_entry(spec, &id, &launcher_path);
    validate_desktop_entry(&entry, &launcher_path.display().to_string())?;
    std::fs::write(&entry_path, &entry)?;
    log_debug(
        format!(
            "Generated '{id}': {} + {}",
            launcher_path.display(),
            entry_path.display()
        ),
        &settings.data_dir,
    );

    Ok(GenerateOutcome::Created {
        id,
        launcher: launcher_path,
        desktop_entry: entry_path,
        icon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn fake_browser_dir(root: &Path) -> String {
        let dir = root.join("fakebin");
        std::fs::create_dir_all(&dir).unwrap();
        let browser = dir.join("chromium");
        File::create(&browser).unwrap();
        let mut perms = std::fs::metadata(&browser).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&browser, perms).unwrap();
        dir.to_str().unwrap().to_string()
    }

    fn test_settings(dir: &TempDir) -> LocalSettings {
        let path_var = fake_browser_dir(dir.path());
        LocalSettings::rooted_at(dir.path(), &path_var)
    }

    fn spec() -> WebAppSpec {
        WebAppSpec {
            name: "My App".to_string(),
            url: "https://example.com".to_string(),
            isolated: false,
            icon_url: None,
        }
    }

    #[test]
    fn create_writes_launcher_and_desktop_entry() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        let outcome = generate(&spec(), OverwritePolicy::Always, &settings).unwrap();
        let GenerateOutcome::Created {
            id,
            launcher,
            desktop_entry,
            icon,
        } = outcome
        else {
            panic!("expected Created");
        };

        assert_eq!(id, "myapp");
        assert_eq!(launcher, settings.launcher_path("myapp"));
        assert_eq!(desktop_entry, settings.desktop_entry_path("myapp"));
        assert_eq!(icon, IconStatus::Skipped);

        let mode = std::fs::metadata(&launcher).unwrap().permissions().mode();
        assert_eq!(mode & 0o755, 0o755);

        let entry = std::fs::read_to_string(&desktop_entry).unwrap();
        assert!(entry.contains(&format!("Exec={}\n", launcher.display())));
        assert!(entry.contains("StartupWMClass=myapp\n"));
    }

    #[test]
    fn empty_fields_are_invalid_input() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        let mut no_name = spec();
        no_name.name = "  ".to_string();
        assert!(matches!(
            generate(&no_name, OverwritePolicy::Always, &settings),
            Err(GenerateError::InvalidInput("display name"))
        ));

        let mut no_url = spec();
        no_url.url = String::new();
        assert!(matches!(
            generate(&no_url, OverwritePolicy::Always, &settings),
            Err(GenerateError::InvalidInput("url"))
        ));
    }

    #[test]
    fn url_with_shell_payload_is_rejected_before_any_write() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        // Quote-balanced payload that would run on every launch if it
        // reached the script template
        let mut evil = spec();
        evil.url = r#"https://x/"; : > /tmp/pwned; APP_X="x"#.to_string();

        assert!(matches!(
            generate(&evil, OverwritePolicy::Always, &settings),
            Err(GenerateError::ForbiddenCharacter("url", '"'))
        ));
        assert!(!settings.bin_dir.exists());
        assert!(!settings.applications_dir.exists());
    }

    #[test]
    fn name_with_newline_cannot_forge_desktop_entry_keys() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        let mut evil = spec();
        evil.name = "My App\nExec=/usr/bin/evil".to_string();

        assert!(matches!(
            generate(&evil, OverwritePolicy::Always, &settings),
            Err(GenerateError::ForbiddenCharacter("display name", '\n'))
        ));
        assert!(!settings.applications_dir.exists());
    }

    #[test]
    fn missing_browser_aborts_generation() {
        let dir = TempDir::new().unwrap();
        let settings = LocalSettings::rooted_at(dir.path(), "");

        assert!(matches!(
            generate(&spec(), OverwritePolicy::Always, &settings),
            Err(GenerateError::NoBrowserFound)
        ));
        assert!(!settings.launcher_path("myapp").exists());
    }

    #[test]
    fn never_policy_leaves_existing_artifacts_untouched() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        std::fs::create_dir_all(&settings.bin_dir).unwrap();
        let launcher = settings.launcher_path("myapp");
        std::fs::write(&launcher, "pre-existing contents").unwrap();

        let outcome = generate(&spec(), OverwritePolicy::Never, &settings).unwrap();
        assert_eq!(
            outcome,
            GenerateOutcome::Skipped {
                id: "myapp".to_string()
            }
        );
        assert_eq!(
            std::fs::read_to_string(&launcher).unwrap(),
            "pre-existing contents"
        );
        assert!(!settings.desktop_entry_path("myapp").exists());
    }

    #[test]
    fn always_policy_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        generate(&spec(), OverwritePolicy::Always, &settings).unwrap();
        let first_launcher = std::fs::read(settings.launcher_path("myapp")).unwrap();
        let first_entry = std::fs::read(settings.desktop_entry_path("myapp")).unwrap();

        generate(&spec(), OverwritePolicy::Always, &settings).unwrap();
        let second_launcher = std::fs::read(settings.launcher_path("myapp")).unwrap();
        let second_entry = std::fs::read(settings.desktop_entry_path("myapp")).unwrap();

        assert_eq!(first_launcher, second_launcher);
        assert_eq!(first_entry, second_entry);
    }

    #[test]
    fn unreachable_icon_url_does_not_abort_generation() {
        let dir = TempDir::new().unwrap();
        let settings = test_settings(&dir);

        let mut with_icon = spec();
        // Nothing listens on port 1, the fetch fails immediately
        with_icon.icon_url = Some("http://127.0.0.1:1/icon.png".to_string());

        let outcome = generate(&with_icon, OverwritePolicy::Always, &settings).unwrap();
        let GenerateOutcome::Created { icon, .. } = outcome else {
            panic!("expected Created");
        };
        assert_eq!(icon, IconStatus::Failed);
        assert!(settings.launcher_path("myapp").exists());
        assert!(settings.desktop_entry_path("myapp").exists());
    }
}
