use std::path::{Path, PathBuf};

/// Browsers that understand chromium-style `--app` mode, in preference order.
/// The generated launcher walks the same list again at run time.
pub const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "brave",
    "brave-browser",
    "google-chrome-stable",
    "google-chrome",
    "microsoft-edge-stable",
    "vivaldi-stable",
    "vivaldi",
];

/// Returns the first candidate that resolves to an executable file in
/// `path_var`, probing candidates in order (candidate preference beats
/// directory order).
pub fn find_in_path(candidates: &[&str], path_var: &str) -> Option<PathBuf> {
    for candidate in candidates {
        for dir in std::env::split_paths(path_var) {
            if dir.as_os_str().is_empty() {
                continue;
            }

            let full_path = dir.join(candidate);
            if is_executable(&full_path) {
                return Some(full_path);
            }
        }
    }

    None
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn make_executable(dir: &Path, name: &str) {
        let path = dir.join(name);
        File::create(&path).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    fn finds_executable_candidate() {
        let dir = TempDir::new().unwrap();
        make_executable(dir.path(), "chromium");

        let path_var = dir.path().to_str().unwrap().to_string();
        let found = find_in_path(BROWSER_CANDIDATES, &path_var).unwrap();
        assert_eq!(found, dir.path().join("chromium"));
    }

    #[test]
    fn candidate_order_beats_directory_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(first.path(), "brave");
        make_executable(second.path(), "chromium");

        // chromium is preferred even though brave's directory comes first
        let path_var = std::env::join_paths([first.path(), second.path()])
            .unwrap()
            .into_string()
            .unwrap();
        let found = find_in_path(BROWSER_CANDIDATES, &path_var).unwrap();
        assert_eq!(found, second.path().join("chromium"));
    }

    #[test]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("chromium")).unwrap();
        let mut perms = std::fs::metadata(dir.path().join("chromium"))
            .unwrap()
            .permissions();
        perms.set_mode(0o644);
        std::fs::set_permissions(dir.path().join("chromium"), perms).unwrap();

        let path_var = dir.path().to_str().unwrap().to_string();
        assert!(find_in_path(BROWSER_CANDIDATES, &path_var).is_none());
    }

    #[test]
    fn empty_path_resolves_nothing() {
        assert!(find_in_path(BROWSER_CANDIDATES, "").is_none());
    }
}
