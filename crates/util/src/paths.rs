use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let Some(rest) = trimmed.strip_prefix('~') else {
        return PathBuf::from(trimmed);
    };
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match rest.trim_start_matches(['/', '\\']) {
        "" => home,
        tail if rest.starts_with(['/', '\\']) => home.join(tail),
        // `~user` style paths are left alone
        _ => PathBuf::from(trimmed),
    }
}

/// Locate a per-user config file.
///
/// A non-blank `override_var` environment variable wins; otherwise the file
/// lives at `{config_dir}/{app}/{file_name}`.
pub fn config_file_path(override_var: &str, app: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(override_var)
        && !path.trim().is_empty()
    {
        return expand_home(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
        .join(file_name)
}
