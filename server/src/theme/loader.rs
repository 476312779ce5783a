use crate::theme::errors::{ThemeError, ThemeResult};
use crate::theme::types::{THEME_EXTENSION, Theme, ThemeSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read one theme file and turn it into a metadata record.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; only the
/// metadata lines matter here.
pub fn build_record(path: &Path, theme_name: &str, source: ThemeSource) -> ThemeResult<Theme> {
    let bytes = fs::read(path).map_err(|e| ThemeError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(Theme::from_content(&content, path, theme_name, source))
}

/// List every theme file directly inside `dir`, sorted by file name.
///
/// A missing directory is an empty catalogue. Entries that are directories,
/// lack the theme extension, or fail to read are skipped so one bad file
/// never hides the rest.
pub fn list_themes(dir: &Path, source: ThemeSource) -> Vec<Theme> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read themes directory '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut candidates: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("Failed to read directory entry in '{}': {}", dir.display(), e);
                None
            }
        })
        .filter(|path| !path.is_dir())
        .filter_map(|path| {
            let theme_name = theme_name_of(&path)?.to_string();
            Some((theme_name, path))
        })
        .collect();
    candidates.sort_by(|a, b| a.1.file_name().cmp(&b.1.file_name()));

    let themes: Vec<Theme> = candidates
        .into_iter()
        .filter_map(
            |(theme_name, path)| match build_record(&path, &theme_name, source) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("Skipping theme '{theme_name}': {e}");
                    None
                }
            },
        )
        .collect();

    log::debug!(
        "Listed {} {} theme(s) from '{}'",
        themes.len(),
        source,
        dir.display()
    );
    themes
}

/// File stem of a theme file, or `None` when the name lacks the extension.
fn theme_name_of(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .strip_suffix(THEME_EXTENSION)?
        .strip_suffix('.')
}
