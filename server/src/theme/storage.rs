use crate::theme::errors::{ThemeError, ThemeResult};
use crate::theme::types::{THEME_EXTENSION, ThemeSource};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Resolves and mutates theme files under a storage root.
///
/// Layout:
/// - `<root>/themes/default/<name>.toml` for bundled themes
/// - `<root>/uploads/<user_id>/<name>.toml` for user uploads
#[derive(Debug, Clone)]
pub struct ThemeStore {
    root: PathBuf,
}

impl ThemeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn default_dir(&self) -> PathBuf {
        self.root.join("themes").join("default")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join("uploads")
    }

    pub fn user_dir(&self, user_id: &str) -> ThemeResult<PathBuf> {
        let user_id = plain_segment("user id", user_id)?;
        Ok(self.uploads_dir().join(user_id))
    }

    /// Canonical path of one theme file.
    ///
    /// `author` is only consulted for user themes, where it names the owning
    /// user. Community themes have no local file.
    pub fn theme_path(
        &self,
        source: ThemeSource,
        author: &str,
        theme_name: &str,
    ) -> ThemeResult<PathBuf> {
        let file_name = theme_file_name(theme_name)?;
        match source {
            ThemeSource::Default => Ok(self.default_dir().join(file_name)),
            ThemeSource::User => Ok(self.user_dir(author)?.join(file_name)),
            ThemeSource::Community => Err(ThemeError::UnknownSource(source.to_string())),
        }
    }

    /// Read the raw text of one theme.
    ///
    /// `source` is the wire tag (`"default"` or `"user"`); anything else fails
    /// before the filesystem is touched. Invalid UTF-8 is replaced the same
    /// way listing does, so every listed theme can also be fetched.
    pub fn read_content(
        &self,
        source: &str,
        author: &str,
        theme_name: &str,
    ) -> ThemeResult<String> {
        let source: ThemeSource = source.parse()?;
        let path = self.theme_path(source, author, theme_name)?;

        let bytes = fs::read(&path).map_err(|e| ThemeError::Read { path, source: e })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write a user theme, replacing any file of the same name.
    ///
    /// The content goes to a temporary file in the user directory first and is
    /// then renamed over the target, so readers never observe a partial write.
    /// Concurrent saves of the same theme still resolve as last-write-wins.
    pub fn save(
        &self,
        user_id: &str,
        theme_name: &str,
        content: &str,
    ) -> ThemeResult<PathBuf> {
        let user_dir = self.user_dir(user_id)?;
        let target = user_dir.join(theme_file_name(theme_name)?);

        fs::create_dir_all(&user_dir).map_err(|e| ThemeError::DirCreate {
            path: user_dir.clone(),
            source: e,
        })?;

        let write_error = |source| ThemeError::Write {
            path: target.clone(),
            source,
        };
        let mut staging = NamedTempFile::new_in(&user_dir).map_err(write_error)?;
        staging.write_all(content.as_bytes()).map_err(write_error)?;
        staging.as_file().sync_all().map_err(write_error)?;
        // Staging files are created 0600; saved themes are world-readable
        // like the bundled ones.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staging
                .as_file()
                .set_permissions(fs::Permissions::from_mode(THEME_FILE_MODE))
                .map_err(write_error)?;
        }
        staging.persist(&target).map_err(|e| write_error(e.error))?;

        log::info!("Saved theme '{theme_name}' for user '{user_id}'");
        Ok(target)
    }

    /// Remove a user theme. Fails when the file does not exist.
    pub fn delete(&self, user_id: &str, theme_name: &str) -> ThemeResult<()> {
        let path = self.user_dir(user_id)?.join(theme_file_name(theme_name)?);

        fs::remove_file(&path).map_err(|e| ThemeError::Delete {
            path: path.clone(),
            source: e,
        })?;

        log::info!("Deleted theme '{theme_name}' for user '{user_id}'");
        Ok(())
    }
}

/// Mode of saved theme files on unix.
#[cfg(unix)]
const THEME_FILE_MODE: u32 = 0o644;

fn theme_file_name(theme_name: &str) -> ThemeResult<String> {
    let theme_name = plain_segment("theme name", theme_name)?;
    Ok(format!("{theme_name}.{THEME_EXTENSION}"))
}

/// Accept `value` only if it is exactly one normal path component.
///
/// Rejects empty strings, `.`/`..`, absolute paths and anything containing a
/// separator, which keeps every resolved path inside its directory.
fn plain_segment<'a>(kind: &'static str, value: &'a str) -> ThemeResult<&'a str> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == value => Ok(value),
        _ => Err(ThemeError::InvalidPathSegment {
            kind,
            value: value.to_string(),
        }),
    }
}
