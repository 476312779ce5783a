use crate::theme::errors::ThemeResult;
use crate::theme::loader::list_themes;
use crate::theme::storage::ThemeStore;
use crate::theme::types::{Theme, ThemeContent, ThemeSource};
use std::path::PathBuf;

/// Entry point for every theme operation exposed over the API.
///
/// Holds nothing but the storage root: every call goes straight to the
/// filesystem, which stays the single source of truth. Name and content
/// validation happens in the request layer before calls reach this type
/// (see [`crate::theme::validation`]).
#[derive(Debug, Clone)]
pub struct ThemeService {
    store: ThemeStore,
}

impl ThemeService {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: ThemeStore::new(storage_dir),
        }
    }

    /// All bundled themes under `themes/default`.
    pub fn get_default_themes(&self) -> Vec<Theme> {
        list_themes(&self.store.default_dir(), ThemeSource::Default)
    }

    /// Themes uploaded by `user_id`; empty when the user has none.
    pub fn get_user_themes(&self, user_id: &str) -> ThemeResult<Vec<Theme>> {
        let user_dir = self.store.user_dir(user_id)?;
        Ok(list_themes(&user_dir, ThemeSource::User))
    }

    /// Raw text of one theme, for viewing or editing.
    pub fn get_theme_content(
        &self,
        source: &str,
        author: &str,
        theme_name: &str,
    ) -> ThemeResult<String> {
        self.store.read_content(source, author, theme_name)
    }

    /// Metadata and raw text of one theme, taken from a single read.
    pub fn get_theme(
        &self,
        source: &str,
        author: &str,
        theme_name: &str,
    ) -> ThemeResult<ThemeContent> {
        let content = self.store.read_content(source, author, theme_name)?;
        let source: ThemeSource = source.parse()?;
        let path = self.store.theme_path(source, author, theme_name)?;

        Ok(ThemeContent {
            theme: Theme::from_content(&content, &path, theme_name, source),
            content,
        })
    }

    pub fn save_user_theme(
        &self,
        user_id: &str,
        theme_name: &str,
        content: &str,
    ) -> ThemeResult<()> {
        self.store.save(user_id, theme_name, content).map(|_| ())
    }

    pub fn delete_user_theme(&self, user_id: &str, theme_name: &str) -> ThemeResult<()> {
        self.store.delete(user_id, theme_name)
    }
}
