//! Theme Repository

use tracing::warn;

use super::traits::KeyValueStore;
use crate::domain::Theme;
use crate::error::PagesResult;

#[derive(Debug, Clone)]
pub struct ThemeRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored theme, light when absent, unrecognized or unreadable
    pub fn load(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unrecognized stored theme, using light");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!("theme storage unavailable: {}", e);
                Theme::Light
            }
        }
    }

    pub fn save(&self, theme: Theme) -> PagesResult<()> {
        self.store.set(&self.key, theme.as_str())
    }
}
