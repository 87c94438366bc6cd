//! Document-level side effects

use demo_pages_core::domain::Theme;
use demo_pages_core::routes::Page;

/// Toggle the global `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        tracing::warn!("failed to apply theme class: {:?}", e);
    }
}

/// Page for the current `location.pathname`
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or_default()
}
