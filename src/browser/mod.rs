//! Browser Bindings
//!
//! Adapters from the core boundaries to `window`, `localStorage` and `navigator`.

mod storage;
mod environment;
mod document;

pub use storage::BrowserStorage;
pub use environment::BrowserEnvironment;
pub use document::{apply_theme, current_page};
