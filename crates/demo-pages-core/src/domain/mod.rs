//! Domain Layer
//!
//! Plain data for the three pages. No I/O lives here.

mod entity;
mod endpoint;
mod probe_result;
mod todo;
mod theme;
mod tab;
mod form;

pub use entity::{Entity, position_of};
pub use endpoint::{Endpoint, ProbeKey};
pub use probe_result::{ProbeResult, ProbeStatus, ResponseBody};
pub use todo::TodoItem;
pub use theme::Theme;
pub use tab::Tab;
pub use form::{Counter, FormDraft, FormField};
