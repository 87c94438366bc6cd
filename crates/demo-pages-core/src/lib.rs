//! Demo Pages Core
//!
//! Layered like the pages use it:
//! - domain: endpoints, probe results, todos, theme, tabs, form
//! - store: key-value storage boundary and repositories
//! - probe: fan-out GET probing with per-key status
//! - workbench / interactive: page state machines
//! - environment, routes: host introspection and navigation

pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod interactive;
pub mod probe;
pub mod routes;
pub mod store;
pub mod workbench;

pub use config::PagesConfig;
pub use error::{PagesError, PagesResult};
pub use workbench::Workbench;
pub use interactive::InteractivePage;
