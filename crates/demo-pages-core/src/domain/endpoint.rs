//! Endpoint Descriptor
//!
//! A fixed probe target and the key its results are filed under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static metadata for one probe target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Unique display name, also the result key
    pub name: String,
    pub url: String,
    pub description: String,
}

impl Endpoint {
    pub fn new(name: &str, url: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }

    pub fn key(&self) -> ProbeKey {
        ProbeKey::Endpoint(self.name.clone())
    }
}

/// Slot a probe result is recorded in
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProbeKey {
    /// One of the configured endpoints, by name
    Endpoint(String),
    /// The user-supplied URL slot
    Custom,
}

impl fmt::Display for ProbeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKey::Endpoint(name) => write!(f, "{}", name),
            ProbeKey::Custom => write!(f, "custom"),
        }
    }
}
