//! Page configuration
//!
//! Everything the pages need at startup. There are no config files;
//! the defaults are the demo's fixed endpoint set and storage keys.

use std::time::Duration;

use crate::domain::Endpoint;

/// Storage key holding the todo list as a JSON array
pub const TODOS_KEY: &str = "todos";
/// Storage key holding `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone)]
pub struct PagesConfig {
    /// Fixed probe targets, names are unique
    pub endpoints: Vec<Endpoint>,

    /// Key for the persisted todo list
    pub todos_key: String,

    /// Key for the persisted theme
    pub theme_key: String,

    /// How long the "submitted" banner stays up
    pub submit_banner: Duration,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            todos_key: TODOS_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            submit_banner: Duration::from_secs(3),
        }
    }
}

/// The public APIs exercised by the network page
pub fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "JSONPlaceholder Posts",
            "https://jsonplaceholder.typicode.com/posts/1",
            "Test JSON API with sample post data",
        ),
        Endpoint::new(
            "Random User API",
            "https://randomuser.me/api/",
            "Generate random user profile data",
        ),
        Endpoint::new("Cat Facts API", "https://catfact.ninja/fact", "Get random cat facts"),
        Endpoint::new(
            "IP Address API",
            "https://api.ipify.org?format=json",
            "Get current public IP address",
        ),
        Endpoint::new(
            "Time API",
            "https://worldtimeapi.org/api/timezone/UTC",
            "Get current UTC time",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_endpoint_names_are_unique() {
        let config = PagesConfig::default();
        let names: HashSet<_> = config.endpoints.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(config.endpoints.len(), 5);
    }

    #[test]
    fn test_default_values() {
        let config = PagesConfig::default();
        let cat = config
            .endpoints
            .iter()
            .find(|e| e.name == "Cat Facts API")
            .expect("configured");
        assert_eq!(cat.url, "https://catfact.ninja/fact");
        assert_eq!(config.todos_key, "todos");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.submit_banner, Duration::from_secs(3));
    }
}
