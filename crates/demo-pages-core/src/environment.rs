//! Environment Introspection
//!
//! Read-only facts about the host, shown on the network page. Outside a
//! browser every query is `Unavailable`.

/// Result of a host capability query
#[derive(Debug, Clone, PartialEq)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Capability::Available(v),
            None => Capability::Unavailable,
        }
    }

    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Capability::Available(v) => f(v),
            Capability::Unavailable => default,
        }
    }
}

/// Connection quality hint (Network Information API)
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionInfo {
    pub effective_type: String,
    pub downlink_mbps: f64,
}

pub trait EnvironmentProbe {
    fn online(&self) -> Capability<bool>;
    fn connection(&self) -> Capability<ConnectionInfo>;
    fn user_agent(&self) -> Capability<String>;
    fn language(&self) -> Capability<String>;
}

/// Non-browser host
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessEnvironment;

impl EnvironmentProbe for HeadlessEnvironment {
    fn online(&self) -> Capability<bool> {
        Capability::Unavailable
    }

    fn connection(&self) -> Capability<ConnectionInfo> {
        Capability::Unavailable
    }

    fn user_agent(&self) -> Capability<String> {
        Capability::Unavailable
    }

    fn language(&self) -> Capability<String> {
        Capability::Unavailable
    }
}

/// Display strings for the "Network Information" panel
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    pub user_agent: String,
    pub online: String,
    pub connection: String,
    pub language: String,
}

impl NetworkInfo {
    pub fn gather(env: &impl EnvironmentProbe) -> Self {
        Self {
            user_agent: env.user_agent().map_or("N/A".to_string(), |ua| ua),
            online: env.online().map_or("N/A".to_string(), |online| {
                if online { "🟢 Online" } else { "🔴 Offline" }.to_string()
            }),
            connection: env.connection().map_or(
                "Connection info not available".to_string(),
                |c| format!("{} ({} Mbps)", c.effective_type, c.downlink_mbps),
            ),
            language: env.language().map_or("N/A".to_string(), |lang| lang),
        }
    }
}
