//! # Host Configuration
//!
//! Where signed requests are sent. An explicit host always wins, then a
//! cluster name, then the default host.

use serde::{Deserialize, Serialize};

/// Host used when neither a host nor a cluster is configured.
pub const DEFAULT_HOST: &str = "api.pusherapp.com";

/// Target host and scheme for signed URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Explicit host, optionally with `:port`
    pub host: Option<String>,
    /// Cluster name, e.g. `eu`
    pub cluster: Option<String>,
    /// `https` when true, `http` otherwise
    pub secure: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: None,
            cluster: None,
            secure: true,
        }
    }
}

impl HostConfig {
    /// Resolved host name.
    pub fn resolved_host(&self) -> String {
        match (non_empty(&self.host), non_empty(&self.cluster)) {
            (Some(host), _) => host.to_string(),
            (None, Some(cluster)) => format!("api-{cluster}.pusher.com"),
            (None, None) => DEFAULT_HOST.to_string(),
        }
    }

    /// URL scheme.
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `scheme://host`
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.resolved_host())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
