/// Matching endpoint used when `VENDORHUB_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://vendor-agent-backend.vercel.app/vendor-agent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Full URL of the remote matching endpoint that receives search POSTs.
    pub endpoint: String,
    pub log_level: String,
    pub user_agent: String,
    /// `None` means the matching request waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Returns a copy with `endpoint` replaced when an override is given.
    #[must_use]
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            endpoint.clone_into(&mut self.endpoint);
        }
        self
    }
}
