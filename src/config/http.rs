//! HTTP transport configuration for the source fetcher.

/// Runtime struct used by the HTTP fetcher
pub struct HttpClientConfig {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: HTTP_CLIENT.timeout_ms,
            user_agent: HTTP_CLIENT.user_agent,
        }
    }
}

/// Default values for the HTTP client.
/// No retry knob: a failed fetch is reported once.
pub struct HttpClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub const HTTP_CLIENT: HttpClientDefaults = HttpClientDefaults {
    timeout_ms: 10_000,
    user_agent: concat!("wind-history/", env!("CARGO_PKG_VERSION")),
};
