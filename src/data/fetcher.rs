// Std library crates
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

// External crates
use async_trait::async_trait;
use tokio::time::Instant;

// Local crates
use crate::config::{DEBUG_FLAGS, HttpClientConfig};

#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Retrieve the raw text of one resource. One attempt, no retries.
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError>;

    /// A unique identifier for this implementation (so logs show where data came from).
    fn signature(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Transport { url: String, message: String },
    Status { url: String, status: u16 },
    Io { path: String, message: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, message } => {
                write!(f, "Failed to fetch {}: {}", url, message)
            }
            FetchError::Status { url, status } => {
                write!(f, "Failed to fetch {}: HTTP {}", url, status)
            }
            FetchError::Io { path, message } => write!(f, "Failed to read {}: {}", path, message),
        }
    }
}

impl Error for FetchError {}

/// Fetches resources relative to a base URL.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_config(base_url, HttpClientConfig::default())
    }

    pub fn with_config(
        base_url: impl Into<String>,
        config: HttpClientConfig,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| FetchError::Transport {
                url: base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self::from_client(client, base_url))
    }

    pub fn from_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError> {
        let url = self.resource_url(resource);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if DEBUG_FLAGS.print_fetch_events {
            log::info!(
                "GET {} -> {} bytes in {:?}",
                url,
                text.len(),
                start.elapsed()
            );
        }
        Ok(text)
    }

    fn signature(&self) -> &'static str {
        "HTTP"
    }
}

/// Reads resources from a local export directory.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resource_path(&self, resource: &str) -> PathBuf {
        self.root.join(resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl SourceFetcher for DirFetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError> {
        let path = self.resource_path(resource);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if DEBUG_FLAGS.print_fetch_events {
            log::info!("Read {} ({} bytes)", path.display(), text.len());
        }
        Ok(text)
    }

    fn signature(&self) -> &'static str {
        "Local directory"
    }
}

/// `http://` and `https://` sources go over the network, anything else is a directory.
pub fn fetcher_for_source(source: &str) -> Result<Arc<dyn SourceFetcher>, FetchError> {
    let trimmed = source.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(Arc::new(HttpFetcher::new(trimmed)?))
    } else {
        Ok(Arc::new(DirFetcher::new(trimmed)))
    }
}
