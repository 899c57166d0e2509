use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::{parse_constellation, ParsedConstellation};

/// Public generator that emits a fresh random constellation per request.
pub const DEFAULT_SOURCE_URL: &str = "https://space-fast-track.herokuapp.com/generate";

/// Environment variable that overrides the default data source.
pub const DATA_SOURCE_ENV: &str = "SATROUTE_DATA_SOURCE";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where constellation text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch over HTTP(S).
    Remote(String),
    /// Read a local file.
    File(PathBuf),
}

impl DataSource {
    /// Interpret a user-supplied location: `http://` and `https://` URLs are
    /// remote, everything else is a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Remote(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    /// Resolve the source from an explicit override, then the
    /// `SATROUTE_DATA_SOURCE` environment variable, then the public generator.
    pub fn resolve(explicit: Option<&str>) -> Self {
        if let Some(location) = explicit.filter(|value| !value.trim().is_empty()) {
            return Self::parse(location);
        }
        if let Ok(location) = env::var(DATA_SOURCE_ENV) {
            if !location.trim().is_empty() {
                debug!(source = %location, "using data source from environment");
                return Self::parse(&location);
            }
        }
        Self::default()
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Remote(DEFAULT_SOURCE_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options applied when fetching constellation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout for remote sources.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fetch the raw constellation text.
pub async fn fetch_text(source: &DataSource, options: &FetchOptions) -> Result<String> {
    match source {
        DataSource::Remote(url) => fetch_remote(url, options).await,
        DataSource::File(path) => {
            debug!(path = %path.display(), "reading constellation file");
            Ok(tokio::fs::read_to_string(path).await?)
        }
    }
}

/// Fetch and parse a constellation in one shot.
///
/// The returned future resolves once with the complete coordinate map; no
/// partial results are exposed.
pub async fn fetch_constellation(
    source: &DataSource,
    options: &FetchOptions,
) -> Result<ParsedConstellation> {
    let text = fetch_text(source, options).await?;
    let parsed = parse_constellation(&text);
    info!(
        source = %source,
        satellites = parsed.satellites,
        skipped = parsed.skipped,
        "loaded constellation"
    );
    Ok(parsed)
}

async fn fetch_remote(url: &str, options: &FetchOptions) -> Result<String> {
    let client = build_client(options)?;
    info!(url, "fetching constellation");
    let response = client.get(url).header(ACCEPT, "text/plain").send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::FetchStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

fn build_client(options: &FetchOptions) -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("satroute/", env!("CARGO_PKG_VERSION")))
        .timeout(options.timeout)
        .build()?;
    Ok(client)
}
