use thiserror::Error;

/// Convenient result alias for the satroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when `END` cannot be reached from `START` over the visibility graph.
    #[error("no valid route between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a constellation lacks one of the `START`/`END` endpoints.
    #[error("constellation has no {name} endpoint; expected a ROU record")]
    MissingEndpoint { name: String },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when the constellation generator answers with a non-success status.
    #[error("constellation source {url} returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn route_not_found() -> Self {
        Error::RouteNotFound {
            start: crate::START.to_string(),
            goal: crate::END.to_string(),
        }
    }

    pub(crate) fn missing_endpoint(name: &str) -> Self {
        Error::MissingEndpoint {
            name: name.to_string(),
        }
    }

    /// Whether this error is the recoverable "no route" signal.
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, Error::RouteNotFound { .. })
    }
}
