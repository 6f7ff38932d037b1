use crate::collaborators::Collaborator;
use thiserror::Error;

/// Rejected while building a [`crate::routes::RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path '{0}' is registered twice")]
    DuplicatePath(String),
    #[error("route path '{0}' must be non-empty and start with '/'")]
    InvalidPath(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("clock_tick_ms must be greater than zero")]
    ZeroClockTick,
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Returned by external collaborators that have no real integration yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("{0} is not implemented")]
    NotImplemented(Collaborator),
}
