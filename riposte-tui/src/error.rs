//! Top-level error type for the terminal client.
//!
//! Only startup and shutdown paths abort through `TuiError`: config
//! resolution, building the HTTP client, and terminal setup/teardown.
//! Once the draw loop runs, fetch and mutation failures surface as footer
//! notifications instead of tearing the UI down.

use crate::api_client::ApiClientError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiClientError),
}
