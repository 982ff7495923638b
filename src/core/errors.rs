/*!
 * Error Types
 * Host-layer error handling with thiserror and miette
 *
 * Guards themselves never fail at runtime. Only the host implementations
 * (deletion queue, configuration) report errors.
 */

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the host layer
#[derive(Error, Debug, Diagnostic)]
pub enum HostError {
    #[error("Deletion queue is closed")]
    #[diagnostic(
        code(host::queue_closed),
        help("The queue was shut down. Objects can no longer be deferred through it.")
    )]
    QueueClosed,

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(host::invalid_config),
        help("Check the deletion queue settings and their environment overrides.")
    )]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(
        code(host::config_parse),
        help("Configuration must be a JSON object with batch_size and/or pending_warn_threshold.")
    )]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for host operations
pub type HostResult<T> = std::result::Result<T, HostError>;
