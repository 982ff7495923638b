/*!
 * Host Configuration
 *
 * Runtime configuration for the deferred-deletion queue
 */

use crate::core::errors::{HostError, HostResult};
use serde::Deserialize;

/// Environment variable overriding `batch_size`
pub const ENV_BATCH_SIZE: &str = "GUARD_DELETE_BATCH";

/// Environment variable overriding `pending_warn_threshold`
pub const ENV_PENDING_WARN: &str = "GUARD_PENDING_WARN";

/// Default backlog size that triggers a warning
pub const DEFAULT_PENDING_WARN: usize = 1024;

/// Deferred-deletion queue configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeletionConfig {
    /// Objects torn down per processing pass (0 = all pending)
    pub batch_size: usize,
    /// Pending count at which a backlog warning is logged
    pub pending_warn_threshold: usize,
}

impl Default for DeletionConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DeletionConfig {
    /// Drain everything on each pass
    pub const fn unbounded() -> Self {
        Self {
            batch_size: 0,
            pending_warn_threshold: DEFAULT_PENDING_WARN,
        }
    }

    /// Small batches so a UI loop never stalls on teardown
    pub const fn interactive() -> Self {
        Self {
            batch_size: 32,
            pending_warn_threshold: 256,
        }
    }

    /// Check the configuration for values the queue cannot honor
    pub fn validate(&self) -> HostResult<()> {
        if self.pending_warn_threshold == 0 {
            return Err(HostError::InvalidConfig(
                "pending_warn_threshold must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> HostResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `GUARD_DELETE_BATCH` / `GUARD_PENDING_WARN`
    pub fn from_env() -> HostResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> HostResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_BATCH_SIZE) {
            config.batch_size = parse_count(ENV_BATCH_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_PENDING_WARN) {
            config.pending_warn_threshold = parse_count(ENV_PENDING_WARN, &value)?;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_count(key: &str, value: &str) -> HostResult<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| HostError::InvalidConfig(format!("{key}: expected a count, got {value:?}")))
}
