//! Exchange configuration

use crate::error::{Result, SyncRandError};
use serde::{Deserialize, Serialize};

/// Shortest nonce accepted for a generated exchange (128 bits)
pub const MIN_NONCE_LEN: usize = 16;

/// Settings for one round of seed agreement
///
/// # Example
/// ```
/// use syncrand::ExchangeConfig;
///
/// let config: ExchangeConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.nonce_len, 32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Nonce length in bytes; both peers must agree on it
    pub nonce_len: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self { nonce_len: 32 }
    }
}

impl ExchangeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.nonce_len < MIN_NONCE_LEN {
            return Err(SyncRandError::InvalidConfig(format!(
                "nonce_len must be at least {} bytes, got {}",
                MIN_NONCE_LEN, self.nonce_len
            )));
        }
        Ok(())
    }
}
