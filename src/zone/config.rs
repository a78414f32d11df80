//! Configuration for a master file.

use serde::{Deserialize, Serialize};

use crate::rr::TimeToLive;

/// Settings fixed when a [`MasterFile`](super::MasterFile) is created.
///
/// # Examples
///
/// ```rust
/// use walnut_masterfile::{MasterFile, ZoneConfig, rr::TimeToLive};
///
/// let config = ZoneConfig::default().with_default_ttl(TimeToLive::from_secs(300));
/// let zone = MasterFile::with_config(&config);
/// assert_eq!(zone.default_ttl(), TimeToLive::from_secs(300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// TTL given to address, name server, canonical name and pointer records
    /// built by the master file helpers.
    pub default_ttl: TimeToLive,
}

impl ZoneConfig {
    pub fn with_default_ttl(mut self, ttl: TimeToLive) -> Self {
        self.default_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(ZoneConfig::default().default_ttl, TimeToLive::ZERO);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let config: ZoneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ZoneConfig::default());
    }

    #[test]
    fn test_deserialize_ttl() {
        let config: ZoneConfig = serde_json::from_str(r#"{"default_ttl": 3600}"#).unwrap();
        assert_eq!(config.default_ttl, TimeToLive::from_secs(3600));
    }
}
