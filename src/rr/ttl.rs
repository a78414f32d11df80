use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time to live of a resource record, in whole seconds.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeToLive(u32);

impl TimeToLive {
    pub const MAX: TimeToLive = TimeToLive(u32::MAX);
    pub const MIN: TimeToLive = TimeToLive(u32::MIN);
    pub const ZERO: TimeToLive = TimeToLive(0u32);

    pub fn from_secs(secs: u32) -> Self {
        TimeToLive(secs)
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeToLive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TimeToLive {
    fn from(value: u32) -> Self {
        TimeToLive(value)
    }
}

impl From<TimeToLive> for u32 {
    fn from(value: TimeToLive) -> Self {
        value.0
    }
}

/// Durations longer than `u32::MAX` seconds saturate.
impl From<Duration> for TimeToLive {
    fn from(value: Duration) -> Self {
        TimeToLive(value.as_secs().try_into().unwrap_or(u32::MAX))
    }
}

impl From<TimeToLive> for Duration {
    fn from(value: TimeToLive) -> Self {
        Duration::from_secs(value.0 as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(TimeToLive::default(), TimeToLive::ZERO);
    }

    #[test]
    fn test_duration_conversion() {
        let ttl = TimeToLive::from(Duration::from_secs(300));
        assert_eq!(ttl.as_secs(), 300);
        assert_eq!(Duration::from(ttl), Duration::from_secs(300));
    }

    #[test]
    fn test_duration_saturates() {
        let ttl = TimeToLive::from(Duration::from_secs(u64::MAX));
        assert_eq!(ttl, TimeToLive::MAX);
    }

    #[test]
    fn test_serde_is_transparent() {
        let ttl = TimeToLive::from_secs(60);
        assert_eq!(serde_json::to_string(&ttl).unwrap(), "60");
        assert_eq!(serde_json::from_str::<TimeToLive>("60").unwrap(), ttl);
    }
}
