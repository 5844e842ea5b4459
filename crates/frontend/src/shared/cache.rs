//! Home warm-up cache: the API root is pinged at most once per TTL window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::storage;

const CACHE_KEY: &str = "home-cache";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeCache {
    #[serde(rename = "lastFetch")]
    pub last_fetch: DateTime<Utc>,
}

impl HomeCache {
    /// True when no cache exists or the last fetch is at least `ttl_hours` old.
    pub fn has_expired(cache: Option<&HomeCache>, now: DateTime<Utc>, ttl_hours: i64) -> bool {
        match cache {
            None => true,
            Some(cache) => now - cache.last_fetch >= Duration::hours(ttl_hours),
        }
    }

    pub fn load() -> Option<HomeCache> {
        let raw = storage::get_item(CACHE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn store(&self) {
        let result = serde_json::to_string(self)
            .map_err(|e| e.to_string())
            .and_then(|raw| storage::set_item(CACHE_KEY, &raw));
        if let Err(e) = result {
            log::warn!("Failed to store home cache: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cache_has_expired() {
        assert!(HomeCache::has_expired(None, Utc::now(), 24));
    }

    #[test]
    fn expires_after_ttl() {
        let now = Utc::now();
        let fresh = HomeCache { last_fetch: now - Duration::hours(23) };
        let stale = HomeCache { last_fetch: now - Duration::hours(24) };
        assert!(!HomeCache::has_expired(Some(&fresh), now, 24));
        assert!(HomeCache::has_expired(Some(&stale), now, 24));
    }

    #[test]
    fn serializes_with_camel_case_key() {
        let cache: HomeCache =
            serde_json::from_str(r#"{"lastFetch":"2024-03-15T14:02:26.123Z"}"#).unwrap();
        assert_eq!(cache.last_fetch.timestamp(), 1710511346);
    }
}
