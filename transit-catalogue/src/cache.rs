//! Memoization of route queries.
//!
//! The route graph never changes once built, so a query's answer depends
//! only on its endpoints. Answers are kept in a bounded in-memory cache keyed
//! by stop identities; unknown stop names are rejected before the cache is
//! consulted and are never stored.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::domain::StopId;
use crate::router::{Itinerary, RouteError, RouteProvider, TransportRouter};

/// Cache key for route answers: (origin, destination).
type RouteKey = (StopId, StopId);

/// Cached route answer, including "unreachable".
type RouteEntry = Arc<Result<Itinerary, RouteError>>;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached answers.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

/// Transport router with memoized answers.
///
/// Safe to share between threads; concurrent misses for the same key
/// compute the answer once.
pub struct CachedRouter<'a> {
    router: TransportRouter<'a>,
    cache: MokaCache<RouteKey, RouteEntry>,
}

impl<'a> CachedRouter<'a> {
    /// Wrap a router with a cache built from `config`.
    pub fn new(router: TransportRouter<'a>, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { router, cache }
    }

    /// Fastest itinerary between two named stops, served from cache when possible.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let key = (self.router.stop_id(from)?, self.router.stop_id(to)?);

        let entry = self.cache.get_with(key, || {
            trace!(from, to, "route cache miss");
            Arc::new(self.router.find_route_between(key.0, key.1))
        });

        entry.as_ref().clone()
    }

    /// Access the underlying router for operations that bypass the cache.
    pub fn router(&self) -> &TransportRouter<'a> {
        &self.router
    }

    /// Number of cached answers, after applying pending cache maintenance.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl RouteProvider for CachedRouter<'_> {
    fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        CachedRouter::find_route(self, from, to)
    }
}
