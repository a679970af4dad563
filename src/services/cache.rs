use async_trait::async_trait;
use std::time::Duration;
use crate::models::{CandidateProfile, RequestingUserProfile};
use crate::services::store::{ProfileStore, StoreError};

/// Profile store decorator that memoizes requester lookups
///
/// Requester taste profiles change rarely while a user pages through
/// results, so they are held in an in-memory TTL cache. Candidate pools
/// are always read through to the inner store. Unknown users are cached
/// too, as `None`.
pub struct CachedProfileStore<S> {
    inner: S,
    requesters: moka::future::Cache<String, Option<RequestingUserProfile>>,
}

impl<S: ProfileStore> CachedProfileStore<S> {
    /// Wrap a store with a requester cache
    pub fn new(inner: S, max_entries: u64, ttl_secs: u64) -> Self {
        let requesters = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, requesters }
    }

    /// Drop a cached requester, e.g. after a profile edit
    pub async fn invalidate(&self, user_id: &str) {
        self.requesters.invalidate(user_id).await;
    }
}

#[async_trait]
impl<S: ProfileStore> ProfileStore for CachedProfileStore<S> {
    async fn get_requester(&self, user_id: &str) -> Result<Option<RequestingUserProfile>, StoreError> {
        if let Some(cached) = self.requesters.get(user_id).await {
            tracing::trace!("Requester cache hit: {}", user_id);
            return Ok(cached);
        }

        tracing::trace!("Requester cache miss: {}", user_id);
        let profile = self.inner.get_requester(user_id).await?;
        self.requesters
            .insert(user_id.to_string(), profile.clone())
            .await;

        Ok(profile)
    }

    async fn list_candidates(
        &self,
        user_id: &str,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        self.inner.list_candidates(user_id, exclude_ids, limit).await
    }
}
