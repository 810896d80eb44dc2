use std::collections::HashMap;
use std::sync::Mutex;

use iconfont_logging::iconfont_debug;

use crate::{FetchError, FetchOutput, Fetcher};

/// Bodies fetched during the life of one process, keyed by the URL exactly as
/// requested. Entries are never evicted.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: Mutex<HashMap<String, FetchOutput>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<FetchOutput> {
        self.lock().get(url).cloned()
    }

    pub fn insert(&self, url: impl Into<String>, output: FetchOutput) {
        self.lock().insert(url.into(), output);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, FetchOutput>> {
        // A poisoned map still holds complete entries; keep using it.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Wraps a [`Fetcher`] so each URL hits the network at most once.
#[derive(Debug)]
pub struct CachingFetcher<F> {
    inner: F,
    cache: ContentCache,
}

impl<F: Fetcher> CachingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: ContentCache::new(),
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<F: Fetcher> Fetcher for CachingFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        if let Some(hit) = self.cache.get(url) {
            iconfont_debug!("cache hit {}", url);
            return Ok(hit);
        }
        let output = self.inner.fetch(url).await?;
        self.cache.insert(url, output.clone());
        Ok(output)
    }
}
