//! In-memory cache of downloaded schema texts

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Result;
use tracing::debug;

use super::SchemaFetcher;

/// Schema texts keyed by URL.
///
/// Entries are only ever added. Two callers missing on the same URL at the same
/// time both fetch it and the later insert wins.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: RwLock<HashMap<String, Arc<str>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Arc<str>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }

    pub fn insert(&self, url: &str, text: String) -> Arc<str> {
        let text: Arc<str> = Arc::from(text);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string(), Arc::clone(&text));
        text
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cached text for `url`, fetching and caching it on a miss.
    pub async fn get_or_fetch(&self, url: &str, fetcher: &dyn SchemaFetcher) -> Result<Arc<str>> {
        if let Some(text) = self.get(url) {
            debug!(url, "schema cache hit");
            return Ok(text);
        }

        debug!(url, "schema cache miss, fetching");
        let text = fetcher.fetch(url).await?;
        Ok(self.insert(url, text))
    }
}
