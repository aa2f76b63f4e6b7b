//! Concurrent inventory loading.

use crate::source::InventorySource;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};
use typegen_core::{FetchConfig, Inventory, ItemInfo, Result};

/// Loads a complete inventory from a source.
///
/// Item documents are fetched concurrently, at most `max_concurrent` at a
/// time, and returned in index order. The first failure aborts the load and
/// no partial inventory is returned.
///
/// # Examples
///
/// ```no_run
/// use typegen_core::FetchConfig;
/// use typegen_inventory::{DirectorySource, InventoryLoader};
///
/// # async fn example() -> typegen_core::Result<()> {
/// let loader = InventoryLoader::new(Box::new(DirectorySource::new("inventory")), 8);
/// let inventory = loader.load().await?;
/// println!("{} items", inventory.items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InventoryLoader {
    source: Box<dyn InventorySource>,
    max_concurrent: usize,
}

impl InventoryLoader {
    /// Creates a loader. A `max_concurrent` of zero is treated as one.
    #[must_use]
    pub fn new(source: Box<dyn InventorySource>, max_concurrent: usize) -> Self {
        Self {
            source,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Creates a loader using the window from `config`.
    #[must_use]
    pub fn with_config(source: Box<dyn InventorySource>, config: &FetchConfig) -> Self {
        Self::new(source, config.max_concurrent_requests)
    }

    /// Returns the underlying source.
    #[must_use]
    pub fn source(&self) -> &dyn InventorySource {
        self.source.as_ref()
    }

    /// Loads the index and every item it lists.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or decode error encountered.
    pub async fn load(&self) -> Result<Inventory> {
        self.load_with(|_| {}).await
    }

    /// Loads the inventory, calling `on_item` as each item arrives in order.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or decode error encountered.
    pub async fn load_with<F>(&self, mut on_item: F) -> Result<Inventory>
    where
        F: FnMut(&ItemInfo),
    {
        let index = self.source.fetch_index().await?;
        info!(
            version = %index.version,
            items = index.items.len(),
            "Loading inventory from {}",
            self.source.location("")
        );

        let items: Vec<ItemInfo> = stream::iter(&index.items)
            .map(|path| self.source.fetch_item(path))
            .buffered(self.max_concurrent)
            .inspect_ok(|item| on_item(item))
            .try_collect()
            .await?;

        debug!("Loaded {} items", items.len());
        Ok(Inventory::new(index.version, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use typegen_core::Error;

    #[derive(Debug, Default)]
    struct MemorySource {
        documents: HashMap<String, String>,
    }

    impl MemorySource {
        fn with(mut self, path: &str, document: &str) -> Self {
            self.documents.insert(path.to_string(), document.to_string());
            self
        }
    }

    #[async_trait]
    impl InventorySource for MemorySource {
        fn location(&self, path: &str) -> String {
            format!("memory:{path}")
        }

        async fn read(&self, path: &str) -> Result<Vec<u8>> {
            self.documents
                .get(path)
                .map(|doc| doc.clone().into_bytes())
                .ok_or_else(|| Error::FetchFailed {
                    location: self.location(path),
                    source: "not found".into(),
                })
        }
    }

    fn unit_struct(name: &str) -> String {
        format!(r#"{{"name": "{name}", "item": {{"type": "struct", "fields": []}}}}"#)
    }

    #[tokio::test]
    async fn test_load_with_reports_items_in_order() {
        let source = MemorySource::default()
            .with("index.json", r#"{"version": "1.0.0", "items": ["b", "a"]}"#)
            .with("a", &unit_struct("A"))
            .with("b", &unit_struct("B"));

        let mut seen = Vec::new();
        let inventory = InventoryLoader::new(Box::new(source), 2)
            .load_with(|item| seen.push(item.name.clone()))
            .await
            .unwrap();

        assert_eq!(seen, vec!["B", "A"]);
        assert_eq!(inventory.items.len(), 2);
        assert_eq!(inventory.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_missing_item_fails_load() {
        let source = MemorySource::default()
            .with("index.json", r#"{"version": "1.0.0", "items": ["gone"]}"#);

        let err = InventoryLoader::new(Box::new(source), 1)
            .load()
            .await
            .unwrap_err();
        assert!(err.is_fetch_error());
        assert!(err.to_string().contains("memory:gone"));
    }

    #[test]
    fn test_with_config_uses_window() {
        let config = FetchConfig {
            max_concurrent_requests: 0,
            ..FetchConfig::default()
        };
        let loader = InventoryLoader::with_config(Box::new(MemorySource::default()), &config);
        assert_eq!(loader.max_concurrent, 1);
        assert_eq!(loader.source().location("index.json"), "memory:index.json");
    }
}
