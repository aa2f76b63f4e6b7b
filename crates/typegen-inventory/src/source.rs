//! Inventory document sources.
//!
//! An inventory is a root location holding an `index.json` document plus one
//! JSON document per item. [`InventorySource`] abstracts over where that root
//! lives: [`HttpSource`] reads it from a web server and [`DirectorySource`]
//! reads it from the local filesystem.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use typegen_core::{Error, FetchConfig, InventoryIndex, ItemInfo, Result};

/// Name of the index document at the inventory root.
pub const INDEX_DOCUMENT: &str = "index.json";

/// Provides raw inventory documents.
///
/// Implementors only supply [`read`](Self::read) and
/// [`location`](Self::location); JSON decoding is shared.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use std::collections::HashMap;
/// use typegen_core::{Error, Result};
/// use typegen_inventory::InventorySource;
///
/// #[derive(Debug)]
/// struct MemorySource(HashMap<String, String>);
///
/// #[async_trait]
/// impl InventorySource for MemorySource {
///     fn location(&self, path: &str) -> String {
///         format!("memory:{path}")
///     }
///
///     async fn read(&self, path: &str) -> Result<Vec<u8>> {
///         self.0
///             .get(path)
///             .map(|doc| doc.clone().into_bytes())
///             .ok_or_else(|| Error::FetchFailed {
///                 location: self.location(path),
///                 source: "not found".into(),
///             })
///     }
/// }
/// ```
#[async_trait]
pub trait InventorySource: Send + Sync + fmt::Debug {
    /// Returns a human-readable location for `path`, used in errors and logs.
    fn location(&self, path: &str) -> String;

    /// Reads the raw bytes of the document at `path`, relative to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the document cannot be retrieved.
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Fetches and decodes the inventory index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] or [`Error::InvalidSchema`].
    async fn fetch_index(&self) -> Result<InventoryIndex> {
        let bytes = self.read(INDEX_DOCUMENT).await?;
        decode(&bytes, || self.location(INDEX_DOCUMENT))
    }

    /// Fetches and decodes one item document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] or [`Error::InvalidSchema`].
    async fn fetch_item(&self, path: &str) -> Result<ItemInfo> {
        let bytes = self.read(path).await?;
        let info: ItemInfo = decode(&bytes, || self.location(path))?;
        debug!(item = %info.name, kind = info.item.kind(), "Fetched {}", path);
        Ok(info)
    }
}

fn decode<T, F>(bytes: &[u8], location: F) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> String,
{
    serde_json::from_slice(bytes).map_err(|source| Error::InvalidSchema {
        location: location(),
        source,
    })
}

/// Reads inventory documents from a web server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    root: String,
}

impl HttpSource {
    /// Creates a source rooted at `root` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the HTTP client cannot be built.
    pub fn new(root: impl Into<String>, timeout: Duration) -> Result<Self> {
        let root = root.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("typegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::FetchFailed {
                location: root.clone(),
                source: Box::new(e),
            })?;

        Ok(Self { client, root })
    }

    /// Returns the inventory root URL without a trailing slash.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}

#[async_trait]
impl InventorySource for HttpSource {
    fn location(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.location(path);
        let fetch_failed = |e: reqwest::Error| Error::FetchFailed {
            location: url.clone(),
            source: Box::new(e),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_failed)?;
        let bytes = response.bytes().await.map_err(fetch_failed)?;

        Ok(bytes.to_vec())
    }
}

/// Reads inventory documents from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl InventorySource for DirectorySource {
    fn location(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(self.root.join(path))
            .await
            .map_err(|e| Error::FetchFailed {
                location: self.location(path),
                source: Box::new(e),
            })
    }
}

/// Selects a source for an inventory argument.
///
/// `http://` and `https://` arguments are read over HTTP, anything else is
/// treated as a directory path.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
///
/// # Examples
///
/// ```
/// use typegen_core::FetchConfig;
/// use typegen_inventory::source_for;
///
/// let source = source_for("./inventory", &FetchConfig::default()).unwrap();
/// assert!(source.location("index.json").ends_with("index.json"));
/// ```
pub fn source_for(argument: &str, config: &FetchConfig) -> Result<Box<dyn InventorySource>> {
    if argument.starts_with("http://") || argument.starts_with("https://") {
        Ok(Box::new(HttpSource::new(argument, config.timeout())?))
    } else {
        Ok(Box::new(DirectorySource::new(argument)))
    }
}
