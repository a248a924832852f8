//! Catalog sources
//!
//! A [`CatalogSource`] hands raw champion and item records to the catalog
//! manager. [`DataDragonSource`] fetches them from Riot's Data Dragon CDN;
//! [`StaticSource`] serves records already in memory or on disk.

use buildcraft_core::{Error, Result};
use serde_json::{Map, Value};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplier of raw catalog records
pub trait CatalogSource {
    /// Game-data version the records will be fetched for
    fn version(&self) -> impl Future<Output = Result<String>> + Send;

    fn fetch_characters(&self, version: &str) -> impl Future<Output = Result<Vec<Value>>> + Send;

    /// Items keyed by raw item id
    fn fetch_items(&self, version: &str) -> impl Future<Output = Result<Map<String, Value>>> + Send;
}

/// Connection settings for the Data Dragon CDN
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub base_url: String,
    pub locale: String,
    /// Pinned game version; `None` resolves the latest one
    pub version: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            version: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The `data` object of a Data Dragon `champion.json` or `item.json` document
fn data_object(mut document: Value, what: &str) -> Result<Map<String, Value>> {
    match document.get_mut("data").map(Value::take) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(Error::Fetch(format!("{} document has no data object", what))),
    }
}

pub struct DataDragonSource {
    config: SourceConfig,
    client: reqwest::Client,
}

impl DataDragonSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("base URL cannot be empty".to_string()));
        }
        if config.locale.trim().is_empty() {
            return Err(Error::InvalidConfig("locale cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn data_url(&self, version: &str, file: &str) -> String {
        self.url(&format!("cdn/{}/data/{}/{}", version, self.config.locale, file))
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!("{}: HTTP {}", url, response.status())));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))
    }
}

impl CatalogSource for DataDragonSource {
    async fn version(&self) -> Result<String> {
        if let Some(pinned) = &self.config.version {
            return Ok(pinned.clone());
        }

        let versions = self.get_json(&self.url("api/versions.json")).await?;
        let latest = versions
            .get(0)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Fetch("versions.json is empty".to_string()))?;
        info!("Latest Data Dragon version: {}", latest);
        Ok(latest.to_string())
    }

    async fn fetch_characters(&self, version: &str) -> Result<Vec<Value>> {
        let document = self.get_json(&self.data_url(version, "champion.json")).await?;
        Ok(data_object(document, "champion.json")?.into_iter().map(|(_, v)| v).collect())
    }

    async fn fetch_items(&self, version: &str) -> Result<Map<String, Value>> {
        let document = self.get_json(&self.data_url(version, "item.json")).await?;
        data_object(document, "item.json")
    }
}

/// Records held in memory, e.g. parsed from local Data Dragon files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSource {
    pub version: String,
    pub characters: Vec<Value>,
    pub items: Map<String, Value>,
}

impl StaticSource {
    pub fn new(version: impl Into<String>, characters: Vec<Value>, items: Map<String, Value>) -> Self {
        Self {
            version: version.into(),
            characters,
            items,
        }
    }

    /// Build from whole `champion.json` and `item.json` documents.
    /// The version is taken from the champion document when present.
    pub fn from_documents(champions: Value, items: Value) -> Result<Self> {
        let version = champions
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("local")
            .to_string();
        let characters = data_object(champions, "champion.json")?
            .into_iter()
            .map(|(_, v)| v)
            .collect();
        Ok(Self::new(version, characters, data_object(items, "item.json")?))
    }

    /// Read `champion.json` and `item.json` from a directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |file: &str| -> Result<Value> {
            let path = dir.join(file);
            let text = std::fs::read_to_string(&path)
                .map_err(|e| Error::Fetch(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&text).map_err(|e| Error::Fetch(format!("{}: {}", path.display(), e)))
        };
        Self::from_documents(read("champion.json")?, read("item.json")?)
    }
}

impl CatalogSource for StaticSource {
    async fn version(&self) -> Result<String> {
        Ok(self.version.clone())
    }

    async fn fetch_characters(&self, _version: &str) -> Result<Vec<Value>> {
        Ok(self.characters.clone())
    }

    async fn fetch_items(&self, _version: &str) -> Result<Map<String, Value>> {
        Ok(self.items.clone())
    }
}
