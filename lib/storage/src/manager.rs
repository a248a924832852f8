use crate::snapshot::{CatalogSnapshot, Recommendation};
use crate::source::CatalogSource;
use buildcraft_catalog::{normalize_catalog, CharacterProfile, ItemRecord, NormalizeReport};
use buildcraft_core::Result;
use buildcraft_similarity::{Comparison, RecommendationSummary};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    pub generation: u64,
    pub version: String,
    pub characters: usize,
    pub items: usize,
    pub report: NormalizeReport,
}

impl LoadSummary {
    fn of(snapshot: &CatalogSnapshot) -> Self {
        Self {
            generation: snapshot.generation(),
            version: snapshot.version().to_string(),
            characters: snapshot.characters().len(),
            items: snapshot.items().len(),
            report: snapshot.report(),
        }
    }
}

/// Point-in-time description of the installed catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub generation: u64,
    pub version: String,
    pub loaded_at: DateTime<Utc>,
    pub characters: usize,
    pub items: usize,
}

/// Owns the current catalog snapshot.
///
/// Readers clone the `Arc` and work on it without holding the lock. A load
/// builds the next snapshot completely before swapping it in; a load that
/// started earlier than the installed snapshot never replaces it.
pub struct CatalogManager {
    current: RwLock<Arc<CatalogSnapshot>>,
    next_generation: AtomicU64,
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogManager {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::empty(0))),
            next_generation: AtomicU64::new(1),
        }
    }

    /// The installed snapshot
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.read().clone()
    }

    /// Swap in `snapshot` unless a newer generation is already installed.
    /// Returns whichever snapshot is installed afterwards.
    fn install(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let mut current = self.current.write();
        if snapshot.generation() < current.generation() {
            warn!(
                "Discarding catalog generation {} (generation {} already installed)",
                snapshot.generation(),
                current.generation()
            );
            return current.clone();
        }
        *current = Arc::new(snapshot);
        current.clone()
    }

    /// Fetch, normalize and install a new catalog.
    ///
    /// The summary describes the catalog being served once the call returns.
    /// That is a newer one when a later load finished first. On fetch failure
    /// an empty catalog is installed and the error returned.
    pub async fn load<S: CatalogSource>(&self, source: &S) -> Result<LoadSummary> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);

        let fetched = async {
            let version = source.version().await?;
            let characters = source.fetch_characters(&version).await?;
            let items = source.fetch_items(&version).await?;
            Ok::<_, buildcraft_core::Error>((version, characters, items))
        }
        .await;

        match fetched {
            Ok((version, characters, items)) => {
                self.install_records(generation, version, &characters, &items)
            }
            Err(e) => {
                warn!("Catalog fetch failed, installing empty catalog: {}", e);
                self.install(CatalogSnapshot::empty(generation));
                Err(e)
            }
        }
    }

    /// Normalize and install records that are already in memory
    pub fn load_records(
        &self,
        version: impl Into<String>,
        characters: &[Value],
        items: &Map<String, Value>,
    ) -> Result<LoadSummary> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        self.install_records(generation, version.into(), characters, items)
    }

    fn install_records(
        &self,
        generation: u64,
        version: String,
        characters: &[Value],
        items: &Map<String, Value>,
    ) -> Result<LoadSummary> {
        let snapshot = CatalogSnapshot::build(generation, version, normalize_catalog(characters, items))?;
        let installed = self.install(snapshot);
        let summary = LoadSummary::of(&installed);

        if summary.generation == generation {
            info!(
                "Installed catalog {} (generation {}): {} champions, {} items",
                summary.version, summary.generation, summary.characters, summary.items
            );
        }
        Ok(summary)
    }

    /// Top `top_k` items for a champion in `phase`.
    ///
    /// Names match exactly first, then ignoring case and surrounding
    /// whitespace. There is no partial or fuzzy matching; anything else is
    /// `NotFound`.
    pub fn recommend(&self, name: &str, phase: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        self.snapshot().recommend(name, phase, top_k)
    }

    /// Derived profile of a champion, looked up like [`Self::recommend`]
    pub fn analyze(&self, name: &str) -> Result<CharacterProfile> {
        self.snapshot().character(name).cloned()
    }

    pub fn compare(&self, name_a: &str, name_b: &str, phase: &str, top_k: usize) -> Result<Comparison> {
        self.snapshot().compare(name_a, name_b, phase, top_k)
    }

    pub fn summarize(&self, name: &str, phase: &str, top_k: usize) -> Result<RecommendationSummary> {
        self.snapshot().summarize(name, phase, top_k)
    }

    /// Item by display name, looked up like [`Self::recommend`]
    pub fn item(&self, name: &str) -> Result<ItemRecord> {
        self.snapshot().item(name).cloned()
    }

    /// Champion names in catalog-load order
    pub fn champions(&self) -> Vec<String> {
        self.snapshot()
            .characters()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let snapshot = self.snapshot();
        CatalogStats {
            generation: snapshot.generation(),
            version: snapshot.version().to_string(),
            loaded_at: snapshot.loaded_at(),
            characters: snapshot.characters().len(),
            items: snapshot.items().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use buildcraft_core::Error;
    use serde_json::json;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        async fn version(&self) -> Result<String> {
            Err(Error::Fetch("connection refused".to_string()))
        }

        async fn fetch_characters(&self, _version: &str) -> Result<Vec<Value>> {
            unreachable!("version fails first")
        }

        async fn fetch_items(&self, _version: &str) -> Result<Map<String, Value>> {
            unreachable!("version fails first")
        }
    }

    fn source() -> StaticSource {
        let characters = vec![json!({
            "id": "Garen", "name": "Garen", "title": "The Might of Demacia", "tags": ["Fighter", "Tank"],
            "info": {"attack": 7, "defense": 7, "magic": 1, "difficulty": 5}
        })];
        let mut items = Map::new();
        items.insert("3071".into(), json!({"name": "Black Cleaver", "gold": {"total": 3000},
                     "stats": {"FlatHPPoolMod": 400, "FlatPhysicalDamageMod": 40}}));
        items.insert("3044".into(), json!({"name": "Phage", "gold": {"total": 1100},
                     "stats": {"FlatHPPoolMod": 200, "FlatPhysicalDamageMod": 15}}));
        StaticSource::new("14.1.1", characters, items)
    }

    #[tokio::test]
    async fn test_load_installs_snapshot() {
        let manager = CatalogManager::new();
        assert_eq!(manager.stats().generation, 0);

        let summary = manager.load(&source()).await.unwrap();
        assert_eq!(summary.characters, 1);
        assert_eq!(summary.items, 2);
        assert_eq!(summary.version, "14.1.1");

        let stats = manager.stats();
        assert_eq!(stats.generation, summary.generation);
        assert_eq!(stats.items, 2);
        assert_eq!(manager.champions(), vec!["Garen".to_string()]);
        assert_eq!(manager.analyze("Garen").unwrap().title, "The Might of Demacia");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_catalog() {
        let manager = CatalogManager::new();
        manager.load(&source()).await.unwrap();

        let err = manager.load(&FailingSource).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));

        let stats = manager.stats();
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.items, 0);
        assert!(matches!(manager.analyze("Garen"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_readers_keep_their_snapshot_across_reload() {
        let manager = CatalogManager::new();
        let src = source();
        manager.load_records("a", &src.characters, &src.items).unwrap();
        let before = manager.snapshot();

        manager.load_records("b", &[], &Map::new()).unwrap();
        assert_eq!(before.version(), "a");
        assert_eq!(before.items().len(), 2);
        assert_eq!(manager.snapshot().version(), "b");
        assert!(manager.snapshot().items().is_empty());
    }

    #[test]
    fn test_stale_generation_is_not_installed() {
        let manager = CatalogManager::new();
        let src = source();
        manager.load_records("new", &src.characters, &src.items).unwrap();
        let installed = manager.snapshot().generation();

        let kept = manager.install(CatalogSnapshot::empty(installed - 1));
        assert_eq!(kept.generation(), installed);
        assert_eq!(manager.snapshot().version(), "new");
    }

    #[test]
    fn test_superseded_load_reports_served_catalog() {
        let manager = CatalogManager::new();
        let src = source();
        let stale = manager.next_generation.fetch_add(1, Ordering::SeqCst);
        manager.load_records("new", &src.characters, &src.items).unwrap();

        let summary = manager
            .install_records(stale, "old".to_string(), &[], &Map::new())
            .unwrap();
        assert_eq!(summary.version, "new");
        assert_eq!(summary.items, 2);
        assert_eq!(summary.generation, manager.stats().generation);
        assert_ne!(summary.generation, stale);
    }

    #[test]
    fn test_reload_is_deterministic() {
        let manager = CatalogManager::new();
        let src = source();
        manager.load_records("v", &src.characters, &src.items).unwrap();
        let first = manager.snapshot();
        manager.load_records("v", &src.characters, &src.items).unwrap();
        let second = manager.snapshot();

        assert_ne!(first.generation(), second.generation());
        assert_eq!(first.matrix(), second.matrix());
    }

    #[test]
    fn test_lookup_errors_are_distinct_from_empty_results() {
        let manager = CatalogManager::new();
        let src = source();
        manager.load_records("v", &src.characters, &src.items).unwrap();

        assert!(manager.recommend("Garen", "mid", 0).unwrap().is_empty());
        assert!(matches!(manager.recommend("Nobody", "mid", 10), Err(Error::NotFound(_))));
        assert!(matches!(manager.recommend("Garen", "midgame", 10), Err(Error::InvalidPhase(_))));
        assert!(matches!(manager.item("Nothing"), Err(Error::NotFound(_))));
        assert_eq!(manager.item("Phage").unwrap().cost, 1100);
    }
}
