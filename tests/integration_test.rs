// Integration tests for buildcraft
use buildcraft::prelude::*;
use buildcraft::similarity::{encode_query, rank};
use buildcraft::{Category, FeatureSchema, Role};
use serde_json::{json, Map, Value};
use std::path::Path;

fn fixture_source() -> StaticSource {
    StaticSource::from_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")).unwrap()
}

async fn loaded_manager() -> CatalogManager {
    let manager = CatalogManager::new();
    manager.load(&fixture_source()).await.unwrap();
    manager
}

fn champion(name: &str, tags: &[&str], attack: u8, defense: u8, magic: u8) -> Value {
    json!({
        "id": name, "name": name, "title": "", "tags": tags,
        "info": {"attack": attack, "defense": defense, "magic": magic, "difficulty": 5}
    })
}

#[tokio::test]
async fn test_load_fixture_catalog() {
    let manager = CatalogManager::new();
    let summary = manager.load(&fixture_source()).await.unwrap();

    assert_eq!(summary.version, "14.1.1");
    assert_eq!(summary.characters, 5);
    assert_eq!(summary.items, 7);
    assert_eq!(summary.report.malformed_characters, 1);
    assert_eq!(summary.report.malformed_items, 1);
    assert_eq!(summary.report.excluded_items, 4);

    let champions = manager.champions();
    assert!(champions.contains(&"Leona".to_string()));
    assert!(!champions.contains(&"Broken".to_string()));

    for excluded in ["Boots", "Long Sword", "Health Potion", "Stealth Ward"] {
        assert!(matches!(manager.item(excluded), Err(Error::NotFound(_))), "{excluded}");
    }
    assert_eq!(manager.item("Amplifying Tome").unwrap().cost, 400);
}

#[tokio::test]
async fn test_profiles_follow_tag_order() {
    let manager = loaded_manager().await;

    let ahri = manager.analyze("Ahri").unwrap();
    assert_eq!(ahri.role, Role::Mid);
    assert_eq!(ahri.damage_type.to_string(), "Magic");
    assert_eq!(ahri.playstyle.to_string(), "Burst");

    let leona = manager.analyze("Leona").unwrap();
    assert_eq!(leona.role, Role::Top);
    assert_eq!(leona.playstyle.to_string(), "Tank");

    let nami = manager.analyze("Nami").unwrap();
    assert_eq!(nami.role, Role::Support);
    assert_eq!(nami.playstyle.to_string(), "Utility");
}

#[tokio::test]
async fn test_every_champion_ranks_every_item() {
    let manager = loaded_manager().await;
    let snapshot = manager.snapshot();

    for name in manager.champions() {
        for phase in GamePhase::ALL {
            let ranked = snapshot.rank_for(&name, phase).unwrap();
            assert_eq!(ranked.len(), snapshot.items().len());
            assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
            assert!(ranked.iter().all(|r| r.score.abs() <= 1.0 + 1e-6));
        }
    }
}

#[tokio::test]
async fn test_recommendation_order() {
    let manager = loaded_manager().await;

    let jinx = manager.recommend("Jinx", "late", 3).unwrap();
    assert_eq!(jinx[0].name, "Infinity Edge");

    let ahri = manager.recommend("ahri", "late", 3).unwrap();
    assert_eq!(ahri[0].name, "Rabadon's Deathcap");
    for rec in &ahri {
        assert!((rec.breakdown.total() - rec.score).abs() < 1e-5);
    }

    let all = manager.recommend("Garen", "early", 100).unwrap();
    assert_eq!(all.len(), 7);
}

#[tokio::test]
async fn test_reload_is_deterministic() {
    let manager = loaded_manager().await;
    let first = manager.snapshot();
    manager.load(&fixture_source()).await.unwrap();
    let second = manager.snapshot();

    assert!(second.generation() > first.generation());
    assert_eq!(first.matrix(), second.matrix());
    assert_eq!(first.matrix().dim(), FeatureSchema::DIM);
    assert_eq!(
        manager.recommend("Nami", "mid", 10).unwrap(),
        first.recommend("Nami", "mid", 10).unwrap()
    );
}

#[test]
fn test_items_keep_document_order() {
    // ids deliberately out of lexicographic order, as in real item.json files
    let items: Value = serde_json::from_str(
        r#"{
            "type": "item",
            "data": {
                "3001": {"name": "First In Doc", "plaintext": "first", "gold": {"total": 3000},
                         "stats": {"FlatPhysicalDamageMod": 60, "FlatCritChanceMod": 0.2}},
                "223001": {"name": "Second In Doc", "plaintext": "second", "gold": {"total": 3000},
                           "stats": {"FlatPhysicalDamageMod": 60, "FlatCritChanceMod": 0.2}},
                "3002": {"name": "Dup", "plaintext": "earlier", "gold": {"total": 3000},
                         "stats": {"FlatPhysicalDamageMod": 60, "FlatCritChanceMod": 0.2}},
                "223002": {"name": "Dup", "plaintext": "later", "gold": {"total": 3000},
                           "stats": {"FlatPhysicalDamageMod": 60, "FlatCritChanceMod": 0.2}}
            }
        }"#,
    )
    .unwrap();
    let champions = json!({"version": "14.1.1", "data": {"Jinx": champion("Jinx", &["Marksman"], 9, 2, 4)}});
    let source = StaticSource::from_documents(champions, items).unwrap();

    let keys: Vec<&str> = source.items.keys().map(String::as_str).collect();
    assert_eq!(keys, ["3001", "223001", "3002", "223002"]);

    let manager = CatalogManager::new();
    let summary = manager.load_records("v", &source.characters, &source.items).unwrap();
    assert_eq!(summary.items, 3);

    let ranked: Vec<String> = manager
        .recommend("Jinx", "late", 10)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(ranked, ["First In Doc", "Second In Doc", "Dup"]);

    let dup = manager.item("Dup").unwrap();
    assert_eq!(dup.id, "223002");
    assert_eq!(dup.description, "later");
}

#[test]
fn test_cost_boundary() {
    let mut items = Map::new();
    items.insert("1".into(), json!({"name": "Cheap Charm", "gold": {"total": 399}}));
    items.insert("2".into(), json!({"name": "Fair Charm", "gold": {"total": 400}}));

    let manager = CatalogManager::new();
    let summary = manager.load_records("test", &[], &items).unwrap();
    assert_eq!(summary.items, 1);
    assert!(manager.item("Fair Charm").is_ok());
    assert!(manager.item("Cheap Charm").is_err());
}

#[tokio::test]
async fn test_invalid_phase_ranks_nothing() {
    let manager = loaded_manager().await;
    let err = manager.recommend("Ahri", "midgame", 10).unwrap_err();
    assert_eq!(err, Error::InvalidPhase("midgame".to_string()));
    assert!(err.to_string().contains("midgame"));

    // phase is checked before the champion
    assert!(matches!(
        manager.recommend("Nobody", "midgame", 10),
        Err(Error::InvalidPhase(_))
    ));
    assert!(manager.recommend("Ahri", " LATE ", 1).is_ok());
}

#[tokio::test]
async fn test_not_found_is_distinct_from_empty() {
    let manager = loaded_manager().await;
    assert!(matches!(manager.recommend("Teemo", "mid", 10), Err(Error::NotFound(_))));
    assert!(manager.recommend("Ahri", "mid", 0).unwrap().is_empty());

    let empty = CatalogManager::new();
    let summary = empty.load_records("none", &[champion("Solo", &["Mage"], 1, 1, 9)], &Map::new()).unwrap();
    assert_eq!(summary.items, 0);
    assert!(empty.recommend("Solo", "mid", 10).unwrap().is_empty());
}

#[test]
fn test_disjoint_compare() {
    let mut items = Map::new();
    for i in 0..10 {
        items.insert(
            format!("10{i:02}"),
            json!({"name": format!("Blade {i}"), "gold": {"total": 3000},
                   "stats": {"FlatPhysicalDamageMod": 60, "FlatCritChanceMod": 0.2}}),
        );
        items.insert(
            format!("20{i:02}"),
            json!({"name": format!("Orb {i}"), "gold": {"total": 3000},
                   "stats": {"FlatMagicDamageMod": 100}}),
        );
    }
    let characters = vec![
        champion("Jinx", &["Marksman"], 9, 2, 4),
        champion("Ahri", &["Mage", "Assassin"], 3, 4, 8),
    ];

    let manager = CatalogManager::new();
    manager.load_records("test", &characters, &items).unwrap();

    let cmp = manager.compare("Jinx", "Ahri", "late", 10).unwrap();
    assert!(cmp.common.is_empty());
    assert_eq!(cmp.unique_a.len(), 10);
    assert_eq!(cmp.unique_b.len(), 10);
    assert!(cmp.unique_a.iter().all(|n| n.starts_with("Blade")));
    assert!(cmp.unique_b.iter().all(|n| n.starts_with("Orb")));

    let same = manager.compare("Jinx", "Jinx", "late", 10).unwrap();
    assert_eq!(same.common.len(), 10);
    assert!(same.unique_a.is_empty() && same.unique_b.is_empty());
}

#[tokio::test]
async fn test_summary() {
    let manager = loaded_manager().await;
    let summary = manager.summarize("Leona", "mid", 7).unwrap();

    assert_eq!(summary.count, 7);
    assert_eq!(summary.total_cost, 400 + 3400 + 1100 + 2450 + 3600 + 2300 + 2300);
    assert!(summary.max_score >= summary.mean_score && summary.mean_score >= summary.min_score);
    let counted: usize = summary.categories.iter().map(|(_, n)| n).sum();
    assert_eq!(counted, 7);
    assert!(summary.categories.iter().any(|(c, n)| *c == Category::Defense && *n == 1));
}

#[test]
fn test_query_scaling_keeps_ranking() {
    let source = fixture_source();
    let manager = CatalogManager::new();
    manager.load_records("v", &source.characters, &source.items).unwrap();
    let snapshot = manager.snapshot();

    let query = encode_query(snapshot.character("Garen").unwrap(), GamePhase::Mid);
    let scaled = &query * 7.5;
    let names = |q| {
        rank(q, snapshot.matrix())
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&query), names(&scaled));
}

#[test]
fn test_missing_data_dir() {
    let result = StaticSource::from_dir(Path::new("/nonexistent/buildcraft"));
    assert!(matches!(result, Err(Error::Fetch(_))));
}
