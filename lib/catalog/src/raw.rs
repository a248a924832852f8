//! Raw catalog records as published by the game-data API
//!
//! Records arrive as loose JSON values and are parsed one at a time, so a
//! single malformed entry fails on its own instead of failing the batch.

use buildcraft_core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawChampion {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub info: RawChampionInfo,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RawChampionInfo {
    pub attack: f32,
    pub defense: f32,
    pub magic: f32,
    pub difficulty: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawItem {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintext: String,
    pub gold: RawGold,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RawGold {
    pub total: i64,
}

/// Best-effort identifier for log lines about a record that failed to parse
fn record_label(value: &Value, fallback: &str) -> String {
    value
        .get("id")
        .or_else(|| value.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

impl RawChampion {
    pub fn from_value(value: &Value) -> Result<Self> {
        RawChampion::deserialize(value)
            .map_err(|e| Error::malformed(record_label(value, "<champion>"), e.to_string()))
    }
}

impl RawItem {
    /// Parse an item keyed by its raw catalog id
    pub fn from_value(id: &str, value: &Value) -> Result<Self> {
        let mut item = RawItem::deserialize(value).map_err(|e| Error::malformed(id, e.to_string()))?;
        item.id = id.to_string();
        Ok(item)
    }

    /// Value of a raw stat, 0.0 when absent
    pub fn stat(&self, key: &str) -> f64 {
        self.stats.get(key).copied().unwrap_or(0.0)
    }
}
