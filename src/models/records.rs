// src/models/records.rs
//
// Tabular coffee statistics and the merged per-country record set the
// animator cycles through.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::models::Feature;

/// One table of `country,value` rows (export bags, import bags or cups).
#[derive(Debug, Default)]
pub struct BagTable {
    by_name: HashMap<String, u64>,
    pub max_value: u64,
}

impl BagTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a header row followed by `country,value` lines. The value is
    /// always the last field, so country names may contain commas.
    pub fn parse(content: &str) -> Result<Self, Box<dyn Error>> {
        let mut by_name = HashMap::new();
        let mut max_value = 0u64;

        for (line_number, line) in content.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, value) = line
                .rsplit_once(',')
                .ok_or_else(|| format!("line {}: expected country,value", line_number + 1))?;
            let name = name.trim().trim_matches('"').to_string();
            let value: u64 = value
                .trim()
                .parse()
                .map_err(|e| format!("line {}: bad value ({})", line_number + 1, e))?;

            max_value = max_value.max(value);
            by_name.insert(name, value);
        }

        Ok(Self { by_name, max_value })
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// A country in the rotation. Immutable once built.
#[derive(Debug, Clone)]
pub struct CountryRecord {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
    pub export_bags: u64,
    pub import_bags: u64,
    pub cups: Option<u64>,
}

#[derive(Debug, Default)]
pub struct CoffeeData {
    pub records: Vec<CountryRecord>,
    pub max_export_bags: u64,
    pub max_import_bags: u64,
}

/// A country joins the rotation iff it appears in the export or import
/// table. Presence decides, not the value: an explicit zero row counts.
pub fn included(name: &str, exports: &BagTable, imports: &BagTable) -> bool {
    exports.contains(name) || imports.contains(name)
}

/// Joins the boundary features against the three tables. Record order is
/// the order of first appearance in the geometry source.
pub fn merge(
    features: &[Feature],
    exports: &BagTable,
    imports: &BagTable,
    drunk: &BagTable,
) -> CoffeeData {
    let mut data = CoffeeData::default();

    for feature in features {
        if !included(&feature.name, exports, imports) {
            continue;
        }
        let record = CountryRecord {
            name: feature.name.clone(),
            rings: feature.rings.clone(),
            export_bags: exports.get(&feature.name).unwrap_or(0),
            import_bags: imports.get(&feature.name).unwrap_or(0),
            cups: drunk.get(&feature.name),
        };
        data.max_export_bags = data.max_export_bags.max(record.export_bags);
        data.max_import_bags = data.max_import_bags.max(record.import_bags);
        data.records.push(record);
    }

    data
}
