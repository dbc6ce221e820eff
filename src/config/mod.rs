use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::Result;

/// One phrase→abbreviation pair of the title replacement table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    pub key: String,
    pub value: String,
}

/// Ordered phrase→abbreviation table.
///
/// Ordering is a correctness requirement: replacement is literal substring
/// matching, so longer phrases must run before shorter overlapping ones. A
/// plain `HashMap` must never be substituted here.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    /// Build a table from pairs, preserving the given order as priority.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| Replacement { key, value })
                .collect(),
        }
    }

    /// Build a table from an unordered map, imposing a deterministic
    /// priority: longer keys first, then key, then value. This is the order
    /// the production `courses.json` map is applied in.
    pub fn from_unordered(map: HashMap<String, String>) -> Self {
        let mut entries: Vec<Replacement> = map
            .into_iter()
            .map(|(key, value)| Replacement { key, value })
            .collect();
        entries.sort_by(|a, b| {
            b.key
                .len()
                .cmp(&a.key.len())
                .then_with(|| a.key.cmp(&b.key))
                .then_with(|| a.value.cmp(&b.value))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Building-code → street-address directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingDirectory {
    addresses: HashMap<String, String>,
}

impl BuildingDirectory {
    pub fn new(addresses: HashMap<String, String>) -> Self {
        Self { addresses }
    }

    /// Look up the street address for a 4-digit building code.
    pub fn address(&self, code: &str) -> Option<&str> {
        self.addresses.get(code).map(String::as_str)
    }
}

/// The two externally supplied lookup tables, loaded once per run and
/// treated as read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct CleanerConfig {
    pub replacements: ReplacementTable,
    pub buildings: BuildingDirectory,
}

impl CleanerConfig {
    pub fn new(replacements: ReplacementTable, buildings: BuildingDirectory) -> Self {
        Self {
            replacements,
            buildings,
        }
    }

    /// Parse both tables from JSON objects of string-to-string pairs, the
    /// format of the production `courses.json` / `buildings.json` files.
    pub fn from_json_strs(courses_json: &str, buildings_json: &str) -> Result<Self> {
        let courses: HashMap<String, String> = serde_json::from_str(courses_json)?;
        let buildings: HashMap<String, String> = serde_json::from_str(buildings_json)?;
        Ok(Self {
            replacements: ReplacementTable::from_unordered(courses),
            buildings: BuildingDirectory::new(buildings),
        })
    }

    /// Load both tables from JSON files.
    pub fn from_files<P: AsRef<Path>>(courses_path: P, buildings_path: P) -> Result<Self> {
        let courses = std::fs::read_to_string(courses_path)?;
        let buildings = std::fs::read_to_string(buildings_path)?;
        Self::from_json_strs(&courses, &buildings)
    }
}
