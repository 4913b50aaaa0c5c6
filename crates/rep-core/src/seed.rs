//! Seed catalogue: statically-compiled classes with a known replication layout.
//!
//! Seed records are ground truth dumped from a running engine build. Their
//! handle and net-field records are kept as opaque JSON and are never
//! re-derived; only their counts feed the numbering of derived classes.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeedClass {
    #[serde(default)]
    pub handles: Vec<Value>,
    #[serde(default)]
    pub net_fields: Vec<Value>,
}

impl SeedClass {
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn net_field_count(&self) -> usize {
        self.net_fields.len()
    }
}

/// All seed classes, keyed by class name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeedCatalogue {
    pub classes: BTreeMap<String, SeedClass>,
}

impl SeedCatalogue {
    /// Parse a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] for invalid JSON and
    /// [`CoreError::MalformedSeed`] when the `classes` table is missing.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Build the catalogue from a parsed seed document.
    ///
    /// Class entries that are not objects are skipped; missing `handles` or
    /// `net_fields` arrays count as empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSeed`] when `classes` is missing or not
    /// an object. There is no baseline to number against without it.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let classes = value
            .get("classes")
            .and_then(Value::as_object)
            .ok_or_else(|| CoreError::MalformedSeed {
                reason: "seed JSON missing 'classes'".to_string(),
            })?;

        let classes = classes
            .iter()
            .filter_map(|(name, entry)| {
                let entry = entry.as_object()?;
                let handles = array_or_empty(entry.get("handles"));
                let net_fields = array_or_empty(entry.get("net_fields"));
                Some((
                    name.clone(),
                    SeedClass {
                        handles,
                        net_fields,
                    },
                ))
            })
            .collect();

        Ok(Self { classes })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SeedClass> {
        self.classes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total net fields across every seed class.
    #[must_use]
    pub fn total_net_fields(&self) -> usize {
        self.classes.values().map(SeedClass::net_field_count).sum()
    }
}

fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
