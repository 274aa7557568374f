//! Wire catalog loading and lookup
//!
//! The catalog is a fixed list of manufacturers, each with named wire
//! variants and a nominal outer diameter in inches. It is read once at
//! startup (from the embedded dataset or an external JSON file) and never
//! mutated afterwards.
//!
//! Outer diameters arrive as numeric strings. Parsing happens at use via
//! [`Wire::outer_diameter`]; an entry that fails to parse contributes zero
//! area during computation and is reported by `conduitfill validate`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Built-in wire catalog, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/wires.json");

/// A single wire variant from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    /// Opaque identifier, unique within the catalog
    pub id: String,
    /// Display label (e.g. "THHN 12 AWG")
    pub wire_type: String,
    /// Nominal outer diameter in inches, as a numeric string
    pub outer_diameter_in: String,
}

impl Wire {
    /// Parse the outer diameter.
    ///
    /// Returns `None` for non-numeric, non-finite, or non-positive values
    /// so a malformed catalog entry can never push NaN into a result.
    pub fn outer_diameter(&self) -> Option<f64> {
        self.outer_diameter_in
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d > 0.0)
    }
}

/// A manufacturer and its ordered list of wires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub manufacturer_id: u32,
    pub name: String,
    pub wires: Vec<Wire>,
}

/// Immutable wire catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    manufacturers: Vec<Manufacturer>,
}

impl Catalog {
    /// Load the catalog that ships inside the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }

    /// Load a catalog from an external JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let manufacturers: Vec<Manufacturer> =
            serde_json::from_str(json).context("Catalog is not a JSON array of manufacturers")?;
        Ok(Self { manufacturers })
    }

    /// All manufacturers, in catalog order.
    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    /// Iterate over every wire in the catalog (all manufacturers flattened).
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.manufacturers.iter().flat_map(|m| m.wires.iter())
    }

    /// Resolve a wire id against the flattened catalog.
    pub fn find_wire(&self, wire_id: &str) -> Option<&Wire> {
        self.wires().find(|w| w.id == wire_id)
    }

    /// Total number of wires across all manufacturers.
    pub fn wire_count(&self) -> usize {
        self.manufacturers.iter().map(|m| m.wires.len()).sum()
    }

    /// Validate catalog contents.
    ///
    /// Checks that the catalog is non-empty, wire ids are unique across
    /// manufacturers, and every outer diameter parses to a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.manufacturers.is_empty() {
            anyhow::bail!("Catalog contains no manufacturers");
        }

        let mut seen_ids = HashSet::new();
        for manufacturer in &self.manufacturers {
            if manufacturer.name.trim().is_empty() {
                anyhow::bail!(
                    "Manufacturer {} has an empty name",
                    manufacturer.manufacturer_id
                );
            }
            for wire in &manufacturer.wires {
                if wire.id.trim().is_empty() {
                    anyhow::bail!("Manufacturer '{}' has a wire with an empty id", manufacturer.name);
                }
                if !seen_ids.insert(wire.id.as_str()) {
                    anyhow::bail!("Duplicate wire id: {}", wire.id);
                }
                if wire.outer_diameter().is_none() {
                    anyhow::bail!(
                        "Wire '{}' has a non-numeric or non-positive outer diameter: {:?}",
                        wire.id,
                        wire.outer_diameter_in
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {
                    "manufacturer_id": 1,
                    "name": "Acme Wire",
                    "wires": [
                        { "id": "a-1", "wire_type": "THHN 12 AWG", "outer_diameter_in": "0.130" },
                        { "id": "a-2", "wire_type": "THHN 10 AWG", "outer_diameter_in": "0.164" }
                    ]
                },
                {
                    "manufacturer_id": 2,
                    "name": "Bravo Cable",
                    "wires": [
                        { "id": "b-1", "wire_type": "NM-B 14/2", "outer_diameter_in": "0.335" }
                    ]
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_catalog_loads_and_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.wire_count() > 0);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_find_wire_searches_all_manufacturers() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_wire("a-2").unwrap().wire_type, "THHN 10 AWG");
        assert_eq!(catalog.find_wire("b-1").unwrap().wire_type, "NM-B 14/2");
        assert!(catalog.find_wire("missing").is_none());
    }

    #[test]
    fn test_outer_diameter_parsing() {
        let wire = Wire {
            id: "w".to_string(),
            wire_type: "test".to_string(),
            outer_diameter_in: "0.130".to_string(),
        };
        assert_eq!(wire.outer_diameter(), Some(0.130));

        let bad = Wire {
            outer_diameter_in: "n/a".to_string(),
            ..wire.clone()
        };
        assert_eq!(bad.outer_diameter(), None);

        let zero = Wire {
            outer_diameter_in: "0".to_string(),
            ..wire.clone()
        };
        assert_eq!(zero.outer_diameter(), None);

        let negative = Wire {
            outer_diameter_in: "-0.25".to_string(),
            ..wire
        };
        assert_eq!(negative.outer_diameter(), None);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let catalog = Catalog::from_json(
            r#"[
                {
                    "manufacturer_id": 1,
                    "name": "Acme Wire",
                    "wires": [
                        { "id": "dup", "wire_type": "A", "outer_diameter_in": "0.1" },
                        { "id": "dup", "wire_type": "B", "outer_diameter_in": "0.2" }
                    ]
                }
            ]"#,
        )
        .unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate wire id"));
    }

    #[test]
    fn test_validate_rejects_malformed_diameter() {
        let catalog = Catalog::from_json(
            r#"[
                {
                    "manufacturer_id": 1,
                    "name": "Acme Wire",
                    "wires": [
                        { "id": "w-1", "wire_type": "A", "outer_diameter_in": "abc" }
                    ]
                }
            ]"#,
        )
        .unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_wires_flattens_in_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.wires().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-2", "b-1"]);
    }
}
