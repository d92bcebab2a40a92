// src/model/composition.rs

use super::ordered::OrderedMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Unit family and basis of one measured value, e.g. `wt%_oxide`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitTag {
    WtOxide,
    WtElement,
    MolOxide,
    MolElement,
    /// Any other `<unit%>_<type>` pair the grammar admits (e.g. `at%_oxide`).
    Other(String),
}

impl UnitTag {
    /// Builds the tag from the `<unit%>` and `<type>` captures of a part.
    pub fn from_parts(unit: &str, kind: &str) -> Self {
        match (unit, kind) {
            ("wt%", "oxide") => UnitTag::WtOxide,
            ("wt%", "element") => UnitTag::WtElement,
            ("mol%", "oxide") => UnitTag::MolOxide,
            ("mol%", "element") => UnitTag::MolElement,
            _ => UnitTag::Other(format!("{}_{}", unit, kind)),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            UnitTag::WtOxide => "wt%_oxide",
            UnitTag::WtElement => "wt%_element",
            UnitTag::MolOxide => "mol%_oxide",
            UnitTag::MolElement => "mol%_element",
            UnitTag::Other(key) => key,
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for UnitTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// One measured quantity for an (oxide, element) pair, taken from one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    pub oxide: String,
    pub element: String,
    #[serde(serialize_with = "serialize_values")]
    pub values: OrderedMap<UnitTag, f64>,
}

impl ComponentRecord {
    pub fn new(oxide: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            oxide: oxide.into(),
            element: element.into(),
            values: OrderedMap::new(),
        }
    }

    /// Builder-style setter, mostly for tests and programmatic input.
    pub fn with(mut self, tag: UnitTag, value: f64) -> Self {
        self.values.insert(tag, value);
        self
    }

    /// Value for `tag`, or 0 when the line did not carry it.
    pub fn value(&self, tag: &UnitTag) -> f64 {
        self.values.get(tag).copied().unwrap_or(0.0)
    }
}

fn serialize_values<S: Serializer>(
    values: &OrderedMap<UnitTag, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(values.len()))?;
    for (tag, value) in values.iter() {
        map.serialize_entry(tag.key(), value)?;
    }
    map.end()
}

/// Normalized elemental mole-percent, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    pub element: String,
    pub mol_percent: f64,
}

/// Record list of one glass: raw input lines before conversion, results after.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "entries", rename_all = "lowercase")]
pub enum GlassEntries {
    Raw(Vec<ComponentRecord>),
    Converted(Vec<AggregatedResult>),
}

impl Default for GlassEntries {
    fn default() -> Self {
        GlassEntries::Raw(Vec::new())
    }
}

impl GlassEntries {
    pub fn len(&self) -> usize {
        match self {
            GlassEntries::Raw(records) => records.len(),
            GlassEntries::Converted(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, GlassEntries::Converted(_))
    }
}

/// Glass label -> entries, in order of first appearance.
pub type Compositions = OrderedMap<String, GlassEntries>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tag_keys() {
        assert_eq!(UnitTag::from_parts("wt%", "oxide"), UnitTag::WtOxide);
        assert_eq!(UnitTag::from_parts("mol%", "element"), UnitTag::MolElement);
        assert_eq!(UnitTag::from_parts("at%", "oxide").key(), "at%_oxide");
        assert_eq!(UnitTag::MolOxide.to_string(), "mol%_oxide");
    }

    #[test]
    fn test_missing_value_reads_as_zero() {
        let rec = ComponentRecord::new("SiO2", "Si").with(UnitTag::WtOxide, 70.0);
        assert_eq!(rec.value(&UnitTag::WtOxide), 70.0);
        assert_eq!(rec.value(&UnitTag::MolOxide), 0.0);
    }

    #[test]
    fn test_record_serializes_with_unit_keys() {
        let rec = ComponentRecord::new("Al2O3", "Al").with(UnitTag::MolOxide, 20.0);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"oxide":"Al2O3","element":"Al","values":{"mol%_oxide":20.0}}"#
        );
    }
}
