// src/io/json.rs

use crate::model::{AggregatedResult, Compositions, GlassEntries};
use serde::Serialize;

#[derive(Serialize)]
struct GlassReport<'a> {
    glass: &'a str,
    elements: &'a [AggregatedResult],
}

/// JSON counterpart of [`super::formatter::format`]: same glasses, same
/// filtering, full label case kept.
pub fn to_string(glasses: &Compositions) -> serde_json::Result<String> {
    let reports: Vec<GlassReport> = glasses
        .iter()
        .filter_map(|(label, entries)| match entries {
            GlassEntries::Converted(results) if !results.is_empty() => Some(GlassReport {
                glass: label,
                elements: results,
            }),
            _ => None,
        })
        .collect();

    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_export() {
        let mut glasses = Compositions::new();
        glasses.insert("Glass 2".to_string(), GlassEntries::default());
        glasses.insert(
            "Glass 1".to_string(),
            GlassEntries::Converted(vec![
                AggregatedResult { element: "Si".to_string(), mol_percent: 33.33 },
                AggregatedResult { element: "O".to_string(), mol_percent: 66.67 },
            ]),
        );

        let v: Value = serde_json::from_str(&to_string(&glasses).unwrap()).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["glass"], "Glass 1");
        assert_eq!(arr[0]["elements"][1]["element"], "O");
        assert_eq!(arr[0]["elements"][1]["mol_percent"], 66.67);
    }
}
