// src/io/formatter.rs

use crate::model::{Compositions, GlassEntries};

/// Renders converted glasses as
///
/// ```text
/// glass 1:
/// mol% Si = 23.55
/// mol% O = 56.88
/// ```
///
/// Glasses that are empty or were left unconverted produce nothing, and
/// zero values are omitted. Lines are joined with `\n`, no trailing newline.
pub fn format(glasses: &Compositions) -> String {
    let mut out: Vec<String> = Vec::new();

    for (label, entries) in glasses.iter() {
        let GlassEntries::Converted(results) = entries else {
            continue;
        };
        if results.is_empty() {
            continue;
        }

        out.push(format!("{}:", label.to_lowercase()));
        for r in results.iter().filter(|r| r.mol_percent > 0.0) {
            out.push(format!("mol% {} = {}", r.element, format_value(r.mol_percent)));
        }
    }

    out.join("\n")
}

/// Shortest round-trip form, keeping one decimal on whole numbers (`25.0`).
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AggregatedResult, ComponentRecord, UnitTag};

    fn result(element: &str, mol_percent: f64) -> AggregatedResult {
        AggregatedResult {
            element: element.to_string(),
            mol_percent,
        }
    }

    #[test]
    fn test_format_converted_glass() {
        let mut glasses = Compositions::new();
        glasses.insert(
            "Glass B".to_string(),
            GlassEntries::Converted(vec![result("B", 25.0), result("O", 50.0), result("K", 25.0)]),
        );

        assert_eq!(format(&glasses), "glass b:\nmol% B = 25.0\nmol% O = 50.0\nmol% K = 25.0");
    }

    #[test]
    fn test_zero_values_skipped() {
        let mut glasses = Compositions::new();
        glasses.insert(
            "Glass 1".to_string(),
            GlassEntries::Converted(vec![result("Si", 99.99), result("Ce", 0.0), result("O", 0.01)]),
        );

        assert_eq!(format(&glasses), "glass 1:\nmol% Si = 99.99\nmol% O = 0.01");
    }

    #[test]
    fn test_empty_and_unconverted_glasses_emit_nothing() {
        let mut glasses = Compositions::new();
        glasses.insert("Glass 1".to_string(), GlassEntries::default());
        glasses.insert(
            "Glass 2".to_string(),
            GlassEntries::Raw(vec![ComponentRecord::new("SiO2", "Si").with(UnitTag::MolElement, 75.0)]),
        );
        glasses.insert("Glass 3".to_string(), GlassEntries::Converted(vec![result("Si", 100.0)]));

        assert_eq!(format(&glasses), "glass 3:\nmol% Si = 100.0");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(62.5), "62.5");
        assert_eq!(format_value(23.55), "23.55");
        assert_eq!(format_value(25.0), "25.0");
        assert_eq!(format_value(0.07), "0.07");
    }
}
