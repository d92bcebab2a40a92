// src/utils/report.rs

use crate::model::{Compositions, GlassEntries};

/// Generates the console summary after a conversion run
pub fn conversion_summary(glasses: &Compositions) -> String {
    let converted = glasses.values().filter(|e| e.is_converted()).count();

    let mut out = String::new();
    out.push_str(&format!(
        "Glasses: {} ({} converted, {} skipped)\n",
        glasses.len(),
        converted,
        glasses.len() - converted
    ));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!("{:<24} {:<12} {:<8} {:<10}\n", "Glass", "Status", "Entries", "Sum mol%"));
    out.push_str("--------------------------------------------------\n");

    for (label, entries) in glasses.iter() {
        let (status, total) = match entries {
            GlassEntries::Converted(results) => {
                let sum: f64 = results.iter().map(|r| r.mol_percent).sum();
                ("converted", format!("{:.2}", sum))
            }
            GlassEntries::Raw(records) if records.is_empty() => ("empty", "-".to_string()),
            GlassEntries::Raw(_) => ("no data", "-".to_string()),
        };
        out.push_str(&format!("{:<24} {:<12} {:<8} {:<10}\n", label, status, entries.len(), total));
    }

    out
}
