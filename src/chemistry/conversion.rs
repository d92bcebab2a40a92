// src/chemistry/conversion.rs

use super::stoichiometry::{cation_coefficient, oxygen_coefficient};
use crate::model::{
    molar_mass, AggregatedResult, ComponentRecord, Compositions, GlassEntries, OrderedMap, UnitTag,
};

/// Oxygen is always accumulated under this key, whatever the formula says.
pub const OXYGEN: &str = "O";

/// Which measured value a record's molar quantity was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoleSource {
    MolOxide,
    WtOxide,
    WtElement,
}

/// Molar quantity per formula unit for one record, with the value it came from.
///
/// Sources are tried in order `mol%_oxide`, `wt%_oxide`, `wt%_element`; the
/// first one with a value > 0 is used. A weight value whose formula is not in
/// the molar-mass table gives `None` without trying the next source.
pub fn mole_value(record: &ComponentRecord) -> Option<(MoleSource, f64)> {
    let mol_oxide = record.value(&UnitTag::MolOxide);
    let wt_oxide = record.value(&UnitTag::WtOxide);
    let wt_element = record.value(&UnitTag::WtElement);

    if mol_oxide > 0.0 {
        Some((MoleSource::MolOxide, mol_oxide / 100.0))
    } else if wt_oxide > 0.0 {
        by_weight(&record.oxide, wt_oxide).map(|n| (MoleSource::WtOxide, n))
    } else if wt_element > 0.0 {
        by_weight(&record.element, wt_element).map(|n| (MoleSource::WtElement, n))
    } else {
        None
    }
}

fn by_weight(formula: &str, weight: f64) -> Option<f64> {
    match molar_mass(formula) {
        Some(mass) => Some(weight / mass),
        None => {
            log::warn!("No molar mass for '{}', {} wt% ignored", formula, weight);
            None
        }
    }
}

/// Aggregates one glass's records into elemental mol%, rounded to 2 decimals.
///
/// Elements come out in order of first accumulation. Returns `None` when no
/// record had a usable value.
pub fn convert_glass(records: &[ComponentRecord]) -> Option<Vec<AggregatedResult>> {
    let mut moles: OrderedMap<String, f64> = OrderedMap::new();
    let mut convertible = false;

    for record in records {
        let Some((source, value)) = mole_value(record) else {
            continue;
        };
        convertible = true;

        let cation = f64::from(cation_coefficient(&record.oxide, &record.element));
        let oxygen = f64::from(oxygen_coefficient(&record.oxide));
        log::debug!(
            "{} [{}] from {:?}: {:.6} mol/unit, {}x cation, {}x O",
            record.oxide, record.element, source, value, cation, oxygen
        );

        *moles.entry_or_insert_with(record.element.clone(), || 0.0) += value * cation;
        *moles.entry_or_insert_with(OXYGEN.to_string(), || 0.0) += value * oxygen;
    }

    if !convertible {
        return None;
    }

    let total: f64 = moles.values().sum();
    let results = moles
        .into_iter()
        .map(|(element, n)| AggregatedResult {
            element,
            mol_percent: round2(n / total * 100.0),
        })
        .collect();
    Some(results)
}

/// Replaces every glass that has convertible records with its aggregated
/// results. Empty glasses and glasses with nothing convertible keep their
/// raw records.
pub fn convert(glasses: &mut Compositions) {
    for (label, entries) in glasses.iter_mut() {
        let converted = match &*entries {
            GlassEntries::Raw(records) if !records.is_empty() => convert_glass(records),
            _ => continue,
        };

        match converted {
            Some(results) => {
                log::info!("{}: {} elements", label, results.len());
                *entries = GlassEntries::Converted(results);
            }
            None => log::warn!("{}: no convertible data, left unconverted", label),
        }
    }
}

/// Rounds to 2 decimals, half-to-even on the exact binary value.
fn round2(x: f64) -> f64 {
    format!("{:.2}", x).parse().unwrap_or(x)
}
