//! Glass composition converter.
//!
//! Turns composition text in mixed units (wt% oxide, wt% element, mol% oxide)
//! into elemental mole-percent, oxygen included:
//!
//! ```text
//! Glass 1:                                   glass 1:
//! 1. [SiO2][Si] : [70][wt%][oxide];    ->    mol% Si = 23.55
//! 2. [Na2O][Na] : [30][wt%][oxide];          mol% O = 56.88
//!                                            mol% Na = 19.57
//! ```

pub mod chemistry;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod menu;
#[cfg(feature = "gui")]
pub mod ui;

pub use error::{Error, ParseError};
pub use model::Compositions;

/// Parses `input` and converts every glass in it.
pub fn run(input: &str) -> Result<Compositions, ParseError> {
    let mut glasses = io::parser::parse(input)?;
    chemistry::convert(&mut glasses);
    Ok(glasses)
}

/// Text in, report text out. Fails only on a malformed `[number][unit%][type]` part.
pub fn convert_text(input: &str) -> Result<String, ParseError> {
    let glasses = run(input)?;
    Ok(io::formatter::format(&glasses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mol_lines(report: &str) -> Vec<(String, f64)> {
        report
            .lines()
            .filter_map(|l| l.strip_prefix("mol% "))
            .map(|l| {
                let (el, v) = l.split_once(" = ").unwrap();
                (el.to_string(), v.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_example_scenario() {
        let input = "Glass 1:\n1. [SiO2][Si] : [70][wt%][oxide];\n2. [Na2O][Na] : [30][wt%][oxide];";
        let out = convert_text(input).unwrap();

        assert_eq!(out, "glass 1:\nmol% Si = 23.55\nmol% O = 56.88\nmol% Na = 19.57");
        let sum: f64 = mol_lines(&out).iter().map(|(_, v)| v).sum();
        assert!((sum - 100.0).abs() <= 0.02 + 1e-9);
    }

    #[test]
    fn test_several_glasses_in_order() {
        let input = "\
Results from table 3

Glass A: soda-lime reference
1. [SiO2][Si] : [60][mol%][oxide];
2. [Al2O3][Al] : [20][mol%][oxide];
3. [CaO][Ca] : [20][mol%][oxide]
Glass B:
1. [B2O3][B] : [50][mol%][oxide]; [80][wt%][oxide]
2. [K2O][K] : [50][mol%][oxide]
";
        let out = convert_text(input).unwrap();
        assert_eq!(
            out,
            "glass a:\nmol% Si = 18.75\nmol% O = 62.5\nmol% Al = 12.5\nmol% Ca = 6.25\n\
             glass b:\nmol% B = 25.0\nmol% O = 50.0\nmol% K = 25.0"
        );
    }

    #[test]
    fn test_half_cent_values_round_to_even() {
        let input = "Glass 1:\n1. [SiO2][Si] : [2][mol%][oxide]\n2. [CaO][Ca] : [13][mol%][oxide]";
        assert_eq!(
            convert_text(input).unwrap(),
            "glass 1:\nmol% Si = 6.25\nmol% O = 53.12\nmol% Ca = 40.62"
        );
    }

    #[test]
    fn test_mol_element_only_glass_produces_nothing() {
        let input = "Glass 3:\n1. [SiO2][Si] : [75][mol%][element]\n2. [Na2O][Na] : [25][mol%][element]";
        assert_eq!(convert_text(input).unwrap(), "");
    }

    #[test]
    fn test_unconverted_glass_between_converted_ones() {
        let input = "Glass 1:\n1. [CaO][Ca] : [100][mol%][oxide]\nGlass 2:\n1. [SiO2][Si] : [75][mol%][element]\nGlass 3:\n";
        assert_eq!(convert_text(input).unwrap(), "glass 1:\nmol% Ca = 50.0\nmol% O = 50.0");
    }

    #[test]
    fn test_malformed_part_aborts_everything() {
        let input = "Glass 1:\n1. [SiO2][Si] : [70][wt%][oxide]\nGlass 2:\n1. [SiO2][Si] : [50][wtX][oxide]";
        let err = convert_text(input).unwrap_err();
        assert_eq!(err.to_string(), "Invalid part format: [50][wtX][oxide]");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_text("").unwrap(), "");
        assert!(run("\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let input = "Glass 1:\r\n1. [CaO][Ca] : [10][wt%][oxide]\r\n";
        assert_eq!(convert_text(input).unwrap(), "glass 1:\nmol% Ca = 50.0\nmol% O = 50.0");
    }
}
