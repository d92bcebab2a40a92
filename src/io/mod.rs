// src/io/mod.rs
pub mod formatter;
pub mod json;
pub mod parser;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::Compositions;
use std::fs;

/// Reads a composition text file.
pub fn load_text(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Renders converted glasses in the requested format.
pub fn render(glasses: &Compositions, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(formatter::format(glasses)),
        OutputFormat::Json => Ok(json::to_string(glasses)?),
    }
}

/// Writes a report, choosing the format from the file extension.
pub fn save_report(path: &str, glasses: &Compositions) -> Result<()> {
    let p = path.to_lowercase();

    let format = if p.ends_with(".json") {
        OutputFormat::Json
    } else {
        // .txt, .dat and anything else
        OutputFormat::Text
    };
    fs::write(path, render(glasses, format)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AggregatedResult, GlassEntries};

    fn sample() -> Compositions {
        let mut glasses = Compositions::new();
        glasses.insert(
            "Glass 1".to_string(),
            GlassEntries::Converted(vec![AggregatedResult {
                element: "Si".to_string(),
                mol_percent: 100.0,
            }]),
        );
        glasses
    }

    #[test]
    fn test_save_report_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("out.txt");
        let json = dir.path().join("out.JSON");

        save_report(txt.to_str().unwrap(), &sample()).unwrap();
        save_report(json.to_str().unwrap(), &sample()).unwrap();

        assert_eq!(fs::read_to_string(&txt).unwrap(), "glass 1:\nmol% Si = 100.0");
        assert!(fs::read_to_string(&json).unwrap().contains("\"glass\": \"Glass 1\""));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_text("/nonexistent/glass.txt").unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
