// src/state.rs
use crate::config::Config;
use crate::error::Result;
use crate::io;
use crate::model::Compositions;
use crate::utils::report;

pub struct AppState {
    pub config: Config,
    pub file_name: String,
    // Glasses from the last successful conversion
    pub last_result: Option<Compositions>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            file_name: String::new(),
            last_result: None,
        }
    }

    /// Converts `input` and renders it in the configured output format.
    /// A failed conversion clears the previous result.
    pub fn convert(&mut self, input: &str) -> Result<String> {
        self.last_result = None;
        let glasses = crate::run(input)?;
        let rendered = io::render(&glasses, self.config.output_format)?;
        self.last_result = Some(glasses);
        Ok(rendered)
    }

    /// Console summary of the last result, headed by the source file if any.
    pub fn summary(&self) -> Option<String> {
        let table = report::conversion_summary(self.last_result.as_ref()?);
        if self.file_name.is_empty() {
            Some(table)
        } else {
            Some(format!("File: {}\n{}", self.file_name, table))
        }
    }

    /// Writes the last result to `path`; `Ok(false)` if nothing was converted yet.
    pub fn save_report(&self, path: &str) -> Result<bool> {
        match &self.last_result {
            Some(glasses) => {
                io::save_report(path, glasses)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_convert_keeps_result() {
        let mut st = AppState::new(Config::default());
        let out = st.convert("Glass 1:\n1. [CaO][Ca] : [10][mol%][oxide]").unwrap();
        assert_eq!(out, "glass 1:\nmol% Ca = 50.0\nmol% O = 50.0");
        assert!(st.summary().unwrap().contains("Glass 1"));
    }

    #[test]
    fn test_summary_names_source_file() {
        let mut st = AppState::new(Config::default());
        st.file_name = "soda_lime.txt".to_string();
        st.convert("Glass 1:\n1. [CaO][Ca] : [10][mol%][oxide]").unwrap();
        let summary = st.summary().unwrap();
        assert!(summary.starts_with("File: soda_lime.txt\n"));
        assert!(summary.contains("Glass 1"));

        st.file_name.clear();
        assert!(!st.summary().unwrap().contains("File:"));
    }

    #[test]
    fn test_failed_convert_clears_result() {
        let mut st = AppState::new(Config::default());
        st.convert("Glass 1:\n1. [CaO][Ca] : [10][mol%][oxide]").unwrap();
        assert!(st.convert("Glass 1:\n1. [CaO][Ca] : [10][mol][oxide]").is_err());
        assert!(st.last_result.is_none());
        assert!(!st.save_report("unused.txt").unwrap());
    }

    #[test]
    fn test_json_output_format() {
        let config = Config {
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        let mut st = AppState::new(config);
        let out = st.convert("Glass 1:\n1. [CaO][Ca] : [10][mol%][oxide]").unwrap();
        assert!(out.trim_start().starts_with('['));
        assert!(out.contains("\"mol_percent\": 50.0"));
    }
}
