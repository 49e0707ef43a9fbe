use crate::env::Env;
use anyhow::{Result, anyhow};
use log::{debug, info};
use pairsum::{GroupConfig, OutputFormat, PairSum, PairSumGrouper, Value, input};
use std::path::Path;

pub const NO_PAIRS_MSG: &str = "No pairs with equal sum found.";

#[derive(Debug)]
pub struct Find {}

impl Find {
    /// Load the input sequence either from literal tokens or from a file with
    /// one integer per line.
    pub fn load(array: &[String], file: Option<&Path>) -> Result<Vec<Value>> {
        let values = match file {
            Some(path) => {
                info!("{}: reading integers from {}", Env::SYS_NAME, path.display());
                input::read_file(path)?
            }
            None => input::parse_tokens(array)?,
        };

        Ok(values)
    }

    /// Group `values` and print the result to stdout.
    pub fn run(values: Vec<Value>, format: OutputFormat, config: GroupConfig) -> Result<()> {
        debug!(
            "{}: grouping {} integers (format: {format})",
            Env::SYS_NAME,
            values.len()
        );
        let grouper = PairSumGrouper::with_config(values, config);
        let results = grouper.formatted_results();
        print!("{}", Self::render(&results, format)?);

        Ok(())
    }

    pub fn render(results: &[PairSum], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::render_text(results)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(results)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Csv => Self::render_csv(results),
        }
    }

    fn render_text(results: &[PairSum]) -> String {
        if results.is_empty() {
            return format!("{NO_PAIRS_MSG}\n");
        }

        results
            .iter()
            .map(|pair_sum| format!("{pair_sum}\n"))
            .collect()
    }

    /// One row per pair, so a sum with `k` pairs spans `k` rows.
    fn render_csv(results: &[PairSum]) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(["Sum", "A", "B", "PosA", "PosB"])?;
        for pair_sum in results {
            for pair in &pair_sum.pairs {
                wtr.write_record([
                    pair_sum.sum.to_string(),
                    pair.values.0.to_string(),
                    pair.values.1.to_string(),
                    pair.positions.0.to_string(),
                    pair.positions.1.to_string(),
                ])?;
            }
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow!("{}: failed to flush csv output: {}", Env::SYS_NAME, e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairsum::group;

    #[test]
    fn test_render_text() {
        let results = group(&[6, 4, 12, 10, 22, 54, 32, 42, 21, 11]).sorted();
        let text = Find::render(&results, OutputFormat::Text).unwrap();
        assert!(text.contains("Pairs : ( 4, 12) ( 6, 10) have sum : 16\n"));

        // Ascending sums
        let sums: Vec<i128> = text
            .lines()
            .map(|line| line.rsplit(' ').next().unwrap().parse().unwrap())
            .collect();
        let mut sorted = sums.clone();
        sorted.sort();
        assert_eq!(sums, sorted);
    }

    #[test]
    fn test_render_text_empty() {
        let text = Find::render(&[], OutputFormat::Text).unwrap();
        assert_eq!(text, "No pairs with equal sum found.\n");
    }

    #[test]
    fn test_render_json() {
        let results = group(&[1, 2, 3, 4]).sorted();
        let json = Find::render(&results, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["sum"], 5);
        assert_eq!(parsed[0]["pairs"][0]["values"], serde_json::json!([1, 4]));
        assert_eq!(parsed[0]["pairs"][1]["values"], serde_json::json!([2, 3]));
    }

    #[test]
    fn test_render_csv() {
        let results = group(&[1, 2, 3, 4]).sorted();
        let csv = Find::render(&results, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "Sum,A,B,PosA,PosB\n5,1,4,0,3\n5,2,3,1,2\n");
    }

    #[test]
    fn test_load_rejects_non_integer() {
        let array = vec!["1".to_string(), "two".to_string()];
        let err = Find::load(&array, None).unwrap_err();
        assert!(err.to_string().contains("invalid input"));
    }
}
