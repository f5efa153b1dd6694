use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::Company;
use crate::error::DataLoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the company collection from a JSON file.
///
/// Expected schema:
///
/// ```json
/// [
///   {
///     "name": "Acme Robotics",
///     "sector": "Robotics",
///     "location": "Austin, TX, USA",
///     "description": "Warehouse automation.",
///     "revenue": "$10M to $50M"
///   },
///   ...
/// ]
/// ```
///
/// The top-level value must be an array. Entries that are not company-shaped
/// objects are skipped with a warning; they do not fail the load.
pub fn load_file(path: &Path) -> Result<Vec<Company>, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let companies = parse_json(path, &text)?;
    log::info!(
        "Loaded {} companies from {}",
        companies.len(),
        path.display()
    );
    Ok(companies)
}

/// Decode an already-fetched payload. `path` is only used for error context.
pub fn parse_json(path: &Path, text: &str) -> Result<Vec<Company>, DataLoadError> {
    let root: JsonValue = serde_json::from_str(text).map_err(|source| DataLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match root {
        JsonValue::Array(records) => records,
        other => {
            return Err(DataLoadError::NotASequence {
                path: path.to_path_buf(),
                found: json_kind(&other),
            })
        }
    };

    let mut companies = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        match serde_json::from_value::<Company>(rec) {
            Ok(company) => companies.push(company),
            Err(e) => log::warn!("Skipping record {i}: {e}"),
        }
    }
    Ok(companies)
}

fn json_kind(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_array() {
        let file = write_fixture(
            r#"[
                {"name": "Acme", "sector": "Fintech", "location": "Austin, TX, USA",
                 "description": "Payments", "revenue": "$10M"},
                {"name": "Globex", "sector": "Energy", "location": "Remote",
                 "description": "Grid", "revenue": "$5M to $15M"}
            ]"#,
        );
        let companies = load_file(file.path()).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Acme");
        assert_eq!(companies[1].revenue.as_deref(), Some("$5M to $15M"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("data.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let file = write_fixture("[{\"name\": ");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::Decode { .. }));
    }

    #[test]
    fn test_object_payload_is_not_a_sequence() {
        let err = parse_json(Path::new("data.json"), r#"{"companies": []}"#).unwrap_err();
        match err {
            DataLoadError::NotASequence { found, .. } => assert_eq!(found, "an object"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scalar_payload_is_not_a_sequence() {
        let err = parse_json(Path::new("data.json"), "42").unwrap_err();
        assert!(matches!(err, DataLoadError::NotASequence { found: "a number", .. }));
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let companies = parse_json(
            Path::new("data.json"),
            r#"[{"name": "Acme"}, "not a company", {"name": 7}, {"name": "Globex"}]"#,
        )
        .unwrap();
        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_null_fields_and_numeric_revenue_keep_records() {
        let companies = parse_json(
            Path::new("data.json"),
            r#"[
                {"name": "A", "location": "Austin, TX, USA", "description": null, "revenue": "$10M"},
                {"name": "B", "location": "London, UK", "revenue": 10},
                {"name": "C", "location": "Remote", "revenue": "$30M"}
            ]"#,
        )
        .unwrap();
        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(companies[0].description, "");
        assert_eq!(companies[1].revenue, None);

        let stats = crate::data::stats::compute_stats(&companies);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_revenue_millions, 20.0);
        assert_eq!(stats.country_counts.len(), 3);
    }

    #[test]
    fn test_empty_array_loads() {
        let companies = parse_json(Path::new("data.json"), "[]").unwrap();
        assert!(companies.is_empty());
    }
}
