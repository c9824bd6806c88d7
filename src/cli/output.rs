//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{CarematchArgs, OutputFormat};
use crate::error::Result;

/// Result structure for department resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub symptom: String,
    pub departments: Vec<String>,
}

/// Result structure for address normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub address: String,
    pub normalized: String,
}

/// Summary of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub requests: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CarematchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Write one compact JSON document followed by a newline.
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CarematchArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if value.get("recommendations").is_some() {
        output_recommendations_human(&value)
    } else if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        println!("Error: {error}");
        Ok(())
    } else {
        output_generic_human(&value)
    }
}

/// Output a recommendation response in human format.
fn output_recommendations_human(value: &serde_json::Value) -> Result<()> {
    if let Some(departments) = value.get("matched_department").and_then(|d| d.as_array()) {
        println!("Departments: {}", join_strings(departments));
        println!();
    }

    if let Some(recommendations) = value.get("recommendations").and_then(|r| r.as_array()) {
        println!("Recommendations:");
        println!("════════════════");

        for (i, entry) in recommendations.iter().enumerate() {
            let name = entry
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("(none)");
            let location = entry.get("location").and_then(|l| l.as_str()).unwrap_or("");
            let departments = entry
                .get("matched_department")
                .and_then(|d| d.as_array())
                .map(|d| join_strings(d))
                .unwrap_or_default();

            println!();
            println!("{}. {name}", i + 1);
            println!("   {location}");
            println!("   {departments}");
        }
    }
    Ok(())
}

/// Generic output for other types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CarematchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn join_strings(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => join_strings(arr),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_write_json_line() {
        let mut buffer = Vec::new();
        write_json_line(&mut buffer, &json!({"message": "ok"})).unwrap();
        write_json_line(&mut buffer, &json!({"error": "bad"})).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "{\"message\":\"ok\"}\n{\"error\":\"bad\"}\n");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("내과")), "내과");
        assert_eq!(format_value(&json!(["내과", "외과"])), "내과, 외과");
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(3)), "3");
    }
}
