//! Printer options and their JSON form.

use serde::{Deserialize, Serialize};

/// How type arguments are joined inside `<...>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeArgumentSeparator {
    /// The historical join: `", "` follows every argument except the first,
    /// so `Map<K, V>` renders as `Map<KV, >`. Display names already stored
    /// by consumers depend on this spelling.
    #[default]
    Legacy,
    /// `", "` between arguments: `Map<K, V>`.
    Standard,
}

/// Options for the printer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterOptions {
    pub type_argument_separator: TypeArgumentSeparator,
}

/// Parse printer options from a JSON string. Missing fields keep their
/// defaults.
pub fn parse_printer_options(content: &str) -> Result<PrinterOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse printer options from a JSON file.
pub fn parse_printer_options_file(path: &str) -> Result<PrinterOptions, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let options = parse_printer_options(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_legacy_separator() {
        let options = parse_printer_options("{}").unwrap();
        assert_eq!(options.type_argument_separator, TypeArgumentSeparator::Legacy);
        assert_eq!(options, PrinterOptions::default());
    }

    #[test]
    fn test_standard_separator() {
        let options = parse_printer_options(r#"{ "typeArgumentSeparator": "standard" }"#).unwrap();
        assert_eq!(options.type_argument_separator, TypeArgumentSeparator::Standard);
    }

    #[test]
    fn test_unknown_separator_is_rejected() {
        assert!(parse_printer_options(r#"{ "typeArgumentSeparator": "tabs" }"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(parse_printer_options_file("/nonexistent/rjava-printer.json").is_err());
    }
}
