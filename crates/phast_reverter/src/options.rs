//! Reverter options.

use serde::{Deserialize, Serialize};

/// The text rendered for anything the reverter cannot show.
pub const DEFAULT_PLACEHOLDER: &str = "(unknown)";

/// Options for the reverter.
///
/// Deserialisable so callers can embed it in their own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverterOptions {
    /// Text substituted for unregistered kinds and for missing children.
    pub placeholder: String,
}

impl Default for ReverterOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholder() {
        assert_eq!(ReverterOptions::default().placeholder, "(unknown)");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: ReverterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ReverterOptions::default());

        let options: ReverterOptions = serde_json::from_str(r#"{"placeholder": "?"}"#).unwrap();
        assert_eq!(options.placeholder, "?");
    }
}
