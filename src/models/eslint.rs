//! Wire schema for ESLint's `--format json` output.
//!
//! One array element per linted file. Required fields are validated by
//! deserialization; only `ruleId` is optional (absent or null).

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
/// One per-file result object from the JSON formatter.
pub struct FileEntry {
    /// Absolute path as reported by the linter.
    pub file_path: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub messages: Vec<WireMessage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
/// One diagnostic inside a file entry. Severity is 2 for errors, 1 for
/// warnings.
pub struct WireMessage {
    pub line: u32,
    pub column: u32,
    pub severity: u8,
    pub message: String,
    #[serde(default)]
    pub rule_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entry() {
        let raw = r#"{
            "filePath": "/repo/server/app.ts",
            "errorCount": 1,
            "warningCount": 0,
            "messages": [
                {"line": 3, "column": 7, "severity": 2,
                 "message": "Unexpected any", "ruleId": "no-explicit-any"}
            ]
        }"#;
        let entry: FileEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.file_path, "/repo/server/app.ts");
        assert_eq!(entry.error_count, 1);
        assert_eq!(entry.messages.len(), 1);
        assert_eq!(entry.messages[0].rule_id.as_deref(), Some("no-explicit-any"));
    }

    #[test]
    fn test_rule_id_null_or_absent() {
        let with_null = r#"{"line": 1, "column": 1, "severity": 2,
                            "message": "Parsing error", "ruleId": null}"#;
        let msg: WireMessage = serde_json::from_str(with_null).unwrap();
        assert!(msg.rule_id.is_none());

        let absent = r#"{"line": 1, "column": 1, "severity": 1, "message": "m"}"#;
        let msg: WireMessage = serde_json::from_str(absent).unwrap();
        assert!(msg.rule_id.is_none());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        // No errorCount: must fail rather than default silently.
        let raw = r#"{"filePath": "/repo/a.ts", "warningCount": 0, "messages": []}"#;
        assert!(serde_json::from_str::<FileEntry>(raw).is_err());
    }
}
