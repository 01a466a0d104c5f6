//! Domain records built from one linter invocation's output.

pub mod eslint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classification of a diagnostic as blocking or advisory.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// ESLint encodes severity as an integer: 2 is an error, everything
    /// else counts as a warning.
    pub fn from_wire(value: u8) -> Self {
        if value == 2 {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Lowercase word used in detail listings.
    pub fn word(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone)]
/// One finding at a 1-based line/column position.
pub struct Message {
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub text: String,
    /// Identifier of the violated rule; ESLint emits null for parse errors.
    pub rule_id: Option<String>,
}

#[derive(Debug, Clone)]
/// Per-file findings, retained only when `total > 0`.
pub struct FileReport {
    /// Path relative to the working directory.
    pub path: String,
    pub errors: usize,
    pub warnings: usize,
    /// Always `errors + warnings`.
    pub total: usize,
    /// Findings in the order the linter emitted them.
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_wire() {
        assert_eq!(Severity::from_wire(2), Severity::Error);
        assert_eq!(Severity::from_wire(1), Severity::Warning);
        // Anything that is not 2 falls back to warning.
        assert_eq!(Severity::from_wire(0), Severity::Warning);
        assert_eq!(Severity::from_wire(3), Severity::Warning);
    }

    #[test]
    fn test_severity_word() {
        assert_eq!(Severity::Error.word(), "error");
        assert_eq!(Severity::Warning.word(), "warning");
    }
}
