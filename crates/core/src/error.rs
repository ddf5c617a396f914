use serde::{Deserialize, Serialize};

/// The first syntax error found while checking a program.
///
/// `Display` renders the exact verdict line the checker reports, so
/// callers can print the error as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error on line {line}: {message}")]
pub struct SyntaxError {
    /// 1-based number of the line under validation when the error was found.
    pub line: u32,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        SyntaxError {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_label(line: u32) -> Self {
        SyntaxError::new(line, "invalid label")
    }

    pub fn invalid_statement(line: u32) -> Self {
        SyntaxError::new(line, "invalid statement")
    }

    pub fn invalid_expression(line: u32) -> Self {
        SyntaxError::new(line, "invalid expression")
    }

    pub fn invalid_expression_tail(line: u32) -> Self {
        SyntaxError::new(line, "invalid expression tail")
    }

    pub fn invalid_boolean(line: u32) -> Self {
        SyntaxError::new(line, "invalid boolean")
    }

    pub fn invalid_boolean_operator(line: u32) -> Self {
        SyntaxError::new(line, "invalid boolean operator")
    }

    pub fn endwhile_without_while(line: u32) -> Self {
        SyntaxError::new(line, "endwhile without open while")
    }

    pub fn missing_sentinel(line: u32) -> Self {
        SyntaxError::new(line, "missing sentinel marker")
    }

    /// Serialize to the JSON error object emitted by `--output json`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "line": self.line,
            "message": self.message,
        })
    }
}
