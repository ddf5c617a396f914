//! Program-level scan: sentinel detection, line numbering, and the
//! while-depth thread connecting lines.

use crate::error::SyntaxError;
use crate::lexer::tokenize;
use crate::parser::check_line;

/// The line that terminates program text.
pub const SENTINEL: &str = "$$";

/// Validate a program given as pre-split lines.
///
/// Lines are checked in order up to the first line that is exactly
/// [`SENTINEL`] after trimming; lines beyond the sentinel are never
/// examined. `Ok(())` is acceptance; the first failure anywhere aborts
/// the scan with the 1-based line it occurred on. An input with no
/// sentinel fails on the line just past its end.
pub fn check_lines<S: AsRef<str>>(lines: &[S]) -> Result<(), SyntaxError> {
    let mut while_depth: u32 = 0;
    let mut line_no: u32 = 0;

    for raw in lines {
        line_no += 1;
        let text = raw.as_ref();
        if text.trim() == SENTINEL {
            return Ok(());
        }
        while_depth = check_line(&tokenize(text), line_no, while_depth)?;
    }

    Err(SyntaxError::missing_sentinel(line_no + 1))
}

/// Validate a program given as one newline-delimited string.
pub fn check_source(src: &str) -> Result<(), SyntaxError> {
    let lines: Vec<&str> = src.lines().collect();
    check_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_trimmed() {
        assert!(check_lines(&["x=1", "  $$  "]).is_ok());
    }

    #[test]
    fn lines_after_the_sentinel_are_never_examined() {
        assert!(check_lines(&["x=1", "$$", "this is not a program"]).is_ok());
    }

    #[test]
    fn sentinel_must_stand_alone_on_its_line() {
        // `$` fits no token class, so a sentinel glued to a statement
        // fails inside that statement
        let err = check_lines(&["x=1 $$"]).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.message, "invalid expression tail");
    }

    #[test]
    fn missing_sentinel_reports_the_line_past_the_input() {
        let err = check_lines(&["x=1"]).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.message, "missing sentinel marker");
    }

    #[test]
    fn empty_input_is_missing_the_sentinel_at_line_one() {
        let err = check_lines::<&str>(&[]).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.message, "missing sentinel marker");
    }

    #[test]
    fn first_failing_line_is_reported() {
        let err = check_lines(&["x=1", "y=2", "write 1+", "z=3", "$$"]).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.message, "invalid expression");
    }

    #[test]
    fn while_depth_carries_across_lines() {
        assert!(check_lines(&[
            "while true",
            "while a<b",
            "x=1",
            "endwhile",
            "endwhile",
            "$$",
        ])
        .is_ok());
    }

    #[test]
    fn extra_endwhile_fails_at_its_line() {
        let err = check_lines(&["while true", "endwhile", "endwhile", "$$"]).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.message, "endwhile without open while");
    }

    #[test]
    fn unclosed_while_at_the_sentinel_is_accepted() {
        // Block closure at end of program is not checked
        assert!(check_lines(&["while true", "x=1", "$$"]).is_ok());
    }

    #[test]
    fn checking_is_idempotent() {
        let program = ["loop: while true", "endwhile", "$$"];
        assert_eq!(check_lines(&program), check_lines(&program));
        let bad = ["write 1+", "$$"];
        assert_eq!(check_lines(&bad), check_lines(&bad));
    }

    #[test]
    fn check_source_splits_on_line_boundaries() {
        assert!(check_source("x=1\ny=2\n$$\n").is_ok());
        assert!(check_source("x=1\r\n$$\r\n").is_ok());
        let err = check_source("x=1").unwrap_err();
        assert_eq!(err.message, "missing sentinel marker");
    }

    #[test]
    fn verdict_line_rendering() {
        let err = check_lines(&["endwhile", "$$"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Syntax error on line 1: endwhile without open while"
        );
        assert_eq!(
            err.to_json_value(),
            serde_json::json!({"line": 1, "message": "endwhile without open while"})
        );
    }
}
