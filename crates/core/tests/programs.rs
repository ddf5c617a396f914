//! Whole-program acceptance and rejection checks through the public
//! entry points.

use rill_core::{check_lines, SyntaxError};

fn expect_error(lines: &[&str]) -> SyntaxError {
    check_lines(lines).unwrap_err()
}

#[test]
fn minimal_assignment_program_is_accepted() {
    assert!(check_lines(&["x=1", "$$"]).is_ok());
}

#[test]
fn dangling_operator_reports_line_one() {
    let err = expect_error(&["write 1+", "$$"]);
    assert_eq!(err.to_string(), "Syntax error on line 1: invalid expression");
}

#[test]
fn labeled_while_loop_is_accepted() {
    assert!(check_lines(&["loop: while true", "endwhile", "$$"]).is_ok());
}

#[test]
fn endwhile_without_while_reports_line_one() {
    let err = expect_error(&["endwhile", "$$"]);
    assert_eq!(
        err.to_string(),
        "Syntax error on line 1: endwhile without open while"
    );
}

#[test]
fn program_without_sentinel_is_rejected() {
    let err = expect_error(&["x=1"]);
    assert_eq!(err.line, 2);
    assert_eq!(err.message, "missing sentinel marker");
}

#[test]
fn parenthesized_boolean_comparison_is_accepted() {
    assert!(check_lines(&["if (a=b)", "$$"]).is_ok());
}

#[test]
fn deeply_nested_parentheses_validate() {
    assert!(check_lines(&["x=((a+1))", "$$"]).is_ok());

    let deep = format!("x={}a+1{}", "(".repeat(40), ")".repeat(40));
    assert!(check_lines(&[deep.as_str(), "$$"]).is_ok());
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    let err = expect_error(&["x=(a+1", "$$"]);
    assert_eq!(err.message, "invalid expression");

    let err = expect_error(&["x=(((a))", "$$"]);
    assert_eq!(err.message, "invalid expression");
}

#[test]
fn nested_while_blocks_balance_at_any_depth() {
    assert!(check_lines(&[
        "i = 0",
        "while i < 10",
        "j = 0",
        "while j < 10",
        "while true",
        "j = j + 1",
        "endwhile",
        "endwhile",
        "i = i + 1",
        "endwhile",
        "$$",
    ])
    .is_ok());
}

#[test]
fn first_error_wins_over_later_errors() {
    let err = expect_error(&["endwhile", "write 1+", "$$"]);
    assert_eq!(err.line, 1);
    assert_eq!(err.message, "endwhile without open while");
}

#[test]
fn a_realistic_program_validates() {
    assert!(check_lines(&[
        "main: read n",
        "total = 0",
        "count = 1",
        "loop: while count <= n",
        "total = total + count; count = count + 1",
        "endwhile",
        "if total > 100",
        "gosub report",
        "write total",
        "goto fin",
        "report: write total / 2",
        "return",
        "fin: end",
        "$$",
    ])
    .is_ok());
}

#[test]
fn every_error_kind_is_reachable_from_a_program() {
    let cases: &[(&[&str], u32, &str)] = &[
        (&["1x: y=2", "$$"], 1, "invalid label"),
        (&["bogus", "$$"], 1, "invalid statement"),
        (&["write 1+", "$$"], 1, "invalid expression"),
        (&["x=1)", "$$"], 1, "invalid expression tail"),
        (&["if *", "$$"], 1, "invalid boolean"),
        (&["if a 1", "$$"], 1, "invalid boolean operator"),
        (&["endwhile", "$$"], 1, "endwhile without open while"),
        (&["x=1"], 2, "missing sentinel marker"),
    ];
    for (lines, line, message) in cases {
        let err = expect_error(lines);
        assert_eq!(err.line, *line, "line for {:?}", lines);
        assert_eq!(err.message, *message, "message for {:?}", lines);
    }
}
