//! rill-core: syntax checker for the Rill language.
//!
//! Rill is a small line-oriented, BASIC-like language: labeled
//! statements, flat arithmetic and boolean expressions, `if` / `while` /
//! `endwhile` / `goto` / `gosub` control statements, `read` / `write`
//! I/O, and bare `return` / `break` / `end`, with program text closed by
//! a `$$` sentinel line. The checker reports either acceptance or the
//! line number and kind of the first syntax error; it builds no AST and
//! never executes anything.
//!
//! # Public API
//!
//! Key items are re-exported at the crate root:
//!
//! - [`check_lines()`] -- validate a program given as pre-split lines
//! - [`check_source()`] -- validate one newline-delimited string
//! - [`tokenize()`] -- the single tagging pass over one line
//! - [`SyntaxError`] -- line-numbered first-error verdict
//! - [`LineSource`] -- file reading seam ([`FileSystemSource`],
//!   [`InMemorySource`])

pub mod check;
pub mod error;
pub mod lexer;
pub mod source;

mod parser;

// ── Convenience re-exports ───────────────────────────────────────────

pub use check::{check_lines, check_source, SENTINEL};
pub use error::SyntaxError;
pub use lexer::{tokenize, Keyword, Token};
pub use source::{FileSystemSource, InMemorySource, LineSource};
