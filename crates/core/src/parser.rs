use crate::error::SyntaxError;
use crate::lexer::{Keyword, Token};

// ──────────────────────────────────────────────
// Line parser
// ──────────────────────────────────────────────

/// Predictive descent over one line's tokens. Every decision point looks
/// at the current token only (LL(1)); the first failure aborts the whole
/// check.
struct LineParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// 1-based source line, for error construction.
    line: u32,
    /// Count of open `while` blocks, threaded across lines by the
    /// program scan.
    while_depth: u32,
    /// Open parenthesized groups on this line. `etail` yields on `)`
    /// only while a group is open.
    paren_depth: u32,
}

/// Check one line: optional label, then a statement with any `;`-chained
/// continuations. Returns the while-nesting depth after the line.
pub(crate) fn check_line(
    tokens: &[Token],
    line: u32,
    while_depth: u32,
) -> Result<u32, SyntaxError> {
    let mut parser = LineParser {
        tokens,
        pos: 0,
        line,
        while_depth,
        paren_depth: 0,
    };
    parser.line_body()?;
    Ok(parser.while_depth)
}

impl<'a> LineParser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_second(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // ── Line and statement productions ───────────────────────────────

    // line → label stmt linetail | stmt linetail
    fn line_body(&mut self) -> Result<(), SyntaxError> {
        if self.peek_second() == Some(&Token::Colon) {
            // Label prefix: the head must be an identifier
            match self.peek() {
                Some(Token::Ident(_)) => {
                    self.advance();
                    self.advance();
                }
                _ => return Err(SyntaxError::invalid_label(self.line)),
            }
        }
        self.statement()
    }

    // Eleven statement forms, dispatched on the leading token (and for
    // assignment, the token after the head). Every form consumes to the
    // end of its clause, so nothing is left over when this returns Ok.
    fn statement(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            // id = expr
            Some(Token::Ident(_)) if self.peek_second() == Some(&Token::Eq) => {
                self.advance();
                self.advance();
                self.expr()
            }
            Some(Token::Keyword(Keyword::If)) => {
                self.advance();
                self.boolean()
            }
            Some(Token::Keyword(Keyword::While)) => {
                self.advance();
                // Opened before the condition is read, so a `;`-chained
                // statement inside the condition already sees the block
                self.while_depth += 1;
                self.boolean()
            }
            Some(Token::Keyword(Keyword::EndWhile)) => {
                self.advance();
                self.nothing_follows()?;
                if self.while_depth == 0 {
                    return Err(SyntaxError::endwhile_without_while(self.line));
                }
                self.while_depth -= 1;
                Ok(())
            }
            Some(Token::Keyword(Keyword::Read)) => {
                self.advance();
                self.ident_target()
            }
            Some(Token::Keyword(Keyword::Write)) => {
                self.advance();
                self.expr()
            }
            Some(Token::Keyword(Keyword::Goto)) | Some(Token::Keyword(Keyword::Gosub)) => {
                self.advance();
                self.ident_target()
            }
            Some(Token::Keyword(Keyword::Return))
            | Some(Token::Keyword(Keyword::Break))
            | Some(Token::Keyword(Keyword::End)) => {
                self.advance();
                self.nothing_follows()
            }
            _ => Err(SyntaxError::invalid_statement(self.line)),
        }
    }

    // Target of read/goto/gosub: exactly one identifier.
    fn ident_target(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                self.advance();
                self.nothing_follows()
            }
            _ => Err(SyntaxError::invalid_statement(self.line)),
        }
    }

    // Arity check for the bare forms: the keyword ends the line.
    fn nothing_follows(&self) -> Result<(), SyntaxError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(SyntaxError::invalid_statement(self.line))
        }
    }

    // ── Boolean productions ──────────────────────────────────────────

    // boolean → true | false | ( boolean ) | operand bool-op expr
    fn boolean(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(Token::Keyword(Keyword::True)) | Some(Token::Keyword(Keyword::False)) => {
                self.advance();
                self.end_of_clause()
            }
            Some(Token::LParen) => {
                self.advance();
                self.paren_depth += 1;
                self.boolean()?;
                self.expect_rparen()?;
                self.paren_depth -= 1;
                self.end_of_clause()
            }
            _ => {
                self.comparison_operand()?;
                match self.peek() {
                    Some(t) if t.is_compare_op() => self.advance(),
                    _ => return Err(SyntaxError::invalid_boolean_operator(self.line)),
                }
                // Right side is a full expression, parentheses and
                // `;`-chaining included
                self.expr()
            }
        }
    }

    // Left side of a comparison: a single (possibly signed) operand.
    fn comparison_operand(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(Token::Ident(_)) | Some(Token::Number(_)) => {
                self.advance();
                Ok(())
            }
            Some(Token::Plus) | Some(Token::Minus)
                if matches!(self.peek_second(), Some(Token::Number(_))) =>
            {
                self.advance();
                self.advance();
                Ok(())
            }
            _ => Err(SyntaxError::invalid_boolean(self.line)),
        }
    }

    // A literal or parenthesized boolean closes its clause here: end of
    // line, or the `)` of an open group.
    fn end_of_clause(&self) -> Result<(), SyntaxError> {
        match self.peek() {
            None => Ok(()),
            Some(Token::RParen) if self.paren_depth > 0 => Ok(()),
            _ => Err(SyntaxError::invalid_boolean(self.line)),
        }
    }

    // ── Expression productions ───────────────────────────────────────

    // expr → id etail | num etail | sign num etail | ( expr ) etail
    //
    // No operator precedence anywhere below: `etail` recurses into a
    // full expression after any operator, so `a+b*c` and `a+(b*c)` walk
    // the same shape. That flatness is part of the grammar.
    fn expr(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(Token::Ident(_)) | Some(Token::Number(_)) => {
                self.advance();
                self.etail()
            }
            Some(Token::Plus) | Some(Token::Minus)
                if matches!(self.peek_second(), Some(Token::Number(_))) =>
            {
                // Signed literal: the sign belongs to FIRST(expr), the
                // tokenizer always emits it as a bare operator
                self.advance();
                self.advance();
                self.etail()
            }
            Some(Token::LParen) => {
                self.advance();
                self.paren_depth += 1;
                self.expr()?;
                self.expect_rparen()?;
                self.paren_depth -= 1;
                self.etail()
            }
            _ => Err(SyntaxError::invalid_expression(self.line)),
        }
    }

    // etail → (+|-|*|/) expr | ; stmt | ε
    // ε applies at end of line, or at the `)` of an open group (handed
    // back unconsumed for the group to close).
    fn etail(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            None => Ok(()),
            Some(t) if t.is_arith_op() => {
                self.advance();
                self.expr()
            }
            Some(Token::Semicolon) => {
                // linetail: the rest of the line is a new statement
                self.advance();
                self.statement()
            }
            Some(Token::RParen) if self.paren_depth > 0 => Ok(()),
            _ => Err(SyntaxError::invalid_expression_tail(self.line)),
        }
    }

    fn expect_rparen(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(Token::RParen) => {
                self.advance();
                Ok(())
            }
            _ => Err(SyntaxError::invalid_expression(self.line)),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
