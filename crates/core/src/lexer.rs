/// Reserved words of the language. Matched exactly, lowercase; a keyword
/// never doubles as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    While,
    EndWhile,
    Read,
    Write,
    Goto,
    Gosub,
    Return,
    Break,
    End,
    True,
    False,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Keyword> {
        match word {
            "if" => Some(Keyword::If),
            "while" => Some(Keyword::While),
            "endwhile" => Some(Keyword::EndWhile),
            "read" => Some(Keyword::Read),
            "write" => Some(Keyword::Write),
            "goto" => Some(Keyword::Goto),
            "gosub" => Some(Keyword::Gosub),
            "return" => Some(Keyword::Return),
            "break" => Some(Keyword::Break),
            "end" => Some(Keyword::End),
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::While => "while",
            Keyword::EndWhile => "endwhile",
            Keyword::Read => "read",
            Keyword::Write => "write",
            Keyword::Goto => "goto",
            Keyword::Gosub => "gosub",
            Keyword::Return => "return",
            Keyword::Break => "break",
            Keyword::End => "end",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Identifier: one ASCII letter, then letters/digits
    Ident(String),
    /// Unsigned digit run -- kept as text, the checker never evaluates
    Number(String),
    Keyword(Keyword),
    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,
    // Relational operators
    Lt,
    Gt,
    Le,
    Ge,
    Ne, // <>
    Eq, // = serves as both assignment and equality
    // Punctuation
    LParen,
    RParen,
    Semicolon,
    Colon,
    /// Character run matching no other class; rejected wherever a
    /// validator meets it
    Unknown(String),
}

impl Token {
    /// `+ - * /`
    pub fn is_arith_op(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Star | Token::Slash
        )
    }

    /// `< > >= <= <> =`
    pub fn is_compare_op(&self) -> bool {
        matches!(
            self,
            Token::Lt | Token::Gt | Token::Le | Token::Ge | Token::Ne | Token::Eq
        )
    }
}

/// Split one source line into tagged tokens.
///
/// Whitespace separates tokens and is discarded; each parenthesis,
/// operator, and punctuation mark is its own token. The pass is total:
/// it never reports an error, and text that fits no class comes back as
/// [`Token::Unknown`] for the grammar to reject.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // Word: maximal alphanumeric run, classified by shape
        if c.is_ascii_alphanumeric() {
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_alphanumeric() {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().collect();
            tokens.push(classify_word(word));
            continue;
        }

        // Two-character relational operators before their one-character prefixes
        if c == '<' && pos + 1 < chars.len() && chars[pos + 1] == '>' {
            tokens.push(Token::Ne);
            pos += 2;
            continue;
        }
        if c == '<' && pos + 1 < chars.len() && chars[pos + 1] == '=' {
            tokens.push(Token::Le);
            pos += 2;
            continue;
        }
        if c == '>' && pos + 1 < chars.len() && chars[pos + 1] == '=' {
            tokens.push(Token::Ge);
            pos += 2;
            continue;
        }

        tokens.push(match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '<' => Token::Lt,
            '>' => Token::Gt,
            '=' => Token::Eq,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ';' => Token::Semicolon,
            ':' => Token::Colon,
            other => Token::Unknown(other.to_string()),
        });
        pos += 1;
    }

    tokens
}

fn classify_word(word: String) -> Token {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return Token::Number(word);
    }
    if word.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return match Keyword::from_word(&word) {
            Some(kw) => Token::Keyword(kw),
            None => Token::Ident(word),
        };
    }
    // Digit-led mixed runs like `1x` fit no class
    Token::Unknown(word)
}
