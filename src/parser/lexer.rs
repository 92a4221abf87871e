//! Lexer (tokenizer) for the scripting sublanguage
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! recognizers. The lexer is total: characters it cannot classify are dropped,
//! and unterminated strings, character literals and block comments simply run
//! to the end of the input.

use super::ast::SourceLocation;
use std::fmt;

/// Words that classify as [`TokenKind::Keyword`] instead of identifiers.
pub const KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "const", "pub", "if", "else", "match", "while", "for", "in", "loop",
    "break", "continue", "return", "struct", "enum", "impl", "trait", "use", "mod", "crate",
    "self", "Self", "super", "as", "async", "await", "move", "true", "false", "None", "Some",
    "Ok", "Err", "Box", "Result", "Option", "Vec", "String", "i32", "i64", "f32", "f64", "bool",
    "char", "str", "usize", "isize",
];

/// Operators recognized by longest match, up to three characters.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&", "|",
    "^", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", "=>", "->",
    "::",
];

const PUNCTUATION: &[char] = &['(', ')', '[', ']', '{', '}', ';', ':', ',', '.'];

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        };
        f.write_str(name)
    }
}

/// A classified, positioned lexical unit.
///
/// `text` is always the raw source slice, so string literals keep their quotes
/// and numeric literals keep their type suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// True when the token's raw text equals `text`, whatever its kind.
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Tokenize `source` in one pass.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Lexer over a single source string
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Create a lexer whose first line is numbered `line`, for callers that
    /// tokenize one physical line at a time.
    pub fn starting_at(input: &str, line: usize) -> Self {
        Self {
            line,
            ..Self::new(input)
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' => {
                    self.position += 1;
                    self.column += 1;
                }
                '\n' => {
                    self.position += 1;
                    self.line += 1;
                    self.column = 1;
                }
                '/' if self.peek_ahead(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_ahead(1) == Some('*') => self.skip_block_comment(),
                '"' | '\'' => {
                    let token = self.quoted_literal(ch);
                    tokens.push(token);
                }
                '0'..='9' => {
                    let token = self.number_literal();
                    tokens.push(token);
                }
                c if c.is_alphabetic() || c == '_' => {
                    let token = self.identifier_or_keyword();
                    tokens.push(token);
                }
                _ => {
                    if let Some(token) = self.operator_or_punctuation() {
                        tokens.push(token);
                    } else {
                        tracing::trace!(
                            line = self.line,
                            column = self.column,
                            "discarding unknown character {:?}",
                            ch
                        );
                        self.position += 1;
                        self.column += 1;
                    }
                }
            }
        }

        tokens
    }

    /// String or character literal; a backslash skips the character after it.
    fn quoted_literal(&mut self, quote: char) -> Token {
        let start = self.position;
        self.position += 1;

        while let Some(ch) = self.peek() {
            if ch == quote {
                break;
            }
            if ch == '\\' && self.peek_ahead(1).is_some() {
                self.position += 1;
            }
            self.position += 1;
        }

        if self.is_at_end() {
            tracing::trace!(line = self.line, "unterminated {} literal", quote);
        } else {
            self.position += 1; // closing quote
        }

        self.emit(TokenKind::Literal, start)
    }

    /// Digits, `.`, exponent markers and signs, then an optional type suffix.
    fn number_literal(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-') {
                self.position += 1;
            } else {
                break;
            }
        }

        // Type suffix such as `i32`: starts alphabetic, may continue with digits
        if self.peek().is_some_and(char::is_alphabetic) {
            while let Some(ch) = self.peek() {
                if ch.is_alphanumeric() {
                    self.position += 1;
                } else {
                    break;
                }
            }
        }

        self.emit(TokenKind::Literal, start)
    }

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.position += 1;
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();
        let kind = if KEYWORDS.contains(&text.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        let location = self.current_location();
        self.column += self.position - start;
        Token::new(kind, text, location)
    }

    /// Longest operator first (3, 2, then 1 characters), then punctuation.
    fn operator_or_punctuation(&mut self) -> Option<Token> {
        for len in (1..=3).rev() {
            let end = self.position + len;
            if end > self.input.len() {
                continue;
            }
            let candidate: String = self.input[self.position..end].iter().collect();
            if OPERATORS.contains(&candidate.as_str()) {
                let start = self.position;
                self.position = end;
                return Some(self.emit(TokenKind::Operator, start));
            }
        }

        let ch = self.peek()?;
        if PUNCTUATION.contains(&ch) {
            let start = self.position;
            self.position += 1;
            return Some(self.emit(TokenKind::Punctuation, start));
        }

        None
    }

    /// Skip single-line comment (// ...), leaving the newline in place
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.position += 1;
            self.column += 1;
        }
    }

    /// Skip multi-line comment (/* ... */); unterminated runs to end of input
    fn skip_block_comment(&mut self) {
        self.position += 2;
        self.column += 2;

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.position += 2;
                self.column += 2;
                return;
            }
            if self.peek() == Some('\n') {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.position += 1;
        }

        tracing::trace!(line = self.line, "unterminated block comment");
    }

    /// Build a token from `start..position` at the current location, then
    /// advance the column by the token's length.
    fn emit(&mut self, kind: TokenKind, start: usize) -> Token {
        let text: String = self.input[start..self.position].iter().collect();
        let location = self.current_location();
        self.column += self.position - start;
        Token::new(kind, text, location)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
