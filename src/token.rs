//! Token definitions for the Ember lexer
//!
//! A [`Token`] is the smallest lexical unit: a [`TokenKind`] plus the literal
//! text the lexer consumed for it. Every token also carries a
//! [`SourceLocation`] so that parse errors can report an accurate line and
//! column without a separate token→location table.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token kinds produced by the lexer.
///
/// The set is closed: the parser matches on it exhaustively and the dispatch
/// tables are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte the lexer does not recognize; the literal is that single byte.
    Illegal,
    /// End of input. Emitted with an empty literal, repeatedly once reached.
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    Lparen,    // (
    Rparen,    // )
    Lbrace,    // {
    Rbrace,    // }

    // Keywords
    Let,
    Function,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Int => write!(f, "integer literal"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Asterisk => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Lparen => write!(f, "'('"),
            TokenKind::Rparen => write!(f, "')'"),
            TokenKind::Lbrace => write!(f, "'{{'"),
            TokenKind::Rbrace => write!(f, "'}}'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::Function => write!(f, "'fn'"),
            TokenKind::Return => write!(f, "'return'"),
        }
    }
}

/// A lexical token: kind, the literal text consumed for it, and where in the
/// source it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.literal),
            TokenKind::Int => write!(f, "integer literal {}", self.literal),
            TokenKind::Illegal => write!(f, "illegal character '{}'", self.literal),
            kind => write!(f, "{}", kind),
        }
    }
}

/// The language keywords. Built once on first use and never mutated.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut keywords = FxHashMap::default();
    keywords.insert("let", TokenKind::Let);
    keywords.insert("fn", TokenKind::Function);
    keywords.insert("return", TokenKind::Return);
    keywords
});

/// Classify a consumed identifier run: a keyword kind if the text is in the
/// keyword table, [`TokenKind::Ident`] otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("lettuce"), TokenKind::Ident);
        assert_eq!(lookup_ident("x"), TokenKind::Ident);
    }

    #[test]
    fn test_display_for_diagnostics() {
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Assign.to_string(), "'='");
        assert_eq!(TokenKind::Eq.to_string(), "'=='");
        assert_eq!(TokenKind::Let.to_string(), "'let'");

        let token = Token::new(TokenKind::Ident, "foo", SourceLocation::new(1, 1));
        assert_eq!(token.to_string(), "identifier 'foo'");
    }
}
