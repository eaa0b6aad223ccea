//! Parser for Ember source text
//!
//! Transforms the token stream pulled from a [`Lexer`] into an AST rooted at
//! [`Program`]. Statements are parsed by recursive descent with a single
//! token of lookahead; expressions go through a precedence-climbing (Pratt)
//! engine driven by two per-token-kind dispatch tables: prefix rules for
//! tokens that can start an expression, and infix rules for tokens that can
//! continue one given a left operand. Both tables are filled at construction and never change
//! afterwards.
//!
//! Syntax errors never abort [`Parser::parse_program`]: a failed expectation
//! records a diagnostic, the enclosing statement is discarded, and scanning
//! resumes one token further on. The caller inspects [`Parser::errors`] and
//! decides whether a non-empty list means the parse failed.

use crate::ast::{
    Expression, ExpressionStatement, Identifier, LetStatement, Program, ReturnStatement, Statement,
};
use crate::lexer::Lexer;
use crate::token::{SourceLocation, Token, TokenKind};
use rustc_hash::FxHashMap;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Operator binding strength, strictly increasing.
///
/// The ladder names every level the expression grammar is designed to grow
/// into; the engine compares levels with `<` when deciding whether an infix
/// operator binds to the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` or `!=`
    Equals,
    /// `<` or `>`
    LessGreater,
    /// `+` or `-`
    Sum,
    /// `*` or `/`
    Product,
    /// `-x` or `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Binding strength of `kind` used as an infix operator.
    fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
            TokenKind::Lparen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Parses an expression from the current token onward.
type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
/// Continues an expression given the already-parsed left operand.
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// Recursive descent parser over a [`Lexer`]'s token stream.
pub struct Parser {
    lexer: Lexer,
    /// Token under examination.
    cur_token: Token,
    /// One-token lookahead.
    peek_token: Token,
    errors: Vec<ParseError>,
    prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: FxHashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    /// Create a parser, register the expression rules, and pull two tokens so
    /// both the current and the lookahead token are populated.
    pub fn new(lexer: Lexer) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", SourceLocation::new(0, 0));
        let mut parser = Parser {
            lexer,
            cur_token: placeholder.clone(),
            peek_token: placeholder,
            errors: Vec::new(),
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse statements until the end-of-input token, appending each
    /// non-absent one to the program. Never fails outright; diagnostics
    /// accumulate in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn register_prefix(&mut self, kind: TokenKind, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, parse_fn);
    }

    fn next_token(&mut self) {
        self.cur_token = self.peek_token.clone();
        self.peek_token = self.lexer.next_token();
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <identifier> = <expression>;`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // TODO: parse the right-hand side with parse_expression once value
        // parsing is wired into this rule; until then skip to the semicolon
        // and leave the value absent.
        self.skip_to_semicolon();

        Some(Statement::Let(LetStatement {
            token,
            name,
            value: None,
        }))
    }

    /// `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        self.next_token();

        // TODO: same as the let rule; the return value is skipped, not
        // parsed, at this stage.
        self.skip_to_semicolon();

        Some(Statement::Return(ReturnStatement { token, value: None }))
    }

    /// A bare expression in statement position. The trailing semicolon is
    /// optional so an expression typed interactively needs no terminator.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression: Some(expression),
        }))
    }

    /// Precedence-climbing core. Looks up the prefix rule for the current
    /// token, then folds infix rules into the left operand while the next
    /// operator binds tighter than `min_precedence`.
    ///
    /// A token with no registered prefix rule yields an absent expression and
    /// no diagnostic; the enclosing statement is discarded by its caller.
    fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expression> {
        let prefix = self.prefix_parse_fns.get(&self.cur_token.kind).copied()?;
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon)
            && min_precedence < Precedence::of(self.peek_token.kind)
        {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind).copied() {
                Some(infix) => infix,
                None => return Some(left),
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    /// Coarse error recovery: advance to the next semicolon or the end of
    /// input. Does not resynchronize on nested braces or parentheses.
    fn skip_to_semicolon(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the lookahead token has the expected kind; otherwise record
    /// a diagnostic and leave the cursor where it is.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError {
            message: format!(
                "expected next token to be {}, got {} instead",
                expected, self.peek_token.kind
            ),
            location: self.peek_token.location,
        });
    }
}
