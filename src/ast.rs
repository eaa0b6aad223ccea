// AST (Abstract Syntax Tree) definitions for the Ember front end

use crate::token::Token;
use std::fmt;

/// Root node of the AST: an ordered sequence of statements.
///
/// Statement order is source order. An empty sequence is valid (empty
/// source). The program exclusively owns its statements, each statement its
/// child expressions; the tree is never mutated after parsing.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement variants. The set is closed and matched exhaustively wherever
/// nodes are rendered or walked.
#[derive(Debug, Clone)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// Literal text of the statement's defining token.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(statement) => &statement.token.literal,
            Statement::Return(statement) => &statement.token.literal,
            Statement::Expression(statement) => &statement.token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(statement) => write!(f, "{}", statement),
            Statement::Return(statement) => write!(f, "{}", statement),
            Statement::Expression(statement) => write!(f, "{}", statement),
        }
    }
}

/// `let <name> = <value>;` binds a name to a value.
///
/// `value` is absent while right-hand-side parsing is not wired into the
/// `let` rule; rendering shows the placeholder `nil` so a missing expression
/// stays visible in round-trip output instead of silently disappearing.
#[derive(Debug, Clone)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        write_value(f, &self.value)?;
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    pub value: Option<Expression>,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        write_value(f, &self.value)?;
        write!(f, ";")
    }
}

/// A bare expression in statement position, e.g. `foobar;` typed at the REPL.
#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, &self.expression)
    }
}

/// Expression variants. Currently only identifiers; further forms (literals,
/// prefix/infix operators, calls) extend this enum together with the parser's
/// dispatch tables.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
}

impl Expression {
    /// Literal text of the expression's defining token.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(identifier) => &identifier.token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
        }
    }
}

/// An identifier used as an expression, e.g. `foo` in `let foo = bar;`.
#[derive(Debug, Clone)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An absent value renders as the `nil` placeholder, never as nothing.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Option<Expression>) -> fmt::Result {
    match value {
        Some(expression) => write!(f, "{}", expression),
        None => write!(f, "nil"),
    }
}
