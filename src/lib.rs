//! # Introduction
//!
//! Ember's front end: it turns raw source text into an abstract syntax tree
//! that a tree-walking evaluator can consume. No execution happens in this
//! crate — parsing either yields a [`ast::Program`] or a list of diagnostics,
//! and the caller decides what to do with them.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST
//! ```
//!
//! 1. [`token`] — token kinds, literals, and source locations.
//! 2. [`lexer`] — byte-oriented tokenizer, one token per
//!    [`lexer::Lexer::next_token`] call.
//! 3. [`parser`] — recursive-descent statement parsing with a
//!    precedence-climbing expression engine; errors accumulate instead of
//!    aborting.
//! 4. [`ast`] — the owned node tree, with canonical-text rendering.
//! 5. [`repl`] — line-oriented read–parse–print loop used by the binary.
//!
//! ## Example
//!
//! ```
//! use ember::lexer::Lexer;
//! use ember::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("let answer = 42;"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod token;
