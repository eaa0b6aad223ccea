// Integration tests for the Ember front end

use ember::ast::Statement;
use ember::lexer::Lexer;
use ember::parser::Parser;
use ember::token::TokenKind;
use std::io::Cursor;

#[test]
fn test_token_stream_for_small_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(five, ten) {
            five + ten;
        };

        5 < 10 > 5;
        5 == 5;
        5 != 6;
    "#;

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::Lparen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::Rparen, ")"),
        (TokenKind::Lbrace, "{"),
        (TokenKind::Ident, "five"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Rbrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Eq, "=="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Int, "6"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (index, (kind, literal)) in expected.into_iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind, "token {}", index);
        assert_eq!(token.literal, literal, "token {}", index);
    }
}

#[test]
fn test_parse_program_end_to_end() {
    let source = r#"
        let x = 5;
        return x;
        x;
    "#;

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors: {:?}",
        parser.errors()
    );
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(program.statements[1], Statement::Return(_)));
    assert!(matches!(program.statements[2], Statement::Expression(_)));

    // Skipped right-hand sides render as the nil placeholder.
    assert_eq!(program.to_string(), "let x = nil;return nil;x");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_parse_errors_are_collected_not_thrown() {
    let source = "let = 5;";

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(program.statements.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert!(parser.errors()[0]
        .message
        .contains("expected next token to be identifier"));
}

#[test]
fn test_repl_prints_rendering_and_errors() {
    let mut input = Cursor::new(b"let x = 5;\nlet = 5;\n".to_vec());
    let mut output = Vec::new();

    ember::repl::start(&mut input, &mut output).expect("repl failed");

    let output = String::from_utf8(output).expect("repl output was not UTF-8");
    assert!(output.contains(">> "));
    assert!(output.contains("let x = nil;"));
    assert!(output.contains("parser errors:"));
    assert!(output.contains("expected next token to be identifier, got '=' instead"));
}
