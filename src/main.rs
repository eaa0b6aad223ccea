// Ember: front end for a small interpreted language

use std::fs;
use std::io;
use std::path::Path;

use ember::lexer::Lexer;
use ember::parser::Parser;
use ember::repl;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // No file argument: interactive session.
    if args.len() < 2 {
        println!(
            "Ember {}. Type a statement, Ctrl-D exits.",
            env!("CARGO_PKG_VERSION")
        );
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::start(&mut stdin.lock(), &mut stdout.lock())?;
        return Ok(());
    }

    let source_file = &args[1];
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("ember");

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        eprintln!("Usage: {} [file.em]", program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(source_file)?;

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("Parsing {} failed:", source_file);
        for error in parser.errors() {
            eprintln!("  {}", error);
        }
        std::process::exit(1);
    }

    eprintln!(
        "Parsed {} statement(s) from {}.",
        program.statements.len(),
        source_file
    );
    println!("{}", program);

    Ok(())
}
