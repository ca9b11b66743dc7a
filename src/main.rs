use std::{fs, io};

use clap::Parser;
use lolterpreter::{
    ast::Statement,
    execute,
    interpreter::{
        io::{ReadSource, WriteSink},
        lexer::{Token, TokenKind},
        value::symbols::SymbolTable,
    },
};

/// lolterpreter runs LOLCODE programs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a source file instead of the program
    /// text itself.
    #[arg(short, long)]
    file: bool,

    /// Print every token with its classification after the run.
    #[arg(short, long)]
    tokens: bool,

    /// Print the top-level variables and their values after the run.
    #[arg(short, long)]
    symbols: bool,

    /// Print the parsed statement tree after the run.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn print_token_table(tokens: &[Token]) {
    println!("{:<10} {:<26} LEXEME", "POSITION", "CLASSIFICATION");
    for token in tokens.iter().filter(|t| t.kind != TokenKind::NewLine) {
        println!("{:<10} {:<26} {}",
                 format!("{}:{}", token.line, token.col),
                 token.kind.classification(),
                 token.lexeme);
    }
}

fn print_symbol_table(symbols: &SymbolTable) {
    println!("{:<20} {:<9} VALUE", "IDENTIFIER", "TYPE");
    for (name, value) in symbols.iter() {
        println!("{name:<20} {:<9} {value}", value.type_name());
    }
}

fn print_statement_tree(body: &[Statement]) {
    for statement in body {
        println!("{statement:#?}");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let run = {
        let mut output = WriteSink::new(io::stdout().lock());
        let mut input = ReadSource::new(io::stdin().lock());
        execute(&script, &mut output, &mut input)
    };

    if args.tokens {
        print_token_table(&run.tokens);
    }
    if args.symbols {
        print_symbol_table(&run.symbols);
    }
    if args.ast {
        // Programs that fail to lex or parse have no tree; the error below says why.
        if let Ok((_, program)) = lolterpreter::parse(&script) {
            print_statement_tree(&program.body);
        }
    }

    if let Err(e) = run.result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
