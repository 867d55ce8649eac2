use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use arbok::errors::ParseErrors;
use arbok::syntax;
use arbok::syntax::scanner::Scanner;
use arbok::syntax::token::Token;
use clap::{Parser, Subcommand};

/// Front end of the arbok scripting language: tokenize, parse and render.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse lines from stdin interactively (the default).
    Repl,
    /// Parse a file and print the rendered program.
    Parse {
        path: PathBuf,
        /// Print the syntax tree as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the token stream of a file.
    Tokens {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn read_source(path: &PathBuf) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read '{}': {}", path.display(), e);
        process::exit(1);
    })
}

fn parse<W: Write>(source: &[u8], json: bool, out: &mut W) -> Result<(), Box<dyn Error>> {
    let (program, errors) = syntax::parse_bytes(source);
    if !errors.is_empty() {
        return Err(Box::new(ParseErrors(errors)));
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &program)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", program)?;
    }
    Ok(())
}

fn tokens<W: Write>(source: &[u8], json: bool, out: &mut W) -> Result<(), Box<dyn Error>> {
    let tokens: Vec<Token> = Scanner::from_bytes(source).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &tokens)?;
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result: Result<(), Box<dyn Error>> = match args.command.unwrap_or(Command::Repl) {
        Command::Repl => arbok::repl::start(io::stdin().lock(), &mut out).map_err(Box::from),
        Command::Parse { path, json } => parse(&read_source(&path), json, &mut out),
        Command::Tokens { path, json } => tokens(&read_source(&path), json, &mut out),
    };

    if let Err(e) = result {
        eprintln!("{}", e.to_string().trim_end());
        process::exit(1);
    }
}
