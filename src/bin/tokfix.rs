//! Command-line interface for tokfix
//! This binary tokenizes source files, runs the transformer pipeline, and prints the resulting token stream.
//!
//! Usage:
//!   tokfix tokens `<path>` [--format `<format>`] [--raw]  - Print the (transformed) token stream
//!   tokfix list-transformers                           - List default transformers and custom token kinds

use clap::{Arg, ArgAction, Command};
use std::fs;

use tokfix::fixer::formats::{render_tokens, tokens_to_json};
use tokfix::fixer::lexer::tokenize;
use tokfix::fixer::registry::TransformerRegistry;

fn main() {
    let matches = Command::new("tokfix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A token-level fixer for brace-style source code")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a file and print the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Skip the transformer pipeline and print raw lexer output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list-transformers")
                .about("List default transformers in execution order"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            let raw = tokens_matches.get_flag("raw");
            handle_tokens_command(path, format, raw);
        }
        Some(("list-transformers", _)) => {
            handle_list_transformers_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str, raw: bool) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading '{}': {}", path, e);
            std::process::exit(1);
        }
    };

    let registry = TransformerRegistry::with_defaults();
    let mut tokens = tokenize(&source);

    if !raw {
        if let Err(e) = registry.transform(&mut tokens) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    match format {
        "text" => print!("{}", render_tokens(&tokens, &registry)),
        "json" => match tokens_to_json(&tokens, &registry) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing tokens: {}", e);
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Unknown format '{}': expected 'text' or 'json'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the list-transformers command
fn handle_list_transformers_command() {
    let registry = TransformerRegistry::with_defaults();

    println!("Transformers (execution order):");
    for transformer in registry.ordered_transformers() {
        println!(
            "  {} (priority {})",
            transformer.name(),
            transformer.priority()
        );
        if !transformer.description().is_empty() {
            println!("      {}", transformer.description());
        }
    }

    println!();
    println!("Custom token kinds:");
    for (kind, name) in registry.namespace().entries() {
        println!("  {} -> {}", kind.0, name);
    }
}
