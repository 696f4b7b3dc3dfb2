//! Command-line interface for textindex
//!
//! Reads a marked-up text document, builds its index, and writes the
//! rendering to stdout or to a file.
//!
//! Usage:
//!   textindex `<input>` [--output `<path>`] [--format dl|json] [--verbose]

use clap::{Arg, ArgAction, Command};
use textindex::textindex::index::render_description_list;
use textindex::textindex::pipeline::index_from_text;

fn main() {
    let matches = Command::new("textindex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build a subject index from inline markup in a text document")
        .arg(
            Arg::new("input")
                .help("Path to the input document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the index to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'dl' or 'json'")
                .default_value("dl"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print a processing summary to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output");
    let format = matches.get_one::<String>("format").unwrap();
    let verbose = matches.get_flag("verbose");

    let source = std::fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", input, e);
        std::process::exit(1);
    });

    let root = index_from_text(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let rendered = match format.as_str() {
        "dl" => render_description_list(&root),
        "json" => serde_json::to_string_pretty(&root).unwrap_or_else(|e| {
            eprintln!("Error serializing index: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Error: unknown format '{}' (expected 'dl' or 'json')", other);
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => println!("{}", rendered),
    }

    if verbose {
        eprintln!(
            "Processed {} -> {} ({} terms)",
            input,
            output.map(String::as_str).unwrap_or("stdout"),
            root.term_count()
        );
    }
}
