// Command-line interface for wikify
//
// This binary converts HTML documents to wiki markup. The core capabilities
// live in the wikify crate; this is the shell interface over the registry of
// target syntaxes.
//
// Converting:
//
// The target syntax comes from --to, or is auto-detected from the output file
// extension, or falls back to the configured default.
// Usage:
//  wikify <input.html> [--to <syntax>] [--output <file>]           - Convert (default command)
//  wikify convert <input.html> [--to <syntax>] [--output <file>]   - Same as above (explicit)
//  wikify inspect <input.html>                                     - Show the parsed element tree
//  wikify --list-syntaxes [--json]                                 - List available syntaxes

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use wikify::{dom, SyntaxRegistry};
use wikify_config::{Loader, WikifyConfig};

fn build_cli() -> Command {
    Command::new("wikify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting HTML to wiki markup")
        .long_about(
            "wikify converts HTML documents to wiki markup in a chosen syntax.\n\n\
            Commands:\n  \
            - convert: Translate an HTML file to wiki markup (default)\n  \
            - inspect: View the parsed element tree\n\n\
            Examples:\n  \
            wikify page.html --to markdown          # Convert to Markdown (stdout)\n  \
            wikify page.html -o page.wiki           # Syntax detected from the output name\n  \
            wikify inspect page.html                # View the element tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-syntaxes")
                .long("list-syntaxes")
                .help("List available target syntaxes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit machine-readable output where supported")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wikify.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an HTML file to wiki markup (default command)")
                .long_about(
                    "Convert an HTML document to wiki markup.\n\n\
                    Available syntaxes:\n  \
                    - jspwiki:  Classic JSPWiki wiki syntax\n  \
                    - markdown: Markdown-like syntax\n\n\
                    The target syntax comes from --to, or from the output file\n\
                    extension, or from the configured default.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    wikify convert page.html --to jspwiki        # Convert (stdout)\n  \
                    wikify convert page.html -o page.md          # Markdown from the extension\n  \
                    wikify page.html --to markdown               # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input HTML file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target syntax (detected from the output filename if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed element tree of an HTML file")
                .arg(
                    Arg::new("input")
                        .help("Input HTML file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-syntaxes") {
        handle_list_syntaxes(matches.get_flag("json"));
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load configuration for this invocation: an explicit --config file is
/// required to exist; otherwise a wikify.toml in the working directory is
/// layered when present.
fn load_cli_config(config_path: Option<&str>) -> WikifyConfig {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("wikify.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(input: &str, to: Option<&str>, output: Option<&str>, config: &WikifyConfig) {
    let registry = SyntaxRegistry::default();

    // Resolve the target syntax: flag, then output extension, then config.
    let syntax = match to {
        Some(name) => name.to_string(),
        None => output
            .and_then(|path| registry.detect_syntax_from_filename(path))
            .unwrap_or_else(|| config.convert.syntax.clone()),
    };
    if let Err(e) = registry.get(&syntax) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = dom::parse_html(&source);
    let markup = registry.translate(&doc, &syntax).unwrap_or_else(|e| {
        eprintln!("Translation error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, markup).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{markup}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, config: &WikifyConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = dom::parse_html(&source);
    print!("{}", dom::outline(&doc, config.inspect.show_attributes));
}

/// Handle the list-syntaxes flag
fn handle_list_syntaxes(json: bool) {
    let registry = SyntaxRegistry::default();

    if json {
        let descriptors = registry.descriptors();
        match serde_json::to_string_pretty(&descriptors) {
            Ok(listing) => println!("{listing}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Available syntaxes:\n");
    for descriptor in registry.descriptors() {
        if descriptor.description.is_empty() {
            println!("  {}", descriptor.name);
        } else {
            println!("  {:<10} {}", descriptor.name, descriptor.description);
        }
    }
}
