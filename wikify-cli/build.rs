use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the built-in syntaxes from the wikify crate.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_SYNTAXES: &[&str] = &["jspwiki", "markdown"];

// Mirror of build_cli() from src/main.rs, so completions cover the real
// subcommand layout.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("wikify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting HTML to wiki markup")
        .arg_required_else_help(true)
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
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_SYNTAXES,
                        ))
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "wikify", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "wikify", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "wikify", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
