use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access the library
const INPUT_FORMATS: &[&str] = &["json", "markdown"];
const OUTPUT_FORMATS: &[&str] = &["markdown", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let config = Arg::new("config")
        .long("config")
        .value_name("PATH")
        .help("Path to a folio.toml configuration file")
        .value_hint(ValueHint::FilePath)
        .global(true);

    let mut cmd = Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert blog content trees to Markdown or HTML and import legacy posts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(config)
        .subcommand(
            Command::new("convert")
                .about("Convert stored content to another format (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(INPUT_FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("post")
                .about("Render stored post records as JSON views")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("admin").long("admin").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("migrate")
                .about("Import legacy Markdown posts")
                .arg(Arg::new("dir").index(1).value_hint(ValueHint::DirPath))
                .arg(
                    Arg::new("existing")
                        .long("existing")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "folio", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "folio", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "folio", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
