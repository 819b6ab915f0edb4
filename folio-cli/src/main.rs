// Command-line interface for folio
//
// This binary converts stored blog content and imports legacy posts. The conversion work lives
// in folio-babel; this crate only reads files, applies configuration and prints results.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  folio <input> --to <format> [--from <format>] [--output <file>]          - Convert content (default)
//  folio convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  folio post <record.json> [--admin]                                       - Render a stored post (or list)
//  folio migrate [<dir>] [--existing <file>]                                - Import legacy Markdown posts
//  folio --list-formats                                                     - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Keys naming configuration settings (author-name, cover-image, status, ...) are applied to the
// loaded configuration first and are not forwarded.
// Example:
//  folio post.json --to html --extra-raw-html

use clap::{Arg, ArgAction, Command, ValueHint};
use folio_babel::migrate::{migrate_dir, MigrateOptions};
use folio_babel::post::{render_feed, PostDefaults, PostRecord, PostStatus};
use folio_babel::{FormatRegistry, HtmlOptions};
use folio_config::{FolioConfig, Loader};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "post", "migrate", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            // A following token that is not a flag is this key's value
            match args.get(i + 1).filter(|next| !next.starts_with('-')) {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert blog content trees to Markdown or HTML and import legacy posts")
        .long_about(
            "folio works with blog content as the editor stores it: a JSON tree, or a\n\
            legacy Markdown string.\n\n\
            Commands:\n  \
            - convert: Render stored content as Markdown or HTML\n  \
            - post:    Render a stored post record as the public or admin API would\n  \
            - migrate: Import legacy Markdown posts with YAML front matter\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            folio content.json --to markdown          # Tree to Markdown (stdout)\n  \
            folio content.json --to html -o out.html  # Tree to HTML file\n  \
            folio post record.json                    # Public view as JSON\n  \
            folio migrate _posts --existing slugs.txt # Import posts not yet stored",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a folio.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert stored content to another format (default command)")
                .long_about(
                    "Convert content between formats.\n\n\
                    Supported formats:\n  \
                    - json:     Editor JSON: a tree, a Markdown string or a post record (read only)\n  \
                    - markdown: Markdown (.md); read as legacy content, written from trees\n  \
                    - html:     HTML fragment (.html, write only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    HTML parameters (for legacy Markdown content):\n  \
                    --extra-raw-html [bool]       Keep raw HTML blocks\n  \
                    --extra-strikethrough [bool]  ~~strikethrough~~ extension\n  \
                    --extra-tables [bool]         Table extension\n  \
                    --extra-autolink [bool]       Autolink extension\n\n\
                    Examples:\n  \
                    folio convert content.json --to markdown\n  \
                    folio convert legacy.md --to html -o out.html\n  \
                    folio content.json --to html               # 'convert' is optional",
                )
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
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: markdown, html\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
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
            Command::new("post")
                .about("Render stored post records as JSON views")
                .long_about(
                    "Read a post record (or an array of records) as exported from the\n\
                    database and print the view the API would return.\n\n\
                    A single record prints its public view: HTML content, resolved image\n\
                    URLs and placeholders. An array prints the public feed: published\n\
                    posts only, newest first. With --admin, content is Markdown instead.",
                )
                .arg(
                    Arg::new("input")
                        .help("JSON file with a post record or an array of records")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("admin")
                        .long("admin")
                        .help("Print the admin view (Markdown content)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("migrate")
                .about("Import legacy Markdown posts")
                .long_about(
                    "Read every *.md file in a directory and print the resulting post\n\
                    records as a JSON array. The slug is the file name without extension.\n\n\
                    Files whose slug is listed in --existing (one slug per line) are skipped.\n\
                    Files that fail to import are reported on stderr; the rest still import.",
                )
                .arg(
                    Arg::new("dir")
                        .help("Directory of Markdown posts (defaults to migrate.posts_dir)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("existing")
                        .long("existing")
                        .value_name("FILE")
                        .help("File listing slugs that already exist, one per line")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or subcommand is an input file
            let looks_like_input = cleaned_args
                .get(1)
                .is_some_and(|first| !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()));
            if looks_like_input {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_tracing(&config.log.level);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                eprintln!("Error: convert requires an input file and --to");
                std::process::exit(1);
            };

            let registry = registry_from_config(&config);
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("post", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: post requires an input file");
                std::process::exit(1);
            };
            handle_post_command(input, sub_matches.get_flag("admin"), &extra_params, &config);
        }
        Some(("migrate", sub_matches)) => {
            let dir = sub_matches
                .get_one::<String>("dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| config.migrate.posts_dir.clone());
            let existing = sub_matches.get_one::<String>("existing").map(|s| s.as_str());
            reject_unused_extras(&extra_params);
            handle_migrate_command(&dir, existing, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn registry_from_config(config: &FolioConfig) -> FormatRegistry {
    FormatRegistry::with_html_options(HtmlOptions::from(&config.render))
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let content = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    tracing::debug!(from, to, legacy = content.is_raw_markdown(), "converting");

    let result = registry
        .serialize_with_options(&content, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the post command
fn handle_post_command(
    input: &str,
    admin: bool,
    extra_params: &HashMap<String, String>,
    config: &FolioConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let value: Value = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let defaults = PostDefaults::from(&config.posts);
    let html = HtmlOptions::from(&config.render)
        .with_params(extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    let rendered = match render_post_value(value, admin, &defaults, &html) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Invalid post record: {e}");
            std::process::exit(1);
        }
    };

    print_json(&rendered);
}

/// A single record renders one view; an array renders the feed.
fn render_post_value(
    value: Value,
    admin: bool,
    defaults: &PostDefaults,
    html: &HtmlOptions,
) -> Result<Value, serde_json::Error> {
    if value.is_array() {
        let posts: Vec<PostRecord> = serde_json::from_value(value)?;
        if admin {
            let views: Vec<_> = posts.iter().map(PostRecord::to_admin).collect();
            serde_json::to_value(views)
        } else {
            serde_json::to_value(render_feed(&posts, defaults, html))
        }
    } else {
        let post: PostRecord = serde_json::from_value(value)?;
        if admin {
            serde_json::to_value(post.to_admin())
        } else {
            serde_json::to_value(post.to_public(defaults, html))
        }
    }
}

/// Handle the migrate command
fn handle_migrate_command(dir: &std::path::Path, existing: Option<&str>, config: &FolioConfig) {
    let existing = match existing {
        Some(path) => read_slug_list(path),
        None => HashSet::new(),
    };

    let options = MigrateOptions::from(&config.migrate);
    let report = migrate_dir(dir, &existing, &options).unwrap_or_else(|e| {
        eprintln!("Migration error: {e}");
        std::process::exit(1);
    });

    for failure in &report.failed {
        eprintln!("Failed to migrate '{}': {}", failure.slug, failure.error);
    }
    eprintln!(
        "Migrated {}, skipped {}, failed {}",
        report.migrated.len(),
        report.skipped.len(),
        report.failed.len()
    );

    print_json(&report.migrated);
}

fn read_slug_list(path: &str) -> HashSet<String> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let mut modes = Vec::new();
            if format.supports_parsing() {
                modes.push("read");
            }
            if format.supports_serialization() {
                modes.push("write");
            }
            println!(
                "  {format_name:<10} {:<12} {}",
                modes.join("/"),
                format.description()
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FolioConfig {
    let loader = Loader::new().with_optional_file("folio.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Move configuration keys out of the extra parameters and into `config`.
fn apply_config_overrides(config: &mut FolioConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["cover-image", "default-cover-image"]) {
        config.posts.default_cover_image = raw;
    }
    if let Some(raw) = take_override(extra_params, &["author-picture", "default-author-picture"]) {
        config.posts.default_author_picture = raw;
    }
    if let Some(raw) = take_override(extra_params, &["author-name", "default-author-name"]) {
        config.posts.default_author_name = raw;
    }
    if let Some(raw) = extra_params.remove("status") {
        config.migrate.status = match raw.to_lowercase().as_str() {
            "published" => PostStatus::Published,
            "draft" => PostStatus::Draft,
            other => {
                eprintln!("Invalid status '{other}' for --extra-status (expected published or draft)");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = extra_params.remove("draft") {
        if parse_bool_arg("draft", &raw) {
            config.migrate.status = PostStatus::Draft;
        }
    }
}

/// `migrate` takes no format parameters; anything left is a typo.
fn reject_unused_extras(extra_params: &HashMap<String, String>) {
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown parameter --extra-{key}");
        std::process::exit(1);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
