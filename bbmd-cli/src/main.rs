// Command-line interface for bbmd
//
// This binary converts BBCode posts to Markdown (or HTML through Markdown), inspects what the
// converter does to a given post, and runs the one-shot migration over a content store.
//
// The core capabilities use the bbmd-babel crate for conversion and bbmd-migrate for the batch
// run. Everything here is argument handling, configuration and output.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The to falls back to `convert.to` in
// the configuration.
// Usage:
//  bbmd <input> [--to <format>] [--from <format>] [--output <file>]  - Convert between formats (default)
//  bbmd convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above (explicit)
//  bbmd inspect <path> [<transform>]     - Execute a transform (defaults to "md-ast")
//  bbmd migrate [--dry-run] [--json]     - Convert every record of the configured store
//  bbmd --list-formats                   - List available formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  bbmd post.bbcode --to html --extra-hardbreaks

use bbmd_cli::transforms;

use bbmd_babel::formats::{HtmlFormat, HtmlOptions};
use bbmd_babel::FormatRegistry;
use bbmd_config::{BbmdConfig, Loader, StoreConfig, StoreKind, LOCAL_CONFIG_FILE};
use bbmd_migrate::{
    JsonStore, MigrateOptions, Migrator, RecordStore, SqliteStore, StoreError, TableSpec,
};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

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

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Next arg is a value unless it is another flag or the end
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("bbmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert legacy BBCode posts to Markdown")
        .long_about(
            "bbmd converts BBCode-tagged blog content to Markdown.\n\n\
            Commands:\n  \
            - convert: Convert a file (bbcode to markdown or html)\n  \
            - inspect: Show which rules fire and how the result parses\n  \
            - migrate: Convert every record of the configured content store\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            bbmd post.bbcode                          # Convert to markdown (outputs to stdout)\n  \
            bbmd post.bbcode --to html -o post.html   # Render to an HTML file\n  \
            bbmd inspect post.bbcode trace-simple     # Which rules fired\n  \
            bbmd migrate --dry-run                    # Count what the migration would do"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a bbmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect what the converter does to a file")
                .long_about(
                    "Show the conversion of a BBCode file from different angles.\n\n\
                    Transforms:\n  \
                    - md-ast:        Node tree of the converted Markdown (default)\n  \
                    - trace-simple:  Rules that fired, with match counts\n  \
                    - trace-json:    Same trace as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-all-rules     List rules without matches in trace-simple\n\n\
                    Examples:\n  \
                    bbmd inspect post.bbcode                   # Markdown node tree\n  \
                    bbmd inspect post.bbcode trace-simple      # Rule trace"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the BBCode file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'md-ast'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert a document to another format.\n\n\
                    Supported formats:\n  \
                    - bbcode:   BBCode (.bbcode, .bb), source only\n  \
                    - markdown: Markdown (.md)\n  \
                    - html:     HTML fragment rendered from the Markdown (.html)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    The target format defaults to `convert.to` from the configuration.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    bbmd convert post.bbcode --to markdown       # Convert to markdown (stdout)\n  \
                    bbmd convert post.txt --from bbcode          # Explicit source format\n  \
                    bbmd post.bbcode --to html -o post.html      # 'convert' is optional"
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
                        .help("Target format (defaults to convert.to from the configuration)")
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
            Command::new("migrate")
                .about("Convert every record of the configured content store")
                .long_about(
                    "Run the one-shot migration over the store named in the configuration\n\
                    ([migrate.store] in bbmd.toml).\n\n\
                    Records that are empty or carry no BBCode are left untouched. A record\n\
                    that fails to save is reported and the run continues.\n\n\
                    Examples:\n  \
                    bbmd migrate --dry-run                # Count, write nothing\n  \
                    bbmd migrate --config prod.toml       # Use another store\n  \
                    bbmd migrate --json                   # Machine-readable report"
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Classify records without writing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first arg that is not a subcommand is taken as the input file of "convert"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "migrate"
                && cleaned_args[1] != "help"
            {
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

    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());
    let mut config = load_cli_config(config_path);
    init_logging(&config.log.level);
    debug!(explicit = ?config_path, level = %config.log.level, "configuration loaded");

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.convert.to.clone());

            // Auto-detect --from if not provided
            let from = if let Some(f) = sub_matches.get_one::<String>("from") {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, &to, output, &extra_params, &config);
        }
        Some(("migrate", sub_matches)) => {
            let dry_run = sub_matches.get_flag("dry-run") || config.migrate.dry_run;
            let json = sub_matches.get_flag("json");
            handle_migrate_command(&config.migrate.store, dry_run, json);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, extra_params: &HashMap<String, String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BbmdConfig,
) {
    let registry = registry_from_config(config);

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

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
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

/// Handle the migrate command
fn handle_migrate_command(store_config: &StoreConfig, dry_run: bool, json: bool) {
    debug!(
        kind = ?store_config.kind,
        path = %store_config.path.display(),
        dry_run,
        "opening store"
    );
    let store = open_store(store_config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut migrator = Migrator::with_options(store, MigrateOptions { dry_run });
    let report = migrator.run().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if json {
        let rendered = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
    } else {
        println!("{report}");
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<10} {}", format.description());
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn open_store(config: &StoreConfig) -> Result<Box<dyn RecordStore>, StoreError> {
    match config.kind {
        StoreKind::Sqlite => {
            let spec = TableSpec::new(
                config.table.as_str(),
                config.id_column.as_str(),
                config.text_column.as_str(),
            );
            Ok(Box::new(SqliteStore::open(&config.path, spec)?))
        }
        StoreKind::Json => Ok(Box::new(JsonStore::open(config.path.clone()))),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BbmdConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
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

fn apply_config_overrides(config: &mut BbmdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["unsafe", "raw-html"]) {
        config.render.html.allow_raw_html = parse_bool_arg("unsafe", &raw);
    }
    if let Some(raw) = extra_params.remove("hardbreaks") {
        config.render.html.hardbreaks = parse_bool_arg("hardbreaks", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["store-kind"]) {
        config.migrate.store.kind = match raw.as_str() {
            "sqlite" => StoreKind::Sqlite,
            "json" => StoreKind::Json,
            other => {
                eprintln!("Unknown store kind '{other}' for --extra-store-kind");
                std::process::exit(1);
            }
        };
    }
    if let Some(path) = take_override(extra_params, &["store", "store-path"]) {
        config.migrate.store.path = path.into();
    }
    if let Some(table) = extra_params.remove("table") {
        config.migrate.store.table = table;
    }
}

/// Default registry, with the HTML format carrying the configured options.
fn registry_from_config(config: &BbmdConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(HtmlFormat::new(HtmlOptions::from(&config.render.html)));
    registry
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

#[cfg(test)]
mod tests {
    use super::*;
    use bbmd_babel::Document;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["bbmd", "inspect", "post.bbcode"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_single_param() {
        let input = args(&["bbmd", "post.bbcode", "--extra-unsafe", "false"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["bbmd", "post.bbcode"]));
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("unsafe"), Some(&"false".to_string()));
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let input = args(&[
            "bbmd",
            "convert",
            "post.txt",
            "--to",
            "html",
            "--extra-hardbreaks",
            "yes",
            "--from",
            "bbcode",
        ]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(
            cleaned,
            args(&["bbmd", "convert", "post.txt", "--to", "html", "--from", "bbcode"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("hardbreaks"), Some(&"yes".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flags() {
        let input = args(&[
            "bbmd",
            "inspect",
            "post.bbcode",
            "--extra-all-rules",
            "trace-simple",
            "--extra-hardbreaks",
        ]);
        let (cleaned, extra) = parse_extra_args(&input);

        // A positional after a flag is taken as its value
        assert_eq!(cleaned, args(&["bbmd", "inspect", "post.bbcode"]));
        assert_eq!(extra.get("all-rules"), Some(&"trace-simple".to_string()));
        assert_eq!(extra.get("hardbreaks"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_flag_followed_by_flag() {
        let input = args(&["bbmd", "migrate", "--extra-store", "--dry-run"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["bbmd", "migrate", "--dry-run"]));
        assert_eq!(extra.get("store"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let input = args(&["bbmd", "migrate", "--extras-table", "entries"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["bbmd", "migrate"]));
        assert_eq!(extra.get("table"), Some(&"entries".to_string()));
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("raw-html".to_string(), "no".to_string());
        extras.insert("hardbreaks".to_string(), "true".to_string());
        extras.insert("store-kind".to_string(), "json".to_string());
        extras.insert("store-path".to_string(), "posts.json".to_string());
        extras.insert("table".to_string(), "entries".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert!(!config.render.html.allow_raw_html);
        assert!(config.render.html.hardbreaks);
        assert_eq!(config.migrate.store.kind, StoreKind::Json);
        assert_eq!(config.migrate.store.path, PathBuf::from("posts.json"));
        assert_eq!(config.migrate.store.table, "entries");
        assert!(extras.is_empty());
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys_for_formats() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("theme".to_string(), "dark".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(extras.get("theme"), Some(&"dark".to_string()));
    }

    #[test]
    fn html_format_follows_configuration() {
        let mut config = load_cli_config(None);
        config.render.html.hardbreaks = true;
        config.render.html.allow_raw_html = false;

        let registry = registry_from_config(&config);
        let doc = Document::from_markdown("<u>a</u>\nb");
        let html = registry.serialize(&doc, "html").unwrap();
        assert!(html.contains("<br />"));
        assert!(html.contains("raw HTML omitted"));
        assert!(!html.contains("<u>"));
    }

    #[test]
    fn html_extras_override_configuration() {
        let config = load_cli_config(None);
        let registry = registry_from_config(&config);
        let mut extras = HashMap::new();
        extras.insert("hardbreaks".to_string(), "true".to_string());

        let doc = Document::from_markdown("a\nb");
        assert!(!registry.serialize(&doc, "html").unwrap().contains("<br />"));
        let html = registry
            .serialize_with_options(&doc, "html", &extras)
            .unwrap();
        assert!(html.contains("<br />"));
    }

    #[test]
    fn open_store_builds_json_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"[{"id": 7, "text": "[b]x[/b]"}]"#).unwrap();

        let mut config = load_cli_config(None).migrate.store;
        config.kind = StoreKind::Json;
        config.path = path;

        let mut store = open_store(&config).expect("store to open");
        let records = store.fetch_all().expect("records to load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
    }

    #[test]
    fn open_store_reports_missing_sqlite_database() {
        let dir = tempdir().unwrap();
        let mut config = load_cli_config(None).migrate.store;
        config.path = dir.path().join("absent.db");

        assert!(open_store(&config).is_err());
    }
}
