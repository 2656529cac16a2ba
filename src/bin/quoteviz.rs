//! Command-line interface for quoteviz
//! This binary renders quoted trees stored as JSON or YAML.
//!
//! Usage:
//!   quoteviz tree `<path>` [--color `<mode>`] [--eager] [--stats]   - Print the box-drawn tree
//!   quoteviz stats `<path>` [--json]                               - Print statistics and the tree
//!   quoteviz convert `<path>` --format `<format>`                    - Print any registered format
//!   quoteviz list-formats                                          - List all available formats
//!
//! A `<path>` of `-` reads from stdin (JSON unless `--input yaml` is given).

use clap::{Arg, ArgAction, ArgMatches, Command};
use quoteviz::quoteviz::config::{Loader, VizConfig};
use quoteviz::quoteviz::error::VizError;
use quoteviz::quoteviz::formats::{FormatRegistry, TreevizFormatter};
use quoteviz::quoteviz::loader::{InputFormat, NodeLoader};
use quoteviz::quoteviz::printing::write_rendered;
use quoteviz::quoteviz::stats::analyze;
use quoteviz::Node;
use std::io::{self, Write};

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to a .json/.yaml tree, or '-' for stdin")
        .required(true)
        .index(1)
}

fn main() {
    let matches = Command::new("quoteviz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Box-drawn tree views and statistics for quoted syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .global(true)
                .value_parser(["json", "yaml"])
                .help("Input encoding (default: from the file extension, json for stdin)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace); RUST_LOG takes precedence"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the box-drawn tree")
                .arg(path_arg())
                .arg(
                    Arg::new("color")
                        .long("color")
                        .value_parser(["auto", "always", "never"])
                        .help("Color atoms, strings and numbers"),
                )
                .arg(
                    Arg::new("eager")
                        .long("eager")
                        .action(ArgAction::SetTrue)
                        .help("Open every nonempty composite"),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Print the statistics line first"),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Print node statistics followed by the tree")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print only the statistics, as JSON"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Print the tree in a registered format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let verbosity = match matches.subcommand() {
        Some((_, sub)) => sub.get_count("verbose").max(matches.get_count("verbose")),
        None => matches.get_count("verbose"),
    };
    init_tracing(verbosity);

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber.
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), VizError> {
    match matches.subcommand() {
        Some(("tree", sub)) => handle_tree_command(sub),
        Some(("stats", sub)) => handle_stats_command(sub),
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("list-formats", sub)) => {
            config_loader(sub).build()?;
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

/// Start from the defaults, layering the `--config` file when one is given
fn config_loader(sub: &ArgMatches) -> Loader {
    match sub.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    }
}

/// Layer the tree command's flags over the configuration
fn load_tree_config(sub: &ArgMatches) -> Result<VizConfig, VizError> {
    let mut loader = config_loader(sub);
    if let Some(color) = sub.get_one::<String>("color") {
        loader = loader.set_override("render.color", color.as_str())?;
    }
    if sub.get_flag("eager") {
        loader = loader.set_override("render.expansion", "eager")?;
    }
    if sub.get_flag("stats") {
        loader = loader.set_override("stats.show_summary", true)?;
    }
    Ok(loader.build()?)
}

fn load_node(sub: &ArgMatches) -> Result<Node, VizError> {
    let path = sub
        .get_one::<String>("path")
        .expect("path is a required argument");
    let explicit = sub
        .get_one::<String>("input")
        .map(|name| match name.as_str() {
            "yaml" => InputFormat::Yaml,
            _ => InputFormat::Json,
        });

    let loader = if path == "-" {
        NodeLoader::from_reader(io::stdin().lock(), explicit.unwrap_or(InputFormat::Json))?
    } else {
        match explicit {
            Some(format) => NodeLoader::from_string(std::fs::read_to_string(path)?, format),
            None => NodeLoader::from_path(path)?,
        }
    };
    loader.load()
}

/// Handle the tree command
fn handle_tree_command(sub: &ArgMatches) -> Result<(), VizError> {
    let config = load_tree_config(sub)?;
    let node = load_node(sub)?;

    let mut out = io::stdout().lock();
    if config.stats.show_summary {
        writeln!(out, "{}", analyze(&node))?;
    }
    write_rendered(&config.render.renderer(), &node, &mut out)
}

/// Handle the stats command
fn handle_stats_command(sub: &ArgMatches) -> Result<(), VizError> {
    let config = config_loader(sub).build()?;
    let node = load_node(sub)?;
    if sub.get_flag("json") {
        let output = FormatRegistry::with_defaults().serialize(&node, "stats-json")?;
        println!("{}", output);
        return Ok(());
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{}", analyze(&node))?;
    write_rendered(&config.render.renderer(), &node, &mut out)
}

/// Handle the convert command
fn handle_convert_command(sub: &ArgMatches) -> Result<(), VizError> {
    let config = config_loader(sub).build()?;
    let format = sub
        .get_one::<String>("format")
        .expect("format has a default value");
    let node = load_node(sub)?;

    // `treeviz` follows the configured expansion and color
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::with_renderer(config.render.renderer()));
    let output = registry.serialize(&node, format)?;
    println!("{}", output);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", formatter.name());
            println!("    {}", formatter.description());
            println!();
        }
    }
}
