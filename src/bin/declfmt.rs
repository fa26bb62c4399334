//! Command-line interface for declfmt
//!
//! Usage:
//!   declfmt `<pass>` [PATHS]...                 - Run one pass over files or directories
//!   declfmt outline `<file>` [--format tree|json] - Print how a file was parsed
//!
//! Passes: sort, visibility, comments, cases. `.py` files are read as Python and only take
//! part in sort and comments. Exit status is 0 on success, 1 if any file failed, and 2
//! when `--dry-run` found files that would change.

use clap::{Arg, ArgAction, ArgMatches, Command};
use declfmt::outline::{OutlineFormat, OutlineNode};
use declfmt::{discovery, Dialect, Mode, Outcome, Processor, Settings};
use declfmt_config::{ConfigError, DeclfmtConfig, Loader, PROJECT_FILE};
use declfmt_parser::java::Pass;
use declfmt_parser::{java, python};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{fmt, fs};

const PASSES: &[(&str, &str)] = &[
    ("sort", "Reorder members by category, then name"),
    ("visibility", "Insert the default access modifier where none is declared"),
    ("comments", "Capitalize the first line of each comment block"),
    ("cases", "Sort arrow-style switch cases and multi-label cases"),
];

fn cli() -> Command {
    let mut command = Command::new("declfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reorder and normalize member declarations in Java and Python sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print a diff of pending changes instead of writing files")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./declfmt.toml")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level")
                .global(true)
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop at the first file that fails")
                .global(true)
                .action(ArgAction::SetTrue),
        );

    for (name, about) in PASSES {
        command = command.subcommand(
            Command::new(*name).about(*about).arg(
                Arg::new("paths")
                    .help("Files or directories (default: the configured source root)")
                    .num_args(0..)
                    .value_parser(clap::value_parser!(PathBuf)),
            ),
        );
    }

    command.subcommand(
        Command::new("outline")
            .about("Print the declaration tree of a file")
            .arg(
                Arg::new("file")
                    .help("Path to the source file")
                    .required(true)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .help("Output format")
                    .value_parser(["tree", "json"])
                    .default_value("tree"),
            ),
    )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    // Global flags are read from the subcommand, which sees them wherever they were given
    let Some((name, sub)) = matches.subcommand() else {
        return fail("no command given");
    };
    setup_logging(sub);

    let config = match load_config(sub) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };
    let settings = match Settings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => return fail(e),
    };

    if name == "outline" {
        return handle_outline_command(sub);
    }
    match pass_for(name, &settings) {
        Some(pass) => handle_pass_command(pass, sub, &settings),
        None => fail(format!("unknown command '{}'", name)),
    }
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches.get_one::<String>("log-level").map(String::as_str) {
        Some("trace") => log::LevelFilter::Trace,
        Some("debug") => log::LevelFilter::Debug,
        Some("info") => log::LevelFilter::Info,
        Some("error") => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Defaults, then `./declfmt.toml`, then `--config`, then flags.
fn load_config(matches: &ArgMatches) -> Result<DeclfmtConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("fail-fast") {
        loader = loader.set_override("files.fail_fast", true)?;
    }
    loader.build()
}

fn pass_for(name: &str, settings: &Settings) -> Option<Pass> {
    match name {
        "sort" => Some(Pass::Sort(settings.sort.clone())),
        "visibility" => Some(Pass::Visibility(settings.visibility)),
        "comments" => Some(Pass::Comments),
        "cases" => Some(Pass::Cases),
        _ => None,
    }
}

/// Handle the sort, visibility, comments and cases commands
fn handle_pass_command(pass: Pass, sub: &ArgMatches, settings: &Settings) -> ExitCode {
    let paths: Vec<PathBuf> = match sub.get_many::<PathBuf>("paths") {
        Some(paths) => paths.cloned().collect(),
        None => vec![settings.root.clone()],
    };
    let mut files = match discovery::discover(&paths, &settings.extensions) {
        Ok(files) => files,
        Err(e) => return fail(e),
    };
    files.retain(|file| {
        let dialect = Dialect::of(file);
        let supported = dialect.supports(&pass);
        if !supported {
            debug!("{}: {} pass skipped for {}", file.display(), pass.name(), dialect);
        }
        supported
    });
    if files.is_empty() {
        warn!("no files for the {} pass under the given paths", pass.name());
    }

    let mode = if sub.get_flag("dry-run") {
        Mode::DryRun
    } else {
        Mode::Apply
    };
    let report = Processor::new(pass, mode).process_all(&files, settings.fail_fast);

    for (_, outcome) in report.outcomes() {
        if let Outcome::WouldChange { diff } = outcome {
            print!("{}", diff);
        }
    }
    for error in report.failures() {
        eprintln!("error: {}", error);
    }

    if report.has_failures() {
        ExitCode::from(1)
    } else if mode == Mode::DryRun && report.has_changes() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

/// Handle the outline command
fn handle_outline_command(sub: &ArgMatches) -> ExitCode {
    let Some(path) = sub.get_one::<PathBuf>("file") else {
        return fail("no file given");
    };
    let format = sub
        .get_one::<String>("format")
        .and_then(|name| OutlineFormat::from_name(name))
        .unwrap_or(OutlineFormat::Tree);

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return fail(format!("{}: {}", path.display(), e)),
    };
    let built = match Dialect::of(path) {
        Dialect::Java => java::parsing::parse_str(&source)
            .map_err(|e| e.to_string())
            .and_then(|file| OutlineNode::build(&file.root).map_err(|e| e.to_string())),
        Dialect::Python => python::parsing::parse_str(&source)
            .map(|module| OutlineNode::build_module(&module.nodes, &module_name(path)))
            .map_err(|e| e.to_string()),
    };
    let node = match built {
        Ok(node) => node,
        Err(e) => return fail(format!("{}: {}", path.display(), e)),
    };

    match format {
        OutlineFormat::Tree => print!("{}", node.to_tree()),
        OutlineFormat::Json => match node.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => return fail(format!("JSON serialization failed: {}", e)),
        },
    }
    ExitCode::SUCCESS
}

fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn fail(message: impl fmt::Display) -> ExitCode {
    eprintln!("error: {}", message);
    ExitCode::from(1)
}
