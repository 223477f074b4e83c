//! @ai:module:intent CLI entry point for tcmodhelp
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on analysis, config, output, source

use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tcmodhelp::{
    analyze, format_doc, AnalysisMode, Error, ModhelpConfig, ModuleQuery, OutputFormat, Result,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tcmodhelp")]
#[command(author, version, about = "Print the tagged documentation of a transcode module")]
struct Cli {
    /// Analyse sources of the module
    #[arg(short = 's', long = "source")]
    use_source: bool,

    /// Analyse module objects (not yet supported)
    #[arg(short = 'b', long = "binary")]
    use_binary: bool,

    /// Select module type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    module_type: Option<String>,

    /// Select module name
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    module_name: Option<String>,

    /// Look for the module source under this directory
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum)]
    format: Option<Format>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::MissingSelection(message)) => {
            eprintln!("{}", message);
            ExitCode::from(1)
        }
        Err(Error::Unsupported(_)) => {
            println!("not yet supported!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mode = if cli.use_binary {
        AnalysisMode::Binary
    } else if cli.use_source {
        AnalysisMode::Source
    } else {
        return Err(Error::MissingSelection(
            "either source or binary analysis mode must be selected",
        ));
    };
    let name = cli
        .module_name
        .ok_or(Error::MissingSelection("missing module name"))?;
    let kind = cli
        .module_type
        .ok_or(Error::MissingSelection("missing module type"))?;

    let config = match &cli.config {
        Some(path) => ModhelpConfig::load(path)?,
        None => ModhelpConfig::default(),
    };

    let query = ModuleQuery {
        name,
        kind,
        search_path: cli.path.unwrap_or(config.source.search_path),
        max_depth: config.source.max_depth,
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);

    let doc = analyze(mode, &query)?;
    println!("{}", format_doc(doc.as_ref(), format)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("tcmodhelp={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
