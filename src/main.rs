use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trellis::check::check_program;
use trellis::desugar::desugar_program;
use trellis::interpreter::{self, DefinitionOrder, Options};
use trellis::parser::parse_source;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Run the program
    #[default]
    Run,
    /// Print the lowered program and exit
    Core,
}

/// Run a Trellis program
#[derive(Debug, Parser)]
#[command(name = "trellis", version, about)]
struct Cli {
    /// Source file to run
    file: PathBuf,

    /// What to produce
    #[arg(long, value_enum, default_value_t = Emit::Run)]
    emit: Emit,

    /// Stop after the static check
    #[arg(long)]
    check: bool,

    /// When function definitions become callable
    #[arg(long, value_enum, default_value_t = DefinitionOrder::Hoisted)]
    definitions: DefinitionOrder,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let surface = parse_source(&source).context("failed to parse program")?;
    info!(items = surface.items.len(), "parsed");

    let program = desugar_program(surface);

    if cli.emit == Emit::Core {
        print!("{program}");
        return Ok(());
    }

    check_program(&program).context("program failed to check")?;
    if cli.check {
        return Ok(());
    }

    let options = Options {
        definitions: cli.definitions,
    };
    interpreter::run(program, options).context("evaluation failed")?;

    Ok(())
}
