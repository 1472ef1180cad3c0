use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sketchml_parser::ParseOptions;
use sketchml_resolver::{render, MappingTable};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sketchml CLI - preview tool for the indentation-based layout DSL
#[derive(Parser, Debug)]
#[command(name = "sketchml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a layout document and print the descriptors as JSON
    Render(RenderArgs),

    /// Parse a layout document and report diagnostics without resolving
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Maximum nesting depth before the parse fails
    #[arg(long, default_value_t = sketchml_parser::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Maximum nesting depth before the parse fails
    #[arg(long, default_value_t = sketchml_parser::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Check(args) => run_check(args),
    }
}

fn read_source(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let source = read_source(&args.input)?;
    let options = ParseOptions {
        max_depth: args.max_depth,
    };

    let doc = render(&source, &MappingTable::standard(), &options)
        .context("layout resolution failed")?;

    for diagnostic in &doc.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&doc.units)?
    } else {
        serde_json::to_string(&doc.units)?
    };
    println!("{}", json);

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let source = read_source(&args.input)?;
    let options = ParseOptions {
        max_depth: args.max_depth,
    };

    let doc = sketchml_parser::parse(&source, &options).context("parse failed")?;

    for diagnostic in &doc.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    println!(
        "{} {} node(s), {} diagnostic(s)",
        "ok:".green().bold(),
        doc.node_count(),
        doc.diagnostics.len()
    );

    Ok(())
}
