//! costar: degrees-of-separation queries over actor/movie credits.
//!
//! Loads a cast dataset, tags the collaboration graph once from a root
//! actor, then answers separation queries: either the ones given with
//! `--query` or interactively from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use costar_core::{compute_shortest_paths, query, Error, Graph, PathResult};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod loader;

#[derive(Parser)]
#[command(name = "costar", version)]
#[command(about = "Degrees-of-separation queries over actor/movie credits")]
struct Cli {
    /// Cast dataset: a movie title line followed by cast member lines,
    /// groups separated by blank lines. Files ending in .json are read as
    /// a JSON array of {title, cast} records.
    cast_file: PathBuf,

    /// Root actor all separations are measured from
    #[arg(long, default_value = "Kevin Bacon")]
    root: String,

    /// Answer these queries and exit instead of prompting interactively
    #[arg(long = "query", value_name = "NAME")]
    queries: Vec<String>,

    /// Output format for query results
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let records = loader::read_cast_file(&cli.cast_file)?;
    let mut graph = Graph::from_records(records).context("building collaboration graph")?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    compute_shortest_paths(&mut graph, &cli.root)
        .with_context(|| format!("tagging shortest paths from '{}'", cli.root))?;

    if !cli.queries.is_empty() {
        for name in &cli.queries {
            report(&graph, name, cli.format);
        }
        return Ok(());
    }

    if !cli.quiet {
        println!("Loading complete!");
    }
    let stdin = io::stdin();
    loop {
        print!("Enter actor name: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        report(&graph, name, cli.format);
        println!();
    }
    Ok(())
}

/// Answer one query. Lookup misses and missing connections are reported
/// to the caller, never swallowed; they do not end the session.
fn report(graph: &Graph, name: &str, format: Format) {
    match query(graph, name) {
        Ok(result) => print_result(&result, format),
        Err(Error::UnknownEntity(_)) => println!("Unknown actor name"),
        Err(Error::NoPath(_)) => println!("Infinite KBN"),
        Err(err) => println!("{err}"),
    }
}

fn print_result(result: &PathResult, format: Format) {
    match format {
        Format::Json => match serde_json::to_string(result) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("costar: failed to serialize result: {err}"),
        },
        Format::Text => {
            for (i, hop) in result.chain.iter().enumerate() {
                let partner = result
                    .chain
                    .get(i + 1)
                    .map(|next| next.actor.as_str())
                    .unwrap_or(&result.root);
                println!("{} was in {} with {}", hop.actor, hop.movie, partner);
            }
            println!("Found with KBN of {}", result.separation);
        }
    }
}
