//! ndgeo console - ask the geometry engine questions from a terminal
//!
//! Usage:
//!     ndgeo-console "create a 4D sphere with radius 2"
//!     ndgeo-console --seed 7 "voronoi tiling seeds 15 area 12x8"
//!     ndgeo-console            (interactive; 'quit' or 'exit' to leave)

use std::io::{self, BufRead, Write};

use clap::Parser;
use ndgeo_core::GeometryAgent;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ndgeo-console")]
#[command(about = "Natural-language console for the n-dimensional geometry engine")]
#[command(version)]
struct Args {
    /// Query to answer; starts an interactive session when omitted
    query: Option<String>,

    /// Seed for random Voronoi seeds, for repeatable output
    #[arg(long)]
    seed: Option<u64>,

    /// Print each answer as a JSON object
    #[arg(long)]
    json: bool,

    /// Verbose output (dispatch decisions on stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "ndgeo_core=debug" } else { "ndgeo_core=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let agent = match args.seed {
        Some(seed) => GeometryAgent::with_seed(seed),
        None => GeometryAgent::new(),
    };
    let mut agent = match agent {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error starting geometry agent: {}", e);
            std::process::exit(1);
        }
    };

    match args.query {
        Some(query) => answer(&mut agent, &query, args.json),
        None => {
            if let Err(e) = repl(&mut agent, args.json) {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn answer(agent: &mut GeometryAgent, query: &str, as_json: bool) {
    if as_json {
        let (response, success) = match agent.try_process_query(query) {
            Ok(reply) => (reply, true),
            Err(e) => (format!("Sorry, I encountered an error: {}", e), false),
        };
        let output = json!({ "query": query, "response": response, "success": success });
        println!("{}", output);
    } else {
        println!("{}", agent.process_query(query));
    }
}

fn repl(agent: &mut GeometryAgent, as_json: bool) -> io::Result<()> {
    println!("N-Dimensional Geometry Console");
    println!("Type 'help' for examples, 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\ngeometry> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query.to_lowercase().as_str(), "quit" | "exit") {
            println!("Goodbye!");
            break;
        }
        answer(agent, query, as_json);
    }
    Ok(())
}
