use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use findroute::{load_edges, load_heuristics, Heuristics, RouteFinder, SearchMode};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find a lowest-cost route between two locations",
    long_about = "Find a lowest-cost route between two locations.\n\n\
                  Without --heuristic every estimate is zero and the search runs \
                  uniform-cost, whatever --algo says."
)]
struct Cli {
    /// Edge file, one `<from> <to> <cost>` per line, ending with END OF INPUT.
    edges: PathBuf,
    /// Starting location.
    start: String,
    /// Destination location.
    goal: String,
    /// Heuristic file, one `<location> <estimate>` per line.
    #[arg(long)]
    heuristic: Option<PathBuf>,
    /// Search order: astar or greedy. Unknown names run astar.
    #[arg(long)]
    algo: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_edges::<f64>(&cli.edges)
        .with_context(|| format!("failed to load edges from {}", cli.edges.display()))?;

    let (heuristics, mode) = match &cli.heuristic {
        Some(path) => {
            let table = load_heuristics::<f64>(path)
                .with_context(|| format!("failed to load heuristics from {}", path.display()))?;
            let mode = cli.algo.as_deref().map(SearchMode::from_name).unwrap_or_default();
            (table, mode)
        }
        None => {
            if let Some(algo) = &cli.algo {
                warn!(algo = algo.as_str(), "no heuristic file given, running uniform-cost search");
            }
            (Heuristics::new(), SearchMode::UniformCost)
        }
    };

    info!(%mode, start = cli.start.as_str(), goal = cli.goal.as_str(), "searching");
    let report = RouteFinder::new(&graph, &heuristics).search(&cli.start, &cli.goal, mode);
    print!("{report}");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
