#![forbid(unsafe_code)]

mod cmd;
mod config;
mod graph_file;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use config::LimitsConfig;
use output::{CliError, OutputMode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gw: walk, search and inspect small directed graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Graph file to load (reads stdin when omitted or `-`).
    #[arg(short, long, global = true, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Insert every edge of the graph file in both directions.
    #[arg(long, global = true)]
    undirected: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for `--format json`).
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    const fn needs_graph(&self) -> bool {
        !matches!(
            self.command,
            Commands::Random(_) | Commands::Completions(_)
        )
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Inspect",
        about = "Show the graph",
        long_about = "Show vertex and edge counts with each vertex's out-neighbors, and optionally the adjacency matrix.",
        after_help = "EXAMPLES:\n    # Adjacency lists\n    gw -g square.txt show\n\n    # Include the matrix\n    gw -g square.txt show --matrix\n\n    # Emit machine-readable output\n    gw -g square.txt show --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Walk",
        about = "Depth-first walk",
        long_about = "Walk depth-first from a vertex, visiting neighbors in ascending order, and draw the resulting tree.",
        after_help = "EXAMPLES:\n    # Walk from vertex 0\n    gw -g square.txt dfs 0\n\n    # Order only, one line\n    gw -g square.txt dfs 0 --format text"
    )]
    Dfs(cmd::traverse::WalkArgs),

    #[command(
        next_help_heading = "Walk",
        about = "Breadth-first walk",
        long_about = "Walk breadth-first from a vertex, visiting neighbors in ascending order.",
        after_help = "EXAMPLES:\n    # Walk from vertex 2\n    gw -g square.txt bfs 2"
    )]
    Bfs(cmd::traverse::WalkArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Check for a cycle",
        long_about = "Report whether a cycle is reachable from vertex 0. An edge straight back to the vertex it was reached from does not count.",
        after_help = "EXAMPLES:\n    gw -g triangle.txt cycle"
    )]
    Cycle(cmd::cycle::CycleArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Find a path between two vertices",
        long_about = "Report whether DEST is reachable from SRC along directed edges, with the first path found depth-first.",
        after_help = "EXAMPLES:\n    # Path from 0 to 3\n    gw -g square.txt path 0 3\n\n    # Emit machine-readable output\n    gw -g square.txt path 0 3 --json"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "List connected components",
        long_about = "Label connected components with edge direction ignored, numbered by smallest vertex.",
        after_help = "EXAMPLES:\n    gw -g forest.txt components"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Compute the transitive closure",
        long_about = "Compute which vertices reach which along paths of one or more edges, printed as a matrix.",
        after_help = "EXAMPLES:\n    gw -g square.txt closure"
    )]
    Closure(cmd::closure::ClosureArgs),

    #[command(
        next_help_heading = "Search",
        about = "Find Hamiltonian paths or circuits",
        long_about = "Search for a path from SRC to DEST visiting every vertex exactly once, or with --circuit list every Hamiltonian circuit. Exhaustive: expect long runs on dense graphs past a dozen vertices.",
        after_help = "EXAMPLES:\n    # Path from 0 to 3\n    gw -g square.txt --undirected hamilton 0 3\n\n    # Every circuit\n    gw -g square.txt --undirected hamilton --circuit"
    )]
    Hamilton(cmd::hamilton::HamiltonArgs),

    #[command(
        next_help_heading = "Search",
        about = "Find Eulerian paths or circuits",
        long_about = "Search for a walk from SRC to DEST using every edge exactly once, or with --circuit a closed walk from each vertex. Degree parity is checked first; the graph is restored after the search.",
        after_help = "EXAMPLES:\n    # Path from 0 to 1\n    gw -g trail.txt euler 0 1\n\n    # Circuits on an undirected graph\n    gw -g square.txt --undirected euler --circuit"
    )]
    Euler(cmd::euler::EulerArgs),

    #[command(
        next_help_heading = "Generate",
        about = "Generate a random graph",
        long_about = "Print a random graph in graph-file format. For each vertex pair, each direction is present with probability 1/SPARSITY.",
        after_help = "EXAMPLES:\n    # Reproducible 10-vertex graph\n    gw random 10 --sparsity 3 --seed 42 > g.txt\n\n    # Pipe straight into another command\n    gw random 8 --seed 1 | gw components"
    )]
    Random(cmd::random::RandomArgs),

    #[command(
        next_help_heading = "Generate",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    gw completions bash\n\n    # Generate zsh completions\n    gw completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRAPHWALK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "graphwalk=debug,info"
        } else {
            "graphwalk=info,warn"
        })
    });

    let format = env::var("GRAPHWALK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(
    cli: Cli,
    limits: &LimitsConfig,
    undirected: bool,
    output: OutputMode,
) -> anyhow::Result<()> {
    if let Commands::Random(ref args) = cli.command {
        return cmd::random::run_random(args, limits.max_graph_vertices, output);
    }
    if let Commands::Completions(ref args) = cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args.shell, &mut command);
    }

    let loaded =
        graph_file::read_graph(cli.graph.as_deref(), undirected, limits.max_graph_vertices)?;
    let max_vertices = limits.max_vertices;
    if !loaded.skipped.is_empty() {
        info!(skipped = loaded.skipped.len(), "duplicate edges ignored");
    }
    let mut graph = loaded.graph;

    match cli.command {
        Commands::Show(ref args) => cmd::show::run_show(args, &graph, max_vertices, output),
        Commands::Dfs(ref args) => cmd::traverse::run_dfs(args, &graph, output),
        Commands::Bfs(ref args) => cmd::traverse::run_bfs(args, &graph, output),
        Commands::Cycle(ref args) => cmd::cycle::run_cycle(args, &graph, output),
        Commands::Path(ref args) => cmd::path::run_path(args, &graph, output),
        Commands::Components(ref args) => cmd::components::run_components(args, &graph, output),
        Commands::Closure(ref args) => {
            cmd::closure::run_closure(args, &graph, max_vertices, output)
        }
        Commands::Hamilton(ref args) => cmd::hamilton::run_hamilton(args, &graph, output),
        Commands::Euler(ref args) => cmd::euler::run_euler(args, &mut graph, output),
        Commands::Random(_) | Commands::Completions(_) => Ok(()),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match config::load_config(&project_root) {
        Ok(config) => config,
        Err(err) => {
            let mode = output::resolve_output_mode(cli.format, cli.json, None);
            let _ = output::render_error(mode, &CliError::from(&err));
            return ExitCode::FAILURE;
        }
    };

    let output = output::resolve_output_mode(cli.format, cli.json, config.output_mode());
    let undirected = cli.undirected || config.load.undirected;
    if cli.needs_graph() {
        tracing::debug!(graph = ?cli.graph, undirected, ?output, "loading graph");
    }

    match run(cli, &config.limits, undirected, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let _ = output::render_error(output, &CliError::from(&err));
            ExitCode::FAILURE
        }
    }
}
