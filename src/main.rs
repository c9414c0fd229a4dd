use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use npuzzle_solver::render::{self, PathStyle};
use npuzzle_solver::scramble::scramble;
use npuzzle_solver::{AStarSolver, DedupPolicy, Layout, SolverConfig};

const DEFAULT_TILES: [u32; 9] = [1, 6, 4, 8, 7, 0, 3, 2, 5];

#[derive(Debug, Parser)]
#[command(name = "npuzzle", about = "Solve an N-puzzle optimally with A*")]
struct Args {
    /// Board width and height
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Row-major tile list with 0 for the blank, e.g. 1,6,4,8,7,0,3,2,5
    #[arg(long, value_delimiter = ',', conflicts_with = "scramble")]
    tiles: Option<Vec<u32>>,

    /// Start from a random walk of this many moves away from the goal
    #[arg(long)]
    scramble: Option<usize>,

    /// Seed for --scramble (random when omitted)
    #[arg(long, requires = "scramble")]
    seed: Option<u64>,

    /// Queue every generated layout, even ones already queued more cheaply
    #[arg(long)]
    no_dedup: bool,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Give up after creating this many nodes
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Print without terminal styling
    #[arg(long)]
    plain: bool,
}

fn initial_layout(args: &Args) -> anyhow::Result<Layout> {
    let layout = if let Some(tiles) = &args.tiles {
        Layout::new(args.size, tiles.clone())?
    } else if let Some(moves) = args.scramble {
        match args.seed {
            Some(seed) => scramble(args.size, moves, &mut StdRng::seed_from_u64(seed))?,
            None => scramble(args.size, moves, &mut thread_rng())?,
        }
    } else if args.size == 3 {
        Layout::new(3, DEFAULT_TILES.to_vec())?
    } else {
        Layout::goal(args.size)?
    };
    Ok(layout)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SolverConfig {
        dedup: if args.no_dedup {
            DedupPolicy::Disabled
        } else {
            DedupPolicy::BestCost
        },
        max_expansions: args.max_expansions,
        max_nodes: args.max_nodes,
    };

    let mut solver = AStarSolver::with_config(args.size, config).context("invalid --size")?;
    solver
        .set_initial_layout(initial_layout(&args)?)
        .context("invalid initial layout")?;

    let Some(solution) = solver.solve()? else {
        println!("Initial Puzzle:\n{}", solver.initial());
        println!("No solution found");
        return Ok(ExitCode::FAILURE);
    };

    let style = if args.plain {
        PathStyle::Plain
    } else {
        PathStyle::Styled
    };
    render::write_path(&mut io::stdout().lock(), &solution.path(), style)?;

    let moves: Vec<String> = solution.moves().iter().map(ToString::to_string).collect();
    println!(
        "Found optimal solution with {} moves: {}",
        solution.cost(),
        moves.join(" ")
    );
    let stats = solution.stats();
    println!(
        "Expanded {} nodes (generated {}, skipped {} duplicates)",
        stats.expanded, stats.generated, stats.duplicates_skipped
    );

    Ok(ExitCode::SUCCESS)
}
