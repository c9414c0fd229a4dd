//! A* solver for the N×N sliding-tile puzzle.
//!
//! ```
//! use npuzzle_solver::AStarSolver;
//!
//! let mut solver = AStarSolver::new(3).unwrap();
//! solver.set_initial(vec![1, 6, 4, 8, 7, 0, 3, 2, 5]).unwrap();
//!
//! let solution = solver.solve().unwrap().expect("solvable");
//! let path = solution.path();
//! assert_eq!(path.first(), Some(solver.initial()));
//! assert_eq!(path.last(), Some(solver.goal()));
//! assert_eq!(solution.cost() as usize, path.len() - 1);
//! ```

pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod layout;
pub mod node;
pub mod render;
pub mod scramble;
pub mod solver;

pub use config::{DedupPolicy, SolverConfig};
pub use error::{ConfigError, LayoutError, SearchError};
pub use heuristic::{manhattan_distance, DistanceTable};
pub use layout::{Layout, LayoutKey, Move};
pub use node::{NodeArena, NodeId, SearchNode};
pub use solver::{AStarSolver, EngineState, SearchStats, Solution};
