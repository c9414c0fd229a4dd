//! The A* engine.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, info, trace};

use crate::config::{DedupPolicy, SolverConfig};
use crate::error::{LayoutError, SearchError};
use crate::frontier::Frontier;
use crate::heuristic::DistanceTable;
use crate::layout::{Layout, LayoutKey, Move};
use crate::node::{NodeArena, NodeId, SearchNode};

/// Where the engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Not yet solved since construction or the last change of input.
    Idle,
    Expanding,
    GoalFound,
    /// The frontier ran dry or a configured limit stopped the search.
    Exhausted,
}

/// Counters collected during one `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: u64,
    /// Candidate layouts produced by transitions.
    pub generated: u64,
    /// Candidates dropped because the same layout was already queued at an
    /// equal or lower cost.
    pub duplicates_skipped: u64,
    pub frontier_high_water: usize,
}

/// A successful search: the terminal goal node and every node behind it.
#[derive(Debug, Clone)]
pub struct Solution {
    arena: NodeArena,
    terminal: NodeId,
    stats: SearchStats,
}

impl Solution {
    pub fn terminal(&self) -> &SearchNode {
        self.arena.get(self.terminal)
    }

    pub fn terminal_id(&self) -> NodeId {
        self.terminal
    }

    /// Number of moves in the solution.
    pub fn cost(&self) -> u64 {
        self.terminal().g
    }

    /// Layouts from the initial layout to the goal, inclusive.
    pub fn path(&self) -> Vec<Layout> {
        self.arena.path(self.terminal)
    }

    /// Blank moves that replay the solution from the initial layout.
    pub fn moves(&self) -> Vec<Move> {
        self.path()
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }
}

/// A* solver for an N×N sliding-tile puzzle.
///
/// The goal is always `[0, 1, ..., N² - 1]`. Until [`AStarSolver::set_initial`]
/// is called the initial layout is the goal itself, so a fresh solver is
/// already solved.
#[derive(Debug, Clone)]
pub struct AStarSolver {
    goal: Layout,
    distances: DistanceTable,
    initial: Layout,
    config: SolverConfig,
    state: EngineState,
}

impl AStarSolver {
    pub fn new(dimension: usize) -> Result<Self, LayoutError> {
        Self::with_config(dimension, SolverConfig::default())
    }

    pub fn with_config(dimension: usize, config: SolverConfig) -> Result<Self, LayoutError> {
        let goal = Layout::goal(dimension)?;
        Ok(Self {
            initial: goal.clone(),
            distances: DistanceTable::new(&goal),
            goal,
            config,
            state: EngineState::Idle,
        })
    }

    /// Replaces the initial layout with `tiles`, given row-major.
    pub fn set_initial(&mut self, tiles: Vec<u32>) -> Result<(), LayoutError> {
        let layout = Layout::new(self.dimension(), tiles)?;
        self.set_initial_layout(layout)
    }

    pub fn set_initial_layout(&mut self, layout: Layout) -> Result<(), LayoutError> {
        if layout.dimension() != self.dimension() {
            return Err(LayoutError::DimensionMismatch {
                expected: self.dimension(),
                actual: layout.dimension(),
            });
        }
        self.initial = layout;
        self.state = EngineState::Idle;
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.goal.dimension()
    }

    pub fn initial(&self) -> &Layout {
        &self.initial
    }

    pub fn goal(&self) -> &Layout {
        &self.goal
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Runs A* from the initial layout to the goal.
    ///
    /// Returns `Ok(None)` when the frontier empties without reaching the goal,
    /// which happens for unsolvable layouts.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] if the configuration is invalid, and
    /// [`SearchError::ExpansionLimit`] or [`SearchError::NodeLimit`] if a
    /// configured bound is hit first.
    pub fn solve(&mut self) -> Result<Option<Solution>, SearchError> {
        self.config.validate()?;
        self.state = EngineState::Idle;

        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();

        if self.initial == self.goal {
            let terminal = arena.push(SearchNode::root(self.initial.clone(), 0));
            debug!("initial layout is already the goal");
            return Ok(Some(self.finish(arena, terminal, stats)));
        }

        let dedup = self.config.dedup == DedupPolicy::BestCost;
        let mut best_g: HashMap<LayoutKey, u64> = HashMap::new();
        let mut frontier = Frontier::new();

        let h = self.distances.distance(&self.initial);
        let root = arena.push(SearchNode::root(self.initial.clone(), h));
        frontier.push(root, h);
        if dedup {
            best_g.insert(self.initial.key(), 0);
        }

        self.state = EngineState::Expanding;
        debug!(
            "solving {n}x{n} puzzle, initial h = {h}, dedup = {dedup}",
            n = self.dimension()
        );

        loop {
            let Some(current) = frontier.pop() else {
                stats.frontier_high_water = frontier.high_water();
                self.state = EngineState::Exhausted;
                debug!(
                    "frontier exhausted after {} expansions, no solution",
                    stats.expanded
                );
                return Ok(None);
            };

            let node = arena.get(current);
            let layout = node.layout.clone();
            let g = node.g;

            // a cheaper copy of this layout was queued after this one
            if dedup && best_g.get(&layout.key()).is_some_and(|&best| best < g) {
                continue;
            }

            if let Some(limit) = self.config.max_expansions {
                if stats.expanded >= limit {
                    self.state = EngineState::Exhausted;
                    debug!("expansion limit {limit} reached");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }
            stats.expanded += 1;
            trace!("expanding node {} (g = {g}, f = {})", current.index(), node.f());

            let child_g = g + 1;
            for candidate in layout.transitions() {
                stats.generated += 1;

                if candidate == self.goal {
                    let terminal = arena.push(SearchNode {
                        layout: candidate,
                        parent: Some(current),
                        h: 0,
                        g: child_g,
                    });
                    stats.frontier_high_water = frontier.high_water();
                    return Ok(Some(self.finish(arena, terminal, stats)));
                }

                if dedup {
                    match best_g.entry(candidate.key()) {
                        Entry::Occupied(e) if *e.get() <= child_g => {
                            stats.duplicates_skipped += 1;
                            continue;
                        }
                        Entry::Occupied(mut e) => {
                            e.insert(child_g);
                        }
                        Entry::Vacant(e) => {
                            e.insert(child_g);
                        }
                    }
                }

                if let Some(limit) = self.config.max_nodes {
                    if arena.len() >= limit {
                        self.state = EngineState::Exhausted;
                        debug!("node limit {limit} reached");
                        return Err(SearchError::NodeLimit { limit });
                    }
                }

                let h = self.distances.distance(&candidate);
                let child = SearchNode {
                    layout: candidate,
                    parent: Some(current),
                    h,
                    g: child_g,
                };
                let f = child.f();
                frontier.push(arena.push(child), f);
            }
        }
    }

    fn finish(&mut self, arena: NodeArena, terminal: NodeId, stats: SearchStats) -> Solution {
        self.state = EngineState::GoalFound;
        info!(
            "solution found: {} moves, {} expanded, {} generated, {} duplicates skipped",
            arena.get(terminal).g,
            stats.expanded,
            stats.generated,
            stats.duplicates_skipped
        );
        Solution {
            arena,
            terminal,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_solver_is_idle_and_already_solved() {
        let mut solver = AStarSolver::new(3).unwrap();
        assert_eq!(solver.state(), EngineState::Idle);
        assert_eq!(solver.initial(), solver.goal());

        let solution = solver.solve().unwrap().unwrap();
        assert_eq!(solver.state(), EngineState::GoalFound);
        assert_eq!(solution.cost(), 0);
        assert_eq!(solution.terminal().h, 0);
        assert!(solution.terminal().parent.is_none());
        assert_eq!(solution.stats().expanded, 0);
    }

    #[test]
    fn single_move_is_found_on_first_expansion() {
        let mut solver = AStarSolver::new(3).unwrap();
        solver.set_initial(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let solution = solver.solve().unwrap().unwrap();
        assert_eq!(solution.cost(), 1);
        assert_eq!(solution.stats().expanded, 1);
        assert_eq!(solution.moves(), vec![Move::Left]);
    }

    #[test]
    fn set_initial_validates_input() {
        let mut solver = AStarSolver::new(3).unwrap();
        assert!(matches!(
            solver.set_initial(vec![0, 1, 2, 3]),
            Err(LayoutError::WrongTileCount { .. })
        ));
        assert!(matches!(
            solver.set_initial_layout(Layout::goal(2).unwrap()),
            Err(LayoutError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert_eq!(solver.initial(), solver.goal());
    }

    #[test]
    fn rejects_invalid_dimension() {
        assert_eq!(
            AStarSolver::new(0).unwrap_err(),
            LayoutError::InvalidDimension(0)
        );
    }

    #[test]
    fn set_initial_resets_state() {
        let mut solver = AStarSolver::new(2).unwrap();
        solver.solve().unwrap();
        assert_eq!(solver.state(), EngineState::GoalFound);
        solver.set_initial(vec![1, 0, 2, 3]).unwrap();
        assert_eq!(solver.state(), EngineState::Idle);
    }

    #[test]
    fn huge_heuristic_still_hits_expansion_limit() {
        let n = 1700usize;
        let config = SolverConfig {
            max_expansions: Some(1),
            ..SolverConfig::default()
        };
        let mut solver = AStarSolver::with_config(n, config).unwrap();
        solver
            .set_initial((0..(n * n) as u32).rev().collect())
            .unwrap();

        assert_eq!(
            solver.solve().unwrap_err(),
            SearchError::ExpansionLimit { limit: 1 }
        );
        assert_eq!(solver.state(), EngineState::Exhausted);
    }

    #[test]
    fn invalid_config_is_rejected_before_search() {
        let config = SolverConfig {
            max_nodes: Some(0),
            ..SolverConfig::default()
        };
        let mut solver = AStarSolver::with_config(2, config).unwrap();
        assert!(matches!(solver.solve(), Err(SearchError::Config(_))));
        assert_eq!(solver.state(), EngineState::Idle);
    }
}
