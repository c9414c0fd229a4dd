use npuzzle_solver::scramble::scramble;
use npuzzle_solver::{manhattan_distance, AStarSolver, Layout};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scrambled(dimension: usize, moves: usize, seed: u64) -> Layout {
    scramble(dimension, moves, &mut StdRng::seed_from_u64(seed)).expect("valid dimension")
}

fn expected_transition_count(layout: &Layout) -> usize {
    let last = layout.dimension() - 1;
    let (x, y) = layout.coords(layout.blank_index());
    let on_edge = |v: usize| v == 0 || v == last;
    4 - usize::from(on_edge(x)) - usize::from(on_edge(y))
}

proptest! {
    #[test]
    fn heuristic_of_layout_against_itself_is_zero(
        dimension in 1usize..6, moves in 0usize..60, seed in any::<u64>()
    ) {
        let layout = scrambled(dimension, moves, seed);
        prop_assert_eq!(manhattan_distance(&layout, &layout), 0);
    }

    #[test]
    fn one_move_changes_heuristic_by_one(
        dimension in 2usize..6, moves in 0usize..60, seed in any::<u64>()
    ) {
        let layout = scrambled(dimension, moves, seed);
        let goal = Layout::goal(dimension).unwrap();
        let h = manhattan_distance(&layout, &goal);
        for next in layout.transitions() {
            prop_assert_eq!(manhattan_distance(&next, &goal).abs_diff(h), 1);
        }
    }

    #[test]
    fn transitions_swap_exactly_two_cells(
        dimension in 2usize..6, moves in 0usize..60, seed in any::<u64>()
    ) {
        let layout = scrambled(dimension, moves, seed);
        let next = layout.transitions();

        prop_assert!((2..=4).contains(&next.len()));
        prop_assert_eq!(next.len(), expected_transition_count(&layout));
        for candidate in &next {
            let differing = layout
                .tiles()
                .iter()
                .zip(candidate.tiles())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(differing, 2);
        }
    }

    #[test]
    fn solution_path_is_a_chain_of_legal_moves(moves in 0usize..20, seed in any::<u64>()) {
        let start = scrambled(3, moves, seed);
        let mut solver = AStarSolver::new(3).unwrap();
        solver.set_initial_layout(start.clone()).unwrap();

        let solution = solver.solve().unwrap().expect("scrambles are solvable");
        let path = solution.path();

        prop_assert_eq!(solution.cost() as usize, path.len() - 1);
        prop_assert!(solution.cost() as usize <= moves);
        prop_assert_eq!(path.first(), Some(&start));
        prop_assert!(path.last().unwrap().is_goal());
        for pair in path.windows(2) {
            prop_assert!(pair[0].transitions().contains(&pair[1]));
        }
    }

    #[test]
    fn replaying_moves_reaches_goal(moves in 0usize..16, seed in any::<u64>()) {
        let start = scrambled(3, moves, seed);
        let mut solver = AStarSolver::new(3).unwrap();
        solver.set_initial_layout(start.clone()).unwrap();
        let solution = solver.solve().unwrap().unwrap();

        let mut layout = start;
        for m in solution.moves() {
            layout = layout.apply(m).expect("recorded moves stay on the board");
        }
        prop_assert!(layout.is_goal());
    }
}
