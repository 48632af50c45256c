use octile_pathfinder::algorithms::octile_cost;
use octile_pathfinder::{
    find_path, FrontierKind, ObstacleField, PathfindingAlgorithm, PathfindingEngine, Position,
    ReferenceAStar, SearchConfig, SearchError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: i32 = 24;
const HEIGHT: i32 = 18;

struct Case {
    field: ObstacleField,
    start: Position,
    goal: Position,
}

fn random_case(seed: u64, density: usize) -> Case {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Position::new(rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT));
    let goal = Position::new(rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT));
    let field = ObstacleField::random(WIDTH, HEIGHT, density, &mut rng, &[start, goal]).unwrap();
    Case { field, start, goal }
}

fn assert_valid_path(case: &Case, waypoints: &[Position], agent_size: Option<u32>) {
    let mut previous = case.start;
    for &w in waypoints {
        assert!(
            previous.is_adjacent(w),
            "{} -> {} is not a single step",
            previous,
            w
        );
        assert!(case.field.contains(w), "{} outside grid", w);
        assert!(!case.field.is_blocked(w), "{} is blocked", w);
        if let Some(size) = agent_size {
            assert!(case.field.is_clear_for(w, size), "{} violates footprint", w);
        }
        previous = w;
    }
    if case.start != case.goal {
        assert_eq!(waypoints.last(), Some(&case.goal));
    }
}

fn step_cost(start: Position, waypoints: &[Position]) -> u64 {
    let mut previous = start;
    let mut total = 0;
    for &w in waypoints {
        total += octile_cost(previous, w);
        previous = w;
    }
    total
}

#[test]
fn test_empty_grid_matches_octile_distance() {
    let field = ObstacleField::empty(WIDTH, HEIGHT).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..50 {
        let start = Position::new(rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT));
        let goal = Position::new(rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT));
        let path = find_path(start, goal, &field, None).unwrap();

        let steps = start.x.abs_diff(goal.x).max(start.y.abs_diff(goal.y)) as usize;
        assert_eq!(path.len(), steps);
        assert_eq!(path.cost, octile_cost(start, goal));
    }
}

#[test]
fn test_random_fields_produce_valid_optimal_paths() {
    let engine = PathfindingEngine::default();

    for seed in 0..60 {
        let case = random_case(seed, 120);
        let ours = engine.find_path(case.start, case.goal, &case.field, None);
        let reference = ReferenceAStar.find_path(case.start, case.goal, &case.field, None);

        match (&ours, &reference) {
            (Ok(path), Ok(expected)) => {
                assert_valid_path(&case, &path.waypoints, None);
                assert_eq!(path.cost, step_cost(case.start, &path.waypoints));
                assert_eq!(path.cost, expected.cost, "seed {}", seed);
            }
            (Err(SearchError::NotReachable { .. }), Err(SearchError::NotReachable { .. })) => {}
            other => panic!("seed {}: outcomes differ: {:?}", seed, other),
        }
    }
}

#[test]
fn test_agent_footprint_paths_are_valid_and_optimal() {
    let engine = PathfindingEngine::default();

    for seed in 100..130 {
        let case = random_case(seed, 25);
        for size in [1, 2, 3] {
            let ours = engine.find_path(case.start, case.goal, &case.field, Some(size));
            let reference =
                ReferenceAStar.find_path(case.start, case.goal, &case.field, Some(size));

            match (&ours, &reference) {
                (Ok(path), Ok(expected)) => {
                    assert_valid_path(&case, &path.waypoints, Some(size));
                    assert_eq!(path.cost, expected.cost, "seed {} size {}", seed, size);
                }
                (Err(SearchError::NotReachable { .. }), Err(SearchError::NotReachable { .. })) => {}
                other => panic!(
                    "seed {} size {}: outcomes differ: {:?}",
                    seed, size, other
                ),
            }
        }
    }
}

#[test]
fn test_frontier_strategies_are_interchangeable() {
    let linear =
        PathfindingEngine::new(SearchConfig::default().with_frontier(FrontierKind::LinearScan));
    let heap =
        PathfindingEngine::new(SearchConfig::default().with_frontier(FrontierKind::BinaryHeap));

    for seed in 200..240 {
        let case = random_case(seed, 90);
        assert_eq!(
            linear.find_path(case.start, case.goal, &case.field, None),
            heap.find_path(case.start, case.goal, &case.field, None),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_repeated_searches_are_identical() {
    let engine = PathfindingEngine::default();
    for seed in 300..320 {
        let case = random_case(seed, 100);
        let first = engine.find_path(case.start, case.goal, &case.field, Some(1));
        let second = engine.find_path(case.start, case.goal, &case.field, Some(1));
        assert_eq!(first, second);
    }
}

#[test]
fn test_walled_off_goal_is_not_reachable() {
    // closed ring around the goal
    let ring = (3..=7).flat_map(|i| {
        [
            Position::new(i, 3),
            Position::new(i, 7),
            Position::new(3, i),
            Position::new(7, i),
        ]
    });
    let field = ObstacleField::new(12, 12, ring).unwrap();

    let err = find_path(Position::new(0, 0), Position::new(5, 5), &field, None).unwrap_err();
    assert!(matches!(err, SearchError::NotReachable { .. }));

    // and from inside the ring the outside is unreachable
    let err = find_path(Position::new(5, 5), Position::new(11, 11), &field, None).unwrap_err();
    assert_eq!(err, SearchError::NotReachable { nodes_expanded: 9 });
}

#[test]
fn test_start_equal_to_goal_is_never_unreachable() {
    let walls: Vec<Position> = Position::new(4, 4).neighbors().collect();
    let field = ObstacleField::new(9, 9, walls).unwrap();

    let path = find_path(Position::new(4, 4), Position::new(4, 4), &field, Some(5)).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.cost, 0);
}

#[test]
fn test_out_of_grid_obstacles_are_ignored() {
    let field = ObstacleField::new(
        5,
        5,
        [Position::new(-1, 0), Position::new(7, 7), Position::new(2, 5)],
    )
    .unwrap();

    let path = find_path(Position::new(0, 0), Position::new(4, 0), &field, None).unwrap();
    assert_eq!(path.cost, 40);
}

#[test]
fn test_engine_and_field_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PathfindingEngine>();
    assert_send_sync::<ObstacleField>();

    let field = ObstacleField::new(16, 16, [Position::new(8, 8)]).unwrap();
    let engine = PathfindingEngine::default();
    let endpoints: Vec<(Position, Position)> = (0..4)
        .map(|i| (Position::new(0, i), Position::new(15, 15 - i)))
        .collect();

    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = endpoints
            .iter()
            .map(|&(start, goal)| {
                let (field, engine) = (&field, &engine);
                scope.spawn(move || engine.find_path(start, goal, field, None))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (&(start, goal), outcome) in endpoints.iter().zip(threaded) {
        let sequential = engine.find_path(start, goal, &field, None);
        let reference = ReferenceAStar.find_path(start, goal, &field, None).unwrap();

        assert_eq!(outcome, sequential);
        let cost = outcome.unwrap().cost;
        assert_eq!(cost, reference.cost, "{} -> {}", start, goal);
    }

    // (8, 8) sits on the diagonal, so that route pays for a detour
    let diagonal = engine
        .find_path(Position::new(0, 0), Position::new(15, 15), &field, None)
        .unwrap();
    assert!(diagonal.cost > octile_cost(Position::new(0, 0), Position::new(15, 15)));
}
