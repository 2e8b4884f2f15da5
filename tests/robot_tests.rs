//! Robot strategy, simulator and evaluator tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use mail_robot::simulation::{
    mail_route_robot, meadowfield, post_office, Action, Evaluator, GoalOrientedRobot, LazyRobot,
    Parcel, Place, RandomRobot, Robot, RobotMemory, RouteRobot, SimError, Simulator, Strategy,
    VillageGraph, VillageState, MAIL_ROUTE,
};

fn place(name: &str) -> Place {
    Place::from(name)
}

fn line_graph() -> VillageGraph {
    VillageGraph::build([("A", "B"), ("B", "C")])
}

fn line_state() -> VillageState {
    VillageState::new("A", vec![Parcel::new("A", "C").unwrap()])
}

#[test]
fn test_goal_oriented_robot_plans_once() {
    let graph = line_graph();
    let mut robot = GoalOrientedRobot;

    let action = robot.decide(&graph, &line_state(), Vec::new()).unwrap();
    // Parcel is already here, so head straight for its destination
    assert_eq!(
        action,
        Action {
            direction: place("B"),
            memory: vec![place("C")],
        }
    );

    let state = line_state().move_to(&graph, &action.direction);
    let action = robot.decide(&graph, &state, action.memory).unwrap();
    assert_eq!(action.direction, place("C"));
    assert!(action.memory.is_empty());
}

#[test]
fn test_goal_oriented_robot_only_looks_at_first_parcel() {
    let graph = VillageGraph::build([("A", "B"), ("B", "C"), ("A", "D")]);
    let state = VillageState::new(
        "A",
        vec![Parcel::new("C", "A").unwrap(), Parcel::new("D", "A").unwrap()],
    );

    let action = GoalOrientedRobot.decide(&graph, &state, Vec::new()).unwrap();
    assert_eq!(action.direction, place("B"));
    assert_eq!(action.memory, vec![place("C")]);
}

#[test]
fn test_lazy_robot_takes_shortest_candidate() {
    let graph = VillageGraph::build([("A", "B"), ("B", "C"), ("A", "D")]);
    let state = VillageState::new(
        "A",
        vec![Parcel::new("C", "A").unwrap(), Parcel::new("D", "A").unwrap()],
    );

    let action = LazyRobot.decide(&graph, &state, Vec::new()).unwrap();
    assert_eq!(action.direction, place("D"));
    assert!(action.memory.is_empty());
}

#[test]
fn test_lazy_robot_prefers_first_parcel_on_ties() {
    let graph = VillageGraph::build([("A", "B"), ("A", "C")]);
    let state = VillageState::new(
        "A",
        vec![Parcel::new("C", "B").unwrap(), Parcel::new("B", "C").unwrap()],
    );

    let action = LazyRobot.decide(&graph, &state, Vec::new()).unwrap();
    assert_eq!(action.direction, place("C"));
}

#[test]
fn test_planning_robots_follow_memory_first() {
    let graph = line_graph();
    let memory = vec![place("B"), place("A")];

    let lazy = LazyRobot.decide(&graph, &line_state(), memory.clone()).unwrap();
    let goal = GoalOrientedRobot.decide(&graph, &line_state(), memory).unwrap();
    for action in [lazy, goal] {
        assert_eq!(action.direction, place("B"));
        assert_eq!(action.memory, vec![place("A")]);
    }
}

#[test]
fn test_planning_robots_need_parcels() {
    let graph = line_graph();
    let done = VillageState::new("A", vec![]);

    assert_eq!(
        LazyRobot.decide(&graph, &done, Vec::new()),
        Err(SimError::NoParcels)
    );
    assert_eq!(
        GoalOrientedRobot.decide(&graph, &done, Vec::new()),
        Err(SimError::NoParcels)
    );
}

#[test]
fn test_random_robot_stays_on_roads() {
    let graph = meadowfield().unwrap();
    let mut robot = RandomRobot::with_seed(5);
    let state = VillageState::new(post_office(), vec![]);

    for _ in 0..50 {
        let action = robot.decide(&graph, &state, ()).unwrap();
        assert!(graph.is_adjacent(state.position(), &action.direction));
    }
}

#[test]
fn test_random_robot_is_reproducible_with_seed() {
    let graph = meadowfield().unwrap();
    let state = VillageState::new(post_office(), vec![]);
    let mut first = RandomRobot::with_seed(99);
    let mut second = RandomRobot::new(StdRng::seed_from_u64(99));

    for _ in 0..20 {
        assert_eq!(
            first.decide(&graph, &state, ()).unwrap(),
            second.decide(&graph, &state, ()).unwrap()
        );
    }
}

#[test]
fn test_route_robot_cycles_through_route() {
    let graph = meadowfield().unwrap();
    let mut robot = mail_route_robot(&graph).unwrap();
    let state = VillageState::new(post_office(), vec![]);

    let last = MAIL_ROUTE.len() - 1;
    assert_eq!(robot.memory_at(&post_office()), Some(last));

    let action = robot.decide(&graph, &state, last).unwrap();
    assert_eq!(action.direction, place(MAIL_ROUTE[0]));
    assert_eq!(action.memory, 0);

    let action = robot.decide(&graph, &state, 0).unwrap();
    assert_eq!(action.direction, place(MAIL_ROUTE[1]));
    assert_eq!(action.memory, 1);
}

#[test]
fn test_route_robot_rejects_broken_routes() {
    let graph = line_graph();

    assert_eq!(
        RouteRobot::new(&graph, vec![]).unwrap_err(),
        SimError::EmptyRoute
    );
    // A-B-C does not lead back to A
    assert_eq!(
        RouteRobot::new(&graph, vec![place("A"), place("B"), place("C")]).unwrap_err(),
        SimError::BrokenRoute {
            from: place("C"),
            to: place("A"),
        }
    );
    assert!(RouteRobot::new(&graph, vec![place("A"), place("B"), place("C"), place("B")]).is_ok());
}

#[test]
fn test_simulator_counts_turns() {
    let graph = line_graph();
    let simulator = Simulator::new();

    assert_eq!(
        simulator
            .run(&graph, &line_state(), &mut GoalOrientedRobot, Vec::new())
            .unwrap(),
        2
    );
    assert_eq!(
        simulator
            .run(&graph, &line_state(), &mut LazyRobot, Vec::new())
            .unwrap(),
        2
    );
    assert_eq!(
        simulator
            .run(&graph, &VillageState::new("A", vec![]), &mut LazyRobot, Vec::new())
            .unwrap(),
        0
    );
}

#[test]
fn test_simulator_turn_limit() {
    let graph = line_graph();
    let simulator = Simulator::with_turn_limit(1);

    assert_eq!(simulator.turn_limit(), Some(1));
    assert_eq!(
        simulator.run(&graph, &line_state(), &mut RandomRobot::with_seed(1), ()),
        Err(SimError::TurnLimitExceeded(1))
    );
}

#[test]
fn test_route_robot_finishes_within_two_laps() {
    let graph = meadowfield().unwrap();
    let mut robot = mail_route_robot(&graph).unwrap();
    let start_memory = robot.memory_at(&post_office()).unwrap();
    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..50 {
        let state = VillageState::random(&graph, &mut rng, &post_office(), 10).unwrap();
        let turns = simulator
            .run(&graph, &state, &mut robot, start_memory)
            .unwrap();
        assert!(turns <= 2 * MAIL_ROUTE.len(), "took {} turns", turns);
    }
}

#[test]
fn test_random_robot_eventually_finishes() {
    let graph = meadowfield().unwrap();
    let simulator = Simulator::with_turn_limit(100_000);
    let mut rng = StdRng::seed_from_u64(8);
    let mut robot = RandomRobot::with_seed(8);

    for _ in 0..10 {
        let state = VillageState::random(&graph, &mut rng, &post_office(), 5).unwrap();
        assert!(simulator.run(&graph, &state, &mut robot, ()).is_ok());
    }
}

#[test]
fn test_strategy_dispatch() {
    let graph = meadowfield().unwrap();
    let start = post_office();
    let state = VillageState::new(start.clone(), vec![Parcel::new("Farm", "Cabin").unwrap()]);

    let mut route = Strategy::Route(mail_route_robot(&graph).unwrap());
    assert_eq!(
        route.initial_memory(&start),
        RobotMemory::Index(MAIL_ROUTE.len() - 1)
    );

    let mut lazy = Strategy::Lazy(LazyRobot);
    let memory = lazy.initial_memory(&start);
    assert_eq!(memory, RobotMemory::Route(Vec::new()));
    let action = lazy.decide(&graph, &state, memory).unwrap();
    assert_eq!(action.direction, place("Marketplace"));
    assert_eq!(action.memory, RobotMemory::Route(vec![place("Farm")]));

    assert_eq!(
        lazy.decide(&graph, &state, RobotMemory::Index(0)),
        Err(SimError::MemoryMismatch("lazy"))
    );

    let turns = Simulator::new()
        .run(&graph, &state, &mut route, RobotMemory::Index(MAIL_ROUTE.len() - 1))
        .unwrap();
    assert!(turns > 0);
}

#[test]
fn test_evaluator_is_reproducible() {
    let graph = meadowfield().unwrap();
    let evaluator = Evaluator::new(post_office()).trials(1);

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        evaluator
            .compare(
                &graph,
                &mut rng,
                &mut RandomRobot::with_seed(seed),
                (),
                &mut LazyRobot,
                Vec::new(),
            )
            .unwrap()
    };

    let first = run(2024);
    assert_eq!(first.trials, 1);
    assert_eq!(first, run(2024));
}

#[test]
fn test_evaluator_rejects_zero_trials() {
    let graph = meadowfield().unwrap();
    let result = Evaluator::new(post_office()).trials(0).compare(
        &graph,
        &mut StdRng::seed_from_u64(0),
        &mut LazyRobot,
        Vec::new(),
        &mut GoalOrientedRobot,
        Vec::new(),
    );
    assert_eq!(result, Err(SimError::NoTrials));
}

#[test]
fn test_lazy_robot_beats_goal_oriented_robot() {
    let graph = meadowfield().unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let comparison = Evaluator::new(post_office())
        .compare(
            &graph,
            &mut rng,
            &mut LazyRobot,
            Vec::new(),
            &mut GoalOrientedRobot,
            Vec::new(),
        )
        .unwrap();

    assert_eq!(comparison.trials, 100);
    assert!(
        comparison.average_a <= comparison.average_b,
        "lazy robot averaged {:.2} turns, goal-oriented {:.2}",
        comparison.average_a,
        comparison.average_b
    );
}
