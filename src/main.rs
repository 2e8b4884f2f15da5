use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mail_robot::simulation::{
    self, Evaluator, GoalOrientedRobot, LazyRobot, RandomRobot, Robot, Simulator, Strategy,
    VillageGraph, DEFAULT_PARCEL_COUNT, DEFAULT_TRIALS,
};

/// Turn limit applied to the random robot when none is given
const RANDOM_ROBOT_TURN_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RobotKind {
    Random,
    Route,
    GoalOriented,
    Lazy,
}

#[derive(Parser)]
#[command(name = "mail_robot")]
#[command(about = "Compare mail-delivery robot strategies in Meadowfield")]
struct Cli {
    /// First robot to compare
    #[arg(long, value_enum, default_value = "goal-oriented")]
    robot_a: RobotKind,

    /// Second robot to compare
    #[arg(long, value_enum, default_value = "lazy")]
    robot_b: RobotKind,

    /// Number of random village states to run both robots on
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Parcels per village state
    #[arg(long, default_value_t = DEFAULT_PARCEL_COUNT)]
    parcels: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on a run after this many turns
    #[arg(long)]
    turn_limit: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,mail_robot=info"),
    )
    .init();

    let cli = Cli::parse();
    let graph = simulation::meadowfield().context("Failed to build Meadowfield")?;
    info!(
        "Meadowfield: {} places, {} roads",
        graph.place_count(),
        graph.road_count()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut robot_a = build_robot(cli.robot_a, &graph, &mut rng)?;
    let mut robot_b = build_robot(cli.robot_b, &graph, &mut rng)?;

    let turn_limit = cli.turn_limit.or_else(|| {
        let has_random = [cli.robot_a, cli.robot_b].contains(&RobotKind::Random);
        has_random.then(|| {
            warn!(
                "Random robot may never finish, limiting runs to {} turns",
                RANDOM_ROBOT_TURN_LIMIT
            );
            RANDOM_ROBOT_TURN_LIMIT
        })
    });
    let simulator = match turn_limit {
        Some(limit) => Simulator::with_turn_limit(limit),
        None => Simulator::new(),
    };

    let start = simulation::post_office();
    let memory_a = robot_a.initial_memory(&start);
    let memory_b = robot_b.initial_memory(&start);
    let comparison = Evaluator::new(start)
        .trials(cli.trials)
        .parcel_count(cli.parcels)
        .simulator(simulator)
        .compare(&graph, &mut rng, &mut robot_a, memory_a, &mut robot_b, memory_b)
        .context("Comparison failed")?;

    println!("=== Robot Comparison ===");
    println!("Trials: {}, Parcels: {}", comparison.trials, cli.parcels);
    println!("{}: {:.2} turns", robot_a.name(), comparison.average_a);
    println!("{}: {:.2} turns", robot_b.name(), comparison.average_b);

    Ok(())
}

fn build_robot(kind: RobotKind, graph: &VillageGraph, rng: &mut StdRng) -> Result<Strategy> {
    let robot = match kind {
        RobotKind::Random => Strategy::Random(RandomRobot::new(StdRng::from_rng(rng))),
        RobotKind::Route => Strategy::Route(
            simulation::mail_route_robot(graph).context("Mail route does not fit the village")?,
        ),
        RobotKind::GoalOriented => Strategy::GoalOriented(GoalOrientedRobot),
        RobotKind::Lazy => Strategy::Lazy(LazyRobot),
    };
    Ok(robot)
}
