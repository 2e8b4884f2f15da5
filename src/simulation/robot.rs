//! Robot strategies
//!
//! Every robot answers the same question: given the current state and its own
//! memory, where should it go next? The simulator threads the memory from one
//! decision to the next without looking inside it.

use log::trace;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::error::{Result, SimError};
use super::road_network::VillageGraph;
use super::types::{Parcel, Place};
use super::village_state::VillageState;

/// A robot's decision: the place to move to and the memory for next turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<M> {
    pub direction: Place,
    pub memory: M,
}

/// A delivery strategy
pub trait Robot {
    /// Private state carried between decisions
    type Memory: Clone;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    fn decide(
        &mut self,
        graph: &VillageGraph,
        state: &VillageState,
        memory: Self::Memory,
    ) -> Result<Action<Self::Memory>>;
}

/// Wanders to a random neighbor every turn
///
/// Nothing guarantees this robot ever finishes; run it with a turn limit.
#[derive(Debug, Clone)]
pub struct RandomRobot<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomRobot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRobot<StdRng> {
    /// Create a random robot with a seeded RNG for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Robot for RandomRobot<R> {
    type Memory = ();

    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(
        &mut self,
        graph: &VillageGraph,
        state: &VillageState,
        _memory: (),
    ) -> Result<Action<()>> {
        let neighbors = graph.neighbors(state.position())?;
        let direction = neighbors
            .choose(&mut self.rng)
            .map(|place| (*place).clone())
            .ok_or_else(|| SimError::UnknownPlace(state.position().clone()))?;
        Ok(Action {
            direction,
            memory: (),
        })
    }
}

/// Follows a fixed closed tour forever
///
/// The memory is the index of the last stop reached. Every place on the tour
/// gets visited once per lap, so all parcels are delivered within two laps.
#[derive(Debug, Clone)]
pub struct RouteRobot {
    route: Vec<Place>,
}

impl RouteRobot {
    /// Checks that each stop is adjacent to the next one, the last stop
    /// wrapping around to the first.
    pub fn new(graph: &VillageGraph, route: Vec<Place>) -> Result<Self> {
        if route.is_empty() {
            return Err(SimError::EmptyRoute);
        }
        for (index, from) in route.iter().enumerate() {
            let to = &route[(index + 1) % route.len()];
            if !graph.is_adjacent(from, to) {
                return Err(SimError::BrokenRoute {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        Ok(Self { route })
    }

    pub fn route(&self) -> &[Place] {
        &self.route
    }

    /// Memory that makes the robot continue the tour from `place`
    pub fn memory_at(&self, place: &Place) -> Option<usize> {
        self.route.iter().position(|stop| stop == place)
    }
}

impl Robot for RouteRobot {
    type Memory = usize;

    fn name(&self) -> &'static str {
        "route"
    }

    fn decide(
        &mut self,
        _graph: &VillageGraph,
        _state: &VillageState,
        memory: usize,
    ) -> Result<Action<usize>> {
        let next = (memory + 1) % self.route.len();
        Ok(Action {
            direction: self.route[next].clone(),
            memory: next,
        })
    }
}

/// Where a parcel has to be taken from here: its pickup place if the robot
/// isn't carrying it, else its destination
fn parcel_goal<'a>(state: &VillageState, parcel: &'a Parcel) -> &'a Place {
    if parcel.location() != state.position() {
        parcel.location()
    } else {
        parcel.destination()
    }
}

/// Commits to the first step of `route`, keeping the rest as memory
fn follow(route: Vec<Place>) -> Result<Action<Vec<Place>>> {
    let mut steps = route.into_iter();
    let direction = steps.next().ok_or(SimError::EmptyRoute)?;
    Ok(Action {
        direction,
        memory: steps.collect(),
    })
}

/// Plans a route for the first pending parcel and sticks to it
///
/// Only the first parcel is considered, so it happily walks past other
/// parcels and back again.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalOrientedRobot;

impl Robot for GoalOrientedRobot {
    type Memory = Vec<Place>;

    fn name(&self) -> &'static str {
        "goal-oriented"
    }

    fn decide(
        &mut self,
        graph: &VillageGraph,
        state: &VillageState,
        memory: Vec<Place>,
    ) -> Result<Action<Vec<Place>>> {
        if !memory.is_empty() {
            return follow(memory);
        }
        let parcel = state.parcels().first().ok_or(SimError::NoParcels)?;
        let goal = parcel_goal(state, parcel);
        trace!("goal-oriented robot heading for {}", goal);
        follow(graph.find_route(state.position(), goal)?)
    }
}

/// Plans a route for every pending parcel and takes the shortest
///
/// Equal-length routes are resolved in favour of the earlier parcel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyRobot;

impl Robot for LazyRobot {
    type Memory = Vec<Place>;

    fn name(&self) -> &'static str {
        "lazy"
    }

    fn decide(
        &mut self,
        graph: &VillageGraph,
        state: &VillageState,
        memory: Vec<Place>,
    ) -> Result<Action<Vec<Place>>> {
        if !memory.is_empty() {
            return follow(memory);
        }

        let mut shortest: Option<Vec<Place>> = None;
        for parcel in state.parcels() {
            let candidate = graph.find_route(state.position(), parcel_goal(state, parcel))?;
            let is_shorter = shortest
                .as_ref()
                .is_none_or(|best| candidate.len() < best.len());
            if is_shorter {
                shortest = Some(candidate);
            }
        }

        let route = shortest.ok_or(SimError::NoParcels)?;
        trace!("lazy robot picked a {}-step route", route.len());
        follow(route)
    }
}

/// Memory for any of the built-in robots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotMemory {
    None,
    Index(usize),
    Route(Vec<Place>),
}

/// Closed set of the built-in robots, for picking a strategy at runtime
#[derive(Debug, Clone)]
pub enum Strategy {
    Random(RandomRobot),
    Route(RouteRobot),
    GoalOriented(GoalOrientedRobot),
    Lazy(LazyRobot),
}

impl Strategy {
    /// Starting memory for a robot standing at `start`
    pub fn initial_memory(&self, start: &Place) -> RobotMemory {
        match self {
            Strategy::Random(_) => RobotMemory::None,
            Strategy::Route(robot) => RobotMemory::Index(robot.memory_at(start).unwrap_or(0)),
            Strategy::GoalOriented(_) | Strategy::Lazy(_) => RobotMemory::Route(Vec::new()),
        }
    }
}

fn wrap<M>(action: Action<M>, into: fn(M) -> RobotMemory) -> Action<RobotMemory> {
    Action {
        direction: action.direction,
        memory: into(action.memory),
    }
}

impl Robot for Strategy {
    type Memory = RobotMemory;

    fn name(&self) -> &'static str {
        match self {
            Strategy::Random(robot) => robot.name(),
            Strategy::Route(robot) => robot.name(),
            Strategy::GoalOriented(robot) => robot.name(),
            Strategy::Lazy(robot) => robot.name(),
        }
    }

    fn decide(
        &mut self,
        graph: &VillageGraph,
        state: &VillageState,
        memory: RobotMemory,
    ) -> Result<Action<RobotMemory>> {
        let name = self.name();
        match (self, memory) {
            (Strategy::Random(robot), RobotMemory::None) => {
                Ok(wrap(robot.decide(graph, state, ())?, |_| RobotMemory::None))
            }
            (Strategy::Route(robot), RobotMemory::Index(index)) => {
                Ok(wrap(robot.decide(graph, state, index)?, RobotMemory::Index))
            }
            (Strategy::GoalOriented(robot), RobotMemory::Route(route)) => {
                Ok(wrap(robot.decide(graph, state, route)?, RobotMemory::Route))
            }
            (Strategy::Lazy(robot), RobotMemory::Route(route)) => {
                Ok(wrap(robot.decide(graph, state, route)?, RobotMemory::Route))
            }
            _ => Err(SimError::MemoryMismatch(name)),
        }
    }
}
