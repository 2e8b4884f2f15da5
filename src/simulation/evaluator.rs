//! Paired comparison of two robots on shared random trials

use log::info;
use rand::Rng;

use super::error::{Result, SimError};
use super::road_network::VillageGraph;
use super::robot::Robot;
use super::runner::Simulator;
use super::types::Place;
use super::village_state::VillageState;

/// Trials run by a comparison unless configured otherwise
pub const DEFAULT_TRIALS: usize = 100;

/// Parcels per generated state unless configured otherwise
pub const DEFAULT_PARCEL_COUNT: usize = 5;

/// Average turn counts of two robots over the same trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub trials: usize,
    pub average_a: f64,
    pub average_b: f64,
}

/// Compares robots by running both on identical random states
#[derive(Debug, Clone)]
pub struct Evaluator {
    start: Place,
    trials: usize,
    parcel_count: usize,
    simulator: Simulator,
}

impl Evaluator {
    /// Evaluator whose generated states put the robot at `start`
    pub fn new(start: impl Into<Place>) -> Self {
        Self {
            start: start.into(),
            trials: DEFAULT_TRIALS,
            parcel_count: DEFAULT_PARCEL_COUNT,
            simulator: Simulator::new(),
        }
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn parcel_count(mut self, parcel_count: usize) -> Self {
        self.parcel_count = parcel_count;
        self
    }

    pub fn simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Runs `robot_a` and `robot_b` on the same freshly generated state for
    /// every trial and returns their mean turn counts.
    ///
    /// `rng` only drives state generation; robots bring their own randomness.
    pub fn compare<A, B, R>(
        &self,
        graph: &VillageGraph,
        rng: &mut R,
        robot_a: &mut A,
        memory_a: A::Memory,
        robot_b: &mut B,
        memory_b: B::Memory,
    ) -> Result<Comparison>
    where
        A: Robot + ?Sized,
        B: Robot + ?Sized,
        R: Rng + ?Sized,
    {
        if self.trials == 0 {
            return Err(SimError::NoTrials);
        }

        let mut total_a = 0;
        let mut total_b = 0;
        for _ in 0..self.trials {
            let state = VillageState::random(graph, rng, &self.start, self.parcel_count)?;
            total_a += self.simulator.run(graph, &state, robot_a, memory_a.clone())?;
            total_b += self.simulator.run(graph, &state, robot_b, memory_b.clone())?;
        }

        let comparison = Comparison {
            trials: self.trials,
            average_a: total_a as f64 / self.trials as f64,
            average_b: total_b as f64 / self.trials as f64,
        };
        info!(
            "{} robot: {:.2} turns, {} robot: {:.2} turns ({} trials, {} parcels)",
            robot_a.name(),
            comparison.average_a,
            robot_b.name(),
            comparison.average_b,
            comparison.trials,
            self.parcel_count
        );
        Ok(comparison)
    }
}
