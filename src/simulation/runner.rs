//! Drives a robot until every parcel is delivered

use log::{debug, trace};

use super::error::{Result, SimError};
use super::road_network::VillageGraph;
use super::robot::Robot;
use super::village_state::VillageState;

/// Runs robots against village states and counts their turns
///
/// By default a run only ends once all parcels are delivered. A turn limit
/// can be set so that a robot that never finishes turns into an error
/// instead of a hang.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    turn_limit: Option<usize>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator that gives up after `turn_limit` turns
    pub fn with_turn_limit(turn_limit: usize) -> Self {
        Self {
            turn_limit: Some(turn_limit),
        }
    }

    pub fn turn_limit(&self) -> Option<usize> {
        self.turn_limit
    }

    /// Lets `robot` act on `state` until nothing is left to deliver.
    /// Returns the number of turns taken.
    ///
    /// A move to a non-adjacent place still costs a turn.
    pub fn run<R: Robot + ?Sized>(
        &self,
        graph: &VillageGraph,
        state: &VillageState,
        robot: &mut R,
        memory: R::Memory,
    ) -> Result<usize> {
        let mut state = state.clone();
        let mut memory = memory;
        let mut turns = 0;

        while !state.is_done() {
            if let Some(limit) = self.turn_limit {
                if turns >= limit {
                    return Err(SimError::TurnLimitExceeded(limit));
                }
            }

            let action = robot.decide(graph, &state, memory)?;
            state = state.move_to(graph, &action.direction);
            memory = action.memory;
            turns += 1;
            trace!(
                "{} robot moved to {}, now {}",
                robot.name(),
                action.direction,
                state.summary()
            );
        }

        debug!("{} robot done in {} turns", robot.name(), turns);
        Ok(turns)
    }
}
