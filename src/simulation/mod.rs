//! Mail-delivery robot simulation
//!
//! A robot walks the roads of a small village picking up and dropping off
//! parcels. Different strategies decide where it goes next; the simulator
//! counts how many turns each needs and the evaluator compares two of them.

mod error;
mod evaluator;
mod meadowfield;
mod road_network;
mod robot;
mod runner;
mod types;
mod village_state;

pub use error::{Result, SimError};
pub use evaluator::{Comparison, Evaluator, DEFAULT_PARCEL_COUNT, DEFAULT_TRIALS};
pub use meadowfield::{mail_route_robot, meadowfield, post_office, MAIL_ROUTE, POST_OFFICE, ROADS};
pub use road_network::{parse_roads, VillageGraph};
pub use robot::{
    Action, GoalOrientedRobot, LazyRobot, RandomRobot, Robot, RobotMemory, RouteRobot, Strategy,
};
pub use runner::Simulator;
pub use types::{Parcel, Place};
pub use village_state::VillageState;
