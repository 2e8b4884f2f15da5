//! Error type for the delivery simulation

use thiserror::Error;

use super::types::Place;

/// Errors produced by the delivery simulation.
///
/// None of these are fatal: a caller can recover from any of them, e.g. a
/// robot could fall back to staying in place on [`SimError::NoRoute`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("place {0} is not in the village graph")]
    UnknownPlace(Place),

    #[error("no route from {from} to {to}")]
    NoRoute { from: Place, to: Place },

    #[error("parcel at {0} is already at its destination")]
    AlreadyDelivered(Place),

    #[error("malformed road {0:?}, expected \"From-To\"")]
    MalformedRoad(String),

    #[error("need at least two places to generate parcels, graph has {0}")]
    NotEnoughPlaces(usize),

    #[error("route has no stops")]
    EmptyRoute,

    #[error("route stop {from} is not adjacent to the next stop {to}")]
    BrokenRoute { from: Place, to: Place },

    #[error("no parcels left to deliver")]
    NoParcels,

    #[error("memory does not belong to the {0} robot")]
    MemoryMismatch(&'static str),

    #[error("robot did not finish within {0} turns")]
    TurnLimitExceeded(usize),

    #[error("a comparison needs at least one trial")]
    NoTrials,
}

pub type Result<T> = std::result::Result<T, SimError>;
