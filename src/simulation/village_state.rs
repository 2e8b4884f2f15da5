//! Immutable snapshot of the robot's world

use rand::seq::IndexedRandom;
use rand::Rng;

use super::error::{Result, SimError};
use super::road_network::VillageGraph;
use super::types::{Parcel, Place};

/// Where the robot is and which parcels are still pending
///
/// States are values: moving produces a new state and leaves the old one
/// untouched, so the same state can be handed to several robots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageState {
    position: Place,
    parcels: Vec<Parcel>,
}

impl VillageState {
    pub fn new(position: impl Into<Place>, parcels: Vec<Parcel>) -> Self {
        Self {
            position: position.into(),
            parcels,
        }
    }

    /// Generates `parcel_count` parcels scattered over the village, with the
    /// robot standing at `start`.
    ///
    /// Places are drawn from the graph's insertion order, so a seeded `rng`
    /// always produces the same state.
    pub fn random<R: Rng + ?Sized>(
        graph: &VillageGraph,
        rng: &mut R,
        start: &Place,
        parcel_count: usize,
    ) -> Result<Self> {
        if !graph.contains(start) {
            return Err(SimError::UnknownPlace(start.clone()));
        }
        let places = graph.places();
        if places.len() < 2 {
            return Err(SimError::NotEnoughPlaces(places.len()));
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let destination = *places.choose(rng).ok_or(SimError::NotEnoughPlaces(0))?;
            let location = loop {
                let candidate = *places.choose(rng).ok_or(SimError::NotEnoughPlaces(0))?;
                if candidate != destination {
                    break candidate;
                }
            };
            parcels.push(Parcel::new(location, destination)?);
        }

        Ok(Self::new(start, parcels))
    }

    pub fn position(&self) -> &Place {
        &self.position
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// True once every parcel has been delivered
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Moves the robot to `target`, picking up every parcel at the current
    /// position and dropping those that reach their destination.
    ///
    /// Moving to a place that is not adjacent leaves the state as it is.
    pub fn move_to(&self, graph: &VillageGraph, target: &Place) -> VillageState {
        if !graph.is_adjacent(&self.position, target) {
            return self.clone();
        }

        let parcels = self
            .parcels
            .iter()
            .map(|parcel| {
                if parcel.location() == &self.position {
                    parcel.carried_to(target)
                } else {
                    parcel.clone()
                }
            })
            .filter(|parcel| !parcel.is_delivered())
            .collect();

        VillageState {
            position: target.clone(),
            parcels,
        }
    }

    /// One-line description, used by the runner's logs
    pub fn summary(&self) -> String {
        format!(
            "at {} with {} parcel(s) pending",
            self.position,
            self.parcels.len()
        )
    }
}
