//! Core types for the delivery simulation

use std::fmt;

use super::error::{Result, SimError};

/// A named place in the village, used as a graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Place(String);

impl Place {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Place {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Place {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Place> for Place {
    fn from(place: &Place) -> Self {
        place.clone()
    }
}

/// A parcel waiting somewhere in the village
///
/// A parcel never sits at its own destination: once it gets there it is
/// delivered and dropped from the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parcel {
    location: Place,
    destination: Place,
}

impl Parcel {
    pub fn new(location: impl Into<Place>, destination: impl Into<Place>) -> Result<Self> {
        let location = location.into();
        let destination = destination.into();
        if location == destination {
            return Err(SimError::AlreadyDelivered(location));
        }
        Ok(Self {
            location,
            destination,
        })
    }

    /// Where the parcel currently is
    pub fn location(&self) -> &Place {
        &self.location
    }

    /// Where the parcel has to go
    pub fn destination(&self) -> &Place {
        &self.destination
    }

    /// Same parcel, carried to `location`. Only the state transition uses this,
    /// and it drops the parcel right after if it arrived.
    pub(crate) fn carried_to(&self, location: &Place) -> Self {
        Self {
            location: location.clone(),
            destination: self.destination.clone(),
        }
    }

    pub(crate) fn is_delivered(&self) -> bool {
        self.location == self.destination
    }
}
