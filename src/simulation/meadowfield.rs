//! The village of Meadowfield
//!
//! Eleven places joined by fourteen roads, plus the postman's tour that
//! passes through all of them.

use super::error::Result;
use super::road_network::{parse_roads, VillageGraph};
use super::robot::RouteRobot;
use super::types::Place;

/// Where the robot starts its day
pub const POST_OFFICE: &str = "Post Office";

pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// Closed tour through every place; the last stop leads back to the first
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

pub fn post_office() -> Place {
    Place::from(POST_OFFICE)
}

/// Builds the Meadowfield road graph
pub fn meadowfield() -> Result<VillageGraph> {
    Ok(VillageGraph::build(parse_roads(&ROADS)?))
}

/// A route robot following the mail route around `graph`
pub fn mail_route_robot(graph: &VillageGraph) -> Result<RouteRobot> {
    RouteRobot::new(graph, MAIL_ROUTE.iter().map(|stop| Place::from(*stop)).collect())
}
