//! Mail Robot Library
//!
//! A delivery-robot simulation on a village road graph, with pluggable
//! strategies that can be compared by their average turn counts.

pub mod simulation;
